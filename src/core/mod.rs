//! # Core Application Logic
//!
//! The question/answer lifecycle. It knows nothing about any specific UI
//! technology and performs no I/O of its own; the answer service is reached
//! through the `AnswerService` trait.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • QueryController      │
//!                    │  • Action / update()    │
//!                    │  • Exchange / Outcome   │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┴───────────────────┐
//!            ▼                                       ▼
//!     ┌────────────┐                          ┌────────────┐
//!     │    TUI     │                          │  One-shot  │
//!     │  Adapter   │                          │    CLI     │
//!     │ (ratatui)  │                          │  (--ask)   │
//!     └────────────┘                          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: `QueryController`, the two-state machine
//! - [`action`]: `Action` enum and the `update()` reducer
//! - [`exchange`]: in-flight exchange token, outcomes, settle guard
//! - [`config`]: config file and override resolution

pub mod action;
pub mod config;
pub mod exchange;
pub mod state;

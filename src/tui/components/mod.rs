//! # TUI Components
//!
//! ## Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: app name, endpoint and exchange status
//! - `SubmitButton`: "Ask" / "Thinking..." control, dimmed when disabled
//! - `AnswerPanel`: last answer, literal whitespace, scrollable
//!
//! ## Stateful Components (Event-Driven)
//!
//! - `QuestionBox`: multi-line question editor, emits `QuestionEvent`
//!
//! Components receive external data as props, never by reaching into the
//! controller themselves:
//!
//! ```rust,ignore
//! SubmitButton::new(controller.submit_label(), controller.can_submit(), busy, frame)
//!     .render(frame, area);
//! ```
//!
//! ```text
//! components/
//! ├── mod.rs            (this file)
//! ├── title_bar.rs
//! ├── question_box.rs
//! ├── submit_button.rs
//! └── answer_panel.rs
//! ```

pub mod answer_panel;
pub mod question_box;
pub mod submit_button;
pub mod title_bar;

pub use answer_panel::AnswerPanel;
pub use question_box::{QuestionBox, QuestionEvent};
pub use submit_button::SubmitButton;
pub use title_bar::TitleBar;

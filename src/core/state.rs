//! # Query Controller
//!
//! Core state for the helpdesk client. Domain logic only, no TUI types.
//!
//! ```text
//! QueryController
//! ├── question: String   // what the user typed, never cleared by us
//! ├── answer: String     // last completed exchange (or a sentinel)
//! ├── last_failed: bool  // whether `answer` came from a failed exchange
//! └── phase: Phase       // Idle | Busy, busy == one exchange outstanding
//! ```
//!
//! ```text
//!          submit (question non-blank)
//!   ┌──────┐ ───────────────────────► ┌──────┐
//!   │ Idle │                          │ Busy │ ◄── submit: rejected
//!   └──────┘ ◄─────────────────────── └──────┘
//!            exchange completed (any outcome)
//! ```
//!
//! Fields are private so the answer can only change when an exchange finishes.

use log::{debug, info, warn};

use crate::core::exchange::{Exchange, Outcome, SettleGuard};
use crate::service::AnswerService;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Busy,
}

#[derive(Debug, Default)]
pub struct QueryController {
    question: String,
    answer: String,
    last_failed: bool,
    phase: Phase,
}

impl QueryController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_busy(&self) -> bool {
        self.phase == Phase::Busy
    }

    pub fn has_answer(&self) -> bool {
        !self.answer.is_empty()
    }

    /// Whether the current answer was produced by a failed exchange. Decided
    /// by the outcome, never by the answer text.
    pub fn last_answer_failed(&self) -> bool {
        self.last_failed
    }

    /// Whether `submit` would currently be accepted.
    pub fn can_submit(&self) -> bool {
        !self.is_busy() && !self.question.trim().is_empty()
    }

    /// Label for the submit control.
    pub fn submit_label(&self) -> &'static str {
        match self.phase {
            Phase::Idle => "Ask",
            Phase::Busy => "Thinking...",
        }
    }

    /// Replaces the question. Allowed in any phase; an outstanding exchange
    /// already holds its own copy.
    pub fn update_question(&mut self, text: impl Into<String>) {
        self.question = text.into();
    }

    /// Admission check plus `Idle → Busy`.
    ///
    /// Returns `None` (and changes nothing) for a blank question or while an
    /// exchange is outstanding.
    pub fn begin_exchange(&mut self) -> Option<Exchange> {
        if self.is_busy() {
            debug!("Submit ignored: exchange already in flight");
            return None;
        }
        if self.question.trim().is_empty() {
            debug!("Submit ignored: question is blank");
            return None;
        }

        self.phase = Phase::Busy;
        info!("Exchange started (question_len={})", self.question.len());
        Some(Exchange {
            question: self.question.clone(),
        })
    }

    /// Writes the outcome into `answer` and returns to `Idle`.
    pub fn finish_exchange(&mut self, outcome: Outcome) {
        if !self.is_busy() {
            warn!("Outcome {:?} arrived with no exchange outstanding, ignoring", outcome);
            return;
        }

        self.last_failed = outcome.is_failure();
        info!("Exchange finished (failure={})", self.last_failed);
        self.answer = outcome.into_answer();
        self.phase = Phase::Idle;
    }

    /// Runs one full exchange against `service`.
    ///
    /// Returns `false` when the submission was rejected by the guard (nothing
    /// was sent). The busy flag is released on every exit path, including
    /// when this future is dropped before the service replies.
    pub async fn submit(&mut self, service: &dyn AnswerService) -> bool {
        let Some(exchange) = self.begin_exchange() else {
            return false;
        };

        let guard = SettleGuard::new(|outcome: Outcome| self.finish_exchange(outcome));
        let outcome = Outcome::from(service.ask(&exchange.question).await);
        guard.settle(outcome);
        true
    }
}

//! # Exchanges
//!
//! One question in flight, from accepted submission until its outcome.
//!
//! ```text
//!  submit ──► Exchange ──► AnswerService::ask ──► Outcome
//!                 │                                  │
//!                 └──────── SettleGuard ─────────────┘
//!                   (reports exactly one Outcome,
//!                    even if the task unwinds)
//! ```

use log::warn;

use crate::service::ServiceError;

pub const SERVER_ERROR_ANSWER: &str = "Error: Could not get answer from server";
pub const CONNECT_ERROR_ANSWER: &str = "Error: Could not connect to server";

/// Token for an accepted submission. Carries the question exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exchange {
    pub question: String,
}

/// How an exchange ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The service answered with a success status and a well-formed body.
    Answered(String),
    /// The service responded, but not with success.
    ServerRejection,
    /// No usable response was obtained.
    TransportFailure,
}

impl Outcome {
    /// Text that replaces the current answer.
    pub fn into_answer(self) -> String {
        match self {
            Outcome::Answered(text) => text,
            Outcome::ServerRejection => SERVER_ERROR_ANSWER.to_string(),
            Outcome::TransportFailure => CONNECT_ERROR_ANSWER.to_string(),
        }
    }

    pub fn is_failure(&self) -> bool {
        !matches!(self, Outcome::Answered(_))
    }
}

impl From<Result<String, ServiceError>> for Outcome {
    fn from(result: Result<String, ServiceError>) -> Self {
        match result {
            Ok(answer) => Outcome::Answered(answer),
            Err(ServiceError::Rejected { status, .. }) => {
                warn!("Exchange rejected by server (HTTP {})", status);
                Outcome::ServerRejection
            }
            Err(e) => {
                warn!("Exchange failed: {}", e);
                Outcome::TransportFailure
            }
        }
    }
}

/// Reports exactly one `Outcome` through `on_settle`.
///
/// Call [`settle`](Self::settle) on the normal path. If the guard is dropped
/// unsettled (panic, dropped future), it reports `TransportFailure` so the
/// busy flag is always released.
pub struct SettleGuard<F: FnOnce(Outcome)> {
    on_settle: Option<F>,
}

impl<F: FnOnce(Outcome)> SettleGuard<F> {
    pub fn new(on_settle: F) -> Self {
        Self {
            on_settle: Some(on_settle),
        }
    }

    pub fn settle(mut self, outcome: Outcome) {
        if let Some(on_settle) = self.on_settle.take() {
            on_settle(outcome);
        }
    }
}

impl<F: FnOnce(Outcome)> Drop for SettleGuard<F> {
    fn drop(&mut self) {
        if let Some(on_settle) = self.on_settle.take() {
            warn!("Exchange abandoned before completion, reporting transport failure");
            on_settle(Outcome::TransportFailure);
        }
    }
}

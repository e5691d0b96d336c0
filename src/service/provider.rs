use std::fmt;

use async_trait::async_trait;

/// Errors that can occur while asking the answer service.
#[derive(Debug)]
pub enum ServiceError {
    /// Endpoint misconfigured (unparseable URL).
    Config(String),
    /// No usable response: connection refused, DNS, unreadable or malformed body.
    Transport(String),
    /// The service answered with a non-success status.
    Rejected { status: u16, message: String },
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::Config(msg) => write!(f, "config error: {msg}"),
            ServiceError::Transport(msg) => write!(f, "transport error: {msg}"),
            ServiceError::Rejected { status, message } => {
                write!(f, "service rejected question (HTTP {status}): {message}")
            }
        }
    }
}

impl std::error::Error for ServiceError {}

#[async_trait]
pub trait AnswerService: Send + Sync {
    /// Returns a short name for logs and the title bar.
    fn name(&self) -> &str;

    /// Sends one question and waits for its answer.
    ///
    /// Implementations must issue exactly one request and never retry.
    async fn ask(&self, question: &str) -> Result<String, ServiceError>;
}

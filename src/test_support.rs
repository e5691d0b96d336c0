//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Mutex;

use async_trait::async_trait;

use crate::service::{AnswerService, ServiceError};

enum Reply {
    Answer(String),
    Status(u16),
    Unreachable,
}

/// An in-memory service that records every question it receives.
pub struct StubService {
    reply: Reply,
    questions: Mutex<Vec<String>>,
}

impl StubService {
    fn with_reply(reply: Reply) -> Self {
        Self {
            reply,
            questions: Mutex::new(Vec::new()),
        }
    }

    pub fn answering(answer: &str) -> Self {
        Self::with_reply(Reply::Answer(answer.to_string()))
    }

    pub fn rejecting(status: u16) -> Self {
        Self::with_reply(Reply::Status(status))
    }

    pub fn unreachable() -> Self {
        Self::with_reply(Reply::Unreachable)
    }

    pub fn calls(&self) -> usize {
        self.questions.lock().unwrap().len()
    }

    pub fn questions(&self) -> Vec<String> {
        self.questions.lock().unwrap().clone()
    }
}

#[async_trait]
impl AnswerService for StubService {
    fn name(&self) -> &str {
        "stub"
    }

    async fn ask(&self, question: &str) -> Result<String, ServiceError> {
        self.questions.lock().unwrap().push(question.to_string());
        match &self.reply {
            Reply::Answer(text) => Ok(text.clone()),
            Reply::Status(status) => Err(ServiceError::Rejected {
                status: *status,
                message: "stub rejection".to_string(),
            }),
            Reply::Unreachable => Err(ServiceError::Transport("connection refused".to_string())),
        }
    }
}

/// A service that never replies.
pub struct PendingService;

#[async_trait]
impl AnswerService for PendingService {
    fn name(&self) -> &str {
        "pending"
    }

    async fn ask(&self, _question: &str) -> Result<String, ServiceError> {
        std::future::pending().await
    }
}

//! # Answer Service
//!
//! The external collaborator that turns a question into an answer.
//! The core only sees the `AnswerService` trait; `HttpAnswerService`
//! is the real implementation talking to the helpdesk backend.

pub mod http;
pub mod provider;
pub mod types;

pub use http::HttpAnswerService;
pub use provider::{AnswerService, ServiceError};
pub use types::{AnswerResponse, QuestionRequest, StatusResponse};

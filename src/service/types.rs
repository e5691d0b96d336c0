use serde::{Deserialize, Serialize};

/// Body of `POST /ask`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct QuestionRequest {
    pub question: String,
}

/// Body of a successful `POST /ask` response.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AnswerResponse {
    pub answer: String,
}

/// Body of `GET /` on the backend.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct StatusResponse {
    pub message: String,
}

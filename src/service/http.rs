//! HTTP answer service.
//!
//! Talks to the helpdesk backend:
//! - `POST {endpoint}` with `{"question": ...}` → `{"answer": ...}`
//! - `GET /` on the same host → `{"message": ...}` (liveness probe)
//!
//! No client-side timeout is set; a request waits as long as the
//! transport's own defaults allow.

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::Url;

use crate::service::types::{AnswerResponse, QuestionRequest, StatusResponse};
use crate::service::{AnswerService, ServiceError};

pub struct HttpAnswerService {
    endpoint: Url,
    client: reqwest::Client,
}

impl HttpAnswerService {
    pub fn new(endpoint: &str) -> Result<Self, ServiceError> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| ServiceError::Config(format!("invalid endpoint '{endpoint}': {e}")))?;

        Ok(Self {
            endpoint,
            client: reqwest::Client::new(),
        })
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    /// Root URL of the backend (endpoint with path, query and fragment dropped).
    fn root_url(&self) -> Url {
        let mut root = self.endpoint.clone();
        root.set_path("/");
        root.set_query(None);
        root.set_fragment(None);
        root
    }

    /// Checks that the backend is up and returns its status message.
    pub async fn probe(&self) -> Result<String, ServiceError> {
        let url = self.root_url();
        debug!("Probing answer service at {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ServiceError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(ServiceError::Rejected { status, message });
        }

        let body: StatusResponse = response
            .json()
            .await
            .map_err(|e| ServiceError::Transport(e.to_string()))?;
        Ok(body.message)
    }
}

#[async_trait]
impl AnswerService for HttpAnswerService {
    fn name(&self) -> &str {
        "http"
    }

    async fn ask(&self, question: &str) -> Result<String, ServiceError> {
        let request = QuestionRequest {
            question: question.to_string(),
        };

        info!(
            "Asking {} (question_len={})",
            self.endpoint,
            request.question.len()
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&request)
            .send()
            .await
            .map_err(|e| ServiceError::Transport(e.to_string()))?;

        debug!("Answer service response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Answer service error: {} - {}", status, message);
            return Err(ServiceError::Rejected { status, message });
        }

        // A 2xx whose body isn't {"answer": string} counts as a broken transport,
        // not as a server rejection.
        let body: AnswerResponse = response
            .json()
            .await
            .map_err(|e| ServiceError::Transport(format!("malformed answer body: {e}")))?;

        info!("Answer received (len={})", body.answer.len());
        Ok(body.answer)
    }
}

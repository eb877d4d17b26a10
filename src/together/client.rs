use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

use super::prompt::{STOP_SEQUENCE, TEMPERATURE, TOP_K, TOP_P, build_prompt};
use super::types::{InferenceRequest, InferenceResponse};
use crate::catalog::School;
use crate::config::{ApiKey, TogetherConfig};
use crate::retry::{Retriable, RetryPolicy};

#[derive(Debug, thiserror::Error)]
pub enum TogetherError {
    #[error("Together rejected the API key ({0}). Check TOGETHER_API_KEY.")]
    Unauthorized(u16),

    #[error("Together rate limit exceeded. Please retry later.")]
    RateLimited,

    #[error("Together API error ({code}): {message}")]
    Api { code: u16, message: String },

    #[error("Together returned no completion text")]
    EmptyCompletion,

    #[error("Together returned an unreadable response: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl Retriable for TogetherError {
    fn is_retriable(&self) -> bool {
        match self {
            TogetherError::RateLimited => true,
            TogetherError::Api { code, .. } => (500..=599).contains(code),
            TogetherError::Network(e) => e.is_timeout() || e.is_connect(),
            _ => false,
        }
    }
}

/// Produces one school's answer to a question from search context.
/// Implemented by `TogetherClient` for production; mock implementations used in tests.
pub trait AnswerGenerator {
    async fn generate(
        &self,
        question: &str,
        school: School,
        context: &str,
    ) -> Result<String, TogetherError>;
}

#[derive(Clone)]
pub struct TogetherClient {
    http: Client,
    api_key: ApiKey,
    endpoint: String,
    model: String,
    max_tokens: u32,
    repetition_penalty: f64,
    retry: RetryPolicy,
}

impl TogetherClient {
    pub fn new(http: Client, config: TogetherConfig) -> Self {
        Self {
            http,
            api_key: config.api_key,
            endpoint: config.endpoint,
            model: config.model,
            max_tokens: config.max_tokens,
            repetition_penalty: config.repetition_penalty,
            retry: RetryPolicy::default(),
        }
    }

    #[cfg(test)]
    pub(crate) fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    fn request(&self, prompt: String) -> InferenceRequest<'_> {
        InferenceRequest {
            model: &self.model,
            prompt,
            max_tokens: self.max_tokens,
            temperature: TEMPERATURE,
            top_p: TOP_P,
            top_k: TOP_K,
            repetition_penalty: self.repetition_penalty,
            stop: vec![STOP_SEQUENCE],
        }
    }

    async fn complete(&self, request: &InferenceRequest<'_>) -> Result<String, TogetherError> {
        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(self.api_key.expose())
            .header("User-Agent", crate::USER_AGENT)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        match status {
            StatusCode::TOO_MANY_REQUESTS => {
                warn!("Together API rate limited");
                return Err(TogetherError::RateLimited);
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                warn!(status = %status, "Together API rejected credentials");
                return Err(TogetherError::Unauthorized(status.as_u16()));
            }
            _ => {}
        }

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<InferenceResponse>(&text)
                .ok()
                .and_then(|body| body.error)
                .map(|err| err.message().to_string())
                .unwrap_or_else(|| {
                    let end = text.floor_char_boundary(200);
                    format!("HTTP {status}: {}", &text[..end])
                });
            warn!(status = %status, "Together API error");
            return Err(TogetherError::Api {
                code: status.as_u16(),
                message,
            });
        }

        let body: InferenceResponse = response.json().await.map_err(TogetherError::Decode)?;
        if let Some(err) = &body.error {
            warn!(error = err.message(), "Together API error in 200 response");
            return Err(TogetherError::Api {
                code: status.as_u16(),
                message: err.message().to_string(),
            });
        }

        body.first_text().ok_or(TogetherError::EmptyCompletion)
    }
}

impl AnswerGenerator for TogetherClient {
    async fn generate(
        &self,
        question: &str,
        school: School,
        context: &str,
    ) -> Result<String, TogetherError> {
        let request = self.request(build_prompt(question, school, context));
        let answer = self.retry.run("together", || self.complete(&request)).await?;
        debug!(%school, model = %self.model, chars = answer.len(), "together completion complete");
        Ok(answer)
    }
}

use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

use super::types::{SearchRequest, SearchResponse, SearchResult};
use crate::catalog::School;
use crate::config::{ApiKey, SerperConfig};
use crate::retry::{Retriable, RetryPolicy};

#[derive(Debug, thiserror::Error)]
pub enum SerperError {
    #[error("Serper rejected the API key ({0}). Check SERPER_API_KEY.")]
    Unauthorized(u16),

    #[error("Serper rate limit exceeded. Please retry later.")]
    RateLimited,

    #[error("Serper API error ({code}): {message}")]
    Api { code: u16, message: String },

    #[error("Serper returned an unreadable response: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl Retriable for SerperError {
    fn is_retriable(&self) -> bool {
        match self {
            SerperError::RateLimited => true,
            SerperError::Api { code, .. } => (500..=599).contains(code),
            SerperError::Network(e) => e.is_timeout() || e.is_connect(),
            _ => false,
        }
    }
}

/// Web search scoped to one school of thought.
/// Implemented by `SerperClient` for production; mock implementations used in tests.
pub trait SearchClient {
    async fn search(&self, question: &str, school: School)
    -> Result<Vec<SearchResult>, SerperError>;
}

/// The query sent to the search provider for a (question, school) pair.
pub fn build_query(question: &str, school: School) -> String {
    format!("{question} {school} economía")
}

#[derive(Clone)]
pub struct SerperClient {
    http: Client,
    api_key: ApiKey,
    endpoint: String,
    retry: RetryPolicy,
}

impl SerperClient {
    pub fn new(http: Client, config: SerperConfig) -> Self {
        Self {
            http,
            api_key: config.api_key,
            endpoint: config.endpoint,
            retry: RetryPolicy::default(),
        }
    }

    #[cfg(test)]
    pub(crate) fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    async fn post_search(&self, query: &str) -> Result<SearchResponse, SerperError> {
        let response = self
            .http
            .post(&self.endpoint)
            .header("X-API-KEY", self.api_key.expose())
            .header("User-Agent", crate::USER_AGENT)
            .json(&SearchRequest { q: query })
            .send()
            .await?;

        let status = response.status();
        match status {
            StatusCode::TOO_MANY_REQUESTS => {
                warn!("Serper API rate limited");
                return Err(SerperError::RateLimited);
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                warn!(status = %status, "Serper API rejected credentials");
                return Err(SerperError::Unauthorized(status.as_u16()));
            }
            _ => {}
        }

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<SearchResponse>(&text)
                .ok()
                .and_then(|body| body.message)
                .unwrap_or_else(|| {
                    let end = text.floor_char_boundary(200);
                    format!("HTTP {status}: {}", &text[..end])
                });
            warn!(status = %status, "Serper API error");
            return Err(SerperError::Api {
                code: status.as_u16(),
                message,
            });
        }

        response.json().await.map_err(SerperError::Decode)
    }
}

impl SearchClient for SerperClient {
    async fn search(
        &self,
        question: &str,
        school: School,
    ) -> Result<Vec<SearchResult>, SerperError> {
        let query = build_query(question, school);
        let response = self.retry.run("serper", || self.post_search(&query)).await?;
        let results = response.into_results();
        debug!(%school, results = results.len(), "serper search complete");
        Ok(results)
    }
}


#[cfg(test)]
mod http_tests {
    use super::*;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> SerperClient {
        let mut config = SerperConfig::new(ApiKey::new("test-key"));
        config.endpoint = format!("{}/search", server.uri());
        SerperClient::new(Client::new(), config).with_retry(RetryPolicy {
            max_attempts: 2,
            initial_backoff_ms: 1,
        })
    }

    fn keynes() -> School {
        School::parse("Keynesianismo").unwrap()
    }

    #[tokio::test]
    async fn search_sends_query_and_api_key() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/search"))
            .and(header("X-API-KEY", "test-key"))
            .and(body_json(serde_json::json!({
                "q": "¿Qué es la paradoja del ahorro? Keynesianismo economía"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "organic": [
                    {"snippet": "El ahorro agregado puede caer.", "link": "https://a.example"},
                    {"snippet": "Keynes, Teoría general.", "link": "https://b.example"}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let results = client(&server)
            .search("¿Qué es la paradoja del ahorro?", keynes())
            .await
            .unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].url, "https://a.example");
        assert_eq!(results[1].snippet, "Keynes, Teoría general.");
    }

    #[tokio::test]
    async fn search_without_organic_returns_empty() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "searchParameters": {"q": "x"}
            })))
            .mount(&server)
            .await;

        let results = client(&server).search("x", keynes()).await.unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn search_401_is_unauthorized_and_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401))
            .expect(1)
            .mount(&server)
            .await;

        let result = client(&server).search("x", keynes()).await;
        assert!(matches!(result, Err(SerperError::Unauthorized(401))));
    }

    #[tokio::test]
    async fn search_429_is_retried_then_reported() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429))
            .expect(2)
            .mount(&server)
            .await;

        let result = client(&server).search("x", keynes()).await;
        assert!(matches!(result, Err(SerperError::RateLimited)));
    }

    #[tokio::test]
    async fn search_400_uses_provider_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "message": "Query is required",
                "statusCode": 400
            })))
            .mount(&server)
            .await;

        match client(&server).search("x", keynes()).await {
            Err(SerperError::Api { code: 400, message }) => {
                assert_eq!(message, "Query is required");
            }
            other => panic!("expected Api(400), got: {other:?}"),
        }
    }

    #[tokio::test]
    async fn search_malformed_json_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let result = client(&server).search("x", keynes()).await;
        assert!(matches!(result, Err(SerperError::Decode(_))));
    }
}

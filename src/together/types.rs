use serde::{Deserialize, Serialize};

/// Body of a `POST /inference` completion request.
#[derive(Debug, Serialize)]
pub struct InferenceRequest<'a> {
    pub model: &'a str,
    pub prompt: String,
    pub max_tokens: u32,
    pub temperature: f64,
    pub top_p: f64,
    pub top_k: u32,
    pub repetition_penalty: f64,
    pub stop: Vec<&'a str>,
}

#[derive(Debug, Deserialize)]
pub struct InferenceResponse {
    pub output: Option<Output>,
    pub error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
pub struct Output {
    pub choices: Option<Vec<Choice>>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub text: Option<String>,
}

/// Together returns errors either as a string or as `{"message": ..., "type": ...}`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ApiError {
    Message(String),
    Detailed { message: Option<String> },
}

impl ApiError {
    pub fn message(&self) -> &str {
        match self {
            ApiError::Message(m) => m,
            ApiError::Detailed { message } => message.as_deref().unwrap_or("Unknown error"),
        }
    }
}

impl InferenceResponse {
    /// Trimmed text of the first completion. `None` only when the
    /// `output.choices[0].text` field is absent; blank text is returned as "".
    pub fn first_text(&self) -> Option<String> {
        self.output
            .as_ref()
            .and_then(|o| o.choices.as_ref())
            .and_then(|c| c.first())
            .and_then(|c| c.text.as_deref())
            .map(|t| t.trim().to_string())
    }
}

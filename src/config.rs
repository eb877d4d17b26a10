//! Provider configuration loaded from the environment.
//!
//! Values are read once at startup and handed to the clients explicitly; the
//! clients never consult the environment themselves.

use std::env;
use std::time::Duration;

pub const SERPER_ENDPOINT: &str = "https://google.serper.dev/search";
pub const TOGETHER_ENDPOINT: &str = "https://api.together.xyz/inference";
pub const DEFAULT_MODEL: &str = "mistralai/Mixtral-8x7B-Instruct-v0.1";
pub const DEFAULT_MAX_TOKENS: u32 = 2048;
/// 1.0 disables the penalty on Together's API.
pub const DEFAULT_REPETITION_PENALTY: f64 = 1.0;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} not set. Export it before running `ask`.")]
    MissingKey(&'static str),

    #[error("{var} is not a valid http(s) URL: {value}")]
    InvalidUrl { var: &'static str, value: String },

    #[error("{var} has an invalid value: {value}")]
    InvalidNumber { var: &'static str, value: String },
}

#[derive(Clone)]
pub struct ApiKey(String);

impl ApiKey {
    #[cfg(test)]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[REDACTED]")
    }
}

#[derive(Debug, Clone)]
pub struct SerperConfig {
    pub api_key: ApiKey,
    pub endpoint: String,
}

impl SerperConfig {
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            endpoint: SERPER_ENDPOINT.to_string(),
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::new(required("SERPER_API_KEY")?);
        if let Some(endpoint) = endpoint_override("SERPER_URL")? {
            config.endpoint = endpoint;
        }
        Ok(config)
    }
}

#[derive(Debug, Clone)]
pub struct TogetherConfig {
    pub api_key: ApiKey,
    pub endpoint: String,
    pub model: String,
    pub max_tokens: u32,
    pub repetition_penalty: f64,
}

impl TogetherConfig {
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            endpoint: TOGETHER_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            repetition_penalty: DEFAULT_REPETITION_PENALTY,
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::new(required("TOGETHER_API_KEY")?);
        if let Some(endpoint) = endpoint_override("TOGETHER_URL")? {
            config.endpoint = endpoint;
        }
        if let Some(model) = optional("TOGETHER_MODEL") {
            config.model = model;
        }
        if let Some(max_tokens) = parsed("TOGETHER_MAX_TOKENS")? {
            config.max_tokens = max_tokens;
        }
        if let Some(penalty) = parsed("TOGETHER_REPETITION_PENALTY")? {
            config.repetition_penalty = penalty;
        }
        Ok(config)
    }
}

/// Per-request timeout from `DICPROBLEMAS_TIMEOUT_SECS`, falling back to 30s.
pub fn request_timeout() -> Result<Duration, ConfigError> {
    Ok(parsed::<u64>("DICPROBLEMAS_TIMEOUT_SECS")?
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs)
        .unwrap_or(DEFAULT_TIMEOUT))
}

fn optional(var: &'static str) -> Option<String> {
    env::var(var)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn required(var: &'static str) -> Result<ApiKey, ConfigError> {
    optional(var)
        .map(ApiKey)
        .ok_or(ConfigError::MissingKey(var))
}

fn parsed<T: std::str::FromStr>(var: &'static str) -> Result<Option<T>, ConfigError> {
    optional(var)
        .map(|value| {
            value
                .parse()
                .map_err(|_| ConfigError::InvalidNumber { var, value })
        })
        .transpose()
}

fn endpoint_override(var: &'static str) -> Result<Option<String>, ConfigError> {
    let Some(value) = optional(var) else {
        return Ok(None);
    };
    if !is_http_endpoint(&value) {
        return Err(ConfigError::InvalidUrl { var, value });
    }
    Ok(Some(value))
}

fn is_http_endpoint(raw: &str) -> bool {
    url::Url::parse(raw)
        .is_ok_and(|u| matches!(u.scheme(), "http" | "https") && u.has_host())
}

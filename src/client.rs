//! Backend clients
//!
//! Two endpoints are used: one executes a submitted command string, the other
//! returns AI-generated clause suggestions. Both take a JSON body and answer with
//! plain text. `Transport` is the seam between the clients and the wire so the
//! clients can be driven without a live server.

use crate::error::ConsoleError;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

pub mod submit;
pub mod suggest;

pub use submit::{SubmissionClient, SubmissionOutcome, SUCCESS_MARKER};
pub use suggest::{split_suggestions, SuggestionClient};

/// Backend server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Base URL of the backend (scheme, host, port)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_submit_path")]
    pub submit_path: String,

    #[serde(default = "default_suggest_path")]
    pub suggest_path: String,

    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://127.0.0.1:8080".to_string()
}

fn default_submit_path() -> String {
    "/submit_query".to_string()
}

fn default_suggest_path() -> String {
    "/fetch_ai_response".to_string()
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_request_timeout_secs() -> u64 {
    120
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            submit_path: default_submit_path(),
            suggest_path: default_suggest_path(),
            connect_timeout_secs: default_connect_timeout_secs(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> Result<(), String> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(format!(
                "Base URL must start with http:// or https://: {}",
                self.base_url
            ));
        }
        for (name, path) in [("submit_path", &self.submit_path), ("suggest_path", &self.suggest_path)] {
            if !path.starts_with('/') {
                return Err(format!("{} must start with '/': {}", name, path));
            }
        }
        if self.connect_timeout_secs == 0 || self.request_timeout_secs == 0 {
            return Err("Timeouts must be greater than zero".to_string());
        }
        Ok(())
    }
}

/// POST a JSON body and return the response body as text, whatever the status.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post_json(&self, path: &str, body: &serde_json::Value)
        -> Result<String, ConsoleError>;
}

/// reqwest-backed transport rooted at the configured base URL.
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(config: &ServerConfig) -> Result<Self, ConsoleError> {
        config.validate().map_err(ConsoleError::InvalidEndpoint)?;
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| ConsoleError::Http(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_json(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<String, ConsoleError> {
        let url = self.url_for(path);
        debug!(url = %url, "POST");

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(map_http_error)?;

        // The body decides the outcome; a non-2xx status alone is not a failure.
        let status = response.status();
        let text = response.text().await.map_err(map_http_error)?;
        if status.is_success() {
            debug!(url = %url, status = status.as_u16(), bytes = text.len(), "response received");
        } else {
            warn!(url = %url, status = status.as_u16(), bytes = text.len(), "non-success status, using body");
        }
        Ok(text)
    }
}

/// Classify reqwest failures into console errors.
pub fn map_http_error(error: reqwest::Error) -> ConsoleError {
    if let Some(status) = error.status() {
        ConsoleError::RequestFailed {
            status: status.as_u16(),
            body: error.to_string(),
        }
    } else if error.is_timeout() {
        ConsoleError::Timeout(error.to_string())
    } else if error.is_connect() {
        ConsoleError::Connection(error.to_string())
    } else {
        ConsoleError::Http(error.to_string())
    }
}

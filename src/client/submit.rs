//! Submission client: sends an assembled command to the execution endpoint.

use super::Transport;
use crate::error::ConsoleError;
use serde_json::json;
use std::sync::Arc;
use tracing::{info, warn};

/// Substring the backend includes in a response when execution succeeded.
pub const SUCCESS_MARKER: &str = "Success";

/// Result of a request that reached the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Success { body: String },
    Failure { body: String },
}

impl SubmissionOutcome {
    /// Success if and only if the body contains [`SUCCESS_MARKER`].
    pub fn from_body(body: String) -> Self {
        if body.contains(SUCCESS_MARKER) {
            SubmissionOutcome::Success { body }
        } else {
            SubmissionOutcome::Failure { body }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionOutcome::Success { .. })
    }

    pub fn body(&self) -> &str {
        match self {
            SubmissionOutcome::Success { body } | SubmissionOutcome::Failure { body } => body,
        }
    }
}

pub struct SubmissionClient {
    transport: Arc<dyn Transport>,
    path: String,
}

impl SubmissionClient {
    pub fn new(transport: Arc<dyn Transport>, path: impl Into<String>) -> Self {
        Self {
            transport,
            path: path.into(),
        }
    }

    /// Send `command` once. No retry; transport errors are returned as-is.
    pub async fn submit(&self, command: &str) -> Result<SubmissionOutcome, ConsoleError> {
        let body = json!({ "query": command });
        let response = self.transport.post_json(&self.path, &body).await?;
        let outcome = SubmissionOutcome::from_body(response);

        if outcome.is_success() {
            info!(command = %command, "command accepted by backend");
        } else {
            warn!(command = %command, response = %outcome.body(), "backend did not report success");
        }
        Ok(outcome)
    }
}

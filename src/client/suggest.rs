//! Suggestion client: asks the AI endpoint for candidate clause expressions.

use super::Transport;
use crate::command::ClauseKind;
use crate::error::ConsoleError;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

/// Split a response body into one suggestion per line.
///
/// No trimming, dedup or limit. An empty body yields a single empty entry.
pub fn split_suggestions(body: &str) -> Vec<String> {
    body.split('\n').map(str::to_string).collect()
}

pub struct SuggestionClient {
    transport: Arc<dyn Transport>,
    path: String,
}

impl SuggestionClient {
    pub fn new(transport: Arc<dyn Transport>, path: impl Into<String>) -> Self {
        Self {
            transport,
            path: path.into(),
        }
    }

    pub async fn fetch(
        &self,
        kind: ClauseKind,
        pfile_prefix: &str,
        prompt: &str,
    ) -> Result<Vec<String>, ConsoleError> {
        let body = json!({
            "pfile_prefix": pfile_prefix,
            "prompt": prompt,
            "query_type": kind.label(),
        });
        let response = self.transport.post_json(&self.path, &body).await?;
        let suggestions = split_suggestions(&response);
        info!(kind = %kind, count = suggestions.len(), "suggestions received");
        Ok(suggestions)
    }
}

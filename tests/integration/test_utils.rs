//! Shared fixtures: an in-memory transport with scripted replies.

use async_trait::async_trait;
use pgen_console::client::Transport;
use pgen_console::error::ConsoleError;
use std::collections::VecDeque;
use std::sync::Mutex;

pub const FILE: &str = "data/all_hg38";

pub enum Reply {
    Body(&'static str),
    Refused,
}

/// Returns queued replies in order and records every request.
pub struct ScriptedTransport {
    replies: Mutex<VecDeque<Reply>>,
    requests: Mutex<Vec<(String, serde_json::Value)>>,
}

impl ScriptedTransport {
    pub fn new(replies: Vec<Reply>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(body: &'static str) -> Self {
        Self::new(vec![Reply::Body(body)])
    }

    pub fn requests(&self) -> Vec<(String, serde_json::Value)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn post_json(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<String, ConsoleError> {
        self.requests
            .lock()
            .unwrap()
            .push((path.to_string(), body.clone()));
        match self.replies.lock().unwrap().pop_front() {
            Some(Reply::Body(text)) => Ok(text.to_string()),
            Some(Reply::Refused) => Err(ConsoleError::Connection("connection refused".to_string())),
            None => Err(ConsoleError::Http("no scripted reply left".to_string())),
        }
    }
}

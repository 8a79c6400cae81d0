use async_trait::async_trait;
use bfhl_core::api::{BfhlService, ParsedRequest, ServiceError};
use serde_json::Value;
use std::sync::Mutex;

/// Replays canned outcomes and records every request body it was given.
pub struct RecordingService {
    replies: Mutex<Vec<Result<Value, ServiceError>>>,
    seen: Mutex<Vec<(String, Value)>>,
}

impl RecordingService {
    pub fn new(replies: Vec<Result<Value, ServiceError>>) -> Self {
        Self {
            replies: Mutex::new(replies),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn seen(&self) -> Vec<(String, Value)> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl BfhlService for RecordingService {
    fn name(&self) -> &str {
        "recording"
    }

    async fn submit(&self, base_url: &str, request: &ParsedRequest) -> Result<Value, ServiceError> {
        self.seen
            .lock()
            .unwrap()
            .push((base_url.to_string(), request.clone().into_value()));
        self.replies.lock().unwrap().remove(0)
    }
}

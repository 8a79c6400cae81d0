use async_trait::async_trait;
use serde_json::Value;

use crate::error::ServiceError;
use crate::input::ParsedRequest;

pub const BFHL_PATH: &str = "/bfhl";

/// Joins a base URL and the `/bfhl` path, tolerating a trailing slash.
pub fn endpoint_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim().trim_end_matches('/'), BFHL_PATH)
}

#[async_trait]
pub trait BfhlService: Send + Sync {
    fn name(&self) -> &str;
    async fn submit(&self, base_url: &str, request: &ParsedRequest) -> Result<Value, ServiceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url() {
        assert_eq!(endpoint_url("http://localhost:3000"), "http://localhost:3000/bfhl");
        assert_eq!(endpoint_url("http://localhost:3000/"), "http://localhost:3000/bfhl");
        assert_eq!(endpoint_url(" https://api.example.com/v1 "), "https://api.example.com/v1/bfhl");
    }
}

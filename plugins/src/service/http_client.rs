use async_trait::async_trait;
use bfhl_core::api as core_api;
use bfhl_core::api::{ServiceError, TransportKind};
use serde_json::Value;

const BODY_PREVIEW_LIMIT: usize = 512;

fn transport_error(err: reqwest::Error) -> ServiceError {
    let kind = if err.is_timeout() {
        TransportKind::Timeout
    } else if err.is_connect() {
        TransportKind::Connect
    } else if err.is_request() {
        TransportKind::Request
    } else if err.is_body() {
        TransportKind::Body
    } else {
        TransportKind::Unknown
    };
    ServiceError::Transport {
        kind,
        message: err.to_string(),
    }
}

fn preview_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "<empty body>".to_string();
    }

    let mut out = String::new();
    let mut truncated = false;
    for (idx, ch) in trimmed.chars().enumerate() {
        if idx >= BODY_PREVIEW_LIMIT {
            truncated = true;
            break;
        }
        out.push(ch);
    }

    if truncated {
        out.push_str("...");
    }

    out
}

/// The service's own `message` field from an error body, when it is truthy.
fn service_message(body: &str) -> Option<String> {
    let v = serde_json::from_str::<Value>(body).ok()?;
    let message = v.get("message")?;
    if !core_api::is_truthy(message) {
        return None;
    }
    match message {
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

async fn parse_json_response(resp: reqwest::Response) -> Result<Value, ServiceError> {
    let status = resp.status();
    let body = resp.text().await.map_err(transport_error)?;

    if !status.is_success() {
        return Err(ServiceError::Status {
            status: status.as_u16(),
            message: service_message(&body),
            body_preview: preview_body(&body),
        });
    }

    if body.trim().is_empty() {
        return Ok(Value::Null);
    }

    serde_json::from_str::<Value>(&body).map_err(|err| ServiceError::Decode {
        status: status.as_u16(),
        message: format!(
            "failed to decode response body: {} | body={}",
            err,
            preview_body(&body)
        ),
    })
}

#[derive(Clone)]
pub struct HttpBfhlService {
    http: reqwest::Client,
}

impl HttpBfhlService {
    pub fn new(timeout_ms: Option<u64>) -> anyhow::Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(ms) = timeout_ms {
            builder = builder.timeout(std::time::Duration::from_millis(ms));
        }
        Ok(Self {
            http: builder.build()?,
        })
    }
}

#[async_trait]
impl core_api::BfhlService for HttpBfhlService {
    fn name(&self) -> &str {
        "http"
    }

    async fn submit(
        &self,
        base_url: &str,
        request: &core_api::ParsedRequest,
    ) -> Result<Value, ServiceError> {
        let url = core_api::endpoint_url(base_url);
        tracing::debug!(
            target: "bfhl.http",
            stage = "bfhl.http.submit.in",
            url = %url,
            items = request.data().len()
        );
        let resp = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(transport_error)?;
        let status = resp.status();
        let result = parse_json_response(resp).await;
        tracing::debug!(
            target: "bfhl.http",
            stage = "bfhl.http.submit.out",
            status = %status,
            ok = result.is_ok()
        );
        result
    }
}

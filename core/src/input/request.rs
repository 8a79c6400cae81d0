use serde::Serialize;
use serde_json::{Map, Value};

use super::sanitize::sanitize;
use crate::error::ValidationError;

/// A JSON object known to contain a `data` array.
///
/// All other fields are kept as the user wrote them and are sent unchanged.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ParsedRequest {
    body: Map<String, Value>,
}

impl ParsedRequest {
    pub fn data(&self) -> &[Value] {
        self.body
            .get("data")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn body(&self) -> &Map<String, Value> {
        &self.body
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.body)
    }
}

impl TryFrom<Value> for ParsedRequest {
    type Error = ValidationError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(body) if body.get("data").is_some_and(Value::is_array) => {
                Ok(Self { body })
            }
            _ => Err(ValidationError::InvalidShape),
        }
    }
}

/// Sanitizes `raw`, parses it as JSON and checks its shape.
pub fn parse_request(raw: &str) -> Result<ParsedRequest, ValidationError> {
    let sanitized = sanitize(raw);
    let value: Value = serde_json::from_str(&sanitized).map_err(|e| {
        tracing::debug!(target: "bfhl.input", error = %e, input_len = sanitized.len(), "input is not json");
        ValidationError::InvalidFormat(e.to_string())
    })?;

    let request = ParsedRequest::try_from(value).inspect_err(|_| {
        tracing::debug!(target: "bfhl.input", "input has no 'data' array");
    })?;
    tracing::debug!(target: "bfhl.input", items = request.data().len(), "input accepted");
    Ok(request)
}

use serde::Serialize;
use serde_json::{json, Value};

use crate::filter::{is_truthy, FilteredResponse};

pub const NO_FILTERS_PLACEHOLDER: &str = "No filters applied";

fn pretty<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| format!("<unrenderable: {e}>"))
}

/// Pretty JSON of the filtered response, or the placeholder when there is none.
pub fn render_filtered(filtered: Option<&FilteredResponse>) -> String {
    match filtered {
        Some(f) => pretty(f),
        None => NO_FILTERS_PLACEHOLDER.to_string(),
    }
}

/// `None` when there is no response or it is falsy (e.g. an empty 2xx body).
pub fn render_full(response: Option<&Value>) -> Option<String> {
    response.filter(|v| is_truthy(v)).map(pretty)
}

/// Human readable report: error line, filtered block, then the full response.
pub fn render_text(
    error: Option<&str>,
    filtered: Option<&FilteredResponse>,
    response: Option<&Value>,
) -> String {
    let mut out = String::new();
    if let Some(err) = error {
        out.push_str(err);
        out.push_str("\n\n");
    }
    out.push_str("Filtered Response:\n");
    out.push_str(&render_filtered(filtered));
    out.push('\n');
    if let Some(full) = render_full(response) {
        out.push_str("\nFull Response:\n");
        out.push_str(&full);
        out.push('\n');
    }
    out
}

/// Machine readable report with the same three parts.
pub fn render_json(
    error: Option<&str>,
    filtered: Option<&FilteredResponse>,
    response: Option<&Value>,
) -> String {
    pretty(&json!({
        "error": error,
        "filtered": filtered,
        "response": response,
    }))
}

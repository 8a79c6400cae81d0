use serde::Serialize;
use serde_json::{Map, Value};

use super::kind::{FilterKind, FilterSelection};

/// Selected response fields, keyed by filter identifier in selection order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FilteredResponse {
    fields: Map<String, Value>,
}

impl FilteredResponse {
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn get(&self, kind: FilterKind) -> Option<&Value> {
        self.fields.get(kind.as_str())
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }
}

/// JavaScript truthiness over JSON values. Empty arrays and objects count as true.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Projects `response` onto `selection`.
///
/// Returns `None` when there is no response yet (or it is falsy) or nothing is
/// selected. Fields that are missing or falsy in the response are left out.
pub fn filter_response(
    response: Option<&Value>,
    selection: &FilterSelection,
) -> Option<FilteredResponse> {
    let response = response.filter(|v| is_truthy(v))?;
    if selection.is_empty() {
        return None;
    }

    let mut fields = Map::new();
    for kind in selection.iter() {
        match response.get(kind.backend_field()) {
            Some(v) if is_truthy(v) => {
                fields.insert(kind.as_str().to_string(), v.clone());
            }
            _ => {
                tracing::debug!(target: "bfhl.filter", filter = %kind, "field absent or falsy, skipped");
            }
        }
    }
    Some(FilteredResponse { fields })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn select(kinds: &[FilterKind]) -> FilterSelection {
        kinds.iter().copied().collect()
    }

    #[test]
    fn test_only_selected_fields_are_copied() {
        let response = json!({"alphabets": ["A", "B"], "numbers": [1, 2]});
        let out = filter_response(Some(&response), &select(&[FilterKind::Alphabets])).unwrap();
        assert_eq!(out.into_value(), json!({"alphabets": ["A", "B"]}));
    }

    #[test]
    fn test_highest_lowercase_key_is_renamed() {
        let response = json!({"highestLowercaseAlphabet": "z"});
        let out =
            filter_response(Some(&response), &select(&[FilterKind::HighestLowercase])).unwrap();
        assert_eq!(out.into_value(), json!({"highestLowercase": "z"}));
    }

    #[test]
    fn test_empty_selection_is_none() {
        let response = json!({"alphabets": ["A"]});
        assert_eq!(filter_response(Some(&response), &FilterSelection::new()), None);
    }

    #[test]
    fn test_missing_response_is_none() {
        assert_eq!(filter_response(None, &select(&FilterKind::ALL)), None);
    }

    #[test]
    fn test_falsy_response_counts_as_absent() {
        let sel = select(&FilterKind::ALL);
        for response in [json!(null), json!(false), json!(0), json!("")] {
            assert_eq!(filter_response(Some(&response), &sel), None);
        }
    }

    #[test]
    fn test_falsy_fields_are_omitted() {
        let response = json!({
            "alphabets": "",
            "numbers": 0,
            "highestLowercaseAlphabet": null
        });
        let out = filter_response(Some(&response), &select(&FilterKind::ALL)).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_empty_array_is_truthy() {
        let response = json!({"numbers": [], "alphabets": false});
        let out = filter_response(Some(&response), &select(&FilterKind::ALL)).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out.get(FilterKind::Numbers), Some(&json!([])));
    }

    #[test]
    fn test_output_follows_selection_order() {
        let response = json!({
            "alphabets": ["A"],
            "numbers": ["1"],
            "highestLowercaseAlphabet": ["b"]
        });
        let sel = select(&[
            FilterKind::HighestLowercase,
            FilterKind::Numbers,
            FilterKind::Alphabets,
        ]);
        let out = filter_response(Some(&response), &sel).unwrap();
        assert_eq!(
            serde_json::to_string(&out).unwrap(),
            r#"{"highestLowercase":["b"],"numbers":["1"],"alphabets":["A"]}"#
        );
    }

    #[test]
    fn test_non_object_response_yields_empty_result() {
        let response = json!(["alphabets"]);
        let out = filter_response(Some(&response), &select(&[FilterKind::Alphabets])).unwrap();
        assert!(out.is_empty());
    }
}

//! Structural validation of a persisted sizes dataset
//!
//! Works on the raw JSON value rather than on [`SizeItem`](crate::SizeItem)
//! so that a hand-edited or truncated file is judged by its shape, not by
//! whether serde happens to accept it. Validation stops at the first bad
//! element: any single bad record blocks the whole batch.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::extractors::is_name_whitespace;

const AXES: [&str; 3] = ["width", "height", "depth"];

/// Result of validating a dataset value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub ok: bool,
    /// Index of the first rejected element
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Number of elements in the dataset, or 0 if it is not an array
    pub item_count: usize,
}

impl ValidationReport {
    fn passed(item_count: usize) -> Self {
        Self {
            ok: true,
            error_index: None,
            reason: None,
            item_count,
        }
    }

    fn failed(error_index: Option<usize>, reason: String, item_count: usize) -> Self {
        Self {
            ok: false,
            error_index,
            reason: Some(reason),
            item_count,
        }
    }

    /// Convert a failed report into a [`ValidationError::Schema`].
    pub fn into_result(self) -> Result<usize, ValidationError> {
        if self.ok {
            Ok(self.item_count)
        } else {
            Err(ValidationError::Schema {
                index: self.error_index,
                reason: self.reason.unwrap_or_default(),
            })
        }
    }
}

/// Validate an in-memory dataset.
pub fn validate(dataset: &Value) -> ValidationReport {
    let items = match dataset.as_array() {
        Some(items) if !items.is_empty() => items,
        _ => {
            return ValidationReport::failed(None, "dataset should be a non-empty array".into(), 0)
        }
    };

    for (index, item) in items.iter().enumerate() {
        if let Some(reason) = check_item(index, item) {
            return ValidationReport::failed(Some(index), reason, items.len());
        }
    }

    ValidationReport::passed(items.len())
}

/// Load `path` and validate its contents, returning the item count.
pub fn validate_file(path: &Path) -> Result<usize, ValidationError> {
    let text = fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => ValidationError::NotFound {
            path: path.to_path_buf(),
        },
        _ => ValidationError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let dataset: Value = serde_json::from_str(&text).map_err(|source| ValidationError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    validate(&dataset).into_result()
}

// Returns the rejection reason for a bad element.
fn check_item(index: usize, item: &Value) -> Option<String> {
    let Some(obj) = item.as_object() else {
        return Some(format!("item {} is not an object", index));
    };

    let name = match obj.get("name").and_then(Value::as_str) {
        Some(name) if !name.trim_matches(is_name_whitespace).is_empty() => name,
        _ => return Some(format!("item {} has invalid name", index)),
    };

    if !is_dimensions(obj.get("external")) || !is_dimensions(obj.get("internal")) {
        return Some(format!("item {} has invalid dimensions ({})", index, name));
    }

    match obj.get("weight") {
        Some(Value::Null) | Some(Value::Number(_)) => None,
        _ => Some(format!("item {} has invalid weight ({})", index, name)),
    }
}

// `null`, or an object with exactly the three axis keys
fn is_dimensions(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Null) => true,
        Some(Value::Object(dims)) => has_exact_axes(dims),
        _ => false,
    }
}

fn has_exact_axes(dims: &Map<String, Value>) -> bool {
    dims.len() == AXES.len()
        && AXES
            .iter()
            .all(|axis| dims.get(*axis).is_some_and(is_null_or_integer))
}

fn is_null_or_integer(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Number(n) => {
            n.is_i64() || n.is_u64() || n.as_f64().is_some_and(|f| f.is_finite() && f.fract() == 0.0)
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_minimal_item_passes() {
        let report = validate(&json!([
            {"name": "Box", "external": null, "internal": null, "weight": null}
        ]));
        assert_eq!(report, ValidationReport::passed(1));
    }

    #[test]
    fn test_full_item_passes() {
        let report = validate(&json!([
            {
                "name": "Box S",
                "external": {"width": 30, "height": 20, "depth": 10},
                "internal": {"width": null, "height": 18, "depth": 9.0},
                "weight": 1.5
            },
            {"name": "Box M", "external": null, "internal": null, "weight": -2}
        ]));
        assert!(report.ok);
        assert_eq!(report.item_count, 2);
    }

    #[test]
    fn test_empty_or_non_array_rejected() {
        let report = validate(&json!([]));
        assert!(!report.ok);
        assert_eq!(report.error_index, None);
        assert_eq!(
            report.reason.as_deref(),
            Some("dataset should be a non-empty array")
        );

        assert!(!validate(&json!({"name": "Box"})).ok);
        assert!(!validate(&Value::Null).ok);
    }

    #[test]
    fn test_blank_name_rejected() {
        let report = validate(&json!([
            {"name": "", "external": null, "internal": null, "weight": null}
        ]));
        assert!(!report.ok);
        assert_eq!(report.error_index, Some(0));
        assert_eq!(report.reason.as_deref(), Some("item 0 has invalid name"));

        let report = validate(&json!([
            {"name": "Box", "external": null, "internal": null, "weight": null},
            {"name": "   ", "external": null, "internal": null, "weight": null}
        ]));
        assert_eq!(report.error_index, Some(1));

        let report = validate(&json!([
            {"name": "\u{feff}", "external": null, "internal": null, "weight": null}
        ]));
        assert_eq!(report.reason.as_deref(), Some("item 0 has invalid name"));
    }

    #[test]
    fn test_stops_at_first_failure() {
        let report = validate(&json!([
            {"name": "Box", "external": null, "internal": null, "weight": null},
            {"name": "Bad dims", "external": {"width": 1}, "internal": null, "weight": null},
            {"name": "", "external": null, "internal": null, "weight": null}
        ]));
        assert_eq!(report.error_index, Some(1));
        assert_eq!(
            report.reason.as_deref(),
            Some("item 1 has invalid dimensions (Bad dims)")
        );
        assert_eq!(report.item_count, 3);
    }

    #[test]
    fn test_dimension_shapes() {
        let with_dims = |dims: Value| {
            validate(&json!([
                {"name": "Box", "external": dims, "internal": null, "weight": null}
            ]))
            .ok
        };

        assert!(with_dims(json!({"width": 1, "height": 2, "depth": 3})));
        assert!(with_dims(json!({"width": null, "height": null, "depth": null})));
        assert!(!with_dims(json!({"width": 1, "height": 2})));
        assert!(!with_dims(json!({"width": 1, "height": 2, "depth": 3, "unit": "cm"})));
        assert!(!with_dims(json!({"width": 1.5, "height": 2, "depth": 3})));
        assert!(!with_dims(json!({"width": "1", "height": 2, "depth": 3})));
        assert!(!with_dims(json!("30x20x10")));
        assert!(!with_dims(json!([1, 2, 3])));
    }

    #[test]
    fn test_missing_fields_rejected() {
        let report = validate(&json!([{"name": "Box", "internal": null, "weight": null}]));
        assert_eq!(
            report.reason.as_deref(),
            Some("item 0 has invalid dimensions (Box)")
        );

        let report = validate(&json!([{"name": "Box", "external": null, "internal": null}]));
        assert_eq!(
            report.reason.as_deref(),
            Some("item 0 has invalid weight (Box)")
        );

        let report = validate(&json!([{"name": "Box", "external": null, "internal": null, "weight": "2 kg"}]));
        assert!(!report.ok);

        let report = validate(&json!([42]));
        assert_eq!(report.reason.as_deref(), Some("item 0 is not an object"));
    }

    #[test]
    fn test_into_result() {
        assert_eq!(ValidationReport::passed(3).into_result().unwrap(), 3);

        let err = validate(&json!([])).into_result().unwrap_err();
        assert!(matches!(err, ValidationError::Schema { index: None, .. }));
    }
}

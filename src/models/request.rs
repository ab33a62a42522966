use serde_json::Value;

use crate::constants::{APPEND_WIDTH, MIN_WRITE_ROW};
use crate::error::{AppError, Result};

/// Validated body of a row-write request.
///
/// Parsed from a loose `serde_json::Value` rather than derived, so that a
/// malformed shape produces a 400 with a useful message instead of a
/// framework rejection. Checks run in a fixed order and stop at the first
/// failure: `values` must be an array of strings, then `rowIndex` must be an
/// integer no smaller than the first data row, then the value count must
/// match the location's write span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteRequest {
    pub row_index: i64,
    pub values: Vec<String>,
}

impl WriteRequest {
    pub fn from_body(body: &Value, expected_width: usize) -> Result<Self> {
        let values = string_array(body.get("values"))?;

        let row_index = match body.get("rowIndex").and_then(Value::as_i64) {
            Some(row) if row >= MIN_WRITE_ROW => row,
            _ => {
                return Err(AppError::InvalidInput(format!(
                    "`rowIndex` must be an integer greater than or equal to {}",
                    MIN_WRITE_ROW
                )))
            }
        };

        if values.len() != expected_width {
            return Err(AppError::InvalidInput(format!(
                "expected {} values, received {}",
                expected_width,
                values.len()
            )));
        }

        Ok(Self { row_index, values })
    }
}

/// Validated body of a whole-row append request (columns B through P).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppendRequest {
    pub values: Vec<String>,
}

impl AppendRequest {
    pub fn from_body(body: &Value) -> Result<Self> {
        let values = string_array(body.get("values"))?;

        if values.len() != APPEND_WIDTH {
            return Err(AppError::InvalidInput(format!(
                "expected {} values (columns B through P), received {}",
                APPEND_WIDTH,
                values.len()
            )));
        }

        Ok(Self { values })
    }
}

fn string_array(field: Option<&Value>) -> Result<Vec<String>> {
    let items = match field {
        Some(Value::Array(items)) => items,
        _ => {
            return Err(AppError::InvalidInput(
                "`values` must be an array of strings".to_string(),
            ))
        }
    };

    items
        .iter()
        .map(|item| {
            item.as_str().map(str::to_string).ok_or_else(|| {
                AppError::InvalidInput("`values` must be an array of strings".to_string())
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_a_valid_write_body() {
        let body = json!({ "rowIndex": 6, "values": ["a", "b"] });
        let req = WriteRequest::from_body(&body, 2).unwrap();
        assert_eq!(req.row_index, 6);
        assert_eq!(req.values, vec!["a", "b"]);
    }

    #[test]
    fn missing_values_fails_before_row_index_is_looked_at() {
        let body = json!({ "rowIndex": 1 });
        let err = WriteRequest::from_body(&body, 2).unwrap_err().to_string();
        assert!(err.contains("values"), "got: {}", err);
    }

    #[test]
    fn non_array_values_is_rejected() {
        let body = json!({ "rowIndex": 6, "values": "a,b" });
        assert!(WriteRequest::from_body(&body, 2).is_err());
    }

    #[test]
    fn non_string_elements_are_rejected() {
        let body = json!({ "rowIndex": 6, "values": ["a", 2] });
        assert!(WriteRequest::from_body(&body, 2).is_err());
    }

    #[test]
    fn row_index_below_header_boundary_is_rejected() {
        for row in [0, 5, -1] {
            let body = json!({ "rowIndex": row, "values": ["a", "b"] });
            let err = WriteRequest::from_body(&body, 2).unwrap_err().to_string();
            assert!(err.contains("rowIndex"), "row {}: {}", row, err);
        }
    }

    #[test]
    fn missing_or_fractional_row_index_is_rejected() {
        let body = json!({ "values": ["a", "b"] });
        assert!(WriteRequest::from_body(&body, 2).is_err());

        let body = json!({ "rowIndex": 6.5, "values": ["a", "b"] });
        assert!(WriteRequest::from_body(&body, 2).is_err());
    }

    #[test]
    fn width_mismatch_names_both_counts() {
        let body = json!({ "rowIndex": 10, "values": ["a", "b", "c"] });
        let err = WriteRequest::from_body(&body, 7).unwrap_err().to_string();
        assert!(err.contains('7'), "got: {}", err);
        assert!(err.contains('3'), "got: {}", err);
    }

    #[test]
    fn append_requires_exactly_fifteen_values() {
        let body = json!({ "values": vec!["x"; 14] });
        let err = AppendRequest::from_body(&body).unwrap_err().to_string();
        assert!(err.contains("15"), "got: {}", err);
        assert!(err.contains("14"), "got: {}", err);

        let body = json!({ "values": vec!["x"; 15] });
        let req = AppendRequest::from_body(&body).unwrap();
        assert_eq!(req.values.len(), 15);
    }
}

//! Type coercion of canonical scalar columns to numeric storage.
//!
//! Textual columns are parsed: an empty entry stands for "missing" and is
//! replaced by the default before parsing, while a non-empty entry that is
//! not a number is a hard error; garbage is never silently coerced to 0.
//!
//! Float-to-integer conversion rounds to the nearest integer with ties away
//! from zero (`f64::round` semantics): 2.5 becomes 3, -0.5 becomes -1. The
//! policy is pinned by tests below.

use crate::column::ValueBuffer;
use crate::error::TransformError;

/// Coerce a scalar column to 64-bit floats.
///
/// Empty textual entries take `default`; numeric storage casts directly.
///
/// # Errors
/// [`TransformError::Parse`] naming `name` and the offending row when a
/// non-empty textual entry is not a number.
pub fn to_f64(
    column: &ValueBuffer,
    default: f64,
    name: &str,
) -> Result<Vec<f64>, TransformError> {
    match column {
        ValueBuffer::F64(values) => Ok(values.clone()),
        ValueBuffer::I64(values) => Ok(values.iter().map(|&v| v as f64).collect()),
        ValueBuffer::Str(values) => values
            .iter()
            .enumerate()
            .map(|(row, s)| parse_entry(s, default, name, row))
            .collect(),
    }
}

/// Coerce a scalar column to 64-bit integers.
///
/// Empty textual entries take `default`; non-empty text is parsed as a
/// float first; floating values round to nearest, ties away from zero.
///
/// # Errors
/// [`TransformError::Parse`] as for [`to_f64`].
pub fn to_i64(
    column: &ValueBuffer,
    default: i64,
    name: &str,
) -> Result<Vec<i64>, TransformError> {
    match column {
        ValueBuffer::I64(values) => Ok(values.clone()),
        ValueBuffer::F64(values) => Ok(values.iter().map(|&v| v.round() as i64).collect()),
        ValueBuffer::Str(values) => values
            .iter()
            .enumerate()
            .map(|(row, s)| {
                parse_entry(s, default as f64, name, row).map(|v| v.round() as i64)
            })
            .collect(),
    }
}

fn parse_entry(s: &str, default: f64, name: &str, row: usize) -> Result<f64, TransformError> {
    if s.is_empty() {
        return Ok(default);
    }
    s.parse::<f64>().map_err(|_| TransformError::Parse {
        column: name.to_string(),
        row,
        value: s.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(values: &[&str]) -> ValueBuffer {
        ValueBuffer::Str(values.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_to_f64_parses_text_with_default() {
        let col = text(&["", "3.14", "-2"]);
        let out = to_f64(&col, 0.5, "a").unwrap();
        assert_eq!(out, vec![0.5, 3.14, -2.0]);
    }

    #[test]
    fn test_to_i64_parses_text_and_rounds() {
        let col = text(&["", "3.14", "-2"]);
        let out = to_i64(&col, 0, "a").unwrap();
        assert_eq!(out, vec![0, 3, -2]);
    }

    #[test]
    fn test_to_f64_numeric_passthrough() {
        let col = ValueBuffer::F64(vec![1.0, -2.5]);
        assert_eq!(to_f64(&col, 0.0, "a").unwrap(), vec![1.0, -2.5]);

        let col = ValueBuffer::I64(vec![3, -4]);
        assert_eq!(to_f64(&col, 0.0, "a").unwrap(), vec![3.0, -4.0]);
    }

    #[test]
    fn test_to_i64_rounds_ties_away_from_zero() {
        let col = ValueBuffer::F64(vec![0.5, -0.5, 2.5, -2.5, 1.49]);
        assert_eq!(to_i64(&col, 0, "a").unwrap(), vec![1, -1, 3, -3, 1]);
    }

    #[test]
    fn test_to_i64_text_ties_away_from_zero() {
        let col = text(&["0.5", "-1.5"]);
        assert_eq!(to_i64(&col, 0, "a").unwrap(), vec![1, -2]);
    }

    #[test]
    fn test_to_i64_integer_passthrough() {
        let col = ValueBuffer::I64(vec![7, -8]);
        assert_eq!(to_i64(&col, 0, "a").unwrap(), vec![7, -8]);
    }

    #[test]
    fn test_garbage_text_is_an_error_not_zero() {
        let col = text(&["1.0", "garbage"]);
        let result = to_f64(&col, 0.0, "amount");
        match result {
            Err(TransformError::Parse { column, row, value }) => {
                assert_eq!(column, "amount");
                assert_eq!(row, 1);
                assert_eq!(value, "garbage");
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_and_garbage_are_distinct() {
        // "" takes the default; "abc" fails.
        assert!(to_f64(&text(&[""]), 9.0, "a").is_ok());
        assert!(to_f64(&text(&["abc"]), 9.0, "a").is_err());
        assert!(to_i64(&text(&["abc"]), 9, "a").is_err());
    }

    #[test]
    fn test_to_f64_empty_column() {
        let col = ValueBuffer::Str(vec![]);
        assert_eq!(to_f64(&col, 0.0, "a").unwrap(), Vec::<f64>::new());
    }
}

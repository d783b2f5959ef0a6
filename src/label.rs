//! Binary label encoding.
//!
//! Coerces a label column of any supported shape to an int64 indicator in
//! {0, 1}: scalarize with the configured default, coerce to integer, then
//! clamp: values below 0 become 0, values above 1 become 1. Clamping
//! saturates, mirroring the feature clip policy with integer bounds.

use crate::coerce::to_i64;
use crate::column::{ColumnData, ScalarValue};
use crate::error::TransformError;
use crate::scalarize::scalarize;

/// Encode a label column as a binary {0, 1} indicator.
///
/// `default` fills empty rows and empty textual entries before coercion.
///
/// # Errors
/// Shape and parse errors propagate from the scalarization and coercion
/// stages.
pub fn encode_label(
    column: &ColumnData,
    default: i64,
    n_rows: usize,
    name: &str,
) -> Result<Vec<i64>, TransformError> {
    let scalar = scalarize(column, &ScalarValue::I64(default), n_rows, name)?;
    let values = to_i64(&scalar, default, name)?;
    Ok(values.into_iter().map(|v| v.clamp(0, 1)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::ValueBuffer;

    #[test]
    fn test_encode_label_binarizes() {
        let col = ColumnData::Dense1D(ValueBuffer::I64(vec![-1, 0, 1, 2]));
        let out = encode_label(&col, 0, 4, "label").unwrap();
        assert_eq!(out, vec![0, 0, 1, 1]);
    }

    #[test]
    fn test_encode_label_text_with_missing() {
        let col = ColumnData::Dense1D(ValueBuffer::Str(
            ["-1", "0", "1", "2", ""].iter().map(|s| s.to_string()).collect(),
        ));
        let out = encode_label(&col, 0, 5, "label").unwrap();
        assert_eq!(out, vec![0, 0, 1, 1, 0]);
    }

    #[test]
    fn test_encode_label_ragged_empty_rows() {
        let col = ColumnData::Ragged {
            values: ValueBuffer::I64(vec![1]),
            row_splits: vec![0, 0, 1, 1],
        };
        let out = encode_label(&col, 0, 3, "label").unwrap();
        assert_eq!(out, vec![0, 1, 0]);
    }

    #[test]
    fn test_encode_label_float_rounds_then_clamps() {
        let col = ColumnData::Dense1D(ValueBuffer::F64(vec![0.4, 0.6, 7.2, -3.9]));
        let out = encode_label(&col, 0, 4, "label").unwrap();
        assert_eq!(out, vec![0, 1, 1, 0]);
    }

    #[test]
    fn test_encode_label_garbage_text_errors() {
        let col = ColumnData::Dense1D(ValueBuffer::Str(vec!["yes".to_string()]));
        let result = encode_label(&col, 0, 1, "label");
        assert!(matches!(result, Err(TransformError::Parse { .. })));
    }
}

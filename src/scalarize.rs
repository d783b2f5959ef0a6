//! Row-shape normalization.
//!
//! Converts an arbitrarily-shaped per-column batch representation into a
//! canonical scalar column: exactly one value per row, never missing. The
//! policy is uniform across shapes: take the row's first present value,
//! substitute the default otherwise.
//!
//! # Example
//! ```
//! use featurize_rs::column::{ColumnData, ScalarValue, ValueBuffer};
//! use featurize_rs::scalarize::scalarize;
//!
//! // Rows: [], [7], []
//! let column = ColumnData::Ragged {
//!     values: ValueBuffer::I64(vec![7]),
//!     row_splits: vec![0, 0, 1, 1],
//! };
//! let out = scalarize(&column, &ScalarValue::I64(0), 3, "clicks").unwrap();
//! assert_eq!(out, ValueBuffer::I64(vec![0, 7, 0]));
//! ```

use crate::column::{ColumnData, DType, ScalarValue, ValueBuffer};
use crate::error::TransformError;

/// Reduce a column to one value per row.
///
/// `default` is the fill constant for empty rows; it is converted into the
/// column's storage type before filling. The result always has exactly
/// `n_rows` values, for every shape variant, including width-0 dense columns
/// and ragged columns with no values at all.
///
/// # Errors
/// [`TransformError::Shape`] when the column's structure is inconsistent;
/// [`TransformError::InvalidParameter`] when the default cannot be
/// represented in the column's storage type.
pub fn scalarize(
    column: &ColumnData,
    default: &ScalarValue,
    n_rows: usize,
    name: &str,
) -> Result<ValueBuffer, TransformError> {
    column.validate(n_rows, name)?;

    match column {
        ColumnData::Dense1D(values) => Ok(values.clone()),
        ColumnData::DenseNd { values, width } => {
            if *width == 0 {
                filled(values.dtype(), default, n_rows, name)
            } else {
                Ok(match values {
                    ValueBuffer::Str(v) => ValueBuffer::Str(take_first_dense(v, *width)),
                    ValueBuffer::F64(v) => ValueBuffer::F64(take_first_dense(v, *width)),
                    ValueBuffer::I64(v) => ValueBuffer::I64(take_first_dense(v, *width)),
                })
            }
        }
        ColumnData::Ragged { values, row_splits } => {
            first_present_or_default(values, row_splits, default, n_rows, name)
        }
        ColumnData::Sparse { values, row_ids } => {
            // Sparse is ragged with implicit boundaries; recover them first.
            let row_splits = splits_from_row_ids(row_ids, n_rows);
            first_present_or_default(values, &row_splits, default, n_rows, name)
        }
    }
}

/// First value of each fixed-width row. Width must be >= 1.
fn take_first_dense<T: Clone>(values: &[T], width: usize) -> Vec<T> {
    values.chunks_exact(width).map(|row| row[0].clone()).collect()
}

/// First value per ragged row, default for empty rows.
fn first_present_or_default(
    values: &ValueBuffer,
    row_splits: &[usize],
    default: &ScalarValue,
    n_rows: usize,
    name: &str,
) -> Result<ValueBuffer, TransformError> {
    // The whole batch may carry zero values; a gather would index into an
    // empty buffer, so that case fills outright and never gathers.
    if values.is_empty() {
        return filled(values.dtype(), default, n_rows, name);
    }

    match values {
        ValueBuffer::Str(v) => Ok(ValueBuffer::Str(first_or_fill(
            v,
            row_splits,
            default.to_text(),
        ))),
        ValueBuffer::F64(v) => {
            let fill = default
                .as_f64()
                .ok_or_else(|| no_typed_form(name, default, DType::F64))?;
            Ok(ValueBuffer::F64(first_or_fill(v, row_splits, fill)))
        }
        ValueBuffer::I64(v) => {
            let fill = default
                .as_i64()
                .ok_or_else(|| no_typed_form(name, default, DType::I64))?;
            Ok(ValueBuffer::I64(first_or_fill(v, row_splits, fill)))
        }
    }
}

/// Gather each row's start-offset value where the row is non-empty.
///
/// Caller guarantees `values` is non-empty, so every gathered index is in
/// bounds; empty rows never gather and take the fill instead.
fn first_or_fill<T: Clone>(values: &[T], row_splits: &[usize], fill: T) -> Vec<T> {
    let n_rows = row_splits.len() - 1;
    let mut out = Vec::with_capacity(n_rows);
    for row in 0..n_rows {
        let start = row_splits[row];
        let has_value = row_splits[row + 1] > start;
        if has_value {
            out.push(values[start].clone());
        } else {
            out.push(fill.clone());
        }
    }
    out
}

/// A buffer of `n` copies of the default, in the given storage type.
fn filled(
    dtype: DType,
    default: &ScalarValue,
    n: usize,
    name: &str,
) -> Result<ValueBuffer, TransformError> {
    match dtype {
        DType::Str => Ok(ValueBuffer::Str(vec![default.to_text(); n])),
        DType::F64 => {
            let fill = default
                .as_f64()
                .ok_or_else(|| no_typed_form(name, default, DType::F64))?;
            Ok(ValueBuffer::F64(vec![fill; n]))
        }
        DType::I64 => {
            let fill = default
                .as_i64()
                .ok_or_else(|| no_typed_form(name, default, DType::I64))?;
            Ok(ValueBuffer::I64(vec![fill; n]))
        }
    }
}

/// Row boundaries from sorted COO row ids.
fn splits_from_row_ids(row_ids: &[usize], n_rows: usize) -> Vec<usize> {
    let mut splits = Vec::with_capacity(n_rows + 1);
    splits.push(0);
    let mut k = 0;
    for row in 0..n_rows {
        while k < row_ids.len() && row_ids[k] == row {
            k += 1;
        }
        splits.push(k);
    }
    splits
}

fn no_typed_form(name: &str, default: &ScalarValue, dtype: DType) -> TransformError {
    TransformError::InvalidParameter(format!(
        "default '{}' for column '{}' has no {:?} form",
        default.to_text(),
        name,
        dtype
    ))
}

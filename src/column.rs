//! Column representations for heterogeneous batch data.
//!
//! A column arrives from the batch reader in one of three shapes:
//!
//! - [`ColumnData::Dense1D`]: exactly one value per row.
//! - [`ColumnData::DenseNd`]: a fixed-width vector of values per row
//!   (width may be 0).
//! - [`ColumnData::Ragged`] / [`ColumnData::Sparse`]: zero or more values
//!   per row with explicit row boundaries.
//!
//! Values are stored in a [`ValueBuffer`], which is homogeneous per column:
//! text, 64-bit float, or 64-bit integer.

use crate::error::TransformError;
use serde::{Deserialize, Serialize};

/// Storage type marker for column values and fill constants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DType {
    /// Textual values.
    Str,
    /// 64-bit floating point values.
    F64,
    /// 64-bit integer values.
    I64,
}

/// A single typed value, used for configured defaults and fill constants.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ScalarValue {
    Str(String),
    F64(f64),
    I64(i64),
}

impl ScalarValue {
    /// Storage type of this value.
    pub fn dtype(&self) -> DType {
        match self {
            ScalarValue::Str(_) => DType::Str,
            ScalarValue::F64(_) => DType::F64,
            ScalarValue::I64(_) => DType::I64,
        }
    }

    /// Textual form of the value, used when filling text columns.
    pub fn to_text(&self) -> String {
        match self {
            ScalarValue::Str(s) => s.clone(),
            ScalarValue::F64(v) => v.to_string(),
            ScalarValue::I64(v) => v.to_string(),
        }
    }

    /// Float form of the value, if it has one. Textual values must parse
    /// as a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ScalarValue::Str(s) => s.parse::<f64>().ok(),
            ScalarValue::F64(v) => Some(*v),
            ScalarValue::I64(v) => Some(*v as f64),
        }
    }

    /// Integer form of the value, if it has one. Floats (and textual
    /// numbers) are rounded to the nearest integer, ties away from zero.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ScalarValue::Str(s) => s.parse::<f64>().ok().map(|v| v.round() as i64),
            ScalarValue::F64(v) => Some(v.round() as i64),
            ScalarValue::I64(v) => Some(*v),
        }
    }

    /// Convert the value into the requested storage type. Returns `None`
    /// when a textual value has no numeric form.
    pub fn cast(&self, dtype: DType) -> Option<ScalarValue> {
        match dtype {
            DType::Str => Some(ScalarValue::Str(self.to_text())),
            DType::F64 => self.as_f64().map(ScalarValue::F64),
            DType::I64 => self.as_i64().map(ScalarValue::I64),
        }
    }
}

/// Homogeneous value storage backing a column.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ValueBuffer {
    Str(Vec<String>),
    F64(Vec<f64>),
    I64(Vec<i64>),
}

impl ValueBuffer {
    /// Number of values in the buffer.
    pub fn len(&self) -> usize {
        match self {
            ValueBuffer::Str(v) => v.len(),
            ValueBuffer::F64(v) => v.len(),
            ValueBuffer::I64(v) => v.len(),
        }
    }

    /// Check if the buffer holds no values.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Storage type of the buffer.
    pub fn dtype(&self) -> DType {
        match self {
            ValueBuffer::Str(_) => DType::Str,
            ValueBuffer::F64(_) => DType::F64,
            ValueBuffer::I64(_) => DType::I64,
        }
    }
}

/// A named column's batch representation (tagged by shape).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ColumnData {
    /// Exactly one value per row.
    Dense1D(ValueBuffer),
    /// Row-major fixed-width vectors: row `i` owns
    /// `values[i * width .. (i + 1) * width]`. Width 0 is valid.
    DenseNd { values: ValueBuffer, width: usize },
    /// Variable-length rows with explicit boundaries: `row_splits` holds
    /// N + 1 non-decreasing offsets starting at 0; row `i` owns
    /// `values[row_splits[i] .. row_splits[i + 1]]`. Rows may be empty.
    Ragged {
        values: ValueBuffer,
        row_splits: Vec<usize>,
    },
    /// COO-style sparse values: `row_ids[k]` is the row of `values[k]`,
    /// sorted non-decreasing. Rows with no entry are empty.
    Sparse {
        values: ValueBuffer,
        row_ids: Vec<usize>,
    },
}

impl ColumnData {
    /// Storage type of the column's values.
    pub fn dtype(&self) -> DType {
        match self {
            ColumnData::Dense1D(values) => values.dtype(),
            ColumnData::DenseNd { values, .. } => values.dtype(),
            ColumnData::Ragged { values, .. } => values.dtype(),
            ColumnData::Sparse { values, .. } => values.dtype(),
        }
    }

    /// Check the column's structure against the batch row count.
    ///
    /// # Errors
    /// Returns [`TransformError::Shape`] naming `name` when the declared
    /// representation is inconsistent with `n_rows` or with itself.
    pub fn validate(&self, n_rows: usize, name: &str) -> Result<(), TransformError> {
        let shape_err = |detail: String| TransformError::Shape {
            column: name.to_string(),
            detail,
        };
        match self {
            ColumnData::Dense1D(values) => {
                if values.len() != n_rows {
                    return Err(shape_err(format!(
                        "dense 1-D column has {} values, expected {}",
                        values.len(),
                        n_rows
                    )));
                }
            }
            ColumnData::DenseNd { values, width } => {
                if values.len() != n_rows * width {
                    return Err(shape_err(format!(
                        "dense column of width {} has {} values, expected {}",
                        width,
                        values.len(),
                        n_rows * width
                    )));
                }
            }
            ColumnData::Ragged { values, row_splits } => {
                if row_splits.len() != n_rows + 1 {
                    return Err(shape_err(format!(
                        "row_splits has {} entries, expected {}",
                        row_splits.len(),
                        n_rows + 1
                    )));
                }
                if row_splits[0] != 0 {
                    return Err(shape_err(format!(
                        "row_splits must start at 0, got {}",
                        row_splits[0]
                    )));
                }
                if row_splits.windows(2).any(|w| w[1] < w[0]) {
                    return Err(shape_err(
                        "row_splits not monotonically non-decreasing".to_string(),
                    ));
                }
                if row_splits[n_rows] != values.len() {
                    return Err(shape_err(format!(
                        "row_splits end at {} but column has {} values",
                        row_splits[n_rows],
                        values.len()
                    )));
                }
            }
            ColumnData::Sparse { values, row_ids } => {
                if row_ids.len() != values.len() {
                    return Err(shape_err(format!(
                        "sparse column has {} row ids for {} values",
                        row_ids.len(),
                        values.len()
                    )));
                }
                if row_ids.windows(2).any(|w| w[1] < w[0]) {
                    return Err(shape_err(
                        "sparse row ids not monotonically non-decreasing".to_string(),
                    ));
                }
                if let Some(&last) = row_ids.last() {
                    if last >= n_rows {
                        return Err(shape_err(format!(
                            "sparse row id {} out of range for {} rows",
                            last, n_rows
                        )));
                    }
                }
            }
        }
        Ok(())
    }
}

//! A batch of named columns sharing one row count.

use crate::column::ColumnData;
use crate::error::TransformError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A fixed set of named columns processed together.
///
/// Every column in a batch holds one value-group per row; the row count is
/// shared across all columns and fixed at construction. Columns are
/// validated against the row count when inserted, so a constructed batch is
/// always structurally consistent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Batch {
    n_rows: usize,
    columns: BTreeMap<String, ColumnData>,
}

impl Batch {
    /// Create an empty batch with the given row count.
    pub fn new(n_rows: usize) -> Self {
        Self {
            n_rows,
            columns: BTreeMap::new(),
        }
    }

    /// Number of rows shared by every column.
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Number of columns.
    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// Check if the batch holds no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Insert a column after validating it against the batch row count.
    ///
    /// # Errors
    /// Returns [`TransformError::Shape`] when the column's structure is
    /// inconsistent with the row count.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        column: ColumnData,
    ) -> Result<(), TransformError> {
        let name = name.into();
        column.validate(self.n_rows, &name)?;
        self.columns.insert(name, column);
        Ok(())
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with_column(
        mut self,
        name: impl Into<String>,
        column: ColumnData,
    ) -> Result<Self, TransformError> {
        self.insert(name, column)?;
        Ok(self)
    }

    /// Look up a column by name.
    pub fn get(&self, name: &str) -> Option<&ColumnData> {
        self.columns.get(name)
    }

    /// Check whether a column is present.
    pub fn contains(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    /// Column names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    /// Iterate over (name, column) pairs in sorted name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ColumnData)> {
        self.columns.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::ValueBuffer;

    #[test]
    fn test_batch_insert_and_get() {
        let mut batch = Batch::new(2);
        batch
            .insert("a", ColumnData::Dense1D(ValueBuffer::F64(vec![1.0, 2.0])))
            .unwrap();

        assert_eq!(batch.n_rows(), 2);
        assert_eq!(batch.n_columns(), 1);
        assert!(batch.contains("a"));
        assert!(batch.get("b").is_none());
    }

    #[test]
    fn test_batch_insert_rejects_bad_shape() {
        let mut batch = Batch::new(3);
        let result = batch.insert("a", ColumnData::Dense1D(ValueBuffer::F64(vec![1.0])));
        assert!(matches!(result, Err(TransformError::Shape { .. })));
        assert!(batch.is_empty());
    }

    #[test]
    fn test_batch_with_column_builder() {
        let batch = Batch::new(1)
            .with_column("a", ColumnData::Dense1D(ValueBuffer::I64(vec![1])))
            .unwrap()
            .with_column("b", ColumnData::Dense1D(ValueBuffer::I64(vec![2])))
            .unwrap();

        let names: Vec<&str> = batch.names().collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_batch_zero_rows() {
        let batch = Batch::new(0)
            .with_column("a", ColumnData::Dense1D(ValueBuffer::Str(vec![])))
            .unwrap();
        assert_eq!(batch.n_rows(), 0);
        assert_eq!(batch.get("a").map(|c| c.dtype()), Some(crate::column::DType::Str));
    }
}

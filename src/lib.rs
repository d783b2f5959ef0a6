//! # featurize-rs
//!
//! Robust batch scalarization and feature normalization for machine
//! learning data pipelines.
//!
//! Raw input columns arrive batch-shaped and heterogeneous: dense
//! fixed-width values, dense variable-width vectors, or sparse/ragged
//! per-row value lists, stored as text, floats, or integers. This crate
//! reduces each configured column to exactly one numeric scalar per row
//! with deterministic default substitution, then standardizes selected
//! numeric columns with precomputed corpus statistics (clipped z-scores)
//! and binarizes a label column.
//!
//! ## Core Design Principles
//!
//! - **Totality**: every row always yields a value: empty rows take the
//!   configured default, and a batch with no values at all is handled by an
//!   explicit branch rather than an accidental safe gather.
//! - **Apply-only statistics**: mean and variance are corpus-wide constants
//!   supplied by an external analysis stage; the engine applies them
//!   identically at training and serving time and never computes them.
//! - **Fail whole-batch**: garbage input (structural inconsistency, or text
//!   that is not a number) aborts the batch with a typed error; there is no
//!   partial output and no silent coercion to zero.
//! - **No hidden state**: defaults, suffix, and clip bound are explicit
//!   configuration; transformation is a pure per-batch function, trivially
//!   parallelizable across batches.
//!
//! ## Quick Start
//!
//! ```
//! use featurize_rs::batch::Batch;
//! use featurize_rs::column::{ColumnData, ValueBuffer};
//! use featurize_rs::scaling::ColumnStats;
//! use featurize_rs::transform::BatchTransformer;
//!
//! let transformer = BatchTransformer::new()
//!     .label("label")
//!     .numeric("amount", ColumnStats { mean: 10.0, variance: 4.0 });
//!
//! // Ragged column: rows [], [14.0], []; empty rows take the default.
//! let batch = Batch::new(3)
//!     .with_column("amount", ColumnData::Ragged {
//!         values: ValueBuffer::F64(vec![14.0]),
//!         row_splits: vec![0, 0, 1, 1],
//!     })
//!     .unwrap();
//!
//! let out = transformer.transform(&batch).unwrap();
//! assert_eq!(out.n_rows(), 3);
//! assert!(out.get("amount_xf").is_some());
//! ```
//!
//! ## Module Structure
//!
//! - `column`: column representations (`Dense1D`, `DenseNd`, `Ragged`,
//!   `Sparse`) and typed value storage
//! - `batch`: named-column batches with a validated shared row count
//! - `scalarize`: row-shape normalization (first value per row, or default)
//! - `coerce`: text/float/int coercion to float64 and int64 columns
//! - `scaling`: clipped z-score standardization from supplied statistics
//! - `label`: binary {0, 1} label encoding
//! - `transform`: the configuration-driven orchestrator
//! - `error`: the crate-wide error type

pub mod batch;
pub mod coerce;
pub mod column;
pub mod error;
pub mod label;
pub mod scalarize;
pub mod scaling;
pub mod transform;

pub use batch::Batch;
pub use column::{ColumnData, DType, ScalarValue, ValueBuffer};
pub use error::TransformError;
pub use scaling::{ColumnStats, ZScoreScaler, DEFAULT_CLIP};
pub use transform::{
    BatchTransformer, BatchTransformerParams, ColumnConfig, FeatureRole, TransformConfig,
    DEFAULT_SUFFIX,
};

//! Configuration-driven batch preprocessing.
//!
//! [`BatchTransformer`] is the entry point of the engine: it holds the
//! static column configuration (roles, defaults, statistics, clip bound)
//! and maps input batches to output batches. Per configured column present
//! in the input, it runs shape normalization, then type coercion, then,
//! for numeric features, clipped z-score standardization, and writes the
//! result under the input name plus a configurable suffix.
//!
//! The transformer is a pure per-batch function: it owns only plain
//! configuration data, reads nothing but its input, and mutates nothing,
//! so batches may be processed concurrently and in any order.
//!
//! # Example
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
//! let batch = Batch::new(2)
//!     .with_column("amount", ColumnData::Dense1D(ValueBuffer::F64(vec![12.0, 8.0])))
//!     .unwrap()
//!     .with_column("label", ColumnData::Dense1D(ValueBuffer::I64(vec![0, 3])))
//!     .unwrap();
//!
//! let out = transformer.transform(&batch).unwrap();
//! assert_eq!(
//!     out.get("amount_xf"),
//!     Some(&ColumnData::Dense1D(ValueBuffer::F64(vec![1.0, -1.0])))
//! );
//! assert_eq!(
//!     out.get("label_xf"),
//!     Some(&ColumnData::Dense1D(ValueBuffer::I64(vec![0, 1])))
//! );
//! ```

use crate::batch::Batch;
use crate::coerce::to_f64;
use crate::column::{ColumnData, DType, ScalarValue, ValueBuffer};
use crate::error::TransformError;
use crate::label::encode_label;
use crate::scalarize::scalarize;
use crate::scaling::{ColumnStats, ZScoreScaler, DEFAULT_CLIP};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Default suffix marking transformed output columns.
pub const DEFAULT_SUFFIX: &str = "_xf";

/// What a configured column is used for.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum FeatureRole {
    /// Binary target: coerced to int64 and clamped to {0, 1}.
    Label,
    /// Standardized feature: coerced to float64, then z-scored with the
    /// given corpus statistics and clipped.
    Numeric(ColumnStats),
}

/// Per-column configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColumnConfig {
    /// Role of the column in the output.
    pub role: FeatureRole,
    /// Default substituted for empty rows and empty textual entries.
    pub default: ScalarValue,
    /// Storage type of the fill constant built from `default`.
    pub dtype: DType,
}

impl ColumnConfig {
    /// Numeric-feature column with default 0.0.
    pub fn numeric(stats: ColumnStats) -> Self {
        Self {
            role: FeatureRole::Numeric(stats),
            default: ScalarValue::F64(0.0),
            dtype: DType::F64,
        }
    }

    /// Label column with default 0.
    pub fn label() -> Self {
        Self {
            role: FeatureRole::Label,
            default: ScalarValue::I64(0),
            dtype: DType::I64,
        }
    }

    /// Set the default value.
    pub fn with_default(mut self, default: ScalarValue) -> Self {
        self.default = default;
        self
    }

    /// Set the fill constant's storage type.
    pub fn with_dtype(mut self, dtype: DType) -> Self {
        self.dtype = dtype;
        self
    }
}

/// Batch-level configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransformConfig {
    /// Suffix appended to input names for output columns.
    pub suffix: String,
    /// Symmetric clip bound for standardized features.
    pub clip: f64,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            suffix: DEFAULT_SUFFIX.to_string(),
            clip: DEFAULT_CLIP,
        }
    }
}

impl TransformConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output-name suffix.
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Set the clip bound.
    pub fn with_clip(mut self, clip: f64) -> Self {
        self.clip = clip;
        self
    }
}

/// Serializable parameters for a [`BatchTransformer`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BatchTransformerParams {
    /// Batch-level configuration.
    pub config: TransformConfig,
    /// Per-column configuration, keyed by input column name.
    pub columns: BTreeMap<String, ColumnConfig>,
}

/// Configuration-driven batch preprocessor.
#[derive(Clone, Debug, PartialEq)]
pub struct BatchTransformer {
    config: TransformConfig,
    columns: BTreeMap<String, ColumnConfig>,
}

impl Default for BatchTransformer {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchTransformer {
    /// Create an empty transformer with the default configuration.
    pub fn new() -> Self {
        Self::with_config(TransformConfig::default())
    }

    /// Create an empty transformer with an explicit configuration.
    pub fn with_config(config: TransformConfig) -> Self {
        Self {
            config,
            columns: BTreeMap::new(),
        }
    }

    /// Configure a label column (default 0).
    pub fn label(self, name: impl Into<String>) -> Self {
        self.column(name, ColumnConfig::label())
    }

    /// Configure a numeric-feature column (default 0.0).
    pub fn numeric(self, name: impl Into<String>, stats: ColumnStats) -> Self {
        self.column(name, ColumnConfig::numeric(stats))
    }

    /// Configure a column explicitly.
    pub fn column(mut self, name: impl Into<String>, config: ColumnConfig) -> Self {
        self.columns.insert(name.into(), config);
        self
    }

    /// Number of configured columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Check if no columns are configured.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// The batch-level configuration.
    pub fn config(&self) -> &TransformConfig {
        &self.config
    }

    /// Transform one batch.
    ///
    /// Configured columns absent from the batch are skipped; schemas may
    /// be partial per batch (a serving-time batch without the label column
    /// simply has no label output). Unconfigured input columns are dropped.
    /// The output batch always has the input's row count.
    ///
    /// # Errors
    /// Any shape, parse, or configuration error aborts the whole batch;
    /// there is no partial output.
    pub fn transform(&self, batch: &Batch) -> Result<Batch, TransformError> {
        let n_rows = batch.n_rows();
        let mut output = Batch::new(n_rows);

        for (name, cfg) in &self.columns {
            let Some(column) = batch.get(name) else {
                warn!(column = %name, "configured column absent from batch, skipping");
                continue;
            };
            debug!(column = %name, rows = n_rows, role = ?cfg.role, "transforming column");

            let out_name = format!("{}{}", name, self.config.suffix);
            match &cfg.role {
                FeatureRole::Label => {
                    let default = cfg
                        .default
                        .as_i64()
                        .ok_or_else(|| bad_default(name, &cfg.default, DType::I64))?;
                    let encoded = encode_label(column, default, n_rows, name)?;
                    output.insert(out_name, ColumnData::Dense1D(ValueBuffer::I64(encoded)))?;
                }
                FeatureRole::Numeric(stats) => {
                    let fill = cfg
                        .default
                        .cast(cfg.dtype)
                        .ok_or_else(|| bad_default(name, &cfg.default, cfg.dtype))?;
                    let default = cfg
                        .default
                        .as_f64()
                        .ok_or_else(|| bad_default(name, &cfg.default, DType::F64))?;
                    let scalar = scalarize(column, &fill, n_rows, name)?;
                    let floats = to_f64(&scalar, default, name)?;
                    let scaled = ZScoreScaler::new(*stats)
                        .with_clip(self.config.clip)
                        .transform(&floats);
                    output.insert(out_name, ColumnData::Dense1D(ValueBuffer::F64(scaled)))?;
                }
            }
        }

        Ok(output)
    }

    /// Extract configuration as a serializable representation.
    pub fn extract_params(&self) -> BatchTransformerParams {
        BatchTransformerParams {
            config: self.config.clone(),
            columns: self.columns.clone(),
        }
    }

    /// Reconstruct a transformer from parameters.
    pub fn from_params(params: BatchTransformerParams) -> Self {
        Self {
            config: params.config,
            columns: params.columns,
        }
    }

    /// Save the transformer configuration to a file.
    pub fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> Result<(), TransformError> {
        let bytes = bincode::serialize(&self.extract_params())?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Load a transformer configuration from a file.
    pub fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, TransformError> {
        let bytes = std::fs::read(path)?;
        let params: BatchTransformerParams = bincode::deserialize(&bytes)?;
        Ok(Self::from_params(params))
    }
}

fn bad_default(name: &str, default: &ScalarValue, dtype: DType) -> TransformError {
    TransformError::InvalidParameter(format!(
        "default '{}' for column '{}' has no {:?} form",
        default.to_text(),
        name,
        dtype
    ))
}

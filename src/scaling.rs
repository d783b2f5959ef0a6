//! Z-score standardization with saturating clip.
//!
//! Transforms a float column by removing the mean and scaling to unit
//! variance:
//! ```text
//! z = (x - mean) / sqrt(variance)
//! ```
//! then clamps every value into `[-clip, +clip]`.
//!
//! The statistics are corpus-wide constants computed by an external analysis
//! stage; this scaler only applies them, identically at training and serving
//! time. Variance is assumed positive (upstream contract); the scaler does
//! not guard the division, so a zero variance yields infinite z-scores that
//! still saturate at the clip bound, and NaN where x equals the mean.
//!
//! # Example
//! ```
//! use featurize_rs::scaling::{ColumnStats, ZScoreScaler};
//!
//! let scaler = ZScoreScaler::new(ColumnStats { mean: 10.0, variance: 4.0 });
//! assert_eq!(scaler.transform(&[12.0]), vec![1.0]);
//! assert_eq!(scaler.transform(&[1000.0]), vec![5.0]); // saturated
//! ```

use serde::{Deserialize, Serialize};

/// Default symmetric clip bound for standardized features.
pub const DEFAULT_CLIP: f64 = 5.0;

/// Corpus-wide statistics for one column, supplied by the external
/// statistics provider.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColumnStats {
    /// Mean over the full training corpus.
    pub mean: f64,
    /// Variance over the full training corpus. Assumed > 0.
    pub variance: f64,
}

/// Applies clipped z-score standardization using precomputed statistics.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZScoreScaler {
    stats: ColumnStats,
    clip: f64,
}

impl ZScoreScaler {
    /// Create a scaler with the default clip bound.
    pub fn new(stats: ColumnStats) -> Self {
        Self {
            stats,
            clip: DEFAULT_CLIP,
        }
    }

    /// Set the symmetric clip bound.
    pub fn with_clip(mut self, clip: f64) -> Self {
        self.clip = clip;
        self
    }

    /// The statistics this scaler applies.
    pub fn stats(&self) -> ColumnStats {
        self.stats
    }

    /// Standardize and clip every value, producing a new column.
    pub fn transform(&self, values: &[f64]) -> Vec<f64> {
        let scale = self.stats.variance.sqrt();
        let z: Vec<f64> = values
            .iter()
            .map(|&x| (x - self.stats.mean) / scale)
            .collect();
        clip(&z, self.clip)
    }
}

/// Clamp every value into the closed interval `[-bound, +bound]`.
///
/// Clipping saturates: out-of-range inputs are bounded, never rejected.
/// NaN passes through unchanged.
pub fn clip(values: &[f64], bound: f64) -> Vec<f64> {
    values.iter().map(|&x| clip_value(x, bound)).collect()
}

fn clip_value(x: f64, bound: f64) -> f64 {
    if x > bound {
        bound
    } else if x < -bound {
        -bound
    } else {
        x
    }
}

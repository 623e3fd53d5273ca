//! Exposure models: how much attention each rank position receives.
//!
//! An [`ExposureModel`] holds an R x K matrix of attention weights, one
//! column per model variant, each column summing to 1. It is built either
//! from the default family of geometric models or from caller-supplied
//! weights. Applying it to an alignment matrix gives the exposure
//! distribution:
//! ```text
//! E_R = W_Rᵀ · A        (K x C)
//! ```

mod geometric;

pub use geometric::{geometric_weights, normalize_columns};

use serde::Serialize;

use crate::config::GeometricSweep;
use crate::error::{FairnessError, Result};
use crate::types::{Alignment, Exposure, Weights};

/// Normalized attention weights plus the decay rates they were built from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExposureModel {
    weights: Weights,
    lambda_values: Option<Vec<f64>>,
}

impl ExposureModel {
    /// Build one geometric attention model per decay rate of `sweep`.
    ///
    /// # Errors
    ///
    /// Returns [`FairnessError::InvalidSweep`] if the sweep is empty or
    /// contains decay rates outside (0, 1).
    pub fn geometric(ranks: usize, sweep: &GeometricSweep) -> Result<Self> {
        sweep.validate()?;
        let lambda_values = sweep.lambda_values();
        let mut weights = geometric_weights(ranks, &lambda_values);
        normalize_columns(&mut weights);

        Ok(Self {
            weights,
            lambda_values: Some(lambda_values),
        })
    }

    /// Use caller-supplied attention weights.
    ///
    /// Columns are renormalized to sum to 1 and no decay rates are reported.
    pub fn from_weights(mut weights: Weights) -> Self {
        normalize_columns(&mut weights);
        Self {
            weights,
            lambda_values: None,
        }
    }

    /// The normalized R x K attention matrix.
    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    /// Decay rates of the geometric models, `None` for supplied weights.
    pub fn lambda_values(&self) -> Option<&[f64]> {
        self.lambda_values.as_deref()
    }

    /// Number of rank positions R.
    pub fn n_ranks(&self) -> usize {
        self.weights.nrows()
    }

    /// Number of model variants K.
    pub fn n_models(&self) -> usize {
        self.weights.ncols()
    }

    /// Exposure distribution of `alignment` under every model variant.
    ///
    /// # Errors
    ///
    /// Returns [`FairnessError::WeightRowMismatch`] if the model and the
    /// alignment disagree on the number of ranks.
    pub fn exposure(&self, alignment: &Alignment) -> Result<Exposure> {
        exposure_distribution(&self.weights, alignment)
    }

    /// Split into the weight matrix and the decay rates.
    pub fn into_parts(self) -> (Weights, Option<Vec<f64>>) {
        (self.weights, self.lambda_values)
    }
}

/// Attention-weighted class totals, `E_R = W_Rᵀ · A`.
///
/// Entry `(k, c)` is the exposure class `c` receives under model `k`.
/// Weights are used as given; see [`ExposureModel`] for normalization.
///
/// # Errors
///
/// Returns [`FairnessError::WeightRowMismatch`] if `weights` and
/// `alignment` have different row counts.
pub fn exposure_distribution(weights: &Weights, alignment: &Alignment) -> Result<Exposure> {
    if weights.nrows() != alignment.nrows() {
        return Err(FairnessError::WeightRowMismatch {
            weight_rows: weights.nrows(),
            alignment_rows: alignment.nrows(),
        });
    }
    Ok(weights.tr_mul(alignment))
}

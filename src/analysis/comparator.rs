//! Exposure fairness comparison (`vlambda`).
//!
//! Resolves the optional inputs, then compares the exposure each class
//! receives under every attention model with the population estimate:
//!
//! 1. `p_hat`: supplied, or [`estimate_p`] over the full alignment
//! 2. `delta_max`: supplied, or one [`std_err_vec`] of `p_hat` at n = R
//! 3. `W_R`: supplied, or the geometric family over the decay-rate sweep;
//!    columns are always renormalized to sum to 1
//! 4. `E_R = W_Rᵀ · A`
//! 5. `distance(E_R, p_hat)`

use crate::analysis::distance::{Distance, Subtraction};
use crate::analysis::tolerance::Tolerance;
use crate::config::GeometricSweep;
use crate::error::{FairnessError, Result};
use crate::exposure::ExposureModel;
use crate::result::VlambdaResult;
use crate::statistics::{estimate_p, std_err_vec};
use crate::types::{Alignment, Proportions, Weights};

/// Builder for the exposure fairness comparison.
///
/// # Example
///
/// ```
/// use vlambda::{Alignment, Vlambda};
///
/// let alignment = Alignment::from_row_slice(4, 2, &[1.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0]);
/// let result = Vlambda::new().analyze(&alignment).unwrap();
///
/// assert_eq!(result.lambda_values.as_ref().map(Vec::len), Some(24));
/// assert_eq!(result.distance.shape(), (24, 2));
/// ```
#[derive(Debug, Clone)]
pub struct Vlambda<D = Subtraction> {
    p_hat: Option<Proportions>,
    delta_max: Option<Tolerance>,
    weights: Option<Weights>,
    sweep: GeometricSweep,
    distance: D,
}

impl Default for Vlambda<Subtraction> {
    fn default() -> Self {
        Self::new()
    }
}

impl Vlambda<Subtraction> {
    /// Comparison with every input left to its default.
    pub fn new() -> Self {
        Self {
            p_hat: None,
            delta_max: None,
            weights: None,
            sweep: GeometricSweep::default(),
            distance: Subtraction,
        }
    }
}

impl<D: Distance> Vlambda<D> {
    // =========================================================================
    // Builder methods
    // =========================================================================

    /// Use a known population estimate instead of estimating it.
    pub fn p_hat(mut self, p_hat: Proportions) -> Self {
        self.p_hat = Some(p_hat);
        self
    }

    /// Use an explicit tolerance instead of one standard error.
    pub fn delta_max(mut self, delta_max: impl Into<Tolerance>) -> Self {
        self.delta_max = Some(delta_max.into());
        self
    }

    /// Use caller-supplied attention weights (R x K).
    ///
    /// The geometric sweep is ignored and no decay rates are reported.
    pub fn weights(mut self, weights: Weights) -> Self {
        self.weights = Some(weights);
        self
    }

    /// Set the decay rates of the default geometric family.
    pub fn sweep(mut self, sweep: GeometricSweep) -> Self {
        self.sweep = sweep;
        self
    }

    /// Replace the distance function.
    pub fn distance<E: Distance>(self, distance: E) -> Vlambda<E> {
        Vlambda {
            p_hat: self.p_hat,
            delta_max: self.delta_max,
            weights: self.weights,
            sweep: self.sweep,
            distance,
        }
    }

    // =========================================================================
    // Analysis
    // =========================================================================

    /// Compare exposure with the population estimate for `alignment`.
    ///
    /// # Errors
    ///
    /// - [`FairnessError::ClassCountMismatch`] if `p_hat` or a per-class
    ///   `delta_max` does not have one entry per alignment column
    /// - [`FairnessError::WeightRowMismatch`] if supplied weights do not have
    ///   one row per rank
    /// - [`FairnessError::InvalidSweep`] if the geometric sweep is unusable
    ///
    /// Numeric-domain problems (empty rankings, zero weight columns,
    /// proportions outside [0, 1]) are not errors and show up as NaN.
    pub fn analyze(&self, alignment: &Alignment) -> Result<VlambdaResult> {
        let (n_ranks, n_classes) = alignment.shape();
        tracing::debug!(ranks = n_ranks, classes = n_classes, "Running vlambda");

        let p_hat = match &self.p_hat {
            Some(p_hat) => {
                if p_hat.len() != n_classes {
                    return Err(FairnessError::ClassCountMismatch {
                        what: "p_hat",
                        expected: n_classes,
                        got: p_hat.len(),
                    });
                }
                p_hat.clone()
            }
            None => {
                let p_hat = estimate_p(alignment, None);
                tracing::debug!(p_hat = ?p_hat.as_slice(), "Estimated population proportions");
                p_hat
            }
        };

        let delta_max = match &self.delta_max {
            Some(delta_max) => {
                delta_max.check_classes(n_classes)?;
                delta_max.clone()
            }
            None => {
                let bounds = std_err_vec(&p_hat, n_ranks as f64);
                tracing::debug!(
                    delta_max = ?bounds.as_slice(),
                    "Using one standard error as tolerance"
                );
                Tolerance::PerClass(bounds)
            }
        };

        let model = match &self.weights {
            Some(weights) => ExposureModel::from_weights(weights.clone()),
            None => {
                let model = ExposureModel::geometric(n_ranks, &self.sweep)?;
                tracing::debug!(
                    models = model.n_models(),
                    start = self.sweep.start,
                    step = self.sweep.step,
                    "Built geometric attention models"
                );
                model
            }
        };

        let exposure = model.exposure(alignment)?;
        for (k, row) in exposure.row_iter().enumerate() {
            tracing::trace!(model = k, total = row.sum(), "Exposure per model");
        }

        let distance = self.distance.distance(&exposure, &p_hat);
        let (_, lambda_values) = model.into_parts();

        Ok(VlambdaResult {
            lambda_values,
            distance,
            delta_max,
            p_hat,
            exposure,
        })
    }
}

/// Compare exposure with the population estimate in a single call.
///
/// Every `None` argument is resolved to its default (see [`Vlambda`]).
///
/// # Errors
///
/// See [`Vlambda::analyze`].
pub fn vlambda<D: Distance>(
    alignment: &Alignment,
    p_hat: Option<&Proportions>,
    delta_max: Option<Tolerance>,
    weights: Option<&Weights>,
    distance: D,
) -> Result<VlambdaResult> {
    let builder = Vlambda {
        p_hat: p_hat.cloned(),
        delta_max,
        weights: weights.cloned(),
        sweep: GeometricSweep::default(),
        distance,
    };
    builder.analyze(alignment)
}

//! Result types for exposure fairness analysis.

use serde::Serialize;

use crate::analysis::Tolerance;
use crate::types::{DistanceMatrix, Exposure, Proportions};

/// Outcome of [`vlambda`](crate::vlambda).
///
/// Row `k` of [`distance`](Self::distance) and [`exposure`](Self::exposure)
/// belongs to exposure model `k`; when the default geometric family was used,
/// its decay rate is `lambda_values[k]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VlambdaResult {
    /// Decay rates of the geometric models, `None` if weights were supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lambda_values: Option<Vec<f64>>,

    /// Distance between exposure and population estimate (K x C).
    pub distance: DistanceMatrix,

    /// Maximum allowable distance.
    pub delta_max: Tolerance,

    /// Population estimate the exposure was compared against.
    pub p_hat: Proportions,

    /// Exposure distribution `E_R` (K x C).
    pub exposure: Exposure,
}

/// Per-model summary of how the exposure sits relative to the tolerance band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ModelVerdict {
    /// Row index of the model in the distance matrix.
    pub model: usize,

    /// Decay rate of the model, if it is a geometric one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lambda: Option<f64>,

    /// Class with the largest excess, `None` without classes.
    pub worst_class: Option<usize>,

    /// Largest `|distance| - delta_max` over classes.
    ///
    /// Non-positive when the model is within tolerance.
    pub max_excess: f64,

    /// Whether every class is inside the tolerance band.
    pub within_tolerance: bool,
}

impl VlambdaResult {
    /// Number of exposure models K.
    pub fn n_models(&self) -> usize {
        self.distance.nrows()
    }

    /// Number of classes C.
    pub fn n_classes(&self) -> usize {
        self.distance.ncols()
    }

    /// Whether model `model` is within tolerance for class `class`.
    pub fn within_tolerance(&self, model: usize, class: usize) -> bool {
        self.delta_max.contains(class, self.distance[(model, class)])
    }

    /// Summarize every exposure model.
    pub fn verdicts(&self) -> Vec<ModelVerdict> {
        (0..self.n_models()).map(|k| self.verdict(k)).collect()
    }

    /// Decay rates whose geometric model keeps every class within tolerance.
    ///
    /// Empty when weights were supplied by the caller.
    pub fn fair_lambdas(&self) -> Vec<f64> {
        self.verdicts()
            .into_iter()
            .filter(|v| v.within_tolerance)
            .filter_map(|v| v.lambda)
            .collect()
    }

    /// Whether every model keeps every class within tolerance.
    pub fn all_within_tolerance(&self) -> bool {
        (0..self.n_models()).all(|k| self.verdict(k).within_tolerance)
    }

    /// Split into `(lambda_values, distance, delta_max)`.
    pub fn into_parts(self) -> (Option<Vec<f64>>, DistanceMatrix, Tolerance) {
        (self.lambda_values, self.distance, self.delta_max)
    }

    fn verdict(&self, model: usize) -> ModelVerdict {
        let worst = (0..self.n_classes())
            .map(|c| (c, self.distance[(model, c)].abs() - self.delta_max.bound(c)))
            // Ties go to the lowest class index.
            .max_by(|a, b| a.1.total_cmp(&b.1).then(b.0.cmp(&a.0)));

        ModelVerdict {
            model,
            lambda: self
                .lambda_values
                .as_ref()
                .and_then(|lambdas| lambdas.get(model).copied()),
            worst_class: worst.map(|(c, _)| c),
            max_excess: worst.map_or(f64::NEG_INFINITY, |(_, excess)| excess),
            within_tolerance: (0..self.n_classes())
                .all(|c| self.within_tolerance(model, c)),
        }
    }
}

//! Tolerance band (`delta_max`) around the population estimate.
//!
//! An exposure model is considered within tolerance for class `c` when
//! `|distance[k, c]| <= delta_max[c]`. By default `delta_max` is one
//! binomial standard error of `p_hat`.

use serde::Serialize;

use crate::error::{FairnessError, Result};
use crate::types::Proportions;

/// Maximum allowable distance between exposure and population estimate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Tolerance {
    /// The same bound for every class.
    Uniform(f64),
    /// One bound per class.
    PerClass(Proportions),
}

impl Tolerance {
    /// Bound for class `class`. A uniform tolerance is broadcast.
    ///
    /// # Panics
    ///
    /// Panics if a per-class tolerance has no entry for `class`.
    pub fn bound(&self, class: usize) -> f64 {
        match self {
            Tolerance::Uniform(bound) => *bound,
            Tolerance::PerClass(bounds) => bounds[class],
        }
    }

    /// Whether `deviation` lies inside the band for `class`.
    ///
    /// NaN deviations or bounds are never inside.
    pub fn contains(&self, class: usize, deviation: f64) -> bool {
        deviation.abs() <= self.bound(class)
    }

    /// Check that this tolerance can be broadcast against `n_classes` classes.
    pub fn check_classes(&self, n_classes: usize) -> Result<()> {
        match self {
            Tolerance::PerClass(bounds) if bounds.len() != n_classes => {
                Err(FairnessError::ClassCountMismatch {
                    what: "delta_max",
                    expected: n_classes,
                    got: bounds.len(),
                })
            }
            _ => Ok(()),
        }
    }

    /// Materialize the per-class bounds for `n_classes` classes.
    pub fn to_vector(&self, n_classes: usize) -> Proportions {
        match self {
            Tolerance::Uniform(bound) => Proportions::from_element(n_classes, *bound),
            Tolerance::PerClass(bounds) => bounds.clone(),
        }
    }
}

impl From<f64> for Tolerance {
    fn from(bound: f64) -> Self {
        Tolerance::Uniform(bound)
    }
}

impl From<Proportions> for Tolerance {
    fn from(bounds: Proportions) -> Self {
        Tolerance::PerClass(bounds)
    }
}

impl From<Vec<f64>> for Tolerance {
    fn from(bounds: Vec<f64>) -> Self {
        Tolerance::PerClass(Proportions::from_vec(bounds))
    }
}

//! Configuration of the default geometric exposure sweep.
//!
//! When no attention weights are supplied, one geometric attention model is
//! built per decay rate in the sweep. The sweep follows half-open `arange`
//! semantics: `start, start + step, ...` strictly below `stop`.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_LAMBDA_START, DEFAULT_LAMBDA_STEP, DEFAULT_LAMBDA_STOP};
use crate::error::{FairnessError, Result};

/// Decay rates used to build the default family of geometric attention models.
///
/// The default sweep is `0.02, 0.04, ..., 0.48` (24 models).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeometricSweep {
    /// First decay rate (inclusive).
    pub start: f64,

    /// Upper bound on decay rates (exclusive).
    pub stop: f64,

    /// Spacing between consecutive decay rates.
    pub step: f64,
}

impl Default for GeometricSweep {
    fn default() -> Self {
        Self {
            start: DEFAULT_LAMBDA_START,
            stop: DEFAULT_LAMBDA_STOP,
            step: DEFAULT_LAMBDA_STEP,
        }
    }
}

impl GeometricSweep {
    /// Create a sweep over `[start, stop)` with the given step.
    ///
    /// The sweep is not validated here; see [`GeometricSweep::validate`].
    pub fn new(start: f64, stop: f64, step: f64) -> Self {
        Self { start, stop, step }
    }

    /// A sweep containing a single decay rate.
    pub fn single(lambda: f64) -> Self {
        Self {
            start: lambda,
            stop: lambda + DEFAULT_LAMBDA_STEP / 2.0,
            step: DEFAULT_LAMBDA_STEP,
        }
    }

    // =========================================================================
    // Builder methods
    // =========================================================================

    /// Set the first decay rate.
    pub fn start(mut self, start: f64) -> Self {
        self.start = start;
        self
    }

    /// Set the exclusive upper bound.
    pub fn stop(mut self, stop: f64) -> Self {
        self.stop = stop;
        self
    }

    /// Set the step between decay rates.
    pub fn step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    // =========================================================================
    // Resolution
    // =========================================================================

    /// Number of decay rates in the sweep, `ceil((stop - start) / step)`.
    pub fn len(&self) -> usize {
        let span = (self.stop - self.start) / self.step;
        if span.is_finite() && span > 0.0 {
            span.ceil() as usize
        } else {
            0
        }
    }

    /// Whether the sweep produces no decay rates.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The decay rates of the sweep, in increasing order.
    pub fn lambda_values(&self) -> Vec<f64> {
        (0..self.len())
            .map(|i| self.start + i as f64 * self.step)
            .collect()
    }

    /// Check that the sweep yields at least one decay rate and that every
    /// decay rate lies in the open interval (0, 1).
    pub fn validate(&self) -> Result<()> {
        if !(self.step.is_finite() && self.step > 0.0) {
            return Err(FairnessError::InvalidSweep {
                reason: format!("step must be positive and finite, got {}", self.step),
            });
        }
        let count = self.len();
        if count == 0 {
            return Err(FairnessError::InvalidSweep {
                reason: format!("[{}, {}) contains no decay rates", self.start, self.stop),
            });
        }
        let last = self.start + (count - 1) as f64 * self.step;
        if !(self.start > 0.0 && last < 1.0) {
            return Err(FairnessError::InvalidSweep {
                reason: format!(
                    "decay rates must lie in (0, 1), sweep spans [{}, {}]",
                    self.start, last
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_LAMBDA_COUNT;

    #[test]
    fn test_default_sweep() {
        let sweep = GeometricSweep::default();
        let lambdas = sweep.lambda_values();

        assert_eq!(lambdas.len(), DEFAULT_LAMBDA_COUNT);
        assert!((lambdas[0] - 0.02).abs() < 1e-12);
        assert!((lambdas[23] - 0.48).abs() < 1e-12);
        assert!(lambdas.windows(2).all(|w| w[1] > w[0]));
        assert!(sweep.validate().is_ok());
    }

    #[test]
    fn test_single_sweep() {
        let sweep = GeometricSweep::single(0.3);
        assert_eq!(sweep.lambda_values(), vec![0.3]);
        assert!(sweep.validate().is_ok());
    }

    #[test]
    fn test_builder_methods() {
        let sweep = GeometricSweep::default().start(0.1).stop(0.35).step(0.1);
        let lambdas = sweep.lambda_values();
        assert_eq!(lambdas.len(), 3);
        assert!((lambdas[2] - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_step() {
        assert!(GeometricSweep::new(0.1, 0.5, 0.0).validate().is_err());
        assert!(GeometricSweep::new(0.1, 0.5, -0.1).validate().is_err());
        assert!(GeometricSweep::new(0.1, 0.5, f64::NAN).validate().is_err());
    }

    #[test]
    fn test_empty_sweep() {
        let sweep = GeometricSweep::new(0.4, 0.2, 0.02);
        assert!(sweep.is_empty());
        assert!(matches!(
            sweep.validate(),
            Err(FairnessError::InvalidSweep { .. })
        ));
    }

    #[test]
    fn test_out_of_range_decay_rates() {
        assert!(GeometricSweep::new(0.0, 0.5, 0.1).validate().is_err());
        assert!(GeometricSweep::new(0.5, 1.2, 0.25).validate().is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let sweep = GeometricSweep::new(0.05, 0.3, 0.05);
        let json = serde_json::to_string(&sweep).unwrap();
        let back: GeometricSweep = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sweep);
    }
}

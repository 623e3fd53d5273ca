//! Constants used throughout the crate.

/// First decay rate of the default geometric sweep.
pub const DEFAULT_LAMBDA_START: f64 = 0.02;

/// Exclusive upper bound of the default geometric sweep.
pub const DEFAULT_LAMBDA_STOP: f64 = 0.5;

/// Spacing between consecutive decay rates in the default sweep.
pub const DEFAULT_LAMBDA_STEP: f64 = 0.02;

/// Number of exposure models in the default sweep (0.02, 0.04, ..., 0.48).
pub const DEFAULT_LAMBDA_COUNT: usize = 24;

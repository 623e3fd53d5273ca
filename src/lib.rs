//! # vlambda
//!
//! Exposure-based fairness diagnostics for ranked lists.
//!
//! Given a ranking and each ranked item's alignment with the classes of a
//! protected attribute, this crate:
//! - Estimates the population proportion of every class (`p_hat`)
//! - Derives a tolerance band from the binomial standard error (`delta_max`)
//! - Models how much attention each rank receives, by default with a sweep
//!   of geometric attention models (decay rates 0.02, 0.04, ..., 0.48)
//! - Compares the attention-weighted class exposure with `p_hat`
//!
//! ## Quick Start
//!
//! ```
//! use vlambda::{Alignment, Vlambda};
//!
//! // One row per rank, one column per class.
//! let alignment = Alignment::from_row_slice(4, 2, &[
//!     1.0, 0.0,
//!     0.0, 1.0,
//!     1.0, 0.0,
//!     0.0, 1.0,
//! ]);
//!
//! let result = Vlambda::new().analyze(&alignment).unwrap();
//! for verdict in result.verdicts() {
//!     println!("{:?}: within tolerance = {}", verdict.lambda, verdict.within_tolerance);
//! }
//! ```
//!
//! The free functions [`estimate_p`], [`std_err`] and [`vlambda()`] expose
//! the individual steps.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod config;
mod constants;
mod error;
mod result;
mod types;

// Functional modules
pub mod analysis;
pub mod exposure;
pub mod output;
pub mod statistics;

// Re-exports for public API
pub use analysis::{
    subtraction, vlambda, AbsoluteDifference, Distance, Subtraction, Tolerance, Vlambda,
};
pub use config::GeometricSweep;
pub use constants::{
    DEFAULT_LAMBDA_COUNT, DEFAULT_LAMBDA_START, DEFAULT_LAMBDA_STEP, DEFAULT_LAMBDA_STOP,
};
pub use error::{FairnessError, Result};
pub use exposure::{exposure_distribution, ExposureModel};
pub use result::{ModelVerdict, VlambdaResult};
pub use statistics::{estimate_p, std_err, std_err_vec};
pub use types::{Alignment, DistanceMatrix, Exposure, Proportions, Weights};

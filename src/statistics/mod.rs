//! Statistical estimators for population proportions.
//!
//! - Population estimate (`population`): column-wise share of each class
//! - Standard error (`standard_error`): binomial standard error of a proportion

mod population;
mod standard_error;

pub use population::estimate_p;
pub use standard_error::{std_err, std_err_vec};

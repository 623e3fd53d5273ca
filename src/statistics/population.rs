//! Population proportion estimation from a ranked sample.
//!
//! The estimate for class `c` is the total alignment mass of that class
//! divided by the sample size:
//! ```text
//! p_hat[c] = Σ_r A[r, c] / n
//! ```
//! `n` defaults to the number of ranks, but callers analysing aggregates
//! (e.g. several rankings over a shared pool) can pass the number of unique
//! items instead.

use crate::types::{Alignment, Proportions};

/// Estimate the population proportion of every class.
///
/// # Arguments
///
/// * `alignment` - Alignment matrix `A` (R x C)
/// * `n` - Sample size. `None` uses the number of rows R.
///
/// # Returns
///
/// A length-C vector of proportions. A zero sample size is not guarded
/// against and yields infinities or NaN.
pub fn estimate_p(alignment: &Alignment, n: Option<f64>) -> Proportions {
    let n = n.unwrap_or(alignment.nrows() as f64);
    alignment.row_sum_tr() / n
}

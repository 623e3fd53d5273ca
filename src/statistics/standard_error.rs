//! Binomial standard error, used as the default tolerance band.
//!
//! ```text
//! SE(p_hat) = sqrt(p_hat (1 - p_hat) / n)
//! ```

use crate::types::Proportions;

/// Standard error of a binomially distributed proportion estimate.
///
/// `n` is the number of observations behind `p`; for a single ranking
/// without ground truth this is the length of the ranking.
///
/// Inputs are not validated. `n == 0` gives infinity or NaN and a `p`
/// outside [0, 1] gives NaN.
#[inline]
pub fn std_err(p: f64, n: f64) -> f64 {
    (p * (1.0 - p) / n).sqrt()
}

/// Elementwise [`std_err`] over a vector of proportions.
pub fn std_err_vec(p_hat: &Proportions, n: f64) -> Proportions {
    p_hat.map(|p| std_err(p, n))
}

//! Geometric attention models.
//!
//! A geometric attention model with decay rate `λ` assigns rank `r`
//! (0-based) the probability mass of a geometric distribution:
//! ```text
//! w(r) = (1 - λ)^r · λ
//! ```
//! Over a finite ranking these masses sum to `1 - (1 - λ)^R`, so every
//! column is renormalized to a total attention of exactly 1.

use crate::types::Weights;

/// Raw (un-normalized) geometric attention matrix.
///
/// # Arguments
///
/// * `ranks` - Number of rank positions R
/// * `lambdas` - Decay rates, one model per entry
///
/// # Returns
///
/// An R x K matrix whose column `k` is the geometric PMF for `lambdas[k]`
/// evaluated at trials `0..R`.
pub fn geometric_weights(ranks: usize, lambdas: &[f64]) -> Weights {
    Weights::from_fn(ranks, lambdas.len(), |r, k| {
        let lambda = lambdas[k];
        (1.0 - lambda).powi(r as i32) * lambda
    })
}

/// Scale every column so that it sums to 1.
///
/// A column summing to zero becomes NaN; no substitution is made.
pub fn normalize_columns(weights: &mut Weights) {
    for mut column in weights.column_iter_mut() {
        let total = column.sum();
        column /= total;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometric_pmf_values() {
        let w = geometric_weights(3, &[0.5, 0.1]);
        assert_eq!(w.shape(), (3, 2));
        assert_eq!(w[(0, 0)], 0.5);
        assert_eq!(w[(1, 0)], 0.25);
        assert_eq!(w[(2, 0)], 0.125);
        assert!((w[(1, 1)] - 0.09).abs() < 1e-15);
    }

    #[test]
    fn test_raw_mass_is_truncated() {
        let w = geometric_weights(4, &[0.2]);
        let expected = 1.0 - 0.8_f64.powi(4);
        assert!((w.column(0).sum() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_normalize_columns_sums_to_one() {
        let mut w = Weights::from_row_slice(3, 2, &[1.0, 10.0, 2.0, 0.0, 5.0, 30.0]);
        normalize_columns(&mut w);

        for column in w.column_iter() {
            assert!((column.sum() - 1.0).abs() < 1e-12);
        }
        assert!((w[(0, 0)] - 0.125).abs() < 1e-15);
        assert!((w[(2, 1)] - 0.75).abs() < 1e-15);
    }

    #[test]
    fn test_zero_column_becomes_nan() {
        let mut w = Weights::from_row_slice(2, 2, &[0.0, 1.0, 0.0, 1.0]);
        normalize_columns(&mut w);
        assert!(w.column(0).iter().all(|x| x.is_nan()));
        assert_eq!(w[(0, 1)], 0.5);
        assert_eq!(w[(1, 1)], 0.5);
    }
}

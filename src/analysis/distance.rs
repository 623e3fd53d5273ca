//! Distance between the exposure distribution and the population estimate.
//!
//! A distance function receives `E_R` (K x C) and `p_hat` (length C) and
//! returns a K x C matrix. `p_hat` is broadcast as a row vector against
//! every row of `E_R`.

use crate::types::{DistanceMatrix, Exposure, Proportions};

/// A binary distance between exposure and population estimate.
///
/// Implemented by [`Subtraction`], [`AbsoluteDifference`] and any closure
/// `Fn(&Exposure, &Proportions) -> DistanceMatrix`.
pub trait Distance {
    /// Compare every exposure row against `p_hat`.
    fn distance(&self, exposure: &Exposure, p_hat: &Proportions) -> DistanceMatrix;
}

impl<F> Distance for F
where
    F: Fn(&Exposure, &Proportions) -> DistanceMatrix,
{
    fn distance(&self, exposure: &Exposure, p_hat: &Proportions) -> DistanceMatrix {
        self(exposure, p_hat)
    }
}

/// Signed difference `E_R - p_hat`. The default distance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Subtraction;

impl Distance for Subtraction {
    fn distance(&self, exposure: &Exposure, p_hat: &Proportions) -> DistanceMatrix {
        subtraction(exposure, p_hat)
    }
}

/// Magnitude of the difference, `|E_R - p_hat|`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AbsoluteDifference;

impl Distance for AbsoluteDifference {
    fn distance(&self, exposure: &Exposure, p_hat: &Proportions) -> DistanceMatrix {
        subtraction(exposure, p_hat).abs()
    }
}

/// Subtract `p_hat` from every row of `exposure`.
///
/// # Panics
///
/// Panics if `p_hat` is shorter than the number of columns of `exposure`.
pub fn subtraction(exposure: &Exposure, p_hat: &Proportions) -> DistanceMatrix {
    DistanceMatrix::from_fn(exposure.nrows(), exposure.ncols(), |k, c| {
        exposure[(k, c)] - p_hat[c]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exposure() -> Exposure {
        Exposure::from_row_slice(2, 2, &[1.0, 0.0, 0.75, 0.25])
    }

    #[test]
    fn test_subtraction_broadcasts_rows() {
        let p_hat = Proportions::from_vec(vec![0.5, 0.5]);
        let d = Subtraction.distance(&exposure(), &p_hat);
        assert_eq!(d, DistanceMatrix::from_row_slice(2, 2, &[0.5, -0.5, 0.25, -0.25]));
    }

    #[test]
    fn test_absolute_difference() {
        let p_hat = Proportions::from_vec(vec![0.5, 0.5]);
        let d = AbsoluteDifference.distance(&exposure(), &p_hat);
        assert_eq!(d, DistanceMatrix::from_row_slice(2, 2, &[0.5, 0.5, 0.25, 0.25]));
    }

    #[test]
    fn test_closure_distance() {
        let ratio = |e: &Exposure, p: &Proportions| {
            DistanceMatrix::from_fn(e.nrows(), e.ncols(), |k, c| e[(k, c)] / p[c])
        };
        let p_hat = Proportions::from_vec(vec![0.5, 0.25]);
        let d = ratio.distance(&exposure(), &p_hat);
        assert_eq!(d, DistanceMatrix::from_row_slice(2, 2, &[2.0, 0.0, 1.5, 1.0]));
    }
}

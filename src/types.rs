//! Type aliases and common types.

use nalgebra::{DMatrix, DVector};

/// Rank-by-class alignment matrix `A` (R x C).
///
/// Row `r` describes the item at rank `r`, column `c` how strongly it
/// belongs to class `c` of the protected attribute. Fractional values are
/// allowed.
pub type Alignment = DMatrix<f64>;

/// Attention weights `W_R` (R x K), one column per exposure model variant.
pub type Weights = DMatrix<f64>;

/// Exposure distribution `E_R` (K x C).
pub type Exposure = DMatrix<f64>;

/// Result of a distance function applied to `E_R` and `p_hat` (K x C).
pub type DistanceMatrix = DMatrix<f64>;

/// Per-class proportions, e.g. the population estimate `p_hat` (length C).
pub type Proportions = DVector<f64>;

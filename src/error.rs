//! Error types for fairness analysis.
//!
//! Only structural problems are errors. Numeric-domain problems (a zero
//! sample size, a proportion outside [0, 1], an all-zero weight column) are
//! not caught: they surface as infinities or NaN in the returned values.

use thiserror::Error;

/// Errors returned by [`vlambda`](crate::vlambda) and its building blocks.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FairnessError {
    /// The attention matrix and the alignment matrix disagree on the number
    /// of ranks, so `W_R^T · A` is undefined.
    #[error(
        "attention weights have {weight_rows} rows but the alignment has {alignment_rows} ranks"
    )]
    WeightRowMismatch {
        /// Rows of `W_R`.
        weight_rows: usize,
        /// Rows of the alignment matrix.
        alignment_rows: usize,
    },

    /// A per-class vector cannot be broadcast against the class columns.
    #[error("{what} has {got} entries but the alignment has {expected} classes")]
    ClassCountMismatch {
        /// Which input was malformed (e.g. "p_hat", "delta_max").
        what: &'static str,
        /// Number of classes in the alignment matrix.
        expected: usize,
        /// Length of the offending vector.
        got: usize,
    },

    /// The decay-rate sweep cannot produce a usable set of geometric models.
    #[error("invalid decay-rate sweep: {reason}")]
    InvalidSweep {
        /// Description of the problem.
        reason: String,
    },
}

/// Convenience alias for results in this crate.
pub type Result<T> = std::result::Result<T, FairnessError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_row_mismatch_message() {
        let err = FairnessError::WeightRowMismatch {
            weight_rows: 3,
            alignment_rows: 4,
        };
        assert_eq!(
            err.to_string(),
            "attention weights have 3 rows but the alignment has 4 ranks"
        );
    }

    #[test]
    fn test_class_count_mismatch_message() {
        let err = FairnessError::ClassCountMismatch {
            what: "p_hat",
            expected: 2,
            got: 3,
        };
        assert_eq!(
            err.to_string(),
            "p_hat has 3 entries but the alignment has 2 classes"
        );
    }
}

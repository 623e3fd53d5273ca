//! Exposure fairness analysis.
//!
//! - **Comparison** (`comparator`): resolution of defaults and the comparison itself
//! - **Distance** (`distance`): how exposure is compared with `p_hat`
//! - **Tolerance** (`tolerance`): the allowed deviation band `delta_max`

pub mod comparator;
pub mod distance;
pub mod tolerance;

pub use comparator::{vlambda, Vlambda};
pub use distance::{subtraction, AbsoluteDifference, Distance, Subtraction};
pub use tolerance::Tolerance;

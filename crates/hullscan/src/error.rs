//! Failure kinds of the hull computation.
//!
//! Every failure is an input-shape error detected during normalization, before
//! the scan touches any state.

use thiserror::Error;

/// Minimum number of unique points that can span a polygon.
pub const MIN_HULL_POINTS: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum HullError {
    /// The point set is empty.
    #[error("invalid input: the point set is empty")]
    InvalidInput,
    /// The unique points do not span a polygon.
    #[error("degenerate input: {0}")]
    DegenerateInput(Degeneracy),
}

/// Why a non-empty point set has no hull.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Degeneracy {
    #[error("{unique} unique point(s), at least 3 are required")]
    TooFewPoints { unique: usize },
    #[error("all points are collinear")]
    AllCollinear,
}

impl From<Degeneracy> for HullError {
    fn from(d: Degeneracy) -> Self {
        HullError::DegenerateInput(d)
    }
}

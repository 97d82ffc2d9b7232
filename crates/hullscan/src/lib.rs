//! Exact planar convex hulls over integer points.
//!
//! Purpose
//! - Compute the convex hull of an arbitrary integer point set with an angular
//!   sweep (Graham scan): pivot selection, angle/distance ordering, and a stack
//!   scan with pop-and-retry backtracking.
//! - Keep every predicate exact. Orientation and distance use widened integer
//!   arithmetic, so collinearity is never decided by a tolerance.
//!
//! Layout
//! - `point`: `Point`, `Turn`, `classify_turn`.
//! - `normalize`: pivot selection, angular ordering, collinearity checks.
//! - `hull`: `compute_hull` and the closed `Hull` polygon it returns.
//! - `cloud`: reproducible integer point clouds for benches, tests and the CLI.

pub mod cloud;
pub mod error;
pub mod hull;
pub mod normalize;
pub mod point;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{Degeneracy, HullError};
pub use hull::{compute_hull, compute_hull_xy, Containment, Hull, ScanState, ScanStats};
pub use point::{classify_turn, Point, Turn};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cloud::{draw_cloud, CloudCfg, CountDist, ReplayToken};
    pub use crate::hull::{compute_hull, compute_hull_xy, Containment, Hull};
    pub use crate::normalize::{all_collinear, select_pivot, sort_by_angle_then_distance};
    pub use crate::point::{classify_turn, Point, Turn};
    pub use crate::{Degeneracy, HullError};
}

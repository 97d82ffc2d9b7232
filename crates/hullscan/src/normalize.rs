//! Point normalization: pivot, angular order, and collinearity checks.
//!
//! Purpose
//! - Turn an arbitrary point collection into the pivot plus a duplicate-free
//!   remainder ordered by polar angle around the pivot, then by distance.
//! - Enforce the hull preconditions before any scan work begins.
//!
//! Ordering
//! - Angles follow `atan2(dy, dx)`, i.e. the range (−π, π]. The comparator
//!   never evaluates `atan2`: it splits deltas into half planes and compares
//!   within a half plane by the sign of the exact cross product. Collinear
//!   deltas therefore always compare angle-equal, and the order is total for
//!   any pivot, not only the lowest point.
//! - Distance ties use the squared distance in `i128`.
//!
//! Code cross-refs: `point::classify_turn`, `hull::compute_hull`

use std::cmp::Ordering;

use nalgebra::Vector2;

use crate::error::{Degeneracy, HullError, MIN_HULL_POINTS};
use crate::point::{classify_turn, Point, Turn};

/// Pivot plus the angle-sorted, duplicate-free remainder.
///
/// Invariants:
/// - `sorted` never contains `pivot` and holds no two equal points.
/// - `sorted` is ordered by `cmp_by_angle_then_distance(pivot, ..)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Normalized {
    pub pivot: Point,
    pub sorted: Vec<Point>,
}

/// Lowest point, leftmost among the lowest. Fails on an empty slice.
pub fn select_pivot(points: &[Point]) -> Result<Point, HullError> {
    points
        .iter()
        .copied()
        .min_by_key(|p| (p.y, p.x))
        .ok_or(HullError::InvalidInput)
}

/// `atan2` polar angle of `p` around `pivot`, in (−π, π].
#[inline]
pub fn polar_angle(p: Point, pivot: Point) -> f64 {
    let d = p.delta_from(pivot);
    (d.y as f64).atan2(d.x as f64)
}

/// 0: angles in (−π, 0); 1: [0, π) and the zero vector; 2: exactly π.
#[inline]
fn half_plane(d: &Vector2<i128>) -> u8 {
    if d.y < 0 {
        0
    } else if d.y > 0 || d.x >= 0 {
        1
    } else {
        2
    }
}

/// Total order of points by polar angle around `pivot`, then by distance.
///
/// Equal only for equal points: two distinct points at the same angle from a
/// fixed pivot lie on one ray and so have different distances.
pub fn cmp_by_angle_then_distance(pivot: Point, a: Point, b: Point) -> Ordering {
    let (da, db) = (a.delta_from(pivot), b.delta_from(pivot));
    half_plane(&da).cmp(&half_plane(&db)).then_with(|| {
        match Turn::from_cross(da.perp(&db)) {
            // b lies counter-clockwise of a, so a comes first
            Turn::CounterClockwise => Ordering::Less,
            Turn::Clockwise => Ordering::Greater,
            Turn::Collinear => da.dot(&da).cmp(&db.dot(&db)),
        }
    })
}

/// Drop every copy of `pivot` and every duplicate, then sort the remainder by
/// angle around `pivot` and distance from it.
pub fn sort_by_angle_then_distance(points: &[Point], pivot: Point) -> Vec<Point> {
    let mut rest: Vec<Point> = points.iter().copied().filter(|&p| p != pivot).collect();
    rest.sort_unstable_by(|&a, &b| cmp_by_angle_then_distance(pivot, a, b));
    // equal points are adjacent after sorting
    rest.dedup();
    rest
}

/// True iff all points lie on one line.
///
/// Fewer than two distinct points count as collinear. The line is anchored at
/// `points[0]` and the first point different from it.
pub fn all_collinear(points: &[Point]) -> bool {
    let Some((&origin, rest)) = points.split_first() else {
        return true;
    };
    let Some(&anchor) = rest.iter().find(|&&p| p != origin) else {
        return true;
    };
    collinear_with(origin, anchor, rest)
}

#[inline]
fn collinear_with(origin: Point, anchor: Point, rest: &[Point]) -> bool {
    rest.iter()
        .all(|&p| classify_turn(origin, anchor, p) == Turn::Collinear)
}

/// Pivot and sorted remainder, or the reason the points have no hull.
pub fn normalize(points: &[Point]) -> Result<Normalized, HullError> {
    let pivot = select_pivot(points)?;
    let sorted = sort_by_angle_then_distance(points, pivot);
    let unique = sorted.len() + 1;
    tracing::debug!(input = points.len(), unique, %pivot, "normalized point set");
    if unique < MIN_HULL_POINTS {
        return Err(Degeneracy::TooFewPoints { unique }.into());
    }
    // pivot ∪ sorted is duplicate-free, so sorted[0] anchors the line
    if collinear_with(pivot, sorted[0], &sorted[1..]) {
        return Err(Degeneracy::AllCollinear.into());
    }
    Ok(Normalized { pivot, sorted })
}

//! Convex hull construction and the closed polygon it returns.
//!
//! Purpose
//! - `compute_hull`: normalize, seed a stack, run a single scan with
//!   backtracking, close the loop at the pivot.
//! - `Hull`: counter-clockwise vertex sequence starting and ending at the pivot,
//!   with exact area and point-location queries.
//!
//! Boundary policy
//! - Collinear boundary points are kept on every edge. Points on the closing
//!   edge (the last ray out of the pivot) are scanned farthest-first so that
//!   the walk back to the pivot visits them in order instead of popping them.
//!
//! Code cross-refs: `normalize::normalize`, `scan::Scanner`

mod scan;

use std::ops::Deref;

use crate::error::HullError;
use crate::normalize::{normalize, Normalized};
use crate::point::{classify_turn, cross, Point, Turn};

pub use scan::{ScanState, ScanStats};

/// Closed convex polygon in counter-clockwise order.
///
/// Invariants:
/// - `vertices[0] == vertices[last] == pivot`.
/// - At least three distinct vertices; no clockwise turn anywhere.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hull {
    vertices: Vec<Point>,
    stats: ScanStats,
}

/// Location of a point relative to a hull.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Containment {
    Inside,
    Boundary,
    Outside,
}

impl Hull {
    /// Closed vertex sequence (pivot first and last).
    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Vertex sequence without the closing copy of the pivot.
    #[inline]
    pub fn open_vertices(&self) -> &[Point] {
        match self.vertices.split_last() {
            Some((_, rest)) => rest,
            None => &[],
        }
    }

    #[inline]
    pub fn pivot(&self) -> Point {
        self.vertices[0]
    }

    #[inline]
    pub fn stats(&self) -> ScanStats {
        self.stats
    }

    pub fn into_vec(self) -> Vec<Point> {
        self.vertices
    }

    /// Consecutive edges of the closed polygon.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.vertices.windows(2).map(|w| (w[0], w[1]))
    }

    /// Twice the enclosed area (shoelace over the pivot fan). Exact and positive.
    pub fn twice_area(&self) -> i128 {
        let pivot = self.pivot();
        self.edges().map(|(a, b)| cross(pivot, a, b)).sum()
    }

    pub fn perimeter(&self) -> f64 {
        self.edges().map(|(a, b)| a.distance(b)).sum()
    }

    /// Exact point location.
    ///
    /// A point outside a convex polygon lies strictly right of some edge, even
    /// when consecutive edges are collinear.
    pub fn locate(&self, p: Point) -> Containment {
        let mut on_edge_line = false;
        for (a, b) in self.edges() {
            match classify_turn(a, b, p) {
                Turn::Clockwise => return Containment::Outside,
                Turn::Collinear => on_edge_line = true,
                Turn::CounterClockwise => {}
            }
        }
        if on_edge_line {
            Containment::Boundary
        } else {
            Containment::Inside
        }
    }
}

impl Deref for Hull {
    type Target = [Point];

    fn deref(&self) -> &[Point] {
        &self.vertices
    }
}

impl From<Hull> for Vec<Point> {
    fn from(h: Hull) -> Self {
        h.vertices
    }
}

/// Convex hull of `points` as a closed counter-clockwise polygon.
///
/// Accepts any multiplicity and order. Fails with `InvalidInput` on an empty
/// slice and `DegenerateInput` when fewer than three unique points remain or
/// all of them are collinear.
pub fn compute_hull(points: &[Point]) -> Result<Hull, HullError> {
    let Normalized { pivot, mut sorted } = normalize(points)?;
    reverse_closing_ray(pivot, &mut sorted);
    let (vertices, stats) = scan::Scanner::seed(pivot, &sorted).run();
    tracing::debug!(
        input = points.len(),
        vertices = vertices.len().saturating_sub(1),
        pushes = stats.pushes,
        pops = stats.pops,
        "hull computed"
    );
    Ok(Hull { vertices, stats })
}

/// Tuple-in, tuple-out wrapper around `compute_hull`.
pub fn compute_hull_xy(points: &[(i32, i32)]) -> Result<Vec<(i32, i32)>, HullError> {
    let pts: Vec<Point> = points.iter().copied().map(Point::from).collect();
    let hull = compute_hull(&pts)?;
    Ok(hull.into_vec().into_iter().map(<(i32, i32)>::from).collect())
}

/// Reverse the trailing run of points sharing the last angle.
///
/// Pre: not all points collinear with `pivot`, so the run never reaches
/// `sorted[0]`.
fn reverse_closing_ray(pivot: Point, sorted: &mut [Point]) {
    let Some(&last) = sorted.last() else {
        return;
    };
    let run = sorted
        .iter()
        .rev()
        .take_while(|&&p| classify_turn(pivot, p, last) == Turn::Collinear)
        .count();
    let start = sorted.len() - run;
    sorted[start..].reverse();
}

#[cfg(test)]
mod tests;

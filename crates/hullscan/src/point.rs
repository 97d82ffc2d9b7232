//! Integer points and the three-point orientation test.
//!
//! - `Point`: `(x, y)` with `i32` coordinates, structural `Eq`/`Ord`/`Hash`.
//! - `Turn`: orientation of the path `a → b → c`.
//! - `classify_turn`: sign of the cross product, computed in `i128`.
//!
//! Deltas between two `i32` points need 33 bits and products of two deltas
//! need 66, so every predicate widens to `i128` and stays exact.
//!
//! Code cross-refs: `normalize::cmp_by_angle_then_distance`, `hull::scan`

use std::fmt;

use nalgebra::Vector2;

/// A point on the integer lattice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset `self − origin`, widened so it is exact for all inputs.
    #[inline]
    pub fn delta_from(self, origin: Point) -> Vector2<i128> {
        Vector2::new(
            i128::from(self.x) - i128::from(origin.x),
            i128::from(self.y) - i128::from(origin.y),
        )
    }

    #[inline]
    pub fn distance_squared(self, other: Point) -> i128 {
        let d = self.delta_from(other);
        d.dot(&d)
    }

    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        (self.distance_squared(other) as f64).sqrt()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Point {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<[i32; 2]> for Point {
    #[inline]
    fn from([x, y]: [i32; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (i32, i32) {
    #[inline]
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl From<Point> for [i32; 2] {
    #[inline]
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

/// Orientation of a three-point path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Turn {
    CounterClockwise,
    Clockwise,
    Collinear,
}

impl Turn {
    #[inline]
    pub fn from_cross(cross: i128) -> Self {
        match cross.cmp(&0) {
            std::cmp::Ordering::Greater => Turn::CounterClockwise,
            std::cmp::Ordering::Less => Turn::Clockwise,
            std::cmp::Ordering::Equal => Turn::Collinear,
        }
    }
}

/// Twice the signed area of the triangle `(a, b, c)`:
/// `(b.x − a.x)(c.y − a.y) − (b.y − a.y)(c.x − a.x)`.
/// Positive when `a → b → c` turns counter-clockwise.
#[inline]
pub fn cross(a: Point, b: Point, c: Point) -> i128 {
    b.delta_from(a).perp(&c.delta_from(a))
}

/// Classify the turn at `b` along `a → b → c`.
#[inline]
pub fn classify_turn(a: Point, b: Point, c: Point) -> Turn {
    Turn::from_cross(cross(a, b, c))
}

//! Value types and tolerances.
//!
//! - `EPS`: fixed noise floor for floating-point comparisons.
//! - `Point`: plane point with exact coordinate equality.
//! - `Segment`: unordered point pair, symmetric equality.
//! - `GeomError`: terminal failures, carrying the offending input.
//!
//! Equality on `Point` is deliberately exact: tolerance-based closeness is
//! applied by specific algorithm steps (snapping, near-duplicate dedup), not
//! baked into the value type. Several hull steps rely on distinguishing
//! "exactly equal after snapping" from "close enough to merge".

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use nalgebra::Vector2;

/// Noise floor for floating-point comparisons.
///
/// Used for near-pivot filtering, equal-angle runs, hull-loop closure, and
/// the calipers angle tie. The caller-facing hull precision is a separate,
/// explicit parameter.
pub const EPS: f64 = 1e-10;

/// A point in the plane.
///
/// Equality is exact coordinate equality; hashing matches it (negative zero
/// is normalized so `-0.0 == 0.0` hashes consistently). Coordinates are
/// expected finite — NaN voids the `Eq`/`Hash` contract, and nothing in this
/// crate produces one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`. Symmetric; zero iff identical.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        self.vector_to(other).norm()
    }

    /// Displacement vector `other - self`.
    #[inline]
    pub fn vector_to(self, other: Point) -> Vector2<f64> {
        Vector2::new(other.x - self.x, other.y - self.y)
    }

    /// Both coordinates snapped to exactly zero within `precision`.
    #[inline]
    pub fn snapped(self, precision: f64) -> Point {
        Point::new(
            super::snap_to_zero(self.x, precision),
            super::snap_to_zero(self.y, precision),
        )
    }

    /// Lexicographic (x, y) order; used to canonicalize segment endpoints.
    fn canonical_cmp(self, other: Point) -> Ordering {
        self.x
            .partial_cmp(&other.x)
            .unwrap_or(Ordering::Equal)
            .then_with(|| self.y.partial_cmp(&other.y).unwrap_or(Ordering::Equal))
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // `+ 0.0` maps -0.0 to 0.0 so the hash agrees with `==`.
        (self.x + 0.0).to_bits().hash(state);
        (self.y + 0.0).to_bits().hash(state);
    }
}

/// An unordered pair of points: `{A, B} == {B, A}`.
#[derive(Clone, Copy, Debug)]
pub struct Segment {
    pub begin: Point,
    pub end: Point,
}

impl Segment {
    #[inline]
    pub fn new(begin: Point, end: Point) -> Self {
        Self { begin, end }
    }

    /// Euclidean distance between the endpoints.
    #[inline]
    pub fn length(&self) -> f64 {
        self.begin.distance(self.end)
    }
}

impl PartialEq for Segment {
    fn eq(&self, other: &Self) -> bool {
        (self.begin == other.begin && self.end == other.end)
            || (self.begin == other.end && self.end == other.begin)
    }
}

impl Eq for Segment {}

impl Hash for Segment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Hash endpoints in canonical order so {A,B} and {B,A} collide.
        let (lo, hi) = match self.begin.canonical_cmp(self.end) {
            Ordering::Greater => (self.end, self.begin),
            _ => (self.begin, self.end),
        };
        lo.hash(state);
        hi.hash(state);
    }
}

/// Terminal failures of the hull and diameter operations.
///
/// All variants are unrecoverable for the call in progress: the computation
/// is deterministic, so a retry on the same input reproduces the failure.
/// The offending input rides along for diagnosis.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GeomError {
    /// Fewer than 2 points supplied.
    #[error("need at least 2 points, got {0}")]
    TooFewPoints(usize),
    /// The input collapses to a hull of fewer than 2 vertices.
    #[error("input degenerates to fewer than 2 hull vertices: {points:?}")]
    DegenerateHull { points: Vec<Point> },
    /// The calipers sweep reached a state a well-formed hull cannot produce
    /// (pointer collision or an unordered angle comparison).
    #[error("rotating calipers hit an inconsistent state on input: {points:?}")]
    CalipersFailure { points: Vec<Point> },
}

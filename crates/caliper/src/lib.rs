//! Planar convex hulls and point-set diameters.
//!
//! The crate computes, for a finite set of points in the plane, the convex
//! hull (Graham scan with explicit tolerances) and the diameter — the
//! farthest point pair, returned as the connecting segment — via a
//! rotating-calipers sweep over the hull. A brute-force O(n²) oracle is kept
//! alongside as a correctness cross-check.
//!
//! Everything is synchronous, allocation-local, and value-based: inputs are
//! read-only slices, outputs are freshly constructed values, and failures
//! surface as [`geom::GeomError`] carrying the offending input.

pub mod geom;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom::rand::{draw_point_cloud, CloudCfg, ReplayToken};
    pub use crate::geom::{
        convex_hull, diameter, diameter_naive, GeomError, Hull, Point, Segment, EPS,
    };
    pub use nalgebra::Vector2 as Vec2;
}

//! Planar geometry: primitives, Graham-scan hulls, rotating-calipers diameter.
//!
//! Purpose
//! - Provide three pure operations over point slices: [`convex_hull`],
//!   [`diameter_naive`] (O(n²) oracle), and [`diameter`] (calipers,
//!   O(n log n) for the hull plus O(h) for the sweep).
//! - Keep numerics explicit: exact equality on coordinates, tolerances
//!   applied only at named algorithm steps (snapping, dedup, angle ties).
//!
//! Code cross-refs: `Point`, `Segment`, `Hull`, `GeomError`, `geom::rand`

pub mod rand;

mod diameter;
mod hull;
mod types;
mod util;

pub use diameter::{diameter, diameter_naive};
pub use hull::{convex_hull, Hull};
pub use types::{GeomError, Point, Segment, EPS};
pub use util::{angle_between, angle_with_x, full_angle_with_x, snap_to_zero};

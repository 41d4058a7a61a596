//! Point-set diameter: O(n²) oracle and rotating-calipers sweep.
//!
//! The sweep walks two indices around the CCW hull — the scan point and its
//! antipodal opposite — advancing whichever pointer has the smaller rotation
//! left before its next edge aligns with the common supporting line. Every
//! visited pair is a diameter candidate; parallel edges advance both
//! pointers and contribute all four cross pairs.

use std::cmp::Ordering;
use std::f64::consts::{PI, TAU};

use super::hull::convex_hull;
use super::types::{GeomError, Point, Segment, EPS};
use super::util::full_angle_with_x;

/// Brute-force diameter: all unordered pairs, O(n²).
///
/// Enumeration is decreasing index against all smaller indices; ties keep
/// the first pair encountered in that order. Kept as a correctness oracle
/// for [`diameter`], not for production use on large inputs.
pub fn diameter_naive(points: &[Point]) -> Result<Segment, GeomError> {
    if points.len() < 2 {
        return Err(GeomError::TooFewPoints(points.len()));
    }
    if points.len() == 2 {
        return Ok(Segment::new(points[0], points[1]));
    }
    let mut best = Segment::new(points[0], points[1]);
    let mut best_len = best.length();
    for hi in (1..points.len()).rev() {
        for lo in 0..hi {
            let d = points[hi].distance(points[lo]);
            if d > best_len {
                best_len = d;
                best = Segment::new(points[lo], points[hi]);
            }
        }
    }
    Ok(best)
}

/// Diameter via rotating calipers over the convex hull.
///
/// Exactly 2 points short-circuit to their segment, no hull needed. Any hull
/// failure is re-raised as [`GeomError::DegenerateHull`] with the original
/// input. Cost: O(n log n) for the hull, O(h) for the sweep.
pub fn diameter(points: &[Point]) -> Result<Segment, GeomError> {
    if points.len() < 2 {
        return Err(GeomError::TooFewPoints(points.len()));
    }
    if points.len() == 2 {
        return Ok(Segment::new(points[0], points[1]));
    }
    let hull = convex_hull(points, EPS).map_err(|_| GeomError::DegenerateHull {
        points: points.to_vec(),
    })?;

    let n = hull.len();
    let mut point_index = 0usize;
    let mut opposite_index = hull.max_y_index();
    let mut calipers_angle = 0.0f64;

    let mut best = Segment::new(hull.cyclic(0), hull.cyclic(1));
    let mut best_len = best.length();
    let mut record = |a: Point, b: Point| {
        let candidate = Segment::new(a, b);
        if candidate.length() > best_len {
            best_len = candidate.length();
            best = candidate;
        }
    };

    // One full CCW traversal plus one step to return to the start config.
    while point_index < n + 1 {
        let point = hull.cyclic(point_index);
        let opposite = hull.cyclic(opposite_index);
        let next_point = hull.cyclic(point_index + 1);
        let next_opposite = hull.cyclic(opposite_index + 1);
        record(point, opposite);

        let point_edge = full_angle_with_x(point.vector_to(next_point));
        let opposite_edge = full_angle_with_x(opposite.vector_to(next_opposite));
        // Rotation left before each pointer's next edge meets the caliper
        // line; supporting lines are equivalent up to a half turn, hence
        // the reduction modulo π. The opposite caliper is offset by π.
        let point_turn = (TAU + point_edge - calipers_angle).rem_euclid(PI);
        let opposite_turn =
            (TAU + opposite_edge - (calipers_angle + PI).rem_euclid(TAU)).rem_euclid(PI);

        if point_index % n == opposite_index % n {
            return Err(GeomError::CalipersFailure {
                points: points.to_vec(),
            });
        }
        if (point_turn - opposite_turn).abs() < EPS {
            // Parallel edges: both pointers step, and any of the four pairs
            // across the two edges may realize the diameter.
            record(next_point, opposite);
            record(point, next_opposite);
            record(next_point, next_opposite);
            point_index += 1;
            opposite_index += 1;
            calipers_angle = point_edge;
        } else {
            match point_turn.partial_cmp(&opposite_turn) {
                Some(Ordering::Less) => {
                    point_index += 1;
                    calipers_angle = point_edge;
                }
                Some(Ordering::Greater) => {
                    opposite_index += 1;
                    calipers_angle = opposite_edge;
                }
                // Equal is absorbed by the tolerance branch; anything else
                // means a NaN angle from a malformed hull.
                _ => {
                    return Err(GeomError::CalipersFailure {
                        points: points.to_vec(),
                    })
                }
            }
        }
    }
    Ok(best)
}

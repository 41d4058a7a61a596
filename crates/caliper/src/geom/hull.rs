//! Graham-scan convex hull with explicit tolerances.
//!
//! Pipeline (all tolerances named, nothing implicit):
//! 1. pivot = lowest point (first occurrence), all coordinates snapped to
//!    zero within `precision`;
//! 2. points within `EPS` of the pivot dropped (their angle is undefined);
//! 3. composite sort: angle around the pivot primary, distance secondary,
//!    then per equal-angle run only the farthest point survives;
//! 4. stack scan requiring a strict CCW turn at every push;
//! 5. loop closure and near-duplicate cleanup;
//! 6. removal of interior vertices that sit flat between their neighbors.
//!
//! The result winds counter-clockwise, starting at the pivot, with no three
//! consecutive vertices collinear and no two consecutive vertices closer
//! than `precision`.

use std::cmp::Ordering;

use super::types::{GeomError, Point, EPS};
use super::util::{angle_with_x, is_ccw_turn};

/// An ordered CCW vertex sequence of a strictly convex polygon.
///
/// Produced fresh by [`convex_hull`]; owns its vertices independently of the
/// input slice. A 2-vertex hull is the degenerate (collinear input) case.
#[derive(Clone, Debug, PartialEq)]
pub struct Hull {
    verts: Vec<Point>,
}

impl Hull {
    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.verts
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.verts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.verts.is_empty()
    }

    /// Vertex at `index` modulo the hull size.
    #[inline]
    pub fn cyclic(&self, index: usize) -> Point {
        self.verts[index % self.verts.len()]
    }

    /// Index of the vertex with maximum y-coordinate (first occurrence).
    pub fn max_y_index(&self) -> usize {
        let mut best = 0;
        for (i, v) in self.verts.iter().enumerate().skip(1) {
            if v.y > self.verts[best].y {
                best = i;
            }
        }
        best
    }

    /// Whether `p` lies inside or on the hull boundary, within `eps`.
    ///
    /// For a CCW polygon every boundary edge must see `p` on its left; a
    /// 2-vertex hull degenerates to a point-on-segment test.
    pub fn contains_eps(&self, p: Point, eps: f64) -> bool {
        let n = self.verts.len();
        if n == 2 {
            let (a, b) = (self.verts[0], self.verts[1]);
            return super::util::cross(a, b, p).abs() <= eps * a.distance(b).max(1.0)
                && a.distance(p) + p.distance(b) <= a.distance(b) + eps;
        }
        (0..n).all(|i| super::util::cross(self.verts[i], self.cyclic(i + 1), p) >= -eps)
    }

    #[inline]
    pub fn into_vertices(self) -> Vec<Point> {
        self.verts
    }
}

/// Convex hull of `points` by Graham scan.
///
/// `precision` is the caller's coordinate tolerance: coordinates within it of
/// zero are snapped, and consecutive hull vertices closer than it are merged.
/// Fails with [`GeomError::TooFewPoints`] for fewer than 2 input points and
/// with [`GeomError::DegenerateHull`] when cleanup leaves fewer than 2
/// vertices (all points effectively coincident).
pub fn convex_hull(points: &[Point], precision: f64) -> Result<Hull, GeomError> {
    if points.len() < 2 {
        return Err(GeomError::TooFewPoints(points.len()));
    }
    let pivot = points
        .iter()
        .copied()
        .min_by(|a, b| a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal))
        .map(|p| p.snapped(precision))
        .ok_or_else(|| GeomError::TooFewPoints(0))?;

    // Snap everything, then drop points coincident with the pivot: they
    // cannot affect the shape and their angle around the pivot is undefined.
    let mut sorted: Vec<Point> = points
        .iter()
        .map(|p| p.snapped(precision))
        .filter(|p| pivot.distance(*p) > EPS)
        .collect();
    if sorted.is_empty() {
        return Err(GeomError::DegenerateHull {
            points: points.to_vec(),
        });
    }

    // Composite comparator: angle around the pivot primary, distance
    // secondary, so equal-angle points come out nearest-to-farthest.
    sorted.sort_by(|a, b| {
        let aa = angle_with_x(pivot.vector_to(*a));
        let ab = angle_with_x(pivot.vector_to(*b));
        aa.partial_cmp(&ab)
            .unwrap_or(Ordering::Equal)
            .then_with(|| {
                let da = pivot.distance(*a);
                let db = pivot.distance(*b);
                da.partial_cmp(&db).unwrap_or(Ordering::Equal)
            })
    });

    // Per maximal run of equal angles keep only the last (farthest) point.
    // The global first and last survive unconditionally.
    let mut candidates: Vec<Point> = Vec::with_capacity(sorted.len());
    candidates.push(sorted[0]);
    for i in 1..sorted.len().saturating_sub(1) {
        let here = angle_with_x(pivot.vector_to(sorted[i]));
        let next = angle_with_x(pivot.vector_to(sorted[i + 1]));
        if (here - next).abs() > EPS {
            candidates.push(sorted[i]);
        }
    }
    if sorted.len() > 1 {
        candidates.push(sorted[sorted.len() - 1]);
    }

    // Scan: the stack always describes a strictly convex CCW chain, so pop
    // while the top two plus the candidate fail to make a strict CCW turn.
    let mut stack: Vec<Point> = Vec::with_capacity(candidates.len() + 1);
    stack.push(pivot);
    stack.push(candidates[0]);
    for &candidate in &candidates[1..] {
        while stack.len() >= 2
            && !is_ccw_turn(stack[stack.len() - 2], stack[stack.len() - 1], candidate)
        {
            stack.pop();
        }
        stack.push(candidate);
    }

    // Close the loop: the last vertex may have landed back on the pivot.
    if stack.len() >= 2 && stack[0].distance(stack[stack.len() - 1]) < EPS {
        stack.pop();
    }
    // Merge consecutive vertices closer than the caller's precision.
    let mut verts: Vec<Point> = Vec::with_capacity(stack.len());
    for p in stack {
        match verts.last() {
            Some(prev) if prev.distance(p) <= precision => {}
            _ => verts.push(p),
        }
    }

    // Drop vertices that sit flat (or folded) between their cyclic
    // neighbors, re-checking after each removal. The wrap-around triples
    // matter too: the pivot itself can land on the closing edge.
    let mut changed = true;
    while changed && verts.len() > 2 {
        changed = false;
        let mut i = 0;
        while i < verts.len() && verts.len() > 2 {
            let n = verts.len();
            let prev = verts[(i + n - 1) % n];
            let next = verts[(i + 1) % n];
            if is_ccw_turn(prev, verts[i], next) {
                i += 1;
            } else {
                verts.remove(i);
                changed = true;
            }
        }
    }

    if verts.len() < 2 {
        return Err(GeomError::DegenerateHull {
            points: points.to_vec(),
        });
    }
    Ok(Hull { verts })
}

//! Ear-clipping algorithm for creating triangles from a simple polygon.

use crate::query::{line_line_intersection_points, IntersectionKind};
use crate::shape::{GridPoint, Line, Triangle, VertexLoop, Winding};
use crate::transformation::{EarClippingParams, TriangulationError};

/// Splits a convex polygon into a fan of triangles around its first vertex.
///
/// The triangles have the winding of the polygon. Nothing is checked: callers
/// must make sure the polygon is convex.
pub fn convex_fan(vertices: &[GridPoint]) -> Vec<Triangle> {
    if vertices.len() < 3 {
        return Vec::new();
    }

    (1..vertices.len() - 1)
        .map(|i| Triangle::new(vertices[0], vertices[i], vertices[i + 1]))
        .collect()
}

/// The index of the first vertex after `i` that was not clipped yet.
fn next_active(used: &[bool], i: usize) -> usize {
    let n = used.len();
    let mut j = (i + 1) % n;
    while used[j] && j != i {
        j = (j + 1) % n;
    }
    j
}

/// Is `p` strictly to the left of the directed line `a -> b`?
#[inline]
fn left(a: &GridPoint, b: &GridPoint, p: &GridPoint) -> bool {
    a.cross(b, p) > 0
}

#[inline]
fn left_on(a: &GridPoint, b: &GridPoint, p: &GridPoint) -> bool {
    a.cross(b, p) >= 0
}

/// Does the segment from `v` to `target` start inside the interior angle at `v`?
///
/// `prev` and `next` are the neighbors of `v` along a counter-clockwise loop.
fn in_cone(prev: &GridPoint, v: &GridPoint, next: &GridPoint, target: &GridPoint) -> bool {
    if left_on(prev, v, next) {
        // Convex corner.
        left(v, target, prev) && left(target, v, next)
    } else {
        // Reflex corner.
        !(left_on(v, target, next) && left_on(target, v, prev))
    }
}

/// Checks whether `(a, b, c)` is an ear of the remaining polygon, `d` being the
/// active vertex following `c`.
fn is_ear(vertices: &[GridPoint], used: &[bool], a: usize, b: usize, c: usize, d: usize) -> bool {
    let (pa, pb, pc, pd) = (vertices[a], vertices[b], vertices[c], vertices[d]);

    // Reflex or flat candidates.
    if Triangle::new(pa, pb, pc).orientation() != Winding::Ccw {
        return false;
    }

    // The diagonal must leave `c` into the polygon's interior, and enter `a` from it.
    let before_a = vertices[prev_active(used, a)];
    if !in_cone(&pb, &pc, &pd, &pa) || !in_cone(&before_a, &pa, &pb, &pc) {
        return false;
    }

    // The diagonal must not touch any remaining edge that isn't incident to it.
    let diagonal = Line::new(pc, pa);
    let mut i = c;
    loop {
        let j = next_active(used, i);
        if i != a && i != c && j != a && j != c {
            let edge = Line::new(vertices[i], vertices[j]);
            if !line_line_intersection_points(&diagonal, &edge, IntersectionKind::General)
                .is_empty()
            {
                return false;
            }
        }

        if j == c {
            break;
        }
        i = j;
    }

    true
}

fn prev_active(used: &[bool], i: usize) -> usize {
    let n = used.len();
    let mut j = (i + n - 1) % n;
    while used[j] && j != i {
        j = (j + n - 1) % n;
    }
    j
}

/// Ear clipping triangulation of a simple counter-clockwise polygon.
///
/// The orientation is checked with the signed area rather than by counting
/// turns: polygons produced by bridging holes have many reflex vertices.
///
/// A rolling window `(a, b, c)` of consecutive remaining vertices is tested.
/// If it forms an ear, the triangle is emitted and `b` is removed; otherwise
/// the window moves one vertex forward. After
/// `params.attempts_per_vertex * remaining` rejections in a row the
/// triangulation fails with [`TriangulationError::Stalled`].
///
/// An `n`-vertex polygon yields `n - 2` counter-clockwise triangles using only
/// the input vertices.
pub fn ear_clipping(
    vertices: &[GridPoint],
    params: &EarClippingParams,
) -> Result<Vec<Triangle>, TriangulationError> {
    let n = vertices.len();

    if n < 3 {
        return Err(TriangulationError::TooFewVertices(n));
    }
    if vertices.signed_area2() <= 0 {
        return Err(TriangulationError::NotCounterClockwise);
    }

    let mut used = vec![false; n];
    let mut remaining = n;
    let mut triangles = Vec::with_capacity(n - 2);
    let mut rejections = 0;
    let mut a = 0;

    while remaining > 3 {
        let b = next_active(&used, a);
        let c = next_active(&used, b);
        let d = next_active(&used, c);

        if is_ear(vertices, &used, a, b, c, d) {
            triangles.push(Triangle::new(vertices[a], vertices[b], vertices[c]));
            used[b] = true;
            remaining -= 1;
            rejections = 0;
        } else {
            rejections += 1;
            if rejections > params.attempts_per_vertex * remaining {
                log::debug!(
                    "Ear clipping stalled after {} rejected ears ({} vertices left).",
                    rejections,
                    remaining
                );
                return Err(TriangulationError::Stalled { remaining });
            }
            a = b;
        }
    }

    let b = next_active(&used, a);
    let c = next_active(&used, b);
    let last = Triangle::new(vertices[a], vertices[b], vertices[c]);

    if last.orientation() != Winding::Ccw {
        log::debug!("Ear clipping left a degenerate triangle: {:?}.", last);
        return Err(TriangulationError::DegenerateTriangle);
    }

    triangles.push(last);
    Ok(triangles)
}

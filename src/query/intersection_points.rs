//! Point-set intersection queries between collections of edges.

use alloc::collections::BTreeSet;
use smallvec::SmallVec;

use crate::math::Point;
use crate::query::{IntersectionKind, IntersectionQuery};
use crate::shape::{GridPoint, Line};
use crate::utils::PointKey;

/// Every point shared by two lines: the single crossing point, or the endpoints
/// of a collinear overlap.
///
/// With [`IntersectionKind::Compliant45`], lines that are not 45°-compliant
/// share nothing.
pub fn line_line_intersection_points(
    l1: &Line,
    l2: &Line,
    kind: IntersectionKind,
) -> SmallVec<[Point; 2]> {
    let mut result = SmallVec::new();

    if !l1.aabb().intersects(&l2.aabb()) {
        return result;
    }

    let crossing = match kind {
        IntersectionKind::General => l1.intersection(l2),
        IntersectionKind::Compliant45 => {
            if !l1.is_compliant() || !l2.is_compliant() {
                return result;
            }
            l1.intersection45(l2)
        }
    };

    if let Some(pt) = crossing {
        result.push(pt);
    } else {
        result.extend(l1.overlap_points(l2));
    }

    result
}

/// Collects points into a deduplicated set sorted in y-major order.
pub fn into_point_set(pts: impl IntoIterator<Item = Point>) -> Vec<Point> {
    pts.into_iter()
        .map(PointKey::from)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(|key| key.point())
        .collect()
}

/// All points where an edge of `edges1` meets an edge of `edges2`.
///
/// `vertices1` and `vertices2` are only consulted when the query ignores
/// shared vertices: a point that is a vertex of both inputs is then dropped.
pub fn edges_intersection_points(
    edges1: &[Line],
    vertices1: &[GridPoint],
    edges2: &[Line],
    vertices2: &[GridPoint],
    query: &IntersectionQuery,
) -> Vec<Point> {
    let shared: BTreeSet<PointKey> = if query.ignore_shared_vertices {
        let v1: BTreeSet<_> = vertices1.iter().map(|v| PointKey::new(&v.to_point())).collect();
        vertices2
            .iter()
            .map(|v| PointKey::new(&v.to_point()))
            .filter(|k| v1.contains(k))
            .collect()
    } else {
        BTreeSet::new()
    };

    let pts = edges1.iter().flat_map(|e1| {
        edges2
            .iter()
            .flat_map(move |e2| line_line_intersection_points(e1, e2, query.kind))
    });

    into_point_set(pts.filter(|pt| !shared.contains(&PointKey::new(pt))))
}

/// All points where two non-adjacent edges of a single closed loop meet.
///
/// `edges[i]` is assumed to end where `edges[i + 1]` starts, cyclically.
pub fn loop_self_intersection_points(edges: &[Line], kind: IntersectionKind) -> Vec<Point> {
    let n = edges.len();
    let mut pts = Vec::new();

    for i in 0..n {
        for j in i + 2..n {
            if i == 0 && j == n - 1 {
                continue;
            }
            pts.extend(line_line_intersection_points(&edges[i], &edges[j], kind));
        }
    }

    into_point_set(pts)
}

//! Triangulation of shapes with holes by bridging every hole into its outline.

use crate::query::{line_line_intersection_points, IntersectionKind};
use crate::shape::{GridPoint, Line, Shape45, Triangle, VertexLoop, Winding};
use crate::transformation::{ear_clipping, EarClippingParams, TriangulationError};

/// A pair of triangles connecting the edge `vo1 -> vo2` of an outline to the
/// edge `vs1 -> vs2` of a hole.
struct Bridge {
    /// Index of `vo1` in the outline.
    outline_edge: usize,
    /// Index of `vs1` in the hole.
    hole_edge: usize,
    triangles: [Triangle; 2],
}

/// Triangulates a shape and all its nested sub-shapes.
///
/// A shape without sub-shapes is triangulated like its outline (see
/// [`Polygon::triangulate_with_params`](crate::shape::Polygon::triangulate_with_params)).
/// Otherwise each hole is connected to the outline by two bridge triangles and
/// spliced into it, which leaves a single simple polygon that is ear-clipped.
/// The islands inside the holes are then triangulated recursively.
///
/// Merging a hole of `h` vertices into an outline adds `h` vertices to the
/// ear-clipped polygon and emits 2 bridge triangles. A shape with `n` vertices
/// and `k` holes (islands excluded) thus yields `n + 2k - 2` triangles.
///
/// Fails with [`TriangulationError::NoBridge`] if some hole cannot be
/// connected to the outline without crossing an edge.
pub fn triangulate_shape(
    shape: &Shape45,
    params: &EarClippingParams,
) -> Result<Vec<Triangle>, TriangulationError> {
    if shape.sub_shapes().is_empty() {
        return shape.outline().triangulate_with_params(params);
    }

    let mut obstacles = shape.outline().edges();
    let mut blockers = shape.outline().vertices().to_vec();
    for hole in shape.sub_shapes() {
        obstacles.extend(hole.outline().edges());
        blockers.extend_from_slice(hole.outline().vertices());
    }

    let mut merged = shape.outline().vertices().to_vec();
    let mut triangles = Vec::with_capacity(shape.total_vertex_count());

    for (k, hole) in shape.sub_shapes().iter().enumerate() {
        let hole = hole.outline().vertices();
        let bridge = find_bridge(&merged, hole, &obstacles, &blockers).ok_or_else(|| {
            log::debug!("No bridge found for sub-shape {}.", k);
            TriangulationError::NoBridge { sub_shape: k }
        })?;

        let [t1, t2] = bridge.triangles;
        obstacles.extend([
            Line::new(t1.b(), t1.c()),
            Line::new(t2.a(), t2.b()),
            Line::new(t2.c(), t2.a()),
        ]);
        triangles.extend([t1, t2]);
        merged = splice(&merged, bridge.outline_edge, hole, bridge.hole_edge);
    }

    triangles.extend(ear_clipping(&merged, params)?);

    for hole in shape.sub_shapes() {
        for island in hole.sub_shapes() {
            triangles.extend(triangulate_shape(island, params)?);
        }
    }

    Ok(triangles)
}

/// The outline from `vo2` around to `vo1`, followed by the hole from `vs2`
/// around to `vs1`.
///
/// The edges `vo1 -> vo2` and `vs1 -> vs2` are replaced by `vo1 -> vs2` and
/// `vs1 -> vo2`.
fn splice(outline: &[GridPoint], vo1: usize, hole: &[GridPoint], vs1: usize) -> Vec<GridPoint> {
    let (no, nh) = (outline.len(), hole.len());
    let mut result = Vec::with_capacity(no + nh);
    result.extend((1..=no).map(|k| outline[(vo1 + k) % no]));
    result.extend((1..=nh).map(|k| hole[(vs1 + k) % nh]));
    result
}

fn find_bridge(
    outline: &[GridPoint],
    hole: &[GridPoint],
    obstacles: &[Line],
    blockers: &[GridPoint],
) -> Option<Bridge> {
    let (no, nh) = (outline.len(), hole.len());

    for i in 0..no {
        let (vo1, vo2) = (outline[i], outline[(i + 1) % no]);

        for j in 0..nh {
            let (vs1, vs2) = (hole[j], hole[(j + 1) % nh]);
            let t1 = Triangle::new(vo1, vo2, vs1);
            let t2 = Triangle::new(vo1, vs1, vs2);

            if t1.orientation() != Winding::Ccw || t2.orientation() != Winding::Ccw {
                continue;
            }

            let segments = [
                Line::new(vo2, vs1),
                Line::new(vs1, vo1),
                Line::new(vs2, vo1),
            ];
            if segments.iter().any(|s| crosses_any(s, obstacles)) {
                continue;
            }

            let corners = [vo1, vo2, vs1, vs2];
            let blocked = blockers.iter().any(|p| {
                !corners.contains(p) && {
                    let p = p.to_point();
                    t1.contains_point(&p, true) || t2.contains_point(&p, true)
                }
            });
            if blocked {
                continue;
            }

            return Some(Bridge {
                outline_edge: i,
                hole_edge: j,
                triangles: [t1, t2],
            });
        }
    }

    None
}

/// Does `segment` touch any of `edges` anywhere but at an endpoint they share?
fn crosses_any(segment: &Line, edges: &[Line]) -> bool {
    let ends = [segment.start.to_point(), segment.end.to_point()];

    edges.iter().any(|edge| {
        let edge_ends = [edge.start.to_point(), edge.end.to_point()];
        line_line_intersection_points(segment, edge, IntersectionKind::General)
            .iter()
            .any(|p| !(ends.contains(p) && edge_ends.contains(p)))
    })
}

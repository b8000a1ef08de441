//! Union, intersection and subtraction of polygons over an intersection graph.

use core::f64::consts::TAU;

use crate::math::{Point, Real};
use crate::shape::{GeometryError, Polygon, VertexLoop};
use crate::transformation::intersection_graph::{IntersectionGraph, NodeId};
use crate::utils::hashmap::HashMap;
use crate::utils::{self, PointKey};

const SHAPE_A: usize = 0;
const SHAPE_B: usize = 1;

/// A boolean operation between two polygons.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BooleanOp {
    /// Points inside either operand.
    Union,
    /// Points inside both operands.
    Intersection,
    /// Points inside the first operand but not inside the second.
    Subtraction,
}

/// Errors of [`boolean`].
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum BooleanError {
    /// An operand has no area (fewer than 3 vertices, or all collinear).
    #[error("an operand of the boolean operation has no area.")]
    DegenerateOperand,
    /// The kept edges could not be stitched into closed loops.
    ///
    /// This typically indicates that an operand self-intersects.
    #[error("the boolean result has an open contour; the input polygons are ill-formed.")]
    OpenContour,
    /// An operand could not be retrieved.
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// How a connection of the graph relates to the operand that didn't produce it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum EdgeClass {
    Inside,
    Outside,
    /// Both operands have this edge, with the same direction.
    SharedSame,
    /// Both operands have this edge, with opposite directions.
    SharedOpposite,
}

/// Computes a boolean operation between two simple polygons.
///
/// Both outlines are made counter-clockwise and inserted into one
/// [`IntersectionGraph`]. Each connection is then classified by the location
/// of its midpoint relative to the other polygon, and the connections bounding
/// the result are stitched into closed loops. At a vertex with several
/// candidate continuations the one turning most to the left is taken, so
/// loops touching at a single vertex come out separately. Vertices in the
/// middle of a straight run are dropped.
///
/// Counter-clockwise loops of the result are outlines; clockwise loops are
/// holes. Each loop starts at its lowest vertex (smallest `y`, then smallest
/// `x`).
pub fn boolean(a: &Polygon, b: &Polygon, op: BooleanOp) -> Result<Vec<Vec<Point>>, BooleanError> {
    let a = counter_clockwise(a)?;
    let b = counter_clockwise(b)?;

    let mut graph = IntersectionGraph::new();
    for edge in a.edges() {
        graph.insert_line(&edge, SHAPE_A);
    }
    for edge in b.edges() {
        graph.insert_line(&edge, SHAPE_B);
    }

    let float_a = a.float_vertices();
    let float_b = b.float_vertices();
    let mut kept = Vec::new();

    for connection in graph.connections() {
        let from_a = connection.shape_ids.contains(&SHAPE_A);
        let from_b = connection.shape_ids.contains(&SHAPE_B);
        let reversed_in = |id| {
            graph
                .connection(connection.dest, connection.origin)
                .is_some_and(|c| c.shape_ids.contains(&id))
        };
        let mid = connection.segment.midpoint();

        let class = if from_a && from_b {
            EdgeClass::SharedSame
        } else if (from_a && reversed_in(SHAPE_B)) || (from_b && reversed_in(SHAPE_A)) {
            EdgeClass::SharedOpposite
        } else {
            let other = if from_a { &float_b } else { &float_a };
            if utils::point_in_poly2d(&mid, other) {
                EdgeClass::Inside
            } else {
                EdgeClass::Outside
            }
        };

        let edge = (connection.origin, connection.dest);
        let keep = match (op, class) {
            (BooleanOp::Union, EdgeClass::Outside) => Some(edge),
            (BooleanOp::Intersection, EdgeClass::Inside) => Some(edge),
            (BooleanOp::Union | BooleanOp::Intersection, EdgeClass::SharedSame) => Some(edge),
            (BooleanOp::Subtraction, EdgeClass::Outside) if from_a => Some(edge),
            (BooleanOp::Subtraction, EdgeClass::Inside) if from_b => Some((edge.1, edge.0)),
            (BooleanOp::Subtraction, EdgeClass::SharedOpposite) if from_a => Some(edge),
            _ => None,
        };
        kept.extend(keep);
    }

    let point = |id: NodeId| graph.node(id).map(|n| n.point).ok_or(BooleanError::OpenContour);
    kept.sort_by_key(|(o, d)| {
        let key = |id: NodeId| graph.node(id).map(|n| PointKey::new(&n.point));
        (key(*o), key(*d))
    });

    let loops = stitch(&kept, &point)?;
    Ok(loops
        .into_iter()
        .map(|l| canonical_loop(drop_collinear(l)))
        .filter(|l| l.len() >= 3)
        .collect())
}

fn counter_clockwise(poly: &Polygon) -> Result<Polygon, BooleanError> {
    match poly.signed_area2() {
        x if x > 0 => Ok(poly.clone()),
        x if x < 0 => Ok(poly.reversed()),
        _ => Err(BooleanError::DegenerateOperand),
    }
}

/// Follows the directed `edges` into closed loops of points.
fn stitch(
    edges: &[(NodeId, NodeId)],
    point: &impl Fn(NodeId) -> Result<Point, BooleanError>,
) -> Result<Vec<Vec<Point>>, BooleanError> {
    let mut outgoing: HashMap<NodeId, Vec<usize>> = HashMap::new();
    for (i, (origin, _)) in edges.iter().enumerate() {
        outgoing.entry(*origin).or_default().push(i);
    }

    let mut used = vec![false; edges.len()];
    let mut loops = Vec::new();

    for first in 0..edges.len() {
        if used[first] {
            continue;
        }

        used[first] = true;
        let (start, mut current) = edges[first];
        let mut previous = start;
        let mut contour = vec![point(start)?];

        while current != start {
            let here = point(current)?;
            let back = point(previous)? - here;
            contour.push(here);

            let candidates = outgoing.get(&current).map(Vec::as_slice).unwrap_or(&[]);
            let mut best: Option<(usize, Real)> = None;
            for &e in candidates.iter().filter(|e| !used[**e]) {
                let out = point(edges[e].1)? - here;
                let angle = cw_angle_between(back.x, back.y, out.x, out.y);
                if best.map_or(true, |(_, a)| angle < a) {
                    best = Some((e, angle));
                }
            }

            let Some((next, _)) = best else {
                log::debug!("Boolean stitching reached a dead end at {:?}.", here);
                return Err(BooleanError::OpenContour);
            };

            used[next] = true;
            previous = current;
            current = edges[next].1;
        }

        loops.push(contour);
    }

    Ok(loops)
}

/// The clockwise angle, in `(0, 2π]`, sweeping from direction `(ux, uy)` to `(vx, vy)`.
fn cw_angle_between(ux: Real, uy: Real, vx: Real, vy: Real) -> Real {
    match (utils::direction_angle(ux, uy), utils::direction_angle(vx, vy)) {
        (Ok(u), Ok(v)) => {
            let angle = (v - u).rem_euclid(TAU);
            if angle == 0.0 {
                TAU
            } else {
                angle
            }
        }
        _ => TAU,
    }
}

/// Removes the vertices where the loop goes straight on.
fn drop_collinear(mut contour: Vec<Point>) -> Vec<Point> {
    let mut i = 0;
    while contour.len() >= 3 && i < contour.len() {
        let n = contour.len();
        let prev = contour[(i + n - 1) % n];
        let next = contour[(i + 1) % n];
        let here = contour[i];
        if (here - prev).perp(&(next - here)) == 0.0 && (here - prev).dot(&(next - here)) > 0.0 {
            let _ = contour.remove(i);
            i = i.saturating_sub(1);
        } else {
            i += 1;
        }
    }
    contour
}

/// Rotates the loop so that it starts at its lowest vertex.
fn canonical_loop(mut contour: Vec<Point>) -> Vec<Point> {
    if let Some(first) = (0..contour.len()).min_by_key(|i| PointKey::new(&contour[*i])) {
        contour.rotate_left(first);
    }
    contour
}

//! Behavior shared by every closed sequence of grid vertices.

use crate::bounding_volume::GridAabb;
use crate::math::{Int, Point, Real};
use crate::shape::{GridPoint, Line};
use crate::utils::{self, TurnDirection};

/// The winding direction of a closed vertex sequence.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum Winding {
    /// Clockwise: more right turns than left turns.
    Cw,
    /// Counter-clockwise: more left turns than right turns.
    Ccw,
    /// As many left turns as right turns (for example, all vertices collinear).
    Indeterminate,
}

impl Winding {
    /// The opposite winding. `Indeterminate` is its own opposite.
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Winding::Cw => Winding::Ccw,
            Winding::Ccw => Winding::Cw,
            Winding::Indeterminate => Winding::Indeterminate,
        }
    }
}

/// The result of classifying the turn at every vertex of a closed loop.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TurnAnalysis {
    /// Number of counter-clockwise turns.
    pub lefts: usize,
    /// Number of clockwise turns.
    pub rights: usize,
    /// Number of vertices where the loop goes straight on.
    pub straights: usize,
}

impl TurnAnalysis {
    /// Classifies the turn at every vertex of the closed loop `vertices`.
    ///
    /// Loops with fewer than three vertices have no turns.
    pub fn new(vertices: &[GridPoint]) -> Self {
        let mut analysis = TurnAnalysis {
            lefts: 0,
            rights: 0,
            straights: 0,
        };
        let n = vertices.len();

        if n < 3 {
            return analysis;
        }

        for i in 0..n {
            let prev = &vertices[(i + n - 1) % n];
            let next = &vertices[(i + 1) % n];
            match utils::turn_direction(prev, &vertices[i], next) {
                TurnDirection::Left => analysis.lefts += 1,
                TurnDirection::Right => analysis.rights += 1,
                TurnDirection::Straight => analysis.straights += 1,
            }
        }

        analysis
    }

    /// The winding direction implied by the turn counts.
    pub fn winding(&self) -> Winding {
        match self.lefts.cmp(&self.rights) {
            core::cmp::Ordering::Greater => Winding::Ccw,
            core::cmp::Ordering::Less => Winding::Cw,
            core::cmp::Ordering::Equal => Winding::Indeterminate,
        }
    }

    /// Convex loops turn only one way and never go straight.
    ///
    /// A straight (zero-degree) vertex disqualifies the loop: a fan triangulation
    /// through it would produce a degenerate triangle.
    pub fn is_convex(&self) -> bool {
        self.straights == 0
            && (self.lefts == 0 || self.rights == 0)
            && self.lefts + self.rights >= 3
    }
}

/// A closed, cyclically indexed sequence of grid vertices.
///
/// Implemented by [`Polygon`](crate::shape::Polygon) and
/// [`Triangle`](crate::shape::Triangle). The last vertex connects back to the
/// first; there is no closing duplicate.
pub trait VertexLoop {
    /// The vertices of this loop, in order.
    fn vertices(&self) -> &[GridPoint];

    /// The number of vertices.
    fn num_vertices(&self) -> usize {
        self.vertices().len()
    }

    /// The vertex at `i` taken modulo the number of vertices (negative values wrap too).
    ///
    /// Returns `None` if the loop is empty.
    fn vertex_wrapped(&self, i: isize) -> Option<GridPoint> {
        let vertices = self.vertices();
        let n = vertices.len() as isize;
        (n > 0).then(|| vertices[i.rem_euclid(n) as usize])
    }

    /// The edge starting at vertex `i` (modulo the number of vertices).
    fn edge(&self, i: usize) -> Option<Line> {
        let vertices = self.vertices();
        let n = vertices.len();
        (n >= 2).then(|| Line::new(vertices[i % n], vertices[(i + 1) % n]))
    }

    /// The edges of this loop; edge `i` goes from vertex `i` to vertex `i + 1`.
    fn edges(&self) -> Vec<Line> {
        let n = self.vertices().len();
        if n < 2 {
            return Vec::new();
        }
        (0..n).filter_map(|i| self.edge(i)).collect()
    }

    /// The turn classification of every vertex.
    fn turn_analysis(&self) -> TurnAnalysis {
        TurnAnalysis::new(self.vertices())
    }

    /// The winding direction, from counting left and right turns.
    fn winding(&self) -> Winding {
        self.turn_analysis().winding()
    }

    /// Does this loop turn only one way, without straight vertices?
    fn is_convex(&self) -> bool {
        self.turn_analysis().is_convex()
    }

    /// Are all edges horizontal, vertical, or at ±45°?
    fn is_45_compliant(&self) -> bool {
        self.edges().iter().all(Line::is_compliant)
    }

    /// Twice the signed area (shoelace formula); positive for counter-clockwise loops.
    ///
    /// Exact: every term is an integer.
    fn signed_area2(&self) -> Int {
        let vertices = self.vertices();
        let n = vertices.len();
        (0..n)
            .map(|i| {
                let a = vertices[i];
                let b = vertices[(i + 1) % n];
                a.x * b.y - b.x * a.y
            })
            .sum()
    }

    /// The unsigned area enclosed by this loop.
    fn area(&self) -> Real {
        self.signed_area2().abs() as Real / 2.0
    }

    /// The bounding box of the vertices, `None` for an empty loop.
    fn aabb(&self) -> Option<GridAabb> {
        GridAabb::from_points(self.vertices().iter().copied())
    }

    /// The center of the bounding box, `None` for an empty loop.
    fn center(&self) -> Option<Point> {
        self.aabb().map(|aabb| aabb.center())
    }

    /// The vertices converted to float points.
    fn float_vertices(&self) -> Vec<Point> {
        self.vertices().iter().map(|v| v.to_point()).collect()
    }

    /// Is `pt` enclosed by this loop?
    ///
    /// Points on an edge count as inside only if `include_boundary` is set.
    fn contains_point(&self, pt: &Point, include_boundary: bool) -> bool {
        match self.aabb() {
            Some(aabb) if aabb.contains_local_point(pt) => {}
            _ => return false,
        }

        let poly = self.float_vertices();
        if utils::point_on_poly2d_boundary(pt, &poly) {
            return include_boundary;
        }
        utils::point_in_poly2d(pt, &poly)
    }
}

impl VertexLoop for [GridPoint] {
    #[inline]
    fn vertices(&self) -> &[GridPoint] {
        self
    }
}

//! Definition of the triangle shape.

use crate::math::{Point, Real};
use crate::shape::{GridPoint, Polygon, VertexLoop, Winding};

/// A triangle with integer vertices.
///
/// The vertex order is significant: it defines the winding used by
/// [`Triangle::contains_point`].
#[derive(PartialEq, Eq, Debug, Copy, Clone, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Triangle {
    vertices: [GridPoint; 3],
}

impl Triangle {
    /// Creates a triangle from its three vertices.
    #[inline]
    pub fn new(a: GridPoint, b: GridPoint, c: GridPoint) -> Triangle {
        Triangle {
            vertices: [a, b, c],
        }
    }

    /// The first vertex.
    #[inline]
    pub fn a(&self) -> GridPoint {
        self.vertices[0]
    }

    /// The second vertex.
    #[inline]
    pub fn b(&self) -> GridPoint {
        self.vertices[1]
    }

    /// The third vertex.
    #[inline]
    pub fn c(&self) -> GridPoint {
        self.vertices[2]
    }

    /// The centroid of this triangle.
    #[inline]
    pub fn centroid(&self) -> Point {
        let [a, b, c] = self.vertices;
        Point::new(
            (a.x + b.x + c.x) as Real / 3.0,
            (a.y + b.y + c.y) as Real / 3.0,
        )
    }

    /// Are the three vertices collinear?
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        let [a, b, c] = self.vertices;
        a.cross(&b, &c) == 0
    }

    /// The winding of this triangle, from the sign of its area.
    ///
    /// Agrees with the turn-counting winding of [`VertexLoop::winding`].
    #[inline]
    pub fn orientation(&self) -> Winding {
        match self.signed_area2() {
            x if x > 0 => Winding::Ccw,
            x if x < 0 => Winding::Cw,
            _ => Winding::Indeterminate,
        }
    }

    /// Does this triangle contain `pt`?
    ///
    /// The point must be on the inner side of all three edges, the inner side
    /// being the left for counter-clockwise triangles and the right for
    /// clockwise ones. If `inclusive` is set, points on an edge are contained
    /// too. Degenerate triangles only contain points of their edges, and only
    /// when `inclusive` is set.
    pub fn contains_point(&self, pt: &Point, inclusive: bool) -> bool {
        let sign = match self.orientation() {
            Winding::Ccw => 1.0,
            Winding::Cw => -1.0,
            Winding::Indeterminate => {
                return inclusive && self.edges().iter().any(|e| e.contains_point(pt));
            }
        };

        (0..3).all(|i| {
            let a = self.vertices[i].to_point();
            let b = self.vertices[(i + 1) % 3].to_point();
            let side = (b - a).perp(&(pt - a)) * sign;
            if inclusive {
                side >= 0.0
            } else {
                side > 0.0
            }
        })
    }

    /// The polygon with the same vertices.
    pub fn to_polygon(&self) -> Polygon {
        Polygon::new(self.vertices.to_vec())
    }
}

impl VertexLoop for Triangle {
    #[inline]
    fn vertices(&self) -> &[GridPoint] {
        &self.vertices
    }
}

impl From<[GridPoint; 3]> for Triangle {
    fn from(vertices: [GridPoint; 3]) -> Self {
        Triangle { vertices }
    }
}

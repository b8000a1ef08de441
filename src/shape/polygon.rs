//! Definition of the immutable integer polygon.

use crate::math::{Int, Point};
use crate::query::{self, IntersectionKind, IntersectionQuery};
use crate::shape::{GeometryError, GridPoint, Line, Triangle, TurnAnalysis, VertexLoop};
use crate::transformation::{self, EarClippingParams, TriangulationError};
use crate::utils::hashmap::HashSet;

/// An ordered, cyclically indexed sequence of integer vertices.
///
/// A polygon never changes once built: every transformation returns a new
/// polygon. The winding and convexity are computed once, at construction.
///
/// Nothing is enforced at construction. Duplicate vertices, self-intersections
/// and non-compliant edges are all representable and can be queried with
/// [`Polygon::duplicate_vertex_count`], [`Polygon::self_intersection_points`],
/// [`VertexLoop::is_45_compliant`] and [`Polygon::is_valid`].
#[derive(Clone, Debug)]
pub struct Polygon {
    vertices: Vec<GridPoint>,
    analysis: TurnAnalysis,
}

impl Polygon {
    /// Creates a polygon from its vertices, in order.
    pub fn new(vertices: Vec<GridPoint>) -> Self {
        let analysis = TurnAnalysis::new(&vertices);
        Self { vertices, analysis }
    }

    /// Creates a polygon from `(x, y)` integer pairs.
    ///
    /// ```
    /// # use shape45::shape::{Polygon, VertexLoop, Winding};
    /// let square = Polygon::from_coords([(0, 0), (2, 0), (2, 2), (0, 2)]);
    /// assert_eq!(square.winding(), Winding::Ccw);
    /// assert!(square.is_convex());
    /// ```
    pub fn from_coords(coords: impl IntoIterator<Item = (Int, Int)>) -> Self {
        Self::new(coords.into_iter().map(GridPoint::from).collect())
    }

    /// The vertex at index `i`.
    pub fn vertex(&self, i: usize) -> Result<GridPoint, GeometryError> {
        self.vertices
            .get(i)
            .copied()
            .ok_or(GeometryError::VertexIndexOutOfBounds {
                index: i,
                len: self.vertices.len(),
            })
    }


    /// The number of vertices equal to an earlier vertex of this polygon.
    pub fn duplicate_vertex_count(&self) -> usize {
        let distinct: HashSet<_> = self.vertices.iter().collect();
        self.vertices.len() - distinct.len()
    }

    /// Every point where two non-adjacent edges cross or touch.
    pub fn self_intersection_points(&self, kind: IntersectionKind) -> Vec<Point> {
        query::loop_self_intersection_points(&self.edges(), kind)
    }

    /// The number of distinct self-intersection points.
    pub fn self_intersection_count(&self, kind: IntersectionKind) -> usize {
        self.self_intersection_points(kind).len()
    }

    /// Every point where an edge of `self` meets an edge of `other`.
    pub fn intersection_points_with(
        &self,
        other: &Polygon,
        query: &IntersectionQuery,
    ) -> Vec<Point> {
        query::edges_intersection_points(
            &self.edges(),
            &self.vertices,
            &other.edges(),
            &other.vertices,
            query,
        )
    }

    /// Every point where an edge of `self` meets `line`.
    pub fn intersection_points_with_line(
        &self,
        line: &Line,
        query: &IntersectionQuery,
    ) -> Vec<Point> {
        query::edges_intersection_points(
            &self.edges(),
            &self.vertices,
            &[*line],
            &[line.start, line.end],
            query,
        )
    }

    /// Is this a simple polygon with a well-defined winding?
    ///
    /// Requires at least three vertices, no duplicate vertex, no
    /// self-intersection, and a winding that is not indeterminate. 45°
    /// compliance is not required here, see [`VertexLoop::is_45_compliant`].
    pub fn is_valid(&self) -> bool {
        self.vertices.len() >= 3
            && self.winding() != crate::shape::Winding::Indeterminate
            && self.duplicate_vertex_count() == 0
            && self
                .self_intersection_points(IntersectionKind::General)
                .is_empty()
    }

    /// Triangulates this polygon with the default ear-clipping parameters.
    ///
    /// See [`Polygon::triangulate_with_params`].
    pub fn triangulate(&self) -> Result<Vec<Triangle>, TriangulationError> {
        self.triangulate_with_params(&EarClippingParams::default())
    }

    /// Triangulates this counter-clockwise polygon.
    ///
    /// Convex polygons are split into a fan around their first vertex; any
    /// other polygon is ear-clipped. An `n`-vertex polygon yields `n - 2`
    /// counter-clockwise triangles.
    pub fn triangulate_with_params(
        &self,
        params: &EarClippingParams,
    ) -> Result<Vec<Triangle>, TriangulationError> {
        if self.vertices.len() < 3 {
            return Err(TriangulationError::TooFewVertices(self.vertices.len()));
        }
        if self.winding() != crate::shape::Winding::Ccw {
            return Err(TriangulationError::NotCounterClockwise);
        }

        if self.is_convex() {
            Ok(transformation::convex_fan(&self.vertices))
        } else {
            transformation::ear_clipping(&self.vertices, params)
        }
    }

    /*
     * Copy-producing transformations.
     */
    fn map_vertices(&self, f: impl Fn(GridPoint) -> GridPoint) -> Self {
        Self::new(self.vertices.iter().map(|v| f(*v)).collect())
    }

    /// This polygon translated by `(dx, dy)`.
    pub fn shifted(&self, dx: Int, dy: Int) -> Self {
        self.map_vertices(|v| v.shifted(dx, dy))
    }

    /// This polygon mirrored across the `y` axis. The winding flips.
    pub fn reflected_x(&self) -> Self {
        self.map_vertices(GridPoint::reflected_x)
    }

    /// This polygon mirrored across the `x` axis. The winding flips.
    pub fn reflected_y(&self) -> Self {
        self.map_vertices(GridPoint::reflected_y)
    }

    /// This polygon rotated by 90° clockwise about the origin. The winding is kept.
    pub fn rotated90(&self) -> Self {
        self.map_vertices(GridPoint::rotated90)
    }

    /// This polygon with its vertex order reversed, flipping the winding.
    pub fn reversed(&self) -> Self {
        Self::new(self.vertices.iter().rev().copied().collect())
    }

    /// This polygon with the same cycle of vertices starting at `vertex_wrapped(k)`.
    pub fn rotated_vertex_order(&self, k: isize) -> Self {
        let mut vertices = self.vertices.clone();
        if !vertices.is_empty() {
            let k = k.rem_euclid(vertices.len() as isize) as usize;
            vertices.rotate_left(k);
        }
        Self::new(vertices)
    }

    fn check_index(&self, i: usize) -> Result<(), GeometryError> {
        if i < self.vertices.len() {
            Ok(())
        } else {
            Err(GeometryError::VertexIndexOutOfBounds {
                index: i,
                len: self.vertices.len(),
            })
        }
    }

    /// This polygon with vertex `i` replaced by `vertex`.
    pub fn with_vertex(&self, i: usize, vertex: GridPoint) -> Result<Self, GeometryError> {
        self.check_index(i)?;
        let mut vertices = self.vertices.clone();
        vertices[i] = vertex;
        Ok(Self::new(vertices))
    }

    /// This polygon without vertex `i`.
    pub fn without_vertex(&self, i: usize) -> Result<Self, GeometryError> {
        self.check_index(i)?;
        let mut vertices = self.vertices.clone();
        let _ = vertices.remove(i);
        Ok(Self::new(vertices))
    }

    /// This polygon with `vertex` inserted right after vertex `i`.
    pub fn with_vertex_after(&self, i: usize, vertex: GridPoint) -> Result<Self, GeometryError> {
        self.check_index(i)?;
        let mut vertices = self.vertices.clone();
        vertices.insert(i + 1, vertex);
        Ok(Self::new(vertices))
    }
}

impl VertexLoop for Polygon {
    #[inline]
    fn vertices(&self) -> &[GridPoint] {
        &self.vertices
    }

    #[inline]
    fn turn_analysis(&self) -> TurnAnalysis {
        self.analysis
    }
}

impl PartialEq for Polygon {
    fn eq(&self, other: &Self) -> bool {
        self.vertices == other.vertices
    }
}

impl Eq for Polygon {}

impl From<Vec<GridPoint>> for Polygon {
    fn from(vertices: Vec<GridPoint>) -> Self {
        Self::new(vertices)
    }
}

impl FromIterator<GridPoint> for Polygon {
    fn from_iter<I: IntoIterator<Item = GridPoint>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

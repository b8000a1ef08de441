use alloc::sync::Arc;
use std::sync::OnceLock;

use crate::math::Point;
use crate::query::{into_point_set, IntersectionQuery};
use crate::shape::{GeometryError, GridPoint, Shape45, Triangle};
use crate::transformation::{self, BooleanError, BooleanOp, TriangulationError};

/// An ordered collection of independent shapes sharing the same plane.
///
/// Vertices are addressed by a global index running depth-first through the
/// first shape, then through the second, and so on. The total vertex count and
/// the triangulation are computed on first access and kept for the lifetime of
/// the group; edits return a new group, so they never have to be invalidated.
#[derive(Clone, Debug, Default)]
pub struct ShapeGroup {
    shapes: Vec<Arc<Shape45>>,
    total_vertices: OnceLock<usize>,
    triangles: OnceLock<Result<Vec<Triangle>, TriangulationError>>,
}

impl ShapeGroup {
    /// Creates a group from its shapes.
    pub fn new(shapes: Vec<Shape45>) -> Self {
        Self::from_arcs(shapes.into_iter().map(Arc::new).collect())
    }

    /// Creates a group from shared shapes.
    pub fn from_arcs(shapes: Vec<Arc<Shape45>>) -> Self {
        Self {
            shapes,
            total_vertices: OnceLock::new(),
            triangles: OnceLock::new(),
        }
    }

    /// The shapes of this group.
    #[inline]
    pub fn shapes(&self) -> &[Arc<Shape45>] {
        &self.shapes
    }

    /// The `i`-th shape of this group.
    pub fn shape(&self, i: usize) -> Result<&Shape45, GeometryError> {
        self.shapes
            .get(i)
            .map(|s| &**s)
            .ok_or(GeometryError::ShapeIndexOutOfBounds {
                index: i,
                len: self.shapes.len(),
            })
    }

    /// The number of shapes of this group.
    #[inline]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Does this group contain no shape?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// The number of vertices of all the shapes, sub-shapes included.
    pub fn total_vertex_count(&self) -> usize {
        *self
            .total_vertices
            .get_or_init(|| self.shapes.iter().map(|s| s.total_vertex_count()).sum())
    }

    /// The shape owning the global vertex `index`, with the index of that
    /// vertex within the shape's own depth-first numbering.
    pub fn vertex_location(&self, index: usize) -> Result<(usize, usize), GeometryError> {
        let mut base = 0;
        for (i, shape) in self.shapes.iter().enumerate() {
            let count = shape.total_vertex_count();
            if index < base + count {
                return Ok((i, index - base));
            }
            base += count;
        }

        Err(GeometryError::VertexIndexOutOfBounds {
            index,
            len: base,
        })
    }

    /// The vertex with global index `index`.
    pub fn vertex_global(&self, index: usize) -> Result<GridPoint, GeometryError> {
        let (shape, local) = self.vertex_location(index)?;
        self.shapes[shape].vertex_global(local)
    }

    /// A copy of this group with the global vertex `index` moved to `vertex`.
    pub fn set_vertex(&self, index: usize, vertex: GridPoint) -> Result<Self, GeometryError> {
        let (shape, local) = self.vertex_location(index)?;
        let edited = self.shapes[shape].set_vertex(local, vertex)?;
        self.with_replaced_shape(shape, edited)
    }

    /// A copy of this group with `shape` appended.
    pub fn with_shape(&self, shape: Shape45) -> Self {
        let mut shapes = self.shapes.clone();
        shapes.push(Arc::new(shape));
        Self::from_arcs(shapes)
    }

    /// A copy of this group without its `i`-th shape.
    pub fn without_shape(&self, i: usize) -> Result<Self, GeometryError> {
        let _ = self.shape(i)?;
        let mut shapes = self.shapes.clone();
        let _ = shapes.remove(i);
        Ok(Self::from_arcs(shapes))
    }

    /// A copy of this group with its `i`-th shape replaced by `shape`.
    pub fn with_replaced_shape(&self, i: usize, shape: Shape45) -> Result<Self, GeometryError> {
        let _ = self.shape(i)?;
        let mut shapes = self.shapes.clone();
        shapes[i] = Arc::new(shape);
        Ok(Self::from_arcs(shapes))
    }

    /// The triangles of every shape of this group, in shape order.
    ///
    /// The triangulation is computed on first call. If any shape fails to
    /// triangulate, the error of the first such shape is returned.
    pub fn triangles(&self) -> Result<&[Triangle], TriangulationError> {
        self.triangles
            .get_or_init(|| {
                let mut result = Vec::new();
                for shape in &self.shapes {
                    result.extend(shape.triangulate()?);
                }
                Ok(result)
            })
            .as_ref()
            .map(|t| t.as_slice())
            .map_err(|e| *e)
    }

    /// The number of triangles of this group.
    pub fn triangle_count(&self) -> Result<usize, TriangulationError> {
        self.triangles().map(|t| t.len())
    }

    /// Every point where two distinct shapes of this group meet.
    pub fn cross_intersection_points(&self, query: &IntersectionQuery) -> Vec<Point> {
        let mut points = Vec::new();
        for (i, a) in self.shapes.iter().enumerate() {
            for b in &self.shapes[i + 1..] {
                points.extend(a.intersection_points_with(b, query));
            }
        }
        into_point_set(points)
    }

    /// Are all shapes valid?
    ///
    /// Shapes of a group are independent: overlapping shapes do not make the
    /// group invalid.
    pub fn is_valid(&self) -> bool {
        self.shapes.iter().all(|s| s.is_valid())
    }

    /// Combines the outlines of shapes `i` and `j`.
    ///
    /// See [`transformation::boolean`].
    pub fn boolean(
        &self,
        i: usize,
        j: usize,
        op: BooleanOp,
    ) -> Result<Vec<Vec<Point>>, BooleanError> {
        let a = self.shape(i)?;
        let b = self.shape(j)?;
        transformation::boolean(a.outline(), b.outline(), op)
    }
}

//! Recursively nested 45°-compliant shapes.

use alloc::sync::Arc;

use crate::bounding_volume::GridAabb;
use crate::math::{Int, Point, Real};
use crate::query::{self, IntersectionKind, IntersectionQuery};
use crate::shape::{GeometryError, GridPoint, Line, Polygon, Triangle, VertexLoop, Winding};
use crate::transformation::{self, EarClippingParams, TriangulationError};

/// The winding expected from an outline at the given nesting depth.
///
/// The root outline (depth 0) winds counter-clockwise, its holes clockwise,
/// the islands inside those holes counter-clockwise again, and so on.
#[inline]
pub fn expected_winding(depth: usize) -> Winding {
    if depth % 2 == 0 {
        Winding::Ccw
    } else {
        Winding::Cw
    }
}

/// Where a node sits in a shape tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShapeLocation {
    /// The child indices leading from the root to the node. Empty for the root.
    pub path: Vec<usize>,
    /// The depth-first pre-order index of the node; the root is 0.
    pub shape_index: usize,
    /// The global index of the node's first outline vertex.
    pub vertex_base: usize,
}

impl ShapeLocation {
    /// The nesting depth of the node; the root is at depth 0.
    #[inline]
    pub fn depth(&self) -> usize {
        self.path.len()
    }
}

/// A polygon outline with nested sub-shapes (holes, which may contain islands, …).
///
/// Every node of the tree owns its children. Edits never modify a shape:
/// they return a new tree in which the nodes along the edited path are
/// rebuilt while untouched subtrees are shared.
///
/// # Addressing
///
/// Vertices and nodes are numbered by a depth-first pre-order traversal: the
/// outline of a node comes first, then each of its sub-shapes with its own
/// enumeration, in order. The root is node 0 and its first outline vertex is
/// vertex 0.
///
/// # Validity
///
/// Validity is computed once, at construction. See [`Shape45::is_valid`].
#[derive(Clone, Debug)]
pub struct Shape45 {
    outline: Polygon,
    sub_shapes: Vec<Arc<Shape45>>,
    structurally_valid: bool,
    alternation: Option<Winding>,
    nested_depth: usize,
    total_vertex_count: usize,
    shape_count: usize,
}

impl Shape45 {
    /// Creates a shape from its outline and its direct sub-shapes.
    pub fn new(outline: Polygon, sub_shapes: Vec<Shape45>) -> Self {
        Self::from_arcs(outline, sub_shapes.into_iter().map(Arc::new).collect())
    }

    /// Creates a shape from its outline and shared direct sub-shapes.
    pub fn from_arcs(outline: Polygon, sub_shapes: Vec<Arc<Shape45>>) -> Self {
        let outline_ok = outline.num_vertices() >= 3
            && outline.is_45_compliant()
            && outline.duplicate_vertex_count() == 0
            && outline
                .self_intersection_points(IntersectionKind::Compliant45)
                .is_empty();
        let structurally_valid = outline_ok
            && sub_shapes.iter().all(|s| s.structurally_valid)
            && !siblings_intersect(&sub_shapes);

        let winding = outline.winding();
        let alternation = (winding != Winding::Indeterminate
            && sub_shapes
                .iter()
                .all(|s| s.alternation == Some(winding.opposite())))
        .then_some(winding);

        let nested_depth = sub_shapes
            .iter()
            .map(|s| s.nested_depth + 1)
            .max()
            .unwrap_or(0);
        let total_vertex_count = outline.num_vertices()
            + sub_shapes
                .iter()
                .map(|s| s.total_vertex_count)
                .sum::<usize>();
        let shape_count = 1 + sub_shapes.iter().map(|s| s.shape_count).sum::<usize>();

        Self {
            outline,
            sub_shapes,
            structurally_valid,
            alternation,
            nested_depth,
            total_vertex_count,
            shape_count,
        }
    }

    /// Creates a shape without sub-shapes from `(x, y)` integer pairs.
    pub fn from_coords(coords: impl IntoIterator<Item = (Int, Int)>) -> Self {
        Self::new(Polygon::from_coords(coords), Vec::new())
    }

    /// The outline of this shape.
    #[inline]
    pub fn outline(&self) -> &Polygon {
        &self.outline
    }

    /// The direct sub-shapes of this shape.
    #[inline]
    pub fn sub_shapes(&self) -> &[Arc<Shape45>] {
        &self.sub_shapes
    }

    /// The direct sub-shape at index `i`.
    pub fn sub_shape(&self, i: usize) -> Result<&Shape45, GeometryError> {
        self.sub_shapes
            .get(i)
            .map(|s| &**s)
            .ok_or(GeometryError::SubShapeIndexOutOfBounds {
                index: i,
                len: self.sub_shapes.len(),
            })
    }

    /// 0 for a shape without sub-shapes, otherwise one more than the deepest sub-shape.
    #[inline]
    pub fn nested_depth(&self) -> usize {
        self.nested_depth
    }

    /// The number of outline vertices of every node of the tree.
    #[inline]
    pub fn total_vertex_count(&self) -> usize {
        self.total_vertex_count
    }

    /// The number of nodes of the tree, including this one.
    #[inline]
    pub fn shape_count(&self) -> usize {
        self.shape_count
    }

    /// Is this shape valid as the root of a tree?
    ///
    /// A shape is valid if:
    /// - its outline has at least 3 vertices, no duplicate vertex and no
    ///   self-intersection, and all its edges are 45°-compliant,
    /// - its outline winds counter-clockwise and the windings alternate with
    ///   each level of nesting,
    /// - no two sibling sub-shapes intersect, shared vertices aside,
    /// - every sub-shape satisfies the same rules.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.is_valid_at_depth(0)
    }

    /// Is this shape valid if it sits at the given nesting depth of a tree?
    #[inline]
    pub fn is_valid_at_depth(&self, depth: usize) -> bool {
        self.structurally_valid && self.alternation == Some(expected_winding(depth))
    }

    /// Is the node `shape_index` of this tree valid at its own nesting depth?
    pub fn is_sub_shape_valid(&self, shape_index: usize) -> Result<bool, GeometryError> {
        let location = self.shape_location(shape_index)?;
        let shape = self.shape_for_index(shape_index)?;
        Ok(shape.is_valid_at_depth(location.depth()))
    }

    /*
     * Depth-first addressing.
     */
    fn walk<'a>(
        &'a self,
        path: &mut Vec<usize>,
        shape_index: &mut usize,
        vertex_base: &mut usize,
        stop: &mut impl FnMut(&Shape45, usize, usize) -> bool,
    ) -> Option<(&'a Shape45, ShapeLocation)> {
        if stop(self, *shape_index, *vertex_base) {
            let location = ShapeLocation {
                path: path.clone(),
                shape_index: *shape_index,
                vertex_base: *vertex_base,
            };
            return Some((self, location));
        }

        *shape_index += 1;
        *vertex_base += self.outline.num_vertices();

        for (i, sub_shape) in self.sub_shapes.iter().enumerate() {
            path.push(i);
            let found = sub_shape.walk(path, shape_index, vertex_base, stop);
            let _ = path.pop();
            if found.is_some() {
                return found;
            }
        }

        None
    }

    /// Finds the first node, in depth-first pre-order, for which `stop` returns `true`.
    ///
    /// `stop` receives the node, its pre-order index and the global index of its
    /// first outline vertex. Every addressing method of this type goes through
    /// this traversal.
    pub fn find(
        &self,
        mut stop: impl FnMut(&Shape45, usize, usize) -> bool,
    ) -> Option<(&Shape45, ShapeLocation)> {
        self.walk(&mut Vec::new(), &mut 0, &mut 0, &mut stop)
    }

    fn shape_out_of_bounds(&self, shape_index: usize) -> GeometryError {
        GeometryError::SubShapeIndexOutOfBounds {
            index: shape_index,
            len: self.shape_count,
        }
    }

    fn vertex_out_of_bounds(&self, index: usize) -> GeometryError {
        GeometryError::VertexIndexOutOfBounds {
            index,
            len: self.total_vertex_count,
        }
    }

    /// The location of the node with pre-order index `shape_index`.
    pub fn shape_location(&self, shape_index: usize) -> Result<ShapeLocation, GeometryError> {
        self.find(|_, i, _| i == shape_index)
            .map(|(_, location)| location)
            .ok_or_else(|| self.shape_out_of_bounds(shape_index))
    }

    /// The node with pre-order index `shape_index`; 0 is this shape.
    pub fn shape_for_index(&self, shape_index: usize) -> Result<&Shape45, GeometryError> {
        self.find(|_, i, _| i == shape_index)
            .map(|(shape, _)| shape)
            .ok_or_else(|| self.shape_out_of_bounds(shape_index))
    }

    /// The pre-order index of `shape` if it is a node of this tree.
    ///
    /// Nodes are compared by identity, not by value.
    pub fn index_of_shape(&self, shape: &Shape45) -> Option<usize> {
        self.find(|node, _, _| core::ptr::eq(node, shape))
            .map(|(_, location)| location.shape_index)
    }

    /// The node owning the global vertex `index`, with the index of that vertex
    /// in the node's outline.
    pub fn vertex_location(
        &self,
        index: usize,
    ) -> Result<(ShapeLocation, usize), GeometryError> {
        self.find(|node, _, base| index < base + node.outline.num_vertices())
            .map(|(_, location)| {
                let local = index - location.vertex_base;
                (location, local)
            })
            .ok_or_else(|| self.vertex_out_of_bounds(index))
    }

    /// The vertex with global index `index`.
    pub fn vertex_global(&self, index: usize) -> Result<GridPoint, GeometryError> {
        let (location, local) = self.vertex_location(index)?;
        self.shape_for_index(location.shape_index)?
            .outline
            .vertex(local)
    }

    /// The global index of vertex `local` of the outline of node `shape_index`.
    pub fn global_vertex_index(
        &self,
        shape_index: usize,
        local: usize,
    ) -> Result<usize, GeometryError> {
        let (shape, location) = self
            .find(|_, i, _| i == shape_index)
            .ok_or_else(|| self.shape_out_of_bounds(shape_index))?;
        let _ = shape.outline.vertex(local)?;
        Ok(location.vertex_base + local)
    }

    /// All vertices of the tree, in global index order.
    pub fn all_vertices(&self) -> Vec<GridPoint> {
        let mut result = Vec::with_capacity(self.total_vertex_count);
        let _ = self.find(|node, _, _| {
            result.extend_from_slice(node.outline.vertices());
            false
        });
        result
    }

    /// The edges of every outline of the tree.
    pub fn all_edges(&self) -> Vec<Line> {
        let mut result = Vec::with_capacity(self.total_vertex_count);
        let _ = self.find(|node, _, _| {
            result.extend(node.outline.edges());
            false
        });
        result
    }

    /*
     * Copy-producing edits.
     */
    fn with_outline(&self, outline: Polygon) -> Self {
        Self::from_arcs(outline, self.sub_shapes.clone())
    }

    /// Applies `edit` to the node reached by following `path` from this shape,
    /// and rebuilds every ancestor of that node.
    ///
    /// Subtrees off the path are shared with `self`, not copied.
    pub fn edit_at(
        &self,
        path: &[usize],
        edit: impl FnOnce(&Shape45) -> Result<Shape45, GeometryError>,
    ) -> Result<Shape45, GeometryError> {
        match path.split_first() {
            None => edit(self),
            Some((&i, rest)) => {
                let edited = self.sub_shape(i)?.edit_at(rest, edit)?;
                let mut sub_shapes = self.sub_shapes.clone();
                sub_shapes[i] = Arc::new(edited);
                Ok(Self::from_arcs(self.outline.clone(), sub_shapes))
            }
        }
    }

    fn edit_vertex(
        &self,
        index: usize,
        edit: impl FnOnce(&Polygon, usize) -> Result<Polygon, GeometryError>,
    ) -> Result<Shape45, GeometryError> {
        let (location, local) = self.vertex_location(index)?;
        self.edit_at(&location.path, |node| {
            Ok(node.with_outline(edit(&node.outline, local)?))
        })
    }

    /// This shape with the global vertex `index` moved to `vertex`.
    pub fn set_vertex(&self, index: usize, vertex: GridPoint) -> Result<Shape45, GeometryError> {
        self.edit_vertex(index, |outline, local| outline.with_vertex(local, vertex))
    }

    /// This shape without the global vertex `index`.
    pub fn delete_vertex(&self, index: usize) -> Result<Shape45, GeometryError> {
        self.edit_vertex(index, |outline, local| outline.without_vertex(local))
    }

    /// This shape with `vertex` inserted in the same outline, right after the
    /// global vertex `index`.
    pub fn add_vertex_after(
        &self,
        index: usize,
        vertex: GridPoint,
    ) -> Result<Shape45, GeometryError> {
        self.edit_vertex(index, |outline, local| outline.with_vertex_after(local, vertex))
    }

    /// This shape with `sub_shape` appended to the sub-shapes of node `shape_index`.
    pub fn add_sub_shape_recursive(
        &self,
        shape_index: usize,
        sub_shape: Shape45,
    ) -> Result<Shape45, GeometryError> {
        let location = self.shape_location(shape_index)?;
        self.edit_at(&location.path, |node| {
            let mut sub_shapes = node.sub_shapes.clone();
            sub_shapes.push(Arc::new(sub_shape));
            Ok(Self::from_arcs(node.outline.clone(), sub_shapes))
        })
    }

    /// This shape without node `shape_index` and its whole subtree.
    ///
    /// Fails with [`GeometryError::RootNotRemovable`] for index 0.
    pub fn delete_sub_shape_recursive(&self, shape_index: usize) -> Result<Shape45, GeometryError> {
        let location = self.shape_location(shape_index)?;
        let (&child, parent_path) = location
            .path
            .split_last()
            .ok_or(GeometryError::RootNotRemovable)?;

        self.edit_at(parent_path, |parent| {
            let mut sub_shapes = parent.sub_shapes.clone();
            let _ = sub_shapes.remove(child);
            Ok(Self::from_arcs(parent.outline.clone(), sub_shapes))
        })
    }

    /// This shape with node `shape_index` and its whole subtree translated by `(dx, dy)`.
    pub fn shift_sub_shape(
        &self,
        shape_index: usize,
        dx: Int,
        dy: Int,
    ) -> Result<Shape45, GeometryError> {
        let location = self.shape_location(shape_index)?;
        self.edit_at(&location.path, |node| Ok(node.shift(dx, dy)))
    }

    fn map_outlines(&self, f: &impl Fn(&Polygon) -> Polygon) -> Self {
        Self::new(
            f(&self.outline),
            self.sub_shapes.iter().map(|s| s.map_outlines(f)).collect(),
        )
    }

    /// This shape translated by `(dx, dy)`.
    pub fn shift(&self, dx: Int, dy: Int) -> Self {
        self.map_outlines(&|p| p.shifted(dx, dy))
    }

    /// This shape with the vertex order of every outline reversed.
    ///
    /// Every winding flips, so a valid shape becomes invalid, and reversing
    /// twice gives back the original vertex sequences.
    pub fn reverse_winding(&self) -> Self {
        self.map_outlines(&Polygon::reversed)
    }

    /// This shape rotated by 90° clockwise about the origin.
    pub fn rotate90(&self) -> Self {
        self.map_outlines(&Polygon::rotated90)
    }

    /// This shape mirrored across the `y` axis.
    ///
    /// The outlines are also reversed so that every winding, and the validity,
    /// is preserved.
    pub fn reflect_x(&self) -> Self {
        self.map_outlines(&|p| p.reflected_x().reversed())
    }

    /// This shape mirrored across the `x` axis.
    ///
    /// The outlines are also reversed so that every winding, and the validity,
    /// is preserved.
    pub fn reflect_y(&self) -> Self {
        self.map_outlines(&|p| p.reflected_y().reversed())
    }

    /*
     * Queries.
     */
    /// The bounding box of the outline.
    pub fn aabb(&self) -> Option<GridAabb> {
        self.outline.aabb()
    }

    /// The center of the bounding box of the outline.
    pub fn center(&self) -> Option<Point> {
        self.outline.center()
    }

    /// The area covered by this shape: the outline's area minus the holes',
    /// plus the islands', and so on.
    pub fn area(&self) -> Real {
        self.outline.area() - self.sub_shapes.iter().map(|s| s.area()).sum::<Real>()
    }

    /// Every point where an edge of this tree meets an edge of `other`'s tree.
    pub fn intersection_points_with(
        &self,
        other: &Shape45,
        query: &IntersectionQuery,
    ) -> Vec<Point> {
        query::edges_intersection_points(
            &self.all_edges(),
            &self.all_vertices(),
            &other.all_edges(),
            &other.all_vertices(),
            query,
        )
    }

    /// Every point where an edge of this tree meets `line`.
    pub fn intersection_points_with_line(
        &self,
        line: &Line,
        query: &IntersectionQuery,
    ) -> Vec<Point> {
        query::edges_intersection_points(
            &self.all_edges(),
            &self.all_vertices(),
            &[*line],
            &[line.start, line.end],
            query,
        )
    }

    /// Triangulates this shape with the default ear-clipping parameters.
    ///
    /// See [`transformation::triangulate_shape`].
    pub fn triangulate(&self) -> Result<Vec<Triangle>, TriangulationError> {
        transformation::triangulate_shape(self, &EarClippingParams::default())
    }

    /// Triangulates this shape.
    ///
    /// See [`transformation::triangulate_shape`].
    pub fn triangulate_with_params(
        &self,
        params: &EarClippingParams,
    ) -> Result<Vec<Triangle>, TriangulationError> {
        transformation::triangulate_shape(self, params)
    }
}

fn siblings_intersect(sub_shapes: &[Arc<Shape45>]) -> bool {
    let query = IntersectionQuery::compliant45().ignoring_shared_vertices();
    sub_shapes.iter().enumerate().any(|(i, a)| {
        sub_shapes[i + 1..].iter().any(|b| {
            !a.outline
                .intersection_points_with(&b.outline, &query)
                .is_empty()
        })
    })
}

impl PartialEq for Shape45 {
    fn eq(&self, other: &Self) -> bool {
        self.outline == other.outline && self.sub_shapes == other.sub_shapes
    }
}

impl Eq for Shape45 {}

impl From<Polygon> for Shape45 {
    fn from(outline: Polygon) -> Self {
        Self::new(outline, Vec::new())
    }
}

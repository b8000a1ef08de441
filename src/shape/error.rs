/// Errors raised by geometric queries and shape edits given invalid input.
///
/// Finding no relationship (no intersection, no node at a point) is never an
/// error: such queries return `Option` instead. Validity problems are reported
/// by the `is_valid` family of methods, not through this type.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum GeometryError {
    /// The angle of a line was requested but its two endpoints are equal.
    #[error("the line is degenerate: its start and end points are equal.")]
    DegenerateLine,
    /// A direct vertex index was out of range.
    #[error("vertex index {index} is out of bounds (the target has {len} vertices).")]
    VertexIndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// The number of addressable vertices.
        len: usize,
    },
    /// A direct sub-shape index was out of range.
    #[error("sub-shape index {index} is out of bounds (the target has {len} sub-shapes).")]
    SubShapeIndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// The number of addressable sub-shapes.
        len: usize,
    },
    /// A shape index was out of range for a shape group.
    #[error("shape index {index} is out of bounds (the group has {len} shapes).")]
    ShapeIndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// The number of shapes in the group.
        len: usize,
    },
    /// The root of a shape tree was addressed by an edit that only applies to sub-shapes.
    #[error("the root shape cannot be removed from its own tree.")]
    RootNotRemovable,
}

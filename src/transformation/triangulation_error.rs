/// Errors that can occur while triangulating a polygon or a nested shape.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum TriangulationError {
    /// The polygon has fewer than three vertices.
    #[error("a polygon needs at least 3 vertices to be triangulated, got {0}.")]
    TooFewVertices(usize),
    /// Ear clipping and the convex fan require counter-clockwise input.
    #[error("the polygon must wind counter-clockwise.")]
    NotCounterClockwise,
    /// Ear clipping gave up after too many rejected candidate ears in a row.
    ///
    /// This typically indicates that the polygon self-intersects or has
    /// duplicate vertices.
    #[error("ear clipping stalled with {remaining} vertices left; the polygon is ill-formed.")]
    Stalled {
        /// The number of vertices that were not clipped yet.
        remaining: usize,
    },
    /// No bridge could connect a sub-shape to the outline enclosing it.
    #[error("no bridge connects sub-shape {sub_shape} to its enclosing outline.")]
    NoBridge {
        /// The index of the sub-shape among its siblings.
        sub_shape: usize,
    },
    /// The last triangle left by ear clipping is flat or clockwise.
    #[error("the last remaining triangle is degenerate.")]
    DegenerateTriangle,
}

/// Parameters of the ear-clipping triangulation.
///
/// # Examples
///
/// ```
/// # use shape45::transformation::EarClippingParams;
/// let params = EarClippingParams {
///     attempts_per_vertex: 10,
/// };
/// assert!(params.attempts_per_vertex > EarClippingParams::default().attempts_per_vertex);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct EarClippingParams {
    /// How many consecutive rejected ears are tolerated per remaining vertex
    /// before the triangulation fails with [`TriangulationError::Stalled`].
    pub attempts_per_vertex: usize,
}

impl Default for EarClippingParams {
    fn default() -> Self {
        Self {
            attempts_per_vertex: 5,
        }
    }
}

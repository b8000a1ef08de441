/// Which intersection formula a point-set query uses.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum IntersectionKind {
    /// Solve the line equations. Works for any slope, subject to float rounding
    /// for lines that are not 45°-compliant.
    General,
    /// Closed-form formulas for horizontal, vertical and ±45° lines. Exact, and
    /// pairs involving a non-compliant line never intersect.
    #[default]
    Compliant45,
}

/// Options of the intersection point-set queries.
///
/// # Example
///
/// ```
/// use shape45::query::{IntersectionKind, IntersectionQuery};
///
/// let query = IntersectionQuery::general().ignoring_shared_vertices();
/// assert_eq!(query.kind, IntersectionKind::General);
/// assert!(query.ignore_shared_vertices);
/// assert_eq!(IntersectionQuery::default().kind, IntersectionKind::Compliant45);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct IntersectionQuery {
    /// The intersection formula.
    pub kind: IntersectionKind,
    /// Drop the points that are a vertex of both inputs.
    ///
    /// Two outlines sharing a corner legitimately touch there; this filter lets
    /// such contacts through while still reporting every other crossing.
    pub ignore_shared_vertices: bool,
}

impl IntersectionQuery {
    /// A query using [`IntersectionKind::General`].
    pub fn general() -> Self {
        IntersectionQuery {
            kind: IntersectionKind::General,
            ignore_shared_vertices: false,
        }
    }

    /// A query using [`IntersectionKind::Compliant45`].
    pub fn compliant45() -> Self {
        IntersectionQuery {
            kind: IntersectionKind::Compliant45,
            ignore_shared_vertices: false,
        }
    }

    /// The same query with the shared-vertex filter enabled.
    pub fn ignoring_shared_vertices(mut self) -> Self {
        self.ignore_shared_vertices = true;
        self
    }
}

//! Axis Aligned Bounding Box on the integer grid.

use crate::math::{Int, Point, Real};
use crate::shape::GridPoint;

/// An integer Axis-Aligned Bounding Box.
///
/// - **mins**: the corner with the smallest coordinates on each axis.
/// - **maxs**: the corner with the largest coordinates on each axis.
/// - **Invariant**: `mins.x ≤ maxs.x` and `mins.y ≤ maxs.y`.
///
/// Boxes are closed: points lying on the boundary are contained, and two boxes
/// sharing only an edge or a corner intersect.
///
/// # Example
///
/// ```
/// use shape45::bounding_volume::GridAabb;
/// use shape45::shape::GridPoint;
///
/// let aabb = GridAabb::from_points([GridPoint::new(2, 3), GridPoint::new(-1, 7)]).unwrap();
/// assert_eq!(aabb.mins, GridPoint::new(-1, 3));
/// assert_eq!(aabb.maxs, GridPoint::new(2, 7));
/// assert!(aabb.contains_point(&GridPoint::new(0, 5)));
/// ```
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct GridAabb {
    /// The corner with the smallest coordinates.
    pub mins: GridPoint,
    /// The corner with the largest coordinates.
    pub maxs: GridPoint,
}

impl GridAabb {
    /// Creates a new AABB from its two corners.
    ///
    /// The corners are reordered component-wise, so any two opposite corners
    /// can be given.
    #[inline]
    pub fn new(a: GridPoint, b: GridPoint) -> Self {
        GridAabb {
            mins: GridPoint::new(a.x.min(b.x), a.y.min(b.y)),
            maxs: GridPoint::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// The smallest AABB containing every given point.
    ///
    /// Returns `None` if `pts` is empty.
    pub fn from_points(pts: impl IntoIterator<Item = GridPoint>) -> Option<Self> {
        let mut pts = pts.into_iter();
        let first = pts.next()?;
        Some(pts.fold(GridAabb::new(first, first), |aabb, pt| {
            aabb.merged(&GridAabb::new(pt, pt))
        }))
    }

    /// The center of this AABB.
    ///
    /// This may land half-way between two grid nodes, hence the float result.
    #[inline]
    pub fn center(&self) -> Point {
        na::center(&self.mins.to_point(), &self.maxs.to_point())
    }

    /// The width of this AABB along `x`.
    #[inline]
    pub fn width(&self) -> Int {
        self.maxs.x - self.mins.x
    }

    /// The height of this AABB along `y`.
    #[inline]
    pub fn height(&self) -> Int {
        self.maxs.y - self.mins.y
    }

    /// Does this AABB contain the given grid point (boundary included)?
    #[inline]
    pub fn contains_point(&self, pt: &GridPoint) -> bool {
        pt.x >= self.mins.x && pt.x <= self.maxs.x && pt.y >= self.mins.y && pt.y <= self.maxs.y
    }

    /// Does this AABB contain the given float point (boundary included)?
    #[inline]
    pub fn contains_local_point(&self, pt: &Point) -> bool {
        pt.x >= self.mins.x as Real
            && pt.x <= self.maxs.x as Real
            && pt.y >= self.mins.y as Real
            && pt.y <= self.maxs.y as Real
    }

    /// Do these two AABBs overlap or touch?
    #[inline]
    pub fn intersects(&self, other: &GridAabb) -> bool {
        self.mins.x <= other.maxs.x
            && other.mins.x <= self.maxs.x
            && self.mins.y <= other.maxs.y
            && other.mins.y <= self.maxs.y
    }

    /// The smallest AABB containing both `self` and `other`.
    #[inline]
    pub fn merged(&self, other: &GridAabb) -> GridAabb {
        GridAabb {
            mins: GridPoint::new(self.mins.x.min(other.mins.x), self.mins.y.min(other.mins.y)),
            maxs: GridPoint::new(self.maxs.x.max(other.maxs.x), self.maxs.y.max(other.maxs.y)),
        }
    }
}

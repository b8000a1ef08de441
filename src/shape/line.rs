//! Definition of the integer line segment.

use arrayvec::ArrayVec;

use crate::bounding_volume::GridAabb;
use crate::math::{Point, Real};
use crate::shape::{GeometryError, GridPoint, LineKind, Segment};

/// An immutable line segment between two grid points.
///
/// The order of the endpoints is significant for the angle and for the
/// direction in which edges are traversed; classification and containment
/// ignore it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Line {
    /// The first endpoint.
    pub start: GridPoint,
    /// The second endpoint.
    pub end: GridPoint,
}

impl Line {
    /// Creates a new line from its two endpoints.
    #[inline]
    pub fn new(start: GridPoint, end: GridPoint) -> Self {
        Line { start, end }
    }

    /// The direction class of this line.
    #[inline]
    pub fn kind(&self) -> LineKind {
        let d = self.end - self.start;
        LineKind::classify(d.x as Real, d.y as Real)
    }

    /// Are both endpoints equal?
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// Is this line horizontal (and not degenerate)?
    #[inline]
    pub fn is_horizontal(&self) -> bool {
        self.kind() == LineKind::Horizontal
    }

    /// Is this line vertical (and not degenerate)?
    #[inline]
    pub fn is_vertical(&self) -> bool {
        self.kind() == LineKind::Vertical
    }

    /// Is this line a ±45° diagonal?
    #[inline]
    pub fn is_diagonal45(&self) -> bool {
        self.kind().is_diagonal()
    }

    /// Is this line horizontal, vertical, or a ±45° diagonal?
    #[inline]
    pub fn is_compliant(&self) -> bool {
        self.kind().is_compliant()
    }

    /// The length of this line.
    #[inline]
    pub fn length(&self) -> Real {
        na::distance(&self.start.to_point(), &self.end.to_point())
    }

    /// The slope `dy / dx`, or `None` for vertical and degenerate lines.
    pub fn slope(&self) -> Option<Real> {
        let d = self.end - self.start;
        (d.x != 0).then(|| d.y as Real / d.x as Real)
    }

    /// The angle of this line, clockwise from `+y`, in `[0, 2π)`.
    ///
    /// Exact for the eight compass and diagonal directions.
    pub fn angle(&self) -> Result<Real, GeometryError> {
        let d = self.end - self.start;
        crate::utils::direction_angle(d.x as Real, d.y as Real)
    }

    /// This line with its endpoints swapped.
    #[inline]
    pub fn reversed(&self) -> Self {
        Line::new(self.end, self.start)
    }

    /// The bounding box of this line.
    #[inline]
    pub fn aabb(&self) -> GridAabb {
        GridAabb::new(self.start, self.end)
    }

    /// The float segment with the same endpoints.
    #[inline]
    pub fn to_segment(&self) -> Segment {
        Segment::new(self.start.to_point(), self.end.to_point())
    }

    /// Does `pt` lie on this line (endpoints included)?
    ///
    /// Checked on exact integers: `pt` must be inside the bounding box and collinear.
    pub fn contains(&self, pt: &GridPoint) -> bool {
        if !self.aabb().contains_point(pt) {
            return false;
        }

        let d = *pt - self.start;
        match self.kind() {
            LineKind::Degenerate => *pt == self.start,
            LineKind::Horizontal | LineKind::Vertical => true,
            LineKind::Diagonal45Positive | LineKind::Diagonal45Negative => d.x.abs() == d.y.abs(),
            LineKind::NonCompliant => self.start.cross(&self.end, pt) == 0,
        }
    }

    /// Does the float point `pt` lie on this line (endpoints included)?
    #[inline]
    pub fn contains_point(&self, pt: &Point) -> bool {
        self.to_segment().contains(pt)
    }

    /// The intersection point with `other`, solving the line equations.
    ///
    /// See [`Segment::intersection`].
    #[inline]
    pub fn intersection(&self, other: &Line) -> Option<Point> {
        self.to_segment().intersection(&other.to_segment())
    }

    /// The exact intersection point with `other` when both lines are 45°-compliant.
    ///
    /// See [`Segment::intersection45`].
    #[inline]
    pub fn intersection45(&self, other: &Line) -> Option<Point> {
        self.to_segment().intersection45(&other.to_segment())
    }

    /// The endpoints of the part shared with a collinear, overlapping `other`.
    ///
    /// See [`Segment::overlap_points`].
    #[inline]
    pub fn overlap_points(&self, other: &Line) -> ArrayVec<Point, 2> {
        self.to_segment().overlap_points(&other.to_segment())
    }
}

impl From<[GridPoint; 2]> for Line {
    fn from(arr: [GridPoint; 2]) -> Self {
        Line::new(arr[0], arr[1])
    }
}

//! Definition of the float segment and of the line classification shared with [`Line`].
//!
//! [`Line`]: crate::shape::Line

use arrayvec::ArrayVec;

use crate::math::{Point, Real, Vector};
use crate::shape::GeometryError;
use crate::utils;

/// The direction class of a line.
///
/// Every line falls into exactly one class.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum LineKind {
    /// Both endpoints are equal.
    Degenerate,
    /// Constant `y`.
    Horizontal,
    /// Constant `x`.
    Vertical,
    /// Slope `+1`: the line satisfies `x - y = c`.
    Diagonal45Positive,
    /// Slope `-1`: the line satisfies `x + y = c`.
    Diagonal45Negative,
    /// Any other slope.
    NonCompliant,
}

impl LineKind {
    /// Classifies the direction `(dx, dy)`.
    pub fn classify(dx: Real, dy: Real) -> Self {
        if dx == 0.0 && dy == 0.0 {
            LineKind::Degenerate
        } else if dy == 0.0 {
            LineKind::Horizontal
        } else if dx == 0.0 {
            LineKind::Vertical
        } else if dx == dy {
            LineKind::Diagonal45Positive
        } else if dx == -dy {
            LineKind::Diagonal45Negative
        } else {
            LineKind::NonCompliant
        }
    }

    /// Is this a horizontal, vertical, or ±45° diagonal class?
    #[inline]
    pub fn is_compliant(self) -> bool {
        !matches!(self, LineKind::Degenerate | LineKind::NonCompliant)
    }

    /// Is this a ±45° diagonal class?
    #[inline]
    pub fn is_diagonal(self) -> bool {
        matches!(
            self,
            LineKind::Diagonal45Positive | LineKind::Diagonal45Negative
        )
    }
}

/// A line segment with float endpoints.
///
/// This is the float counterpart of [`Line`](crate::shape::Line). Intersection
/// results and the edges of the intersection graph are segments because their
/// endpoints may fall half-way between grid nodes.
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Segment {
    /// The segment first point.
    pub a: Point,
    /// The segment second point.
    pub b: Point,
}

impl Segment {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(a: Point, b: Point) -> Segment {
        Segment { a, b }
    }

    /// The direction of this segment scaled by its length.
    ///
    /// Points from `self.a` toward `self.b`.
    #[inline]
    pub fn scaled_direction(&self) -> Vector {
        self.b - self.a
    }

    /// The length of this segment.
    #[inline]
    pub fn length(&self) -> Real {
        self.scaled_direction().norm()
    }

    /// The middle of this segment.
    #[inline]
    pub fn midpoint(&self) -> Point {
        na::center(&self.a, &self.b)
    }

    /// The same segment traversed in the opposite direction.
    #[inline]
    pub fn reversed(&self) -> Segment {
        Segment::new(self.b, self.a)
    }

    /// The direction class of this segment.
    #[inline]
    pub fn kind(&self) -> LineKind {
        let dir = self.scaled_direction();
        LineKind::classify(dir.x, dir.y)
    }

    /// Is this segment horizontal, vertical, or at ±45°?
    #[inline]
    pub fn is_compliant(&self) -> bool {
        self.kind().is_compliant()
    }

    /// The angle of this segment, clockwise from `+y`, in `[0, 2π)`.
    pub fn angle(&self) -> Result<Real, GeometryError> {
        utils::line_angle(&self.a, &self.b)
    }

    /// Is `pt` inside the axis-aligned bounding box of this segment (boundary included)?
    #[inline]
    pub fn bounding_box_contains(&self, pt: &Point) -> bool {
        pt.x >= self.a.x.min(self.b.x)
            && pt.x <= self.a.x.max(self.b.x)
            && pt.y >= self.a.y.min(self.b.y)
            && pt.y <= self.a.y.max(self.b.y)
    }

    /// Does `pt` lie on this segment (endpoints included)?
    pub fn contains(&self, pt: &Point) -> bool {
        if !self.bounding_box_contains(pt) {
            return false;
        }

        let d = pt - self.a;
        match self.kind() {
            LineKind::Degenerate => *pt == self.a,
            LineKind::Horizontal => pt.y == self.a.y,
            LineKind::Vertical => pt.x == self.a.x,
            // `a` is a corner of the bounding box so equal offsets put `pt` on the diagonal.
            LineKind::Diagonal45Positive | LineKind::Diagonal45Negative => d.x.abs() == d.y.abs(),
            LineKind::NonCompliant => self.scaled_direction().perp(&d) == 0.0,
        }
    }

    /// Computes the intersection point of two segments by solving their line equations.
    ///
    /// Returns `None` if the segments are parallel (including collinear overlaps),
    /// if either is degenerate, or if the crossing point lies outside one of them.
    /// The result is subject to float rounding for lines that are not 45°-compliant;
    /// see [`Segment::intersection45`] for the exact variant.
    pub fn intersection(&self, other: &Segment) -> Option<Point> {
        let r = self.scaled_direction();
        let s = other.scaled_direction();
        let denom = r.perp(&s);

        if denom == 0.0 || ulps_eq!(denom, 0.0) {
            return None;
        }

        let ac = other.a - self.a;
        let t = ac.perp(&s) / denom;
        let u = ac.perp(&r) / denom;

        if 0.0 > t || t > 1.0 || 0.0 > u || u > 1.0 {
            return None;
        }

        if t == 0.0 {
            Some(self.a)
        } else if t == 1.0 {
            Some(self.b)
        } else if u == 0.0 {
            Some(other.a)
        } else if u == 1.0 {
            Some(other.b)
        } else {
            Some(self.a + r * t)
        }
    }

    /// Computes the exact intersection point of two 45°-compliant segments.
    ///
    /// Returns `None` if either segment is not 45°-compliant, if both have the same
    /// direction class (parallel), or if the crossing point lies outside one of them.
    /// The candidate point comes from a closed-form formula for each pair of classes
    /// so no division other than a halving ever happens.
    pub fn intersection45(&self, other: &Segment) -> Option<Point> {
        let k1 = self.kind();
        let k2 = other.kind();

        if !k1.is_compliant() || !k2.is_compliant() || k1 == k2 {
            return None;
        }

        let candidate = match (k1, k2) {
            (LineKind::Horizontal, LineKind::Vertical) => Point::new(other.a.x, self.a.y),
            (LineKind::Vertical, LineKind::Horizontal) => Point::new(self.a.x, other.a.y),
            (LineKind::Horizontal, _) => on_diagonal_at_y(other, k2, self.a.y),
            (_, LineKind::Horizontal) => on_diagonal_at_y(self, k1, other.a.y),
            (LineKind::Vertical, _) => on_diagonal_at_x(other, k2, self.a.x),
            (_, LineKind::Vertical) => on_diagonal_at_x(self, k1, other.a.x),
            _ => {
                // Opposite diagonals: x - y = c1 and x + y = c2.
                let (pos, neg) = if k1 == LineKind::Diagonal45Positive {
                    (self, other)
                } else {
                    (other, self)
                };
                let c1 = pos.a.x - pos.a.y;
                let c2 = neg.a.x + neg.a.y;
                Point::new((c1 + c2) / 2.0, (c2 - c1) / 2.0)
            }
        };

        (self.bounding_box_contains(&candidate) && other.bounding_box_contains(&candidate))
            .then_some(candidate)
    }

    /// The endpoints of the part shared by two collinear, overlapping segments.
    ///
    /// Returns an empty set unless the segments are parallel and lie on the same
    /// line. Segments touching end-to-end share exactly one point.
    pub fn overlap_points(&self, other: &Segment) -> ArrayVec<Point, 2> {
        let mut result = ArrayVec::new();
        let r = self.scaled_direction();
        let s = other.scaled_direction();

        if self.kind() == LineKind::Degenerate
            || other.kind() == LineKind::Degenerate
            || r.perp(&s) != 0.0
            || r.perp(&(other.a - self.a)) != 0.0
        {
            return result;
        }

        let candidates = [
            (self.a, other.contains(&self.a)),
            (self.b, other.contains(&self.b)),
            (other.a, self.contains(&other.a)),
            (other.b, self.contains(&other.b)),
        ];

        for (pt, shared) in candidates {
            if shared && !result.contains(&pt) {
                // At most two distinct points can be endpoints of a 1D overlap.
                let _ = result.try_push(pt);
            }
        }

        result
    }
}

fn on_diagonal_at_y(diag: &Segment, kind: LineKind, y: Real) -> Point {
    let dy = y - diag.a.y;
    match kind {
        LineKind::Diagonal45Positive => Point::new(diag.a.x + dy, y),
        _ => Point::new(diag.a.x - dy, y),
    }
}

fn on_diagonal_at_x(diag: &Segment, kind: LineKind, x: Real) -> Point {
    let dx = x - diag.a.x;
    match kind {
        LineKind::Diagonal45Positive => Point::new(x, diag.a.y + dx),
        _ => Point::new(x, diag.a.y - dx),
    }
}

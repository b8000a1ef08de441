use core::hash::{Hash, Hasher};

use ordered_float::OrderedFloat;

use crate::math::{Point, Real};

/// A float point usable as a hash-map key.
///
/// Equality is the exact component-wise float equality of [`Point`]. `-0.0` and
/// `0.0` are folded together so that they hash identically.
#[derive(Copy, Clone, Debug)]
pub struct PointKey([OrderedFloat<Real>; 2]);

impl PointKey {
    /// Wraps a point.
    #[inline]
    pub fn new(pt: &Point) -> Self {
        // Adding 0.0 turns -0.0 into 0.0.
        PointKey([OrderedFloat(pt.x + 0.0), OrderedFloat(pt.y + 0.0)])
    }

    /// The wrapped point.
    #[inline]
    pub fn point(&self) -> Point {
        Point::new(self.0[0].0, self.0[1].0)
    }
}

impl From<Point> for PointKey {
    fn from(pt: Point) -> Self {
        PointKey::new(&pt)
    }
}

impl PartialEq for PointKey {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for PointKey {}

impl Hash for PointKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state)
    }
}

impl PartialOrd for PointKey {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PointKey {
    // Same y-major order as `GridPoint`.
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.0[1]
            .cmp(&other.0[1])
            .then(self.0[0].cmp(&other.0[0]))
    }
}

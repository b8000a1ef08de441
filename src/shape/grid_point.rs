//! Integer points of the grid.

use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, Sub};

use crate::math::{Int, Point, Real, Vector2};

/// A point with integer coordinates.
///
/// Points are ordered primarily by `y`, then by `x`. This is the order used to
/// canonicalize collinearity checks and to sort point sets deterministically.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct GridPoint {
    /// The x coordinate.
    pub x: Int,
    /// The y coordinate.
    pub y: Int,
}

impl GridPoint {
    /// Creates a new grid point.
    #[inline]
    pub const fn new(x: Int, y: Int) -> Self {
        GridPoint { x, y }
    }

    /// The point `(0, 0)`.
    #[inline]
    pub const fn origin() -> Self {
        GridPoint { x: 0, y: 0 }
    }

    /// Converts this point to a float point. The conversion is exact.
    #[inline]
    pub fn to_point(self) -> Point {
        Point::new(self.x as Real, self.y as Real)
    }

    /// This point translated by `(dx, dy)`.
    #[inline]
    pub fn shifted(self, dx: Int, dy: Int) -> Self {
        GridPoint::new(self.x + dx, self.y + dy)
    }

    /// This point mirrored across the `y` axis (`x` is negated).
    #[inline]
    pub fn reflected_x(self) -> Self {
        GridPoint::new(-self.x, self.y)
    }

    /// This point mirrored across the `x` axis (`y` is negated).
    #[inline]
    pub fn reflected_y(self) -> Self {
        GridPoint::new(self.x, -self.y)
    }

    /// This point rotated by 90° clockwise around the origin.
    #[inline]
    pub fn rotated90(self) -> Self {
        GridPoint::new(self.y, -self.x)
    }

    /// The 2D cross product (perp-dot) of `(a - self)` and `(b - self)`.
    ///
    /// Positive if `b` lies to the left of the directed line `self → a`,
    /// negative if it lies to the right, zero if the three points are collinear.
    #[inline]
    pub fn cross(&self, a: &GridPoint, b: &GridPoint) -> Int {
        perp(&(*a - *self), &(*b - *self))
    }
}

/// The perp-dot product of two integer vectors.
#[inline]
pub(crate) fn perp(u: &Vector2<Int>, v: &Vector2<Int>) -> Int {
    u.x * v.y - u.y * v.x
}

impl Ord for GridPoint {
    fn cmp(&self, other: &Self) -> Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl PartialOrd for GridPoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Sub for GridPoint {
    type Output = Vector2<Int>;

    #[inline]
    fn sub(self, rhs: GridPoint) -> Vector2<Int> {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Add<Vector2<Int>> for GridPoint {
    type Output = GridPoint;

    #[inline]
    fn add(self, rhs: Vector2<Int>) -> GridPoint {
        GridPoint::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl From<[Int; 2]> for GridPoint {
    fn from(arr: [Int; 2]) -> Self {
        GridPoint::new(arr[0], arr[1])
    }
}

impl From<(Int, Int)> for GridPoint {
    fn from((x, y): (Int, Int)) -> Self {
        GridPoint::new(x, y)
    }
}

impl From<GridPoint> for Point {
    fn from(pt: GridPoint) -> Self {
        pt.to_point()
    }
}

impl fmt::Display for GridPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

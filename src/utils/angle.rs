//! Exact angles and turn directions.
//!
//! Angles are measured clockwise from "up" (the `+y` direction) and lie in `[0, 2π)`.
//! The eight compass and diagonal directions are special-cased so that they
//! always produce the same bit-exact constants.

use core::f64::consts::{FRAC_PI_4, PI, TAU};

use crate::math::{Point, Real};
use crate::shape::{GeometryError, GridPoint};

/// The direction of a turn at the middle vertex of three consecutive points.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum TurnDirection {
    /// A counter-clockwise turn.
    Left = -1,
    /// No turn: the three points are collinear and the path keeps its direction.
    Straight = 0,
    /// A clockwise turn.
    Right = 1,
}

impl TurnDirection {
    /// `-1` for left, `0` for straight, `1` for right.
    #[inline]
    pub fn signum(self) -> i8 {
        self as i8
    }

    fn from_angle(angle: Real) -> Self {
        if angle < 0.0 {
            TurnDirection::Left
        } else if angle > 0.0 {
            TurnDirection::Right
        } else {
            TurnDirection::Straight
        }
    }
}

/// The compass octant of the direction `(dx, dy)`, if it is axis-aligned or diagonal.
///
/// Octant `k` has the angle `k · π/4`, clockwise from `+y`.
pub fn octant(dx: Real, dy: Real) -> Option<i8> {
    if dx == 0.0 && dy == 0.0 {
        None
    } else if dx == 0.0 {
        Some(if dy > 0.0 { 0 } else { 4 })
    } else if dy == 0.0 {
        Some(if dx > 0.0 { 2 } else { 6 })
    } else if dx.abs() == dy.abs() {
        Some(match (dx > 0.0, dy > 0.0) {
            (true, true) => 1,
            (true, false) => 3,
            (false, false) => 5,
            (false, true) => 7,
        })
    } else {
        None
    }
}

/// The angle of the direction `(dx, dy)`, clockwise from `+y`, in `[0, 2π)`.
///
/// Axis-aligned and 45° directions never go through `atan`.
pub fn direction_angle(dx: Real, dy: Real) -> Result<Real, GeometryError> {
    if dx == 0.0 && dy == 0.0 {
        return Err(GeometryError::DegenerateLine);
    }

    if let Some(k) = octant(dx, dy) {
        return Ok(k as Real * FRAC_PI_4);
    }

    let base = (dx.abs() / dy.abs()).atan();
    Ok(match (dx > 0.0, dy > 0.0) {
        (true, true) => base,
        (true, false) => PI - base,
        (false, false) => PI + base,
        (false, true) => TAU - base,
    })
}

/// The angle of the line `p1 → p2`, clockwise from `+y`, in `[0, 2π)`.
pub fn line_angle(p1: &Point, p2: &Point) -> Result<Real, GeometryError> {
    direction_angle(p2.x - p1.x, p2.y - p1.y)
}

/// The signed angle turned when going from segment `a → b` to segment `b → c`.
///
/// Right (clockwise) turns are positive, left turns are negative. The plain
/// difference of the two line angles is ambiguous by `2π`; the side of `c`
/// relative to the line `a → b` decides which representative is returned.
/// The result lies in `(-2π, 2π)`; for a full reversal it is `±π`.
pub fn angle_turned(a: &Point, b: &Point, c: &Point) -> Result<Real, GeometryError> {
    let u = b - a;
    let v = c - b;
    let side = u.perp(&v);

    if let (Some(k1), Some(k2)) = (octant(u.x, u.y), octant(v.x, v.y)) {
        let mut steps = k2 - k1;
        if side > 0.0 && steps > 0 {
            steps -= 8;
        } else if side < 0.0 && steps < 0 {
            steps += 8;
        }
        return Ok(steps as Real * FRAC_PI_4);
    }

    let mut angle = direction_angle(v.x, v.y)? - direction_angle(u.x, u.y)?;
    if side > 0.0 && angle > 0.0 {
        angle -= TAU;
    } else if side < 0.0 && angle < 0.0 {
        angle += TAU;
    } else if side == 0.0 && u.dot(&v) > 0.0 {
        angle = 0.0;
    }

    Ok(angle)
}

/// The direction of the turn at `b` on the path `a → b → c`.
///
/// The side test runs on exact integer arithmetic. A full reversal takes the
/// sign of [`angle_turned`]. A path with a repeated point does not turn.
pub fn turn_direction(a: &GridPoint, b: &GridPoint, c: &GridPoint) -> TurnDirection {
    let side = a.cross(b, c);
    if side > 0 {
        return TurnDirection::Left;
    }
    if side < 0 {
        return TurnDirection::Right;
    }

    match angle_turned(&a.to_point(), &b.to_point(), &c.to_point()) {
        Ok(angle) => TurnDirection::from_angle(angle),
        Err(_) => TurnDirection::Straight,
    }
}

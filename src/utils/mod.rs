//! Various unsorted geometrical and logical operators.

pub use self::angle::{
    angle_turned, direction_angle, line_angle, octant, turn_direction, TurnDirection,
};
pub use self::point_in_poly2d::{point_in_poly2d, point_on_poly2d_boundary};
pub use self::point_key::PointKey;

pub mod hashmap {
    //! Hash-maps and hash-sets used by this crate.
    pub use hashbrown::{HashMap, HashSet};
}

mod angle;
mod point_in_poly2d;
mod point_key;

//! Non-persistent geometric queries.
//!
//! The point-set queries return deduplicated points sorted in y-major order.
//! The per-shape entry points live on [`Polygon`](crate::shape::Polygon),
//! [`Shape45`](crate::shape::Shape45) and [`ShapeGroup`](crate::shape::ShapeGroup);
//! the functions here work on raw edge lists.

pub use self::intersection_points::{
    edges_intersection_points, into_point_set, line_line_intersection_points,
    loop_self_intersection_points,
};
pub use self::query_options::{IntersectionKind, IntersectionQuery};

mod intersection_points;
mod query_options;

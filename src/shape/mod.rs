//! Shapes supported by shape45.
//!
//! Every shape is an immutable value: edits return a new instance.

pub use self::error::GeometryError;
pub use self::grid_point::GridPoint;
pub use self::line::Line;
pub use self::polygon::Polygon;
pub use self::segment::{LineKind, Segment};
pub use self::shape45::{expected_winding, Shape45, ShapeLocation};
pub use self::shape_group::ShapeGroup;
pub use self::triangle::Triangle;
pub use self::vertex_loop::{TurnAnalysis, VertexLoop, Winding};

mod error;
mod grid_point;
mod line;
mod polygon;
mod segment;
mod shape45;
mod shape_group;
mod triangle;
mod vertex_loop;

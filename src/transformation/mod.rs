//! Triangulation of polygons and shapes, and boolean modelling.

pub use self::boolean::{boolean, BooleanError, BooleanOp};
pub use self::ear_clipping::{convex_fan, ear_clipping};
pub use self::hole_bridging::triangulate_shape;
pub use self::intersection_graph::{Connection, IntersectionGraph, Node, NodeId, ShapeId};
pub use self::triangulation_error::{EarClippingParams, TriangulationError};

mod boolean;
mod ear_clipping;
mod hole_bridging;
mod intersection_graph;
mod triangulation_error;

//! Bounding volumes.

#[doc(inline)]
pub use crate::bounding_volume::aabb::GridAabb;

#[doc(hidden)]
pub mod aabb;

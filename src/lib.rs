/*!
shape45
========

**shape45** is an exact 2-dimensional geometry kernel for shapes living on an
integer grid whose edges are horizontal, vertical, or at ±45°.

It provides:

- integer points and line segments with exact classification and exact
  intersection formulas for 45°-compliant lines,
- polygons with turn-counting winding detection, convexity and validity
  diagnostics,
- recursively nested shapes (outlines with holes, holes with islands) with
  copy-producing edits addressed by depth-first global indices,
- triangulation (convex fan, ear clipping, and hole bridging),
- a planar intersection graph used as the substrate for boolean operations.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![allow(clippy::type_complexity)]

extern crate alloc;

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod query;
pub mod shape;
pub mod transformation;
pub mod utils;

/// Scalar and point aliases used throughout this crate.
pub mod math {
    pub use na::{Point2, Vector2};

    /// The integer scalar type of grid coordinates.
    pub type Int = i64;

    /// The floating-point scalar type used for intersection results and angles.
    pub type Real = f64;

    /// The floating-point point type.
    pub type Point = Point2<Real>;

    /// The floating-point vector type.
    pub type Vector = Vector2<Real>;
}

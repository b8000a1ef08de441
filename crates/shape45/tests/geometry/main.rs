#[macro_use]
extern crate approx;
extern crate nalgebra as na;

mod intersection45;
mod shape_addressing;
mod winding;

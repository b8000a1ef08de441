extern crate nalgebra as na;

mod boolean;
mod ear_clipping;
mod hole_bridging;
mod intersection_graph;

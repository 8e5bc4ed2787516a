//! Planar point sets, the Euclidean distance oracle and route primitives.

mod distance;
mod point;
mod tour;

pub use distance::DistanceMatrix;
pub use point::{Point, PointSet};
pub use tour::{is_permutation, random_route, random_segment, reverse_segment, tour_cost};

//! Simulated annealing for the Euclidean traveling salesman problem.
//!
//! - **Geometry**: planar point sets, a dense Euclidean distance matrix
//!   and route primitives (tour cost, permutation check, in-place segment
//!   reversal).
//! - **Simulated Annealing (SA)**: a single-solution trajectory search
//!   with geometric cooling, the Metropolis acceptance criterion,
//!   explicit seedable randomness, cooperative cancellation and a sampled
//!   trace of the search for replay.
//! - **TSP**: closed tours over a point set, perturbed by 2-opt segment
//!   reversal.
//!
//! The crate is headless. The trace carries everything an animation
//! layer needs (route, cost and temperature per sample) without depending
//! on one.
//!
//! # Features
//!
//! - `serde`: derives `Serialize`/`Deserialize` for configuration,
//!   points, traces and results.

pub mod error;
pub mod geometry;
pub mod sa;
pub mod tsp;

pub use error::{AnnealError, AnnealResult};

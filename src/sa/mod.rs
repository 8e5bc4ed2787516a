//! Simulated Annealing (SA).
//!
//! A single-solution trajectory metaheuristic inspired by the physical
//! annealing process. Worsening moves are accepted with a probability
//! that shrinks as the temperature decays geometrically, which lets the
//! search climb out of local optima early and settle late.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast Computing Machines"

mod acceptance;
mod config;
mod runner;
mod trace;
mod types;

pub use acceptance::{metropolis_accept, metropolis_probability};
pub use config::AnnealConfig;
pub use runner::{SaResult, SaRunner, Termination};
pub use trace::{Snapshot, Trace};
pub use types::SaProblem;

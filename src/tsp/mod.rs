//! Euclidean TSP solved by simulated annealing.
//!
//! # Examples
//!
//! ```
//! use u_anneal::geometry::PointSet;
//! use u_anneal::sa::AnnealConfig;
//! use u_anneal::tsp;
//!
//! let square = PointSet::new(vec![
//!     (0.0, 0.0).into(),
//!     (0.0, 1.0).into(),
//!     (1.0, 1.0).into(),
//!     (1.0, 0.0).into(),
//! ])
//! .unwrap();
//! let config = AnnealConfig::default()
//!     .with_max_iterations(5000)
//!     .with_min_temperature(1e-6)
//!     .with_seed(42);
//!
//! let result = tsp::solve(square, &config).unwrap();
//! assert!((result.best_cost - 4.0).abs() < 1e-9);
//! ```

mod problem;

pub use problem::TspProblem;

use crate::error::AnnealResult;
use crate::geometry::PointSet;
use crate::sa::{AnnealConfig, SaResult, SaRunner};
use rand::Rng;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

/// Result of a TSP run; solutions are routes.
pub type TspResult = SaResult<Vec<usize>>;

/// Anneals a tour over `points` using a generator seeded from `config.seed`.
pub fn solve(points: PointSet, config: &AnnealConfig) -> AnnealResult<TspResult> {
    solve_with_cancel(points, config, None)
}

/// Like [`solve`], stopping early once `cancel` is raised.
pub fn solve_with_cancel(
    points: PointSet,
    config: &AnnealConfig,
    cancel: Option<Arc<AtomicBool>>,
) -> AnnealResult<TspResult> {
    let problem = TspProblem::new(points)?;
    SaRunner::run_with_cancel(&problem, config, cancel)
}

/// Like [`solve`], drawing all randomness from `rng`.
pub fn solve_with_rng<R: Rng>(
    points: PointSet,
    config: &AnnealConfig,
    rng: &mut R,
) -> AnnealResult<TspResult> {
    let problem = TspProblem::new(points)?;
    SaRunner::run_with_rng(&problem, config, rng, None)
}

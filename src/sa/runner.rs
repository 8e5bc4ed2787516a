//! Annealing loop.

use super::acceptance::metropolis_accept;
use super::config::AnnealConfig;
use super::trace::Trace;
use super::types::SaProblem;
use crate::error::AnnealResult;
use rand::Rng;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info};
use u_numflow::random::create_rng;

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// The temperature dropped to or below the minimum temperature.
    Cooled,

    /// The iteration budget was exhausted.
    IterationLimit,

    /// The cancellation flag was raised.
    Cancelled,
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Termination::Cooled => write!(f, "cooled"),
            Termination::IterationLimit => write!(f, "iteration limit"),
            Termination::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Result of an annealing run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaResult<S: Clone> {
    /// The best solution found.
    pub best: S,

    /// Cost of the best solution.
    pub best_cost: f64,

    /// Total number of iterations (proposed moves).
    pub iterations: usize,

    /// Temperature when the run stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,

    /// Why the run stopped.
    pub termination: Termination,

    /// Best cost at every trace snapshot, plus the final best cost when it
    /// differs from the last sample. Non-increasing.
    pub cost_history: Vec<f64>,

    /// Sampled current-solution history.
    pub trace: Trace<S>,
}

impl<S: Clone> SaResult<S> {
    pub fn cancelled(&self) -> bool {
        self.termination == Termination::Cancelled
    }
}

/// Executes simulated annealing with geometric cooling.
pub struct SaRunner;

impl SaRunner {
    /// Runs the annealer with a generator seeded from `config.seed`.
    pub fn run<P: SaProblem>(
        problem: &P,
        config: &AnnealConfig,
    ) -> AnnealResult<SaResult<P::Solution>> {
        Self::run_with_cancel(problem, config, None)
    }

    /// Runs the annealer with an optional cancellation flag.
    pub fn run_with_cancel<P: SaProblem>(
        problem: &P,
        config: &AnnealConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> AnnealResult<SaResult<P::Solution>> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        Self::run_with_rng(problem, config, &mut rng, cancel)
    }

    /// Runs the annealer drawing every random decision from `rng`.
    ///
    /// `config.seed` is ignored. Two runs given generators in the same
    /// state produce identical results and traces.
    pub fn run_with_rng<P: SaProblem, R: Rng>(
        problem: &P,
        config: &AnnealConfig,
        rng: &mut R,
        cancel: Option<Arc<AtomicBool>>,
    ) -> AnnealResult<SaResult<P::Solution>> {
        config.validate()?;

        let mut current = problem.initial_solution(rng);
        let mut current_cost = problem.cost(&current);
        let mut best = current.clone();
        let mut best_cost = current_cost;

        let mut temperature = config.initial_temperature;
        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;

        let mut trace = Trace::new();
        trace.record(0, current.clone(), current_cost, temperature);
        let mut cost_history = vec![best_cost];

        debug!(
            initial_cost = current_cost,
            initial_temperature = config.initial_temperature,
            min_temperature = config.min_temperature,
            cooling_rate = config.cooling_rate,
            max_iterations = config.max_iterations,
            "starting annealing run"
        );

        let termination = loop {
            // Checked before the acceptance test so it never sees T <= T_min.
            if temperature <= config.min_temperature {
                break Termination::Cooled;
            }
            if iterations >= config.max_iterations {
                break Termination::IterationLimit;
            }
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    break Termination::Cancelled;
                }
            }

            let candidate = problem.neighbor(&current, rng);
            let candidate_cost = problem.cost(&candidate);
            let delta = candidate_cost - current_cost;

            // Metropolis acceptance criterion
            let accept = if delta <= 0.0 {
                true
            } else {
                metropolis_accept(delta, temperature, rng.random_range(0.0..1.0))
            };
            if delta < 0.0 {
                improving_moves += 1;
            }

            if accept {
                current = candidate;
                current_cost = candidate_cost;
                accepted_moves += 1;

                if current_cost < best_cost {
                    best = current.clone();
                    best_cost = current_cost;
                    tracing::trace!(iteration = iterations, best_cost, temperature, "new best");
                }
            }

            temperature *= config.cooling_rate;
            iterations += 1;

            if iterations.is_multiple_of(config.trace_interval)
                || temperature <= config.min_temperature
            {
                trace.record(iterations, current.clone(), current_cost, temperature);
                cost_history.push(best_cost);
            }
        };

        if cost_history
            .last()
            .is_none_or(|&last| (last - best_cost).abs() > 1e-15)
        {
            cost_history.push(best_cost);
        }

        info!(
            iterations,
            best_cost,
            final_temperature = temperature,
            accepted_moves,
            %termination,
            "annealing run finished"
        );

        Ok(SaResult {
            best,
            best_cost,
            iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            termination,
            cost_history,
            trace,
        })
    }
}

//! Core trait for the annealer.

use rand::Rng;

/// A problem the annealer can search.
///
/// The implementor supplies a random starting solution, a cost function
/// and a single perturbation move. The runner owns temperature
/// management, the Metropolis acceptance test and cooling.
///
/// # Minimization
///
/// The annealer minimizes `cost`.
///
/// # Examples
///
/// ```
/// use rand::Rng;
/// use u_anneal::sa::SaProblem;
///
/// struct Quadratic;
///
/// impl SaProblem for Quadratic {
///     type Solution = f64;
///
///     fn initial_solution<R: Rng>(&self, rng: &mut R) -> f64 {
///         rng.random_range(-10.0..10.0)
///     }
///
///     fn cost(&self, x: &f64) -> f64 {
///         x * x
///     }
///
///     fn neighbor<R: Rng>(&self, x: &f64, rng: &mut R) -> f64 {
///         x + rng.random_range(-1.0..1.0)
///     }
/// }
/// ```
pub trait SaProblem {
    /// The solution representation type.
    type Solution: Clone;

    /// Creates a random initial solution.
    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Self::Solution;

    /// Computes the cost of a solution. Lower is better.
    fn cost(&self, solution: &Self::Solution) -> f64;

    /// Generates a candidate close to `solution`.
    ///
    /// The neighborhood must be connected: any solution must be reachable
    /// from any other through a sequence of moves.
    fn neighbor<R: Rng>(&self, solution: &Self::Solution, rng: &mut R) -> Self::Solution;
}

//! The TSP as an annealing problem.

use crate::error::{AnnealError, AnnealResult};
use crate::geometry::{random_route, random_segment, reverse_segment, tour_cost};
use crate::geometry::{DistanceMatrix, PointSet};
use crate::sa::SaProblem;
use rand::Rng;

/// Closed-tour TSP over a fixed planar point set.
///
/// Solutions are routes: permutations of `0..n`. The only move reverses
/// a random segment `[i, j]` with `i < j` (a 2-opt move), so every
/// candidate is again a permutation.
#[derive(Debug, Clone)]
pub struct TspProblem {
    points: PointSet,
    distances: DistanceMatrix,
}

impl TspProblem {
    /// Builds the problem, rejecting point sets too small to form a move.
    pub fn new(points: PointSet) -> AnnealResult<Self> {
        if points.len() < 2 {
            return Err(AnnealError::TooFewPoints {
                found: points.len(),
            });
        }
        let distances = DistanceMatrix::from_points(&points);
        Ok(Self { points, distances })
    }

    pub fn points(&self) -> &PointSet {
        &self.points
    }

    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`: construction rejects fewer than two points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl SaProblem for TspProblem {
    type Solution = Vec<usize>;

    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Vec<usize> {
        random_route(self.len(), rng)
    }

    fn cost(&self, route: &Vec<usize>) -> f64 {
        tour_cost(route, &self.distances)
    }

    fn neighbor<R: Rng>(&self, route: &Vec<usize>, rng: &mut R) -> Vec<usize> {
        let mut candidate = route.clone();
        let (i, j) = random_segment(candidate.len(), rng);
        reverse_segment(&mut candidate, i, j);
        candidate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{is_permutation, Point};
    use u_numflow::random::create_rng;

    fn line(n: usize) -> PointSet {
        PointSet::new((0..n).map(|i| Point::new(i as f64, 0.0)).collect()).expect("finite")
    }

    #[test]
    fn test_rejects_small_point_sets() {
        let empty = PointSet::new(vec![]).expect("finite");
        assert_eq!(
            TspProblem::new(empty).unwrap_err(),
            AnnealError::TooFewPoints { found: 0 }
        );
        assert_eq!(
            TspProblem::new(line(1)).unwrap_err(),
            AnnealError::TooFewPoints { found: 1 }
        );
        assert!(TspProblem::new(line(2)).is_ok());
    }

    #[test]
    fn test_initial_solution_is_permutation() {
        let problem = TspProblem::new(line(12)).expect("valid");
        let mut rng = create_rng(42);
        for _ in 0..50 {
            assert!(is_permutation(&problem.initial_solution(&mut rng), 12));
        }
    }

    #[test]
    fn test_neighbor_reverses_one_segment() {
        let problem = TspProblem::new(line(8)).expect("valid");
        let mut rng = create_rng(42);
        let route: Vec<usize> = (0..8).collect();

        for _ in 0..100 {
            let candidate = problem.neighbor(&route, &mut rng);
            assert!(is_permutation(&candidate, 8));

            let diff: Vec<usize> = (0..8).filter(|&k| candidate[k] != route[k]).collect();
            if let (Some(&lo), Some(&hi)) = (diff.first(), diff.last()) {
                let mut expected = route.clone();
                expected[lo..=hi].reverse();
                assert_eq!(candidate, expected);
            }
        }
    }

    #[test]
    fn test_cost_matches_tour_cost() {
        let problem = TspProblem::new(line(4)).expect("valid");
        // 0 -> 1 -> 2 -> 3 -> 0 on a line: 3 out, 3 back.
        assert!((problem.cost(&vec![0, 1, 2, 3]) - 6.0).abs() < 1e-12);
        assert!((problem.cost(&vec![0, 2, 1, 3]) - 8.0).abs() < 1e-12);
    }
}

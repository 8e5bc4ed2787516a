//! Route primitives: cost, validation and the segment-reversal move.
//!
//! A route is a permutation of `0..n` describing a closed tour; the last
//! entry connects back to the first.

use super::distance::DistanceMatrix;
use rand::Rng;

/// Total length of the closed tour, including the wrap-around edge.
///
/// Routes with fewer than two entries have zero length.
///
/// # Examples
///
/// ```
/// use u_anneal::geometry::{tour_cost, DistanceMatrix, PointSet};
///
/// let square = PointSet::new(vec![
///     (0.0, 0.0).into(),
///     (0.0, 1.0).into(),
///     (1.0, 1.0).into(),
///     (1.0, 0.0).into(),
/// ])
/// .unwrap();
/// let dm = DistanceMatrix::from_points(&square);
/// assert!((tour_cost(&[0, 1, 2, 3], &dm) - 4.0).abs() < 1e-12);
/// ```
pub fn tour_cost(route: &[usize], distances: &DistanceMatrix) -> f64 {
    match route {
        [] | [_] => 0.0,
        [first, .., last] => {
            let open: f64 = route
                .windows(2)
                .map(|w| distances.get(w[0], w[1]))
                .sum();
            open + distances.get(*last, *first)
        }
    }
}

/// Returns `true` if `route` contains each of `0..n` exactly once.
pub fn is_permutation(route: &[usize], n: usize) -> bool {
    if route.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &v in route {
        if v >= n || seen[v] {
            return false;
        }
        seen[v] = true;
    }
    true
}

/// Reverses the inclusive segment `[i, j]` in place.
///
/// # Panics
///
/// Panics if `i > j` or `j >= route.len()`.
#[inline]
pub fn reverse_segment(route: &mut [usize], i: usize, j: usize) {
    route[i..=j].reverse();
}

/// Draws two distinct positions `i < j` uniformly from `0..n`.
///
/// Requires `n >= 2`.
pub fn random_segment<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    debug_assert!(n >= 2, "segment needs at least two positions");
    let a = rng.random_range(0..n);
    let mut b = rng.random_range(0..n - 1);
    if b >= a {
        b += 1;
    }
    (a.min(b), a.max(b))
}

/// A uniformly random permutation of `0..n`.
pub fn random_route<R: Rng>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut route: Vec<usize> = (0..n).collect();
    u_numflow::random::shuffle(&mut route, rng);
    route
}

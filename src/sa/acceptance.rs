//! Metropolis acceptance criterion.

/// Probability of accepting a move that changes the cost by `delta` at
/// `temperature`.
///
/// Non-worsening moves (`delta <= 0`) have probability 1. Worsening moves
/// have probability `exp(-delta / temperature)`; `temperature` must be
/// positive.
pub fn metropolis_probability(delta: f64, temperature: f64) -> f64 {
    if delta <= 0.0 {
        1.0
    } else {
        debug_assert!(temperature > 0.0, "temperature must be positive");
        (-delta / temperature).exp()
    }
}

/// Decides a move given a uniform draw `u` in `[0, 1)`.
///
/// Accepts iff `u` is below [`metropolis_probability`], so non-worsening
/// moves are always accepted whatever `u` is.
///
/// # Examples
///
/// ```
/// use u_anneal::sa::metropolis_accept;
///
/// assert!(metropolis_accept(-1.0, 10.0, 0.999));
/// // exp(-1) ~= 0.3679
/// assert!(metropolis_accept(1.0, 1.0, 0.36));
/// assert!(!metropolis_accept(1.0, 1.0, 0.37));
/// ```
pub fn metropolis_accept(delta: f64, temperature: f64, u: f64) -> bool {
    delta <= 0.0 || u < metropolis_probability(delta, temperature)
}

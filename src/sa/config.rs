//! Annealer configuration.

use crate::error::{AnnealError, AnnealResult};

/// Configuration for a simulated annealing run with geometric cooling.
///
/// Temperature follows `T_{k+1} = cooling_rate * T_k`, starting from
/// `initial_temperature`. The run stops when the temperature drops to
/// `min_temperature` or `max_iterations` moves have been evaluated,
/// whichever comes first.
///
/// # Examples
///
/// ```
/// use u_anneal::sa::AnnealConfig;
///
/// let config = AnnealConfig::default()
///     .with_initial_temperature(100.0)
///     .with_min_temperature(0.001)
///     .with_cooling_rate(0.98)
///     .with_max_iterations(20_000)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AnnealConfig {
    /// Initial temperature. Higher values allow more uphill moves early on.
    pub initial_temperature: f64,

    /// The run stops once the temperature is at or below this value.
    pub min_temperature: f64,

    /// Geometric cooling factor in (0, 1). Higher = slower cooling.
    pub cooling_rate: f64,

    /// Hard budget on the number of proposed moves.
    pub max_iterations: usize,

    /// A trace snapshot is taken every `trace_interval` iterations.
    pub trace_interval: usize,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 1000.0,
            min_temperature: 1e-8,
            cooling_rate: 0.995,
            max_iterations: 100_000,
            trace_interval: 100,
            seed: None,
        }
    }
}

impl AnnealConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_trace_interval(mut self, n: usize) -> Self {
        self.trace_interval = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> AnnealResult<()> {
        if !(self.initial_temperature.is_finite() && self.initial_temperature > 0.0) {
            return Err(AnnealError::invalid(
                "initial_temperature",
                format!("must be positive and finite, got {}", self.initial_temperature),
            ));
        }
        if !(self.min_temperature.is_finite() && self.min_temperature > 0.0) {
            return Err(AnnealError::invalid(
                "min_temperature",
                format!("must be positive and finite, got {}", self.min_temperature),
            ));
        }
        if self.min_temperature >= self.initial_temperature {
            return Err(AnnealError::invalid(
                "min_temperature",
                format!(
                    "must be less than initial_temperature ({} >= {})",
                    self.min_temperature, self.initial_temperature
                ),
            ));
        }
        if !(self.cooling_rate > 0.0 && self.cooling_rate < 1.0) {
            return Err(AnnealError::invalid(
                "cooling_rate",
                format!("must be in (0, 1), got {}", self.cooling_rate),
            ));
        }
        if self.max_iterations == 0 {
            return Err(AnnealError::invalid("max_iterations", "must be positive"));
        }
        if self.trace_interval == 0 {
            return Err(AnnealError::invalid("trace_interval", "must be positive"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejected_name(config: &AnnealConfig) -> &'static str {
        match config.validate() {
            Err(AnnealError::InvalidParameter { name, .. }) => name,
            other => panic!("expected InvalidParameter, got {other:?}"),
        }
    }

    #[test]
    fn test_default_config() {
        let config = AnnealConfig::default();
        assert!((config.initial_temperature - 1000.0).abs() < 1e-10);
        assert!((config.min_temperature - 1e-8).abs() < 1e-20);
        assert!((config.cooling_rate - 0.995).abs() < 1e-12);
        assert_eq!(config.max_iterations, 100_000);
        assert_eq!(config.trace_interval, 100);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_validate_ok() {
        assert!(AnnealConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_bad_temperature() {
        let config = AnnealConfig::default().with_initial_temperature(-1.0);
        assert_eq!(rejected_name(&config), "initial_temperature");

        let config = AnnealConfig::default().with_initial_temperature(f64::NAN);
        assert_eq!(rejected_name(&config), "initial_temperature");

        let config = AnnealConfig::default().with_min_temperature(0.0);
        assert_eq!(rejected_name(&config), "min_temperature");
    }

    #[test]
    fn test_validate_min_ge_initial() {
        let config = AnnealConfig::default()
            .with_initial_temperature(10.0)
            .with_min_temperature(10.0);
        assert_eq!(rejected_name(&config), "min_temperature");
    }

    #[test]
    fn test_validate_bad_cooling_rate() {
        for rate in [0.0, 1.0, 1.5, -0.2, f64::NAN] {
            let config = AnnealConfig::default().with_cooling_rate(rate);
            assert_eq!(rejected_name(&config), "cooling_rate", "rate {rate}");
        }
    }

    #[test]
    fn test_validate_zero_budgets() {
        let config = AnnealConfig::default().with_max_iterations(0);
        assert_eq!(rejected_name(&config), "max_iterations");

        let config = AnnealConfig::default().with_trace_interval(0);
        assert_eq!(rejected_name(&config), "trace_interval");
    }
}

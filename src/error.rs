//! Error types.

/// Result type for annealer operations.
pub type AnnealResult<T> = Result<T, AnnealError>;

/// Errors raised before a search starts.
///
/// A run that fails to find the optimal tour is not an error; the
/// annealer is a heuristic and always returns its best-known route.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnnealError {
    #[error("at least 2 points are required to build a tour, found {found}")]
    TooFewPoints { found: usize },

    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("point {index} has a non-finite coordinate")]
    NonFiniteCoordinate { index: usize },
}

impl AnnealError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        AnnealError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

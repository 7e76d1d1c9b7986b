use std::time::Duration;

use thiserror::Error;

/// Why no move could be produced. Remote failures always map onto one of
/// these so the caller can decide what to do next.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HybridError {
    #[error("no legal moves in this position")]
    NoLegalMoves,

    #[error("move provider rate limit reached")]
    RateLimited,

    #[error("returned move {0:?} is not legal in this position")]
    InvalidMoveReturned(String),

    #[error("move provider failed: {0}")]
    ProviderError(String),

    #[error("no answer within {0:?}")]
    TimeoutExpired(Duration),

    #[error("reference engine unavailable: {0}")]
    ReferenceEngineUnavailable(String),
}

impl HybridError {
    /// Whether the local search may stand in for the failed source when the
    /// caller opted into fallback. Rate limits are always surfaced.
    pub fn allows_local_fallback(&self) -> bool {
        matches!(
            self,
            HybridError::InvalidMoveReturned(_)
                | HybridError::ProviderError(_)
                | HybridError::TimeoutExpired(_)
                | HybridError::ReferenceEngineUnavailable(_)
        )
    }
}

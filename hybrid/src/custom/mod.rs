//! Remote move suggester, typically a language model behind an HTTP API.

mod http;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{HybridError, ProviderConfig};

pub use http::HttpSuggester;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionRequest {
    pub fen: String,
    pub move_history: Vec<String>,
    pub legal_moves: Vec<String>,
    pub config: ProviderConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionResponse {
    #[serde(rename = "move", default)]
    pub mv: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub is_limit_reached: bool,
}

#[async_trait]
pub trait MoveSuggester: Send + Sync {
    async fn suggest(&self, request: &SuggestionRequest) -> Result<SuggestionResponse, HybridError>;
}

/// Turns a suggester response into a legal move or a typed failure.
/// The move must match a legal move exactly once trimmed; it is never
/// repaired into a different one.
pub(crate) fn classify(
    response: SuggestionResponse,
    legal_moves: &[String],
) -> Result<String, HybridError> {
    if response.is_limit_reached {
        return Err(HybridError::RateLimited);
    }
    if let Some(error) = response.error {
        return Err(HybridError::ProviderError(error));
    }

    let mv = response
        .mv
        .map(|mv| mv.trim().to_string())
        .filter(|mv| !mv.is_empty())
        .ok_or_else(|| HybridError::ProviderError("no move in response".to_string()))?;

    if legal_moves.iter().any(|legal| *legal == mv) {
        Ok(mv)
    } else {
        Err(HybridError::InvalidMoveReturned(mv))
    }
}

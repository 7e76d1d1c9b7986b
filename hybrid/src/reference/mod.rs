//! Reference engine reached over an asynchronous channel. It answers in
//! coordinate notation, which is mapped back to SAN through the position's
//! verbose move list.

mod channel;
mod process;

use async_trait::async_trait;
use rules::VerboseMove;
use uci::parse_coordinate_move;

use crate::HybridError;

pub use channel::{ChannelEngine, ReferenceJob};
pub use process::spawn_uci_engine;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceRequest {
    pub fen: String,
    pub depth: u8,
    pub time_budget_ms: u64,
}

#[async_trait]
pub trait ReferenceEngine: Send + Sync {
    /// Best move for the requested position, in coordinate notation (e2e4).
    async fn best_move(&self, request: ReferenceRequest) -> Result<String, HybridError>;
}

/// Finds the legal move whose squares and promotion match `coordinate`.
pub fn coordinate_to_san(coordinate: &str, moves: &[VerboseMove]) -> Result<String, HybridError> {
    let invalid = || HybridError::InvalidMoveReturned(coordinate.trim().to_string());

    let parsed = parse_coordinate_move(coordinate).ok_or_else(invalid)?;
    moves
        .iter()
        .find(|m| m.from == parsed.from && m.to == parsed.to && m.promotion == parsed.promotion)
        .map(|m| m.san.clone())
        .ok_or_else(invalid)
}

mod cozy;
mod error;
mod position;
mod types;

pub use cozy::CozyPosition;
pub use error::RulesError;
pub use position::Position;
pub use types::{Grid, PieceKind, PlacedPiece, Side, Square, VerboseMove};

/// FEN of the standard starting position.
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

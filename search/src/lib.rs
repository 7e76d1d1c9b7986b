mod config;
pub mod engine;
mod history;
mod move_ordering;
mod time_control;
mod transposition;
mod utils;
mod zobrist;


/// Maximum search depth supported by the engine.
pub const MAX_DEPTH: usize = 64;
/// Maximum distance from the root, quiescence included.
pub const MAX_PLY: usize = 128;

pub use config::EngineConfig;
pub use engine::{Engine, MoveOrigin, SearchResult};
pub use transposition::{Bound, ProbeResult, TranspositionTable};
pub use zobrist::Zobrist;

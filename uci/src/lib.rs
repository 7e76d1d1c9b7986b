//! Client side of the UCI protocol: the commands we send to a reference
//! engine and the replies we read back.

mod decoder;
mod encoder;
mod options;
mod utils;

pub mod commands;

pub use commands::{EngineCommand, EngineReply};
pub use decoder::Decoder;
pub use encoder::Encoder;
pub use options::{UciOption, UciOptionType};
pub use utils::{parse_coordinate_move, CoordinateMove};

/// Null move in UCI format, sent by engines as the bestmove when no legal move exists.
pub const NULL_MOVE: &str = "0000";

mod main;
mod quiescence;
mod utils;

pub use main::{order_moves, OrderedMove};
pub use quiescence::order_tactical_moves;

mod notation;
mod score;

pub use notation::MoveInfo;
pub use score::{value_from_tt, value_to_tt};

pub mod hce;
pub mod piece_values;
pub mod scores;
mod traits;

pub use piece_values::PieceValues;
pub use traits::HCE;

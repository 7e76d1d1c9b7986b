mod history_heuristic;
mod killers;

pub use history_heuristic::HistoryHeuristic;
pub use killers::KillerMoves;

use rand::seq::SliceRandom;
use rules::Position;

use super::Engine;

/// Piece placement and side to move, mapped to the moves played from there.
const BOOK: [(&str, &[&str]); 3] = [
    (
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w",
        &["e4", "d4"],
    ),
    (
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b",
        &["e5", "c5", "e6", "c6"],
    ),
    (
        "rnbqkbnr/pppppppp/8/8/3P4/8/PPP1PPPP/RNBQKBNR b",
        &["d5", "Nf6", "f5", "c6"],
    ),
];

impl Engine {
    /// A random book move for the first move of either side, if one is legal.
    pub(super) fn book_move(&mut self, position: &dyn Position, legal_moves: &[String]) -> Option<String> {
        let fen = position.to_fen();
        let key = fen.split_whitespace().take(2).collect::<Vec<_>>().join(" ");

        let (_, candidates) = BOOK.iter().find(|(placement, _)| *placement == key)?;
        let playable: Vec<&str> = candidates
            .iter()
            .copied()
            .filter(|mv| legal_moves.iter().any(|legal| legal == mv))
            .collect();

        playable
            .choose(&mut self.book_rng)
            .map(|mv| mv.to_string())
    }
}

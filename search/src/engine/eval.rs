use evaluation::scores::{is_mate_score, MATE_VALUE};
use rules::{Position, Side};

use super::Engine;

impl Engine {
    /// Static evaluation from the side to move's point of view.
    ///
    /// The evaluator works in the absolute frame (Black positive), so the
    /// cached score is negated for White. A checkmate becomes a mate score
    /// shortened by `ply`, preferring faster mates.
    pub(crate) fn eval(&mut self, position: &dyn Position, hash: u64, ply: usize) -> i32 {
        let side_to_move = position.turn();

        let absolute = match self.eval_cache.probe(hash) {
            Some(score) => score,
            None => {
                let score = self.hce.evaluate(
                    &position.board(),
                    side_to_move,
                    position.is_checkmate(),
                );
                self.eval_cache.store(hash, score);
                score
            }
        };

        let relative = match side_to_move {
            Side::Black => absolute,
            Side::White => -absolute,
        };

        if is_mate_score(relative) {
            let mate = MATE_VALUE - ply as i32;
            return if relative > 0 { mate } else { -mate };
        }

        relative
    }
}

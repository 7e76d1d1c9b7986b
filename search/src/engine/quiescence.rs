use evaluation::scores::NEG_INFINITY;
use log::debug;
use rules::Position;

use crate::move_ordering::order_tactical_moves;

use super::Engine;

impl Engine {
    /// Searches captures and promotions (plus checks near the horizon) until
    /// the position is quiet, so leaves are not scored mid-exchange.
    ///
    /// Fail-soft. Returns 0 once the search has been stopped.
    pub(crate) fn quiescence(
        &mut self,
        position: &mut dyn Position,
        mut alpha: i32,
        beta: i32,
        ply: usize,
        qs_ply: u8,
    ) -> i32 {
        if self.is_stopped() {
            return 0;
        }

        self.nodes += 1;
        if self.controller.poll(self.nodes) {
            return 0;
        }
        self.max_ply_reached = self.max_ply_reached.max(ply);

        let hash = self.hash(position);
        let stand_pat = self.eval(position, hash, ply);

        // Checkmate is already scored; stalemate falls through to material.
        if position.is_game_over() || qs_ply >= self.config.qs_max_ply.value {
            return stand_pat;
        }

        let in_check = position.is_check();

        // Do a "stand-pat" evaluation if not in check
        let mut best_score = NEG_INFINITY;
        if !in_check {
            if stand_pat >= beta {
                return stand_pat;
            }
            best_score = stand_pat;
            alpha = alpha.max(stand_pat);
        }

        let include_checks = qs_ply < self.config.qs_check_plies.value;
        let moves = order_tactical_moves(
            position.legal_moves(),
            &position.board(),
            position.turn(),
            in_check,
            include_checks,
            &self.piece_values,
        );

        for mv in moves {
            if let Err(err) = position.apply_move(&mv) {
                debug!("quiescence: skipping {}: {}", mv, err);
                continue;
            }
            let score = -self.quiescence(position, -beta, -alpha, ply + 1, qs_ply + 1);
            position.undo_move();

            if self.is_stopped() {
                return 0;
            }

            if score > best_score {
                best_score = score;
            }
            if score > alpha {
                alpha = score;
            }
            if alpha >= beta {
                break;
            }
        }

        // In check with every evasion skipped; nothing better is known.
        if best_score == NEG_INFINITY {
            return stand_pat;
        }

        best_score
    }
}

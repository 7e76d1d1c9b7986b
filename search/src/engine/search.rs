use evaluation::scores::{MATE_BOUND, MATE_VALUE, NEG_INFINITY, POS_INFINITY};
use log::{debug, info};
use rules::Position;

use crate::{
    move_ordering::{order_moves, OrderedMove},
    transposition::Bound,
};

use super::{Engine, MoveOrigin, SearchResult};

impl Engine {
    /// Picks a move for the side to move, or `None` when there is none.
    ///
    /// A one-ply mate is returned straight away. Otherwise the position is
    /// searched one depth at a time until the time budget or the maximum
    /// depth is reached; an iteration cut short is thrown away, so the move
    /// always comes from the last completed depth.
    pub fn best_move(&mut self, position: &mut dyn Position) -> Option<SearchResult> {
        let legal_moves = position.legal_moves();
        if legal_moves.is_empty() {
            return None;
        }

        self.init_search();

        if let Some(mv) = self.find_immediate_mate(position, &legal_moves) {
            return Some(self.result(mv, MATE_VALUE - 1, 1, MoveOrigin::ImmediateMate));
        }

        if self.config.own_book.value {
            if let Some(mv) = self.book_move(position, &legal_moves) {
                debug!("book move {}", mv);
                return Some(self.result(mv, 0, 0, MoveOrigin::Book));
            }
        }

        let mut completed: Option<(String, i32, u8)> = None;
        let mut depth = 1;

        while self.controller.should_continue_to_next_depth(depth) {
            self.controller.on_iteration_start();

            let Some((mv, score)) = self.search_root(position, depth) else {
                debug!("depth {} interrupted, keeping last completed depth", depth);
                break;
            };

            self.controller.on_iteration_complete();
            info!(
                "depth {} score {} nodes {} seldepth {} researches {} time {}ms move {}",
                depth,
                score,
                self.nodes,
                self.max_ply_reached,
                self.researches,
                self.controller.elapsed().as_millis(),
                mv
            );

            completed = Some((mv, score, depth));

            // A forced mate for us will not get any better.
            if score >= MATE_BOUND {
                break;
            }
            depth += 1;
        }

        match completed {
            Some((mv, score, depth)) => Some(self.result(mv, score, depth, MoveOrigin::Search)),
            None => {
                let mv = self.fallback_move(position, legal_moves)?;
                debug!("no depth completed, falling back to {}", mv);
                Some(self.result(mv, 0, 0, MoveOrigin::Fallback))
            }
        }
    }

    fn result(&self, best_move: String, score: i32, depth: u8, origin: MoveOrigin) -> SearchResult {
        SearchResult {
            best_move,
            score,
            depth,
            nodes: self.nodes,
            origin,
        }
    }

    fn find_immediate_mate(&mut self, position: &mut dyn Position, legal_moves: &[String]) -> Option<String> {
        for mv in legal_moves {
            if position.apply_move(mv).is_err() {
                continue;
            }
            self.nodes += 1;
            let mate = position.is_checkmate();
            position.undo_move();

            if mate {
                return Some(mv.clone());
            }
        }
        None
    }

    fn fallback_move(&self, position: &dyn Position, legal_moves: Vec<String>) -> Option<String> {
        let hash = self.hash(position);
        self.order(position, legal_moves, self.tt.best_move(hash), 0)
            .into_iter()
            .next()
            .map(|m| m.mv)
    }

    fn order(
        &self,
        position: &dyn Position,
        moves: Vec<String>,
        hash_move: Option<&str>,
        ply: usize,
    ) -> Vec<OrderedMove> {
        order_moves(
            moves,
            &position.board(),
            position.turn(),
            hash_move,
            self.killer_moves.get(ply),
            &self.history_heuristic,
            &self.piece_values,
        )
    }

    /// Full-window search of every root move. `None` if the search was
    /// stopped before all moves were scored.
    pub(super) fn search_root(&mut self, position: &mut dyn Position, depth: u8) -> Option<(String, i32)> {
        let hash = self.hash(position);
        let hash_move = self.tt.best_move(hash).map(str::to_owned);
        let moves = self.order(position, position.legal_moves(), hash_move.as_deref(), 0);

        let mut alpha = NEG_INFINITY;
        let beta = POS_INFINITY;
        let mut best: Option<(String, i32)> = None;

        for m in moves {
            if let Err(err) = position.apply_move(&m.mv) {
                debug!("root: skipping {}: {}", m.mv, err);
                continue;
            }
            let score = -self.negamax(position, depth - 1, -beta, -alpha, 1);
            position.undo_move();

            // Check if we were stopped during the subtree search
            if self.is_stopped() {
                return None;
            }

            if best.as_ref().map_or(true, |(_, best_score)| score > *best_score) {
                best = Some((m.mv, score));
            }
            alpha = alpha.max(score);
        }

        if let Some((mv, score)) = &best {
            self.tt
                .store(hash, depth, *score, NEG_INFINITY, POS_INFINITY, Some(mv.clone()), 0);
        }

        best
    }

    /// Alpha-beta negamax; the score is from the side to move's view.
    /// Every applied move is undone before returning, cutoffs included.
    pub(crate) fn negamax(
        &mut self,
        position: &mut dyn Position,
        depth: u8,
        mut alpha: i32,
        beta: i32,
        ply: usize,
    ) -> i32 {
        if self.is_stopped() {
            return 0;
        }

        self.nodes += 1;
        if self.controller.poll(self.nodes) {
            return 0;
        }

        let hash = self.hash(position);

        // Stored bounds only cut. The window is left as the caller passed it.
        if let Some(entry) = self.tt.probe(hash, depth, ply) {
            let cutoff = match entry.bound {
                Bound::Exact => true,
                Bound::Lower => entry.value >= beta,
                Bound::Upper => entry.value <= alpha,
            };
            if cutoff {
                return entry.value;
            }
        }

        let original_alpha = alpha;

        if depth == 0 || position.is_game_over() {
            return self.quiescence(position, alpha, beta, ply, 0);
        }

        let in_check = position.is_check();
        let hash_move = self.tt.best_move(hash).map(str::to_owned);
        let moves = self.order(position, position.legal_moves(), hash_move.as_deref(), ply);

        let mut best_score = NEG_INFINITY;
        let mut best_move = None;

        for (index, m) in moves.iter().enumerate() {
            if let Err(err) = position.apply_move(&m.mv) {
                debug!("negamax: skipping {}: {}", m.mv, err);
                continue;
            }

            let score = if self.can_reduce(m, index, depth, in_check) {
                let reduced = depth.saturating_sub(1 + self.config.lmr_reduction.value);
                let score = -self.negamax(position, reduced, -alpha - 1, -alpha, ply + 1);
                // Verification re-search at full depth
                if score > alpha {
                    self.researches += 1;
                    -self.negamax(position, depth - 1, -beta, -alpha, ply + 1)
                } else {
                    score
                }
            } else {
                -self.negamax(position, depth - 1, -beta, -alpha, ply + 1)
            };

            position.undo_move();

            if self.is_stopped() {
                return 0;
            }

            if score > best_score {
                best_score = score;
                best_move = Some(m.mv.clone());
            }
            if score > alpha {
                alpha = score;
            }

            if alpha >= beta {
                if m.info.is_quiet() {
                    self.killer_moves.insert(ply, &m.mv);
                    let bonus = self.history_heuristic.get_bonus(depth);
                    self.history_heuristic.update(&m.mv, bonus);
                }
                break;
            }
        }

        if best_move.is_none() {
            return self.quiescence(position, alpha, beta, ply, 0);
        }

        self.tt
            .store(hash, depth, best_score, original_alpha, beta, best_move, ply);

        best_score
    }

    /// Late move reduction: quiet, non-killer moves far down the list.
    #[inline(always)]
    fn can_reduce(&self, m: &OrderedMove, index: usize, depth: u8, in_check: bool) -> bool {
        depth >= self.config.lmr_min_depth.value
            && index > self.config.lmr_min_move_index.value
            && !in_check
            && m.is_reducible()
    }
}

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use std::time::Duration;

use evaluation::{hce, PieceValues, HCE};
use rand::{rngs::StdRng, SeedableRng};
use rules::Position;

use crate::{
    history::{HistoryHeuristic, KillerMoves},
    time_control::SearchController,
    transposition::{EvalCache, TranspositionTable},
    EngineConfig, Zobrist,
};

mod book;
mod eval;
mod quiescence;
mod search;

/// How the engine arrived at its move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOrigin {
    /// One-ply checkmate found before any search.
    ImmediateMate,
    Book,
    /// Result of the last fully completed iteration.
    Search,
    /// Time ran out before depth 1 completed; first ordered move.
    Fallback,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub best_move: String,
    /// From the side to move's point of view.
    pub score: i32,
    pub depth: u8,
    pub nodes: u64,
    pub origin: MoveOrigin,
}

pub struct Engine {
    /// Configuration for the engine
    config: EngineConfig,

    /// Signal to terminate search (time control or caller)
    stop: Arc<AtomicBool>,

    /// Piece values for the engine
    piece_values: PieceValues,

    /// Hand-crafted evaluation, absolute frame (Black positive)
    hce: Box<dyn HCE>,

    zobrist: Zobrist,

    /// Number of nodes searched
    nodes: u64,
    /// Deepest ply reached including quiescence
    max_ply_reached: usize,
    /// Reduced searches that had to be repeated at full depth
    researches: u64,

    controller: SearchController,

    /// Main transposition table
    tt: TranspositionTable,
    /// Static evaluations, absolute frame
    eval_cache: EvalCache,

    /// Quiet moves that caused beta cutoffs (2 per ply, most recent first).
    killer_moves: KillerMoves,
    /// Scores quiet moves by search success
    history_heuristic: HistoryHeuristic,

    book_rng: StdRng,
}

impl Engine {
    pub fn new(config: &EngineConfig) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let piece_values = config.get_piece_values();

        let mut instance = Self {
            config: config.clone(),
            piece_values,
            hce: Box::new(hce::Evaluator::new(piece_values, config.get_hce_config())),
            zobrist: Zobrist::new(config.zobrist_seed.value),

            nodes: 0,
            max_ply_reached: 0,
            researches: 0,
            controller: SearchController::new(Duration::ZERO, 1, 1, Arc::clone(&stop)),
            stop,

            tt: TranspositionTable::new(1, 10),
            eval_cache: EvalCache::new(1, 10),

            killer_moves: KillerMoves::new(),
            history_heuristic: HistoryHeuristic::new(1, 1, 10),

            book_rng: StdRng::seed_from_u64(config.book_seed.value),
        };

        instance.configure(config, true);

        instance
    }

    pub fn configure(&mut self, config: &EngineConfig, init: bool) {
        let old_config = std::mem::replace(&mut self.config, config.clone());

        self.piece_values = config.get_piece_values();
        self.hce = Box::new(hce::Evaluator::new(
            self.piece_values,
            config.get_hce_config(),
        ));

        let evaluation_changed = old_config.hce_bishop_pair_bonus.value
            != config.hce_bishop_pair_bonus.value
            || old_config.hce_king_shield_bonus.value != config.hce_king_shield_bonus.value;
        let eviction_changed = old_config.eviction_percent.value != config.eviction_percent.value;

        if init || old_config.zobrist_seed.value != config.zobrist_seed.value {
            self.zobrist = Zobrist::new(config.zobrist_seed.value);
        }

        if init
            || eviction_changed
            || old_config.zobrist_seed.value != config.zobrist_seed.value
            || old_config.hash_entries.value != config.hash_entries.value
        {
            self.tt = TranspositionTable::new(
                config.hash_entries.value,
                config.eviction_percent.value,
            );
        }

        if init
            || eviction_changed
            || evaluation_changed
            || old_config.zobrist_seed.value != config.zobrist_seed.value
            || old_config.eval_cache_entries.value != config.eval_cache_entries.value
        {
            self.eval_cache = EvalCache::new(
                config.eval_cache_entries.value,
                config.eviction_percent.value,
            );
        }

        if init || !self.history_heuristic.matches_config(config) {
            self.history_heuristic.configure(config);
        }

        if init || old_config.book_seed.value != config.book_seed.value {
            self.book_rng = StdRng::seed_from_u64(config.book_seed.value);
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn name(&self) -> String {
        format!("Negamax ({})", self.hce.name())
    }

    /// Forgets everything learned in the previous game.
    pub fn new_game(&mut self) {
        self.tt.clear();
        self.eval_cache.clear();
        self.killer_moves.clear();
        self.history_heuristic.reset();
    }

    pub fn stop(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }

    /// Flag observed at every node poll. Raising it makes the running search
    /// return the last completed depth.
    pub fn stop_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stop)
    }

    /// Nodes visited by the last search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    pub fn transposition_table(&self) -> &TranspositionTable {
        &self.tt
    }

    #[inline(always)]
    pub(crate) fn hash(&self, position: &dyn Position) -> u64 {
        self.zobrist.hash(&position.board(), position.turn())
    }

    pub(crate) fn init_search(&mut self) {
        self.stop.store(false, Ordering::Relaxed);

        self.nodes = 0;
        self.max_ply_reached = 0;
        self.researches = 0;

        self.controller = SearchController::new(
            Duration::from_millis(self.config.move_time.value),
            self.config.max_depth.value.min(crate::MAX_DEPTH as u8),
            self.config.node_poll_interval.value,
            Arc::clone(&self.stop),
        );
    }

    #[inline(always)]
    pub(super) fn is_stopped(&self) -> bool {
        self.stop.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reconfigure_rebuilds_tables() {
        let mut engine = Engine::new(&EngineConfig::default());
        assert_eq!(engine.transposition_table().capacity(), 200_000);

        let mut config = EngineConfig::default();
        config.set_option("HashEntries", "4096").unwrap();
        engine.configure(&config, false);
        assert_eq!(engine.transposition_table().capacity(), 4096);
    }

    #[test]
    fn test_stop_handle_shared() {
        let engine = Engine::new(&EngineConfig::default());
        let handle = engine.stop_handle();
        engine.stop();
        assert!(handle.load(Ordering::Relaxed));
    }

    #[test]
    fn test_name() {
        let engine = Engine::new(&EngineConfig::default());
        assert!(engine.name().starts_with("Negamax"));
    }
}

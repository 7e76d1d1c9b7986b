use ahash::AHashMap;
use log::debug;

use super::eviction::evict_lowest;
use crate::utils::{value_from_tt, value_to_tt};

/// Indicates whether the stored value is exact or a bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Bound {
    /// True minimax value (alpha < value < beta)
    #[default]
    Exact,
    /// Value >= beta (beta cutoff)
    Lower,
    /// Value <= alpha (all moves failed)
    Upper,
}

impl Bound {
    pub fn classify(value: i32, alpha: i32, beta: i32) -> Self {
        if value <= alpha {
            Bound::Upper
        } else if value >= beta {
            Bound::Lower
        } else {
            Bound::Exact
        }
    }
}

/// Result from probing the transposition table.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeResult {
    /// Score from searching this position (mate-adjusted for current ply)
    pub value: i32,
    pub bound: Bound,
    pub best_move: Option<String>,
    /// Search depth that produced this result
    pub depth: u8,
}

#[derive(Debug, Clone)]
struct TTEntry {
    value: i32,
    bound: Bound,
    depth: u8,
    best_move: Option<String>,
}

/// Bounded map of search results keyed by Zobrist hash.
///
/// A result is only handed out for cutoffs when it was searched at least as
/// deep as the caller needs. When full, the shallowest entries go first.
///
/// <https://www.chessprogramming.org/Transposition_Table>
pub struct TranspositionTable {
    entries: AHashMap<u64, TTEntry>,
    capacity: usize,
    eviction_percent: usize,
}

impl TranspositionTable {
    pub fn new(capacity: usize, eviction_percent: usize) -> Self {
        Self {
            entries: AHashMap::with_capacity(capacity.min(1 << 20)),
            capacity: capacity.max(1),
            eviction_percent,
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the stored result only if `stored depth >= depth`.
    pub fn probe(&self, hash: u64, depth: u8, ply: usize) -> Option<ProbeResult> {
        let entry = self.entries.get(&hash)?;
        if entry.depth < depth {
            return None;
        }
        Some(ProbeResult {
            value: value_from_tt(entry.value, ply),
            bound: entry.bound,
            best_move: entry.best_move.clone(),
            depth: entry.depth,
        })
    }

    /// Best move from any previous search of this position, whatever its depth.
    pub fn best_move(&self, hash: u64) -> Option<&str> {
        self.entries.get(&hash)?.best_move.as_deref()
    }

    /// Stores a result, tagging it against the window it was searched with.
    /// An existing deeper entry for the same position is kept.
    #[allow(clippy::too_many_arguments)]
    pub fn store(
        &mut self,
        hash: u64,
        depth: u8,
        value: i32,
        original_alpha: i32,
        beta: i32,
        best_move: Option<String>,
        ply: usize,
    ) {
        let bound = Bound::classify(value, original_alpha, beta);

        if let Some(existing) = self.entries.get_mut(&hash) {
            if existing.depth > depth {
                if existing.best_move.is_none() {
                    existing.best_move = best_move;
                }
                return;
            }
        } else {
            let evicted = evict_lowest(
                &mut self.entries,
                self.capacity,
                self.eviction_percent,
                |e: &TTEntry| e.depth,
            );
            if evicted > 0 {
                debug!("tt: evicted {} shallow entries", evicted);
            }
        }

        self.entries.insert(
            hash,
            TTEntry {
                value: value_to_tt(value, ply),
                bound,
                depth,
                best_move,
            },
        );
    }
}

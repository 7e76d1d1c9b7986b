use ahash::AHashMap;
use log::debug;

use crate::transposition::evict_lowest;
use crate::EngineConfig;

/// Cutoff counts per move string, rewarding `depth²` per beta cutoff.
///
/// Scores saturate at `max_history` so they never outrank killers. The table
/// is bounded; when full, the lowest-scoring moves are dropped.
///
/// <https://www.chessprogramming.org/History_Heuristic>
#[derive(Clone)]
pub struct HistoryHeuristic {
    history: AHashMap<String, i32>,

    max_history: i32,
    capacity: usize,
    eviction_percent: usize,
}

impl HistoryHeuristic {
    pub fn new(max_history: i32, capacity: usize, eviction_percent: usize) -> Self {
        Self {
            history: AHashMap::new(),
            max_history,
            capacity: capacity.max(1),
            eviction_percent,
        }
    }

    pub fn configure(&mut self, config: &EngineConfig) {
        self.max_history = config.history_max_value.value;
        self.capacity = config.history_entries.value.max(1);
        self.eviction_percent = config.eviction_percent.value;

        self.reset();
    }

    pub fn matches_config(&self, config: &EngineConfig) -> bool {
        self.max_history == config.history_max_value.value
            && self.capacity == config.history_entries.value.max(1)
            && self.eviction_percent == config.eviction_percent.value
    }

    #[inline(always)]
    pub fn reset(&mut self) {
        self.history.clear();
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    #[inline(always)]
    pub fn get(&self, mv: &str) -> i32 {
        self.history.get(mv).copied().unwrap_or(0)
    }

    #[inline(always)]
    pub fn get_bonus(&self, depth: u8) -> i32 {
        let depth = depth as i32;
        depth * depth
    }

    pub fn update(&mut self, mv: &str, bonus: i32) {
        if let Some(entry) = self.history.get_mut(mv) {
            *entry = (*entry + bonus).min(self.max_history);
            return;
        }

        let evicted = evict_lowest(
            &mut self.history,
            self.capacity,
            self.eviction_percent,
            |score| *score,
        );
        if evicted > 0 {
            debug!("history: evicted {} entries", evicted);
        }
        self.history
            .insert(mv.to_string(), bonus.min(self.max_history));
    }
}

use ahash::AHashMap;

use super::eviction::evict_lowest;

/// Static evaluations keyed by Zobrist hash. Evaluations carry no depth, so
/// the oldest entries are evicted first.
pub struct EvalCache {
    entries: AHashMap<u64, (i32, u64)>,
    capacity: usize,
    eviction_percent: usize,
    generation: u64,
}

impl EvalCache {
    pub fn new(capacity: usize, eviction_percent: usize) -> Self {
        Self {
            entries: AHashMap::with_capacity(capacity.min(1 << 20)),
            capacity: capacity.max(1),
            eviction_percent,
            generation: 0,
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.generation = 0;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline(always)]
    pub fn probe(&self, hash: u64) -> Option<i32> {
        self.entries.get(&hash).map(|&(score, _)| score)
    }

    pub fn store(&mut self, hash: u64, score: i32) {
        if !self.entries.contains_key(&hash) {
            evict_lowest(
                &mut self.entries,
                self.capacity,
                self.eviction_percent,
                |&(_, generation)| generation,
            );
        }
        self.generation += 1;
        self.entries.insert(hash, (score, self.generation));
    }
}

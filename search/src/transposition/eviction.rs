use std::hash::Hash;

use ahash::AHashMap;

/// Makes room for one more key in a bounded map.
///
/// When `map` already holds `capacity` entries, the `percent` lowest-ranked
/// ones (at least one) are dropped in a single batch. Returns how many were
/// evicted.
pub(crate) fn evict_lowest<K, V, R>(
    map: &mut AHashMap<K, V>,
    capacity: usize,
    percent: usize,
    rank: impl Fn(&V) -> R,
) -> usize
where
    K: Eq + Hash + Clone,
    R: Ord,
{
    if map.len() < capacity {
        return 0;
    }

    let count = (map.len() * percent / 100).clamp(1, map.len());
    let mut ranked: Vec<(R, K)> = map.iter().map(|(k, v)| (rank(v), k.clone())).collect();
    ranked.select_nth_unstable_by(count - 1, |a, b| a.0.cmp(&b.0));

    for (_, key) in ranked.into_iter().take(count) {
        map.remove(&key);
    }
    count
}

use arrayvec::ArrayVec;

use crate::MAX_PLY;

/// Quiet moves that caused beta cutoffs, 2 per ply, most recent first.
///
/// <https://www.chessprogramming.org/Killer_Heuristic>
pub struct KillerMoves {
    slots: Vec<ArrayVec<String, 2>>,
}

impl Default for KillerMoves {
    fn default() -> Self {
        Self::new()
    }
}

impl KillerMoves {
    pub fn new() -> Self {
        Self {
            slots: vec![ArrayVec::new(); MAX_PLY],
        }
    }

    pub fn clear(&mut self) {
        for killers in &mut self.slots {
            killers.clear();
        }
    }

    pub fn get(&self, ply: usize) -> &[String] {
        self.slots.get(ply).map_or(&[], |killers| killers.as_slice())
    }

    pub fn insert(&mut self, ply: usize, mv: &str) {
        let Some(killers) = self.slots.get_mut(ply) else {
            return;
        };
        if killers.first().is_some_and(|k| k == mv) {
            return;
        }
        killers.retain(|k| k != mv);
        if killers.is_full() {
            killers.pop();
        }
        killers.insert(0, mv.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_most_recent_first_and_capped() {
        let mut killers = KillerMoves::new();
        killers.insert(3, "Nf3");
        killers.insert(3, "Bc4");
        killers.insert(3, "Qe2");

        assert_eq!(killers.get(3), ["Qe2", "Bc4"]);
        assert!(!killers.get(3).contains(&"Nf3".to_string()));
        assert!(killers.get(2).is_empty());
    }

    #[test]
    fn test_reinsert_moves_to_front_without_duplicates() {
        let mut killers = KillerMoves::new();
        killers.insert(0, "a3");
        killers.insert(0, "h3");
        killers.insert(0, "a3");
        assert_eq!(killers.get(0), ["a3", "h3"]);

        killers.insert(0, "a3");
        assert_eq!(killers.get(0), ["a3", "h3"]);
    }

    #[test]
    fn test_out_of_range_ply_ignored() {
        let mut killers = KillerMoves::new();
        killers.insert(MAX_PLY + 5, "e4");
        assert!(killers.get(MAX_PLY + 5).is_empty());
    }
}

use evaluation::scores::MATE_BOUND;

// Mate scores are stored relative to the node that found them, so the same
// entry reads correctly from any ply.

pub fn value_to_tt(score: i32, ply: usize) -> i32 {
    if score >= MATE_BOUND {
        score + ply as i32
    } else if score <= -MATE_BOUND {
        score - ply as i32
    } else {
        score
    }
}

pub fn value_from_tt(score: i32, ply: usize) -> i32 {
    if score >= MATE_BOUND {
        score - ply as i32
    } else if score <= -MATE_BOUND {
        score + ply as i32
    } else {
        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use evaluation::scores::MATE_VALUE;

    #[test]
    fn test_mate_scores_roundtrip_through_ply() {
        // Mate found 3 plies below a node at ply 2.
        let score = MATE_VALUE - 5;
        let stored = value_to_tt(score, 2);
        assert_eq!(stored, MATE_VALUE - 3);
        // Probed from ply 4 it is 7 plies from the root.
        assert_eq!(value_from_tt(stored, 4), MATE_VALUE - 7);

        let mated = -(MATE_VALUE - 5);
        assert_eq!(value_from_tt(value_to_tt(mated, 2), 2), mated);
    }

    #[test]
    fn test_ordinary_scores_untouched() {
        assert_eq!(value_to_tt(150, 10), 150);
        assert_eq!(value_from_tt(-150, 10), -150);
    }
}

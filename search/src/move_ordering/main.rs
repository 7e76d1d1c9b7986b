use evaluation::PieceValues;
use rules::{Grid, Side};

use crate::history::HistoryHeuristic;
use crate::utils::MoveInfo;

use super::utils::{capture_score, promotion_score, sort_descending, ScoredMove};

pub const HASH_MOVE_PRIORITY: i32 = 10_000_000;
pub const CAPTURE_PRIORITY: i32 = 1_000_000;
pub const KILLER_PRIORITY: [i32; 2] = [900_000, 800_000];

#[derive(Debug, Clone)]
pub struct OrderedMove {
    pub mv: String,
    pub info: MoveInfo,
    pub is_killer: bool,
}

impl OrderedMove {
    /// Candidate for late move reduction: not a capture, promotion, killer or check.
    #[inline(always)]
    pub fn is_reducible(&self) -> bool {
        self.info.is_quiet() && !self.is_killer && !self.info.gives_check
    }
}

/// Orders moves for the main search.
///
/// Every move gets an additive score: the hash move the top priority,
/// captures a flat bonus plus MVV-LVA, killers a bonus by slot, and all
/// moves their history score.
#[allow(clippy::too_many_arguments)]
pub fn order_moves(
    moves: Vec<String>,
    board: &Grid,
    side: Side,
    hash_move: Option<&str>,
    killers: &[String],
    history: &HistoryHeuristic,
    piece_values: &PieceValues,
) -> Vec<OrderedMove> {
    let mut scored: Vec<ScoredMove<OrderedMove>> = moves
        .into_iter()
        .map(|mv| {
            let info = MoveInfo::parse(&mv);
            let killer_slot = killers.iter().position(|k| *k == mv);
            let mut score = history.get(&mv);

            if hash_move == Some(mv.as_str()) {
                score += HASH_MOVE_PRIORITY;
            }

            let capture = capture_score(&info, board, side, piece_values);
            if let Some(mvv_lva) = capture {
                score += CAPTURE_PRIORITY + mvv_lva;
            }
            if info.promotion.is_some() {
                score += promotion_score(&info, piece_values);
                if capture.is_none() {
                    score += CAPTURE_PRIORITY;
                }
            }

            if let Some(slot) = killer_slot {
                score += KILLER_PRIORITY[slot.min(1)];
            }

            ScoredMove {
                mov: OrderedMove {
                    mv,
                    info,
                    is_killer: killer_slot.is_some(),
                },
                score,
            }
        })
        .collect();

    sort_descending(&mut scored);
    scored.into_iter().map(|s| s.mov).collect()
}

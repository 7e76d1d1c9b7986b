use evaluation::PieceValues;
use rules::{Grid, Side};

use crate::utils::MoveInfo;

pub(super) struct ScoredMove<T> {
    pub mov: T,
    pub score: i32,
}

/// Descending by score; equal scores keep generation order.
pub(super) fn sort_descending<T>(moves: &mut [ScoredMove<T>]) {
    moves.sort_by(|a, b| b.score.cmp(&a.score));
}

/// MVV-LVA: prefer capturing valuable pieces with cheap ones.
/// `None` when the move captures nothing.
#[inline(always)]
pub(super) fn capture_score(
    info: &MoveInfo,
    board: &Grid,
    mover: Side,
    piece_values: &PieceValues,
) -> Option<i32> {
    let victim = info.captured_piece(board, mover)?;
    Some(piece_values.get(victim) * 100 - piece_values.get(info.piece))
}

/// Extra value a promotion adds, so queening outranks under-promotion.
#[inline(always)]
pub(super) fn promotion_score(info: &MoveInfo, piece_values: &PieceValues) -> i32 {
    info.promotion
        .map_or(0, |piece| piece_values.get(piece) - piece_values.pawn)
}

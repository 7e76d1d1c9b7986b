use super::HCEConfig;
use crate::hce::context::EvalContext;
use rules::{PieceKind, Side};

// Pawns directly in front of the king act as a shield. Count our pawns one
// rank ahead in the 3-file window around the king. Not scored in the endgame.
#[inline(always)]
pub(super) fn evaluate(ctx: &EvalContext, side: Side, config: &HCEConfig) -> i32 {
    if ctx.endgame {
        return 0;
    }
    let Some(king) = ctx.king(side) else {
        return 0;
    };

    let shield = (-1..=1)
        .filter_map(|file_delta| king.offset(file_delta, side.forward()))
        .filter(|&square| {
            ctx.piece_at(square)
                .is_some_and(|p| p.kind == PieceKind::Pawn && p.side == side)
        })
        .count() as i32;

    shield * config.king_shield_bonus
}

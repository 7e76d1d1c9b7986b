use rules::Side;

use crate::hce::context::{pieces, EvalContext};
use crate::hce::pst;
use crate::piece_values::PieceValues;

pub(super) fn evaluate(ctx: &EvalContext, side: Side, piece_values: &PieceValues) -> i32 {
    let mut cp = 0;
    for (square, piece) in pieces(ctx.board).filter(|(_, p)| p.side == side) {
        cp += piece_values.get(piece.kind);
        cp += pst::value(piece.kind, side, square, ctx.endgame);
    }
    cp
}

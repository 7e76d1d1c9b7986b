use super::HCEConfig;
use crate::hce::context::EvalContext;
use rules::Side;

#[inline(always)]
pub(super) fn evaluate(ctx: &EvalContext, side: Side, config: &HCEConfig) -> i32 {
    // Bishop pair bonus
    if ctx.bishops[side.index()] >= 2 {
        config.bishop_pair_bonus
    } else {
        0
    }
}

// Score bounds and special values for alpha-beta search.
pub const SCORE_INF: i32 = 1_000_000;
pub const POS_INFINITY: i32 = SCORE_INF;
pub const NEG_INFINITY: i32 = -SCORE_INF;
/// Terminal bonus for checkmate. Search scores use MATE_VALUE - ply so faster mates win.
pub const MATE_VALUE: i32 = 100_000;
/// Any score at least this large in magnitude encodes a forced mate.
pub const MATE_BOUND: i32 = MATE_VALUE - 1_000;

#[inline(always)]
pub fn is_mate_score(score: i32) -> bool {
    score.abs() >= MATE_BOUND
}

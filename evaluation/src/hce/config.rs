#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HCEConfig {
    pub bishop_pair_bonus: i32,
    /// Per own pawn directly in front of the king (3-file window).
    pub king_shield_bonus: i32,
    /// Non-pawn, non-king pieces (both sides) at or below which the endgame starts.
    pub endgame_piece_threshold: u32,
}

impl Default for HCEConfig {
    fn default() -> Self {
        Self {
            bishop_pair_bonus: 40,
            king_shield_bonus: 10,
            endgame_piece_threshold: 6,
        }
    }
}

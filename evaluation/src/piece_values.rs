use rules::{Grid, PieceKind, Side};

/// Fixed material values in centipawns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceValues {
    pub pawn: i32,
    pub knight: i32,
    pub bishop: i32,
    pub rook: i32,
    pub queen: i32,
    pub king: i32,
}

impl Default for PieceValues {
    fn default() -> Self {
        Self {
            pawn: 100,
            knight: 320,
            bishop: 330,
            rook: 500,
            queen: 900,
            king: 20_000,
        }
    }
}

impl PieceValues {
    #[inline(always)]
    pub fn get(&self, kind: PieceKind) -> i32 {
        match kind {
            PieceKind::Pawn => self.pawn,
            PieceKind::Knight => self.knight,
            PieceKind::Bishop => self.bishop,
            PieceKind::Rook => self.rook,
            PieceKind::Queen => self.queen,
            PieceKind::King => self.king,
        }
    }

    /// Sums the values of all pieces `side` has on the board, king included.
    pub fn total_material(&self, board: &Grid, side: Side) -> i32 {
        board
            .iter()
            .flatten()
            .flatten()
            .filter(|piece| piece.side == side)
            .map(|piece| self.get(piece.kind))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rules::{CozyPosition, Position};

    #[test]
    fn test_start_material_is_balanced() {
        let values = PieceValues::default();
        let board = CozyPosition::default().board();
        let white = values.total_material(&board, Side::White);
        let black = values.total_material(&board, Side::Black);
        assert_eq!(white, black);
        assert_eq!(white, 8 * 100 + 2 * 320 + 2 * 330 + 2 * 500 + 900 + 20_000);
    }
}

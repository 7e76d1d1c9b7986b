use rules::{PieceKind, Side, Square};

/// Piece-Square Tables: position-dependent bonuses in centipawns.
///
/// Tables are defined for White (a1 = index 0, h8 = index 63); Black tables
/// are mirrored vertically. Rooks carry no positional term.
///
/// <https://www.chessprogramming.org/Piece-Square_Tables>
#[allow(clippy::upper_case_acronyms)]
pub(super) struct PST {
    pub pawn: [i32; 64],
    pub knight: [i32; 64],
    pub bishop: [i32; 64],
    pub queen: [i32; 64],
    pub king_middlegame: [i32; 64],
    pub king_endgame: [i32; 64],
}

const PST_TABLE: [PST; 2] = [
    // index 0 → White
    PST {
        pawn: WHITE_PAWN_PST,
        knight: WHITE_KNIGHT_PST,
        bishop: CENTER_PST,
        queen: CENTER_PST,
        king_middlegame: WHITE_KING_MIDDLEGAME_PST,
        king_endgame: KING_ENDGAME_PST,
    },
    // index 1 → Black
    PST {
        pawn: invert_pst(&WHITE_PAWN_PST),
        knight: invert_pst(&WHITE_KNIGHT_PST),
        bishop: invert_pst(&CENTER_PST),
        queen: invert_pst(&CENTER_PST),
        king_middlegame: invert_pst(&WHITE_KING_MIDDLEGAME_PST),
        king_endgame: invert_pst(&KING_ENDGAME_PST),
    },
];

/// Positional bonus for a piece of `side` standing on `square`.
#[inline(always)]
pub(super) fn value(kind: PieceKind, side: Side, square: Square, endgame: bool) -> i32 {
    let pst = &PST_TABLE[side.index()];
    let idx = square.index();
    match kind {
        PieceKind::Pawn => pst.pawn[idx],
        PieceKind::Knight => pst.knight[idx],
        PieceKind::Bishop => pst.bishop[idx],
        PieceKind::Rook => 0,
        PieceKind::Queen => pst.queen[idx],
        PieceKind::King if endgame => pst.king_endgame[idx],
        PieceKind::King => pst.king_middlegame[idx],
    }
}

/// Mirrors a White PST vertically to create Black's perspective.
/// Black's a8 corresponds to White's a1, etc.
const fn invert_pst(source: &[i32; 64]) -> [i32; 64] {
    let mut table = [0; 64];
    let mut i = 0;
    while i < 64 {
        let rank = i / 8;
        let file = i % 8;
        let flipped_index = (7 - rank) * 8 + file;
        table[i] = source[flipped_index];
        i += 1;
    }
    table
}

/// Distance-from-centre bonus, `weight` per half step on each axis.
const fn centralization(weight: i32) -> [i32; 64] {
    let mut table = [0; 64];
    let mut i = 0;
    while i < 64 {
        let file = (i % 8) as i32;
        let rank = (i / 8) as i32;
        let file_term = 6 - (7 - 2 * file).abs();
        let rank_term = 6 - (7 - 2 * rank).abs();
        table[i] = (file_term + rank_term) * weight / 2;
        i += 1;
    }
    table
}

// Pawns: reward central advance, discourage leaving d2/e2 unmoved.
const WHITE_PAWN_PST: [i32; 64] = [
    0, 0, 0, 0, 0, 0, 0, 0, // rank 1 (a1-h1)
    5, 10, 10, -20, -20, 10, 10, 5, // rank 2
    5, -5, -10, 0, 0, -10, -5, 5, // rank 3
    0, 0, 0, 20, 20, 0, 0, 0, // rank 4
    5, 5, 10, 25, 25, 10, 5, 5, // rank 5
    10, 10, 20, 30, 30, 20, 10, 10, // rank 6
    50, 50, 50, 50, 50, 50, 50, 50, // rank 7
    0, 0, 0, 0, 0, 0, 0, 0, // rank 8
];

// Knights: a knight on the rim is dim.
const WHITE_KNIGHT_PST: [i32; 64] = [
    -50, -40, -30, -30, -30, -30, -40, -50, // rank 1
    -40, -20, 0, 5, 5, 0, -20, -40, // rank 2
    -30, 5, 10, 15, 15, 10, 5, -30, // rank 3
    -30, 0, 15, 20, 20, 15, 0, -30, // rank 4
    -30, 5, 15, 20, 20, 15, 5, -30, // rank 5
    -30, 0, 10, 15, 15, 10, 0, -30, // rank 6
    -40, -20, 0, 0, 0, 0, -20, -40, // rank 7
    -50, -40, -30, -30, -30, -30, -40, -50, // rank 8
];

// Bishops and queens prefer the centre.
const CENTER_PST: [i32; 64] = centralization(5);

// King stays home behind its pawns until the endgame.
const WHITE_KING_MIDDLEGAME_PST: [i32; 64] = {
    let mut table = [-30; 64];
    let mut i = 0;
    while i < 16 {
        table[i] = 20;
        i += 1;
    }
    table
};

// Endgame king walks to the centre.
const KING_ENDGAME_PST: [i32; 64] = centralization(10);

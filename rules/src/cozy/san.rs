use cozy_chess::{Board, Color, File, Move, Piece, Rank, Square};

use crate::{PieceKind, Square as GridSquare};

/// Collect all legal moves into a Vec.
#[inline(always)]
pub(super) fn collect_legal_moves(board: &Board) -> Vec<Move> {
    let mut moves = Vec::new();
    board.generate_moves(|batch| {
        moves.extend(batch);
        false
    });
    moves
}

/// Make a move and return a new board.
#[inline(always)]
pub(super) fn make_move(board: &Board, mv: Move) -> Board {
    let mut new_board = board.clone();
    new_board.play_unchecked(mv);
    new_board
}

/// Castling is encoded by cozy-chess as the king capturing its own rook.
#[inline(always)]
pub(super) fn is_castle(board: &Board, mv: Move) -> bool {
    board.piece_on(mv.from) == Some(Piece::King)
        && board.colors(board.side_to_move()).has(mv.to)
}

#[inline(always)]
fn is_capture(board: &Board, mv: Move) -> bool {
    if board.colors(!board.side_to_move()).has(mv.to) {
        return true;
    }
    // En passant is the only pawn capture onto an empty square.
    board.piece_on(mv.from) == Some(Piece::Pawn) && mv.from.file() != mv.to.file()
}

/// SAN without the check/mate suffix.
fn san_body(board: &Board, mv: Move, legal: &[Move]) -> String {
    if is_castle(board, mv) {
        return if mv.to.file() > mv.from.file() {
            "O-O".to_string()
        } else {
            "O-O-O".to_string()
        };
    }

    let Some(piece) = board.piece_on(mv.from) else {
        return String::new();
    };
    let capture = is_capture(board, mv);
    let mut san = String::with_capacity(7);

    if piece == Piece::Pawn {
        if capture {
            san.push(file_char(mv.from.file()));
            san.push('x');
        }
        san.push_str(&mv.to.to_string());
        if let Some(promotion) = mv.promotion {
            san.push('=');
            if let Some(letter) = kind(promotion).san_letter() {
                san.push(letter);
            }
        }
        return san;
    }

    if let Some(letter) = kind(piece).san_letter() {
        san.push(letter);
    }
    san.push_str(&disambiguation(board, mv, piece, legal));
    if capture {
        san.push('x');
    }
    san.push_str(&mv.to.to_string());
    san
}

/// Full SAN, with `+` for check and `#` for mate.
pub(super) fn san(board: &Board, mv: Move, legal: &[Move]) -> String {
    let mut san = san_body(board, mv, legal);
    let after = make_move(board, mv);
    if !after.checkers().is_empty() {
        // Stops at the first reply found.
        let has_reply = after.generate_moves(|batch| !batch.is_empty());
        san.push(if has_reply { '+' } else { '#' });
    }
    san
}

fn disambiguation(board: &Board, mv: Move, piece: Piece, legal: &[Move]) -> String {
    let rivals: Vec<Square> = legal
        .iter()
        .filter(|other| {
            other.to == mv.to
                && other.from != mv.from
                && board.piece_on(other.from) == Some(piece)
                && !is_castle(board, **other)
        })
        .map(|other| other.from)
        .collect();

    if rivals.is_empty() {
        return String::new();
    }
    if rivals.iter().all(|sq| sq.file() != mv.from.file()) {
        return file_char(mv.from.file()).to_string();
    }
    if rivals.iter().all(|sq| sq.rank() != mv.from.rank()) {
        return rank_char(mv.from.rank()).to_string();
    }
    mv.from.to_string()
}

/// Destination square as a player would name it: castling lands on the
/// g- or c-file rather than on the rook.
pub(super) fn king_destination(board: &Board, mv: Move) -> Square {
    if !is_castle(board, mv) {
        return mv.to;
    }
    let file = if mv.to.file() > mv.from.file() {
        File::G
    } else {
        File::C
    };
    Square::new(file, mv.from.rank())
}

pub(super) fn kind(piece: Piece) -> PieceKind {
    match piece {
        Piece::Pawn => PieceKind::Pawn,
        Piece::Knight => PieceKind::Knight,
        Piece::Bishop => PieceKind::Bishop,
        Piece::Rook => PieceKind::Rook,
        Piece::Queen => PieceKind::Queen,
        Piece::King => PieceKind::King,
    }
}

pub(super) fn side(color: Color) -> crate::Side {
    match color {
        Color::White => crate::Side::White,
        Color::Black => crate::Side::Black,
    }
}

pub(super) fn grid_square(sq: Square) -> GridSquare {
    GridSquare {
        file: sq.file() as u8,
        rank: sq.rank() as u8,
    }
}

/// Strips `+`, `#` and annotation glyphs so SAN from other sources compares
/// equal to ours.
pub(super) fn strip_suffix(san: &str) -> &str {
    san.trim().trim_end_matches(['+', '#', '!', '?'])
}

fn file_char(file: File) -> char {
    (b'a' + file as u8) as char
}

fn rank_char(rank: Rank) -> char {
    (b'1' + rank as u8) as char
}

use rules::{Grid, PieceKind, Side, Square};

/// What the engine can read off a SAN string without asking the rules.
///
/// Unparseable strings come back as quiet pawn moves with no destination,
/// which only costs ordering quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveInfo {
    pub piece: PieceKind,
    pub to: Option<Square>,
    pub is_capture: bool,
    pub gives_check: bool,
    pub promotion: Option<PieceKind>,
    pub is_castle: bool,
}

impl MoveInfo {
    pub fn parse(san: &str) -> Self {
        let san = san.trim().trim_end_matches(['!', '?']);
        let gives_check = san.ends_with('+') || san.ends_with('#');
        let body = san.trim_end_matches(['+', '#']);

        if body.starts_with("O-O") || body.starts_with("0-0") {
            return Self {
                piece: PieceKind::King,
                to: None,
                is_capture: false,
                gives_check,
                promotion: None,
                is_castle: true,
            };
        }

        let piece = body
            .chars()
            .next()
            .and_then(PieceKind::from_san_letter)
            .unwrap_or(PieceKind::Pawn);

        let (body, promotion) = match body.split_once('=') {
            Some((head, promo)) => (head, promo.chars().next().and_then(PieceKind::from_san_letter)),
            None => (body, None),
        };

        let to = body
            .len()
            .checked_sub(2)
            .and_then(|start| body.get(start..))
            .and_then(|tail| tail.parse::<Square>().ok());

        Self {
            piece,
            to,
            is_capture: body.contains('x'),
            gives_check,
            promotion,
            is_castle: false,
        }
    }

    /// Neither a capture nor a promotion.
    #[inline(always)]
    pub fn is_quiet(&self) -> bool {
        !self.is_capture && self.promotion.is_none()
    }

    /// Piece taken by this move, given the board before it is played.
    /// A pawn capturing onto an empty square is en passant.
    pub fn captured_piece(&self, board: &Grid, mover: Side) -> Option<PieceKind> {
        if !self.is_capture {
            return None;
        }
        let to = self.to?;
        match board[to.rank as usize][to.file as usize] {
            Some(piece) if piece.side != mover => Some(piece.kind),
            Some(_) => None,
            None if self.piece == PieceKind::Pawn => Some(PieceKind::Pawn),
            None => None,
        }
    }
}

// Engines answer in long algebraic notation (e2e4, e7e8q). Castling uses the
// king's destination square (e1g1), never "king takes rook".

use rules::{PieceKind, Square};

use crate::NULL_MOVE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordinateMove {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

/// Parses a coordinate move. Returns `None` for the null move and for
/// anything malformed.
pub fn parse_coordinate_move(input: &str) -> Option<CoordinateMove> {
    let input = input.trim();
    if input == NULL_MOVE || !input.is_ascii() || !(4..=5).contains(&input.len()) {
        return None;
    }

    let from = input[0..2].parse().ok()?;
    let to = input[2..4].parse().ok()?;
    let promotion = match input[4..].chars().next() {
        Some(c) => Some(PieceKind::from_promotion_char(c)?),
        None => None,
    };

    Some(CoordinateMove {
        from,
        to,
        promotion,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_move() {
        let mv = parse_coordinate_move("e2e4").unwrap();
        assert_eq!(mv.from.to_string(), "e2");
        assert_eq!(mv.to.to_string(), "e4");
        assert_eq!(mv.promotion, None);
    }

    #[test]
    fn test_promotion() {
        let mv = parse_coordinate_move("a7a8n").unwrap();
        assert_eq!(mv.promotion, Some(PieceKind::Knight));
        assert!(parse_coordinate_move("a7a8k").is_none());
    }

    #[test]
    fn test_rejects_null_and_garbage() {
        assert!(parse_coordinate_move("0000").is_none());
        assert!(parse_coordinate_move("(none)").is_none());
        assert!(parse_coordinate_move("e2").is_none());
        assert!(parse_coordinate_move("z9e4").is_none());
        assert!(parse_coordinate_move("e2e4qq").is_none());
    }
}

use evaluation::PieceValues;
use rules::{Grid, Side};

use crate::utils::MoveInfo;

use super::main::CAPTURE_PRIORITY;
use super::utils::{capture_score, promotion_score, sort_descending, ScoredMove};

/// Moves for quiescence search, best first by MVV-LVA.
///
/// Out of check only captures and promotions are kept, plus checking moves
/// when `include_checks` is set. In check every evasion is kept.
pub fn order_tactical_moves(
    moves: Vec<String>,
    board: &Grid,
    side: Side,
    in_check: bool,
    include_checks: bool,
    piece_values: &PieceValues,
) -> Vec<String> {
    let mut forcing_moves: Vec<ScoredMove<String>> = moves
        .into_iter()
        .filter_map(|mv| {
            let info = MoveInfo::parse(&mv);
            let capture = capture_score(&info, board, side, piece_values);

            let tactical = capture.is_some() || info.promotion.is_some();
            if !(in_check || tactical || (include_checks && info.gives_check)) {
                return None;
            }

            let mut score = promotion_score(&info, piece_values);
            if let Some(mvv_lva) = capture {
                score += CAPTURE_PRIORITY + mvv_lva;
            }
            Some(ScoredMove { mov: mv, score })
        })
        .collect();

    sort_descending(&mut forcing_moves);
    forcing_moves.into_iter().map(|s| s.mov).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rules::{CozyPosition, Position};

    fn tactical(fen: &str, include_checks: bool) -> Vec<String> {
        let pos = CozyPosition::from_fen(fen).unwrap();
        order_tactical_moves(
            pos.legal_moves(),
            &pos.board(),
            pos.turn(),
            pos.is_check(),
            include_checks,
            &PieceValues::default(),
        )
    }

    #[test]
    fn test_captures_only_without_checks() {
        let moves = tactical("4k3/8/8/3q4/8/2p5/8/1N1RK3 w - - 0 1", false);
        assert_eq!(moves, vec!["Rxd5", "Nxc3"]);
    }

    #[test]
    fn test_checks_included_after_captures() {
        let fen = "4k3/8/8/8/8/2p5/8/RN2K3 w - - 0 1";
        assert_eq!(tactical(fen, false), vec!["Nxc3"]);
        assert_eq!(tactical(fen, true), vec!["Nxc3", "Ra8+"]);
    }

    #[test]
    fn test_all_evasions_in_check() {
        let pos = CozyPosition::from_fen("4k3/8/8/8/8/8/3q4/4K3 w - - 0 1").unwrap();
        let moves = tactical("4k3/8/8/8/8/8/3q4/4K3 w - - 0 1", false);
        assert_eq!(moves.len(), pos.legal_moves().len());
        assert_eq!(moves[0], "Kxd2");
    }
}

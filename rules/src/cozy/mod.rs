use std::cell::OnceCell;

use cozy_chess::{Board, Move};

use crate::{Grid, PlacedPiece, Position, RulesError, Side, VerboseMove};

mod san;

use san::{collect_legal_moves, grid_square, kind, make_move, side, strip_suffix};

/// A board and its legal moves in SAN, generated on first use.
#[derive(Debug, Clone)]
struct Node {
    board: Board,
    moves: OnceCell<Vec<(Move, String)>>,
}

impl Node {
    fn new(board: Board) -> Self {
        Self {
            board,
            moves: OnceCell::new(),
        }
    }

    fn moves(&self) -> &[(Move, String)] {
        self.moves.get_or_init(|| {
            let legal = collect_legal_moves(&self.board);
            legal
                .iter()
                .map(|&mv| (mv, san::san(&self.board, mv, &legal)))
                .collect()
        })
    }
}

/// `Position` backed by cozy-chess.
///
/// Undo keeps a stack of prior nodes, so it is exact for castling rights,
/// en passant and clocks, and the move list of a node survives the search of
/// its children.
#[derive(Debug, Clone)]
pub struct CozyPosition {
    node: Node,
    undo_stack: Vec<(Node, String)>,
}

impl CozyPosition {
    pub fn from_fen(fen: &str) -> Result<Self, RulesError> {
        let board = Board::from_fen(fen.trim(), false).map_err(|e| RulesError::InvalidFen {
            fen: fen.to_string(),
            reason: format!("{:?}", e),
        })?;
        Ok(Self::from_board(board))
    }

    fn from_board(board: Board) -> Self {
        Self {
            node: Node::new(board),
            undo_stack: Vec::new(),
        }
    }
}

impl Default for CozyPosition {
    fn default() -> Self {
        Self::from_board(Board::default())
    }
}

impl Position for CozyPosition {
    fn legal_moves(&self) -> Vec<String> {
        self.node.moves().iter().map(|(_, san)| san.clone()).collect()
    }

    fn verbose_moves(&self) -> Vec<VerboseMove> {
        let board = &self.node.board;
        self.node
            .moves()
            .iter()
            .map(|(mv, san)| VerboseMove {
                from: grid_square(mv.from),
                to: grid_square(san::king_destination(board, *mv)),
                promotion: mv.promotion.map(kind),
                san: san.clone(),
            })
            .collect()
    }

    fn apply_move(&mut self, san: &str) -> Result<(), RulesError> {
        let wanted = strip_suffix(san);
        let Some((mv, played)) = self
            .node
            .moves()
            .iter()
            .find(|(_, legal)| strip_suffix(legal) == wanted)
            .cloned()
        else {
            return Err(RulesError::IllegalMove(san.to_string()));
        };

        let next = Node::new(make_move(&self.node.board, mv));
        let previous = std::mem::replace(&mut self.node, next);
        self.undo_stack.push((previous, played));
        Ok(())
    }

    fn undo_move(&mut self) -> Option<String> {
        let (previous, san) = self.undo_stack.pop()?;
        self.node = previous;
        Some(san)
    }

    fn is_check(&self) -> bool {
        !self.node.board.checkers().is_empty()
    }

    fn is_checkmate(&self) -> bool {
        self.is_check() && self.node.moves().is_empty()
    }

    fn is_game_over(&self) -> bool {
        self.node.moves().is_empty() || self.node.board.halfmove_clock() >= 100
    }

    fn to_fen(&self) -> String {
        format!("{}", self.node.board)
    }

    fn board(&self) -> Grid {
        let board = &self.node.board;
        let mut grid: Grid = [[None; 8]; 8];
        for sq in board.occupied() {
            if let (Some(piece), Some(color)) = (board.piece_on(sq), board.color_on(sq)) {
                grid[sq.rank() as usize][sq.file() as usize] = Some(PlacedPiece {
                    kind: kind(piece),
                    side: side(color),
                });
            }
        }
        grid
    }

    fn turn(&self) -> Side {
        side(self.node.board.side_to_move())
    }

    fn move_history(&self) -> Vec<String> {
        self.undo_stack.iter().map(|(_, san)| san.clone()).collect()
    }
}

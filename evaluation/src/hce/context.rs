use rules::{Grid, PieceKind, PlacedPiece, Side, Square};

// Pre-computed evaluation context to avoid rescanning the grid per term
pub struct EvalContext<'a> {
    pub board: &'a Grid,
    pub kings: [Option<Square>; 2],
    pub bishops: [u32; 2],
    pub endgame: bool,
}

impl<'a> EvalContext<'a> {
    pub fn new(board: &'a Grid, endgame_piece_threshold: u32) -> Self {
        let mut kings = [None; 2];
        let mut bishops = [0; 2];
        let mut minor_and_major = 0;

        for (square, piece) in pieces(board) {
            match piece.kind {
                PieceKind::King => kings[piece.side.index()] = Some(square),
                PieceKind::Pawn => {}
                kind => {
                    if kind == PieceKind::Bishop {
                        bishops[piece.side.index()] += 1;
                    }
                    minor_and_major += 1;
                }
            }
        }

        Self {
            board,
            kings,
            bishops,
            endgame: minor_and_major <= endgame_piece_threshold,
        }
    }

    #[inline(always)]
    pub fn piece_at(&self, square: Square) -> Option<PlacedPiece> {
        self.board[square.rank as usize][square.file as usize]
    }

    #[inline(always)]
    pub fn king(&self, side: Side) -> Option<Square> {
        self.kings[side.index()]
    }
}

/// Every occupied square of the grid, a1 first.
pub fn pieces(board: &Grid) -> impl Iterator<Item = (Square, PlacedPiece)> + '_ {
    board.iter().enumerate().flat_map(|(rank, row)| {
        row.iter().enumerate().filter_map(move |(file, cell)| {
            cell.map(|piece| {
                (
                    Square {
                        file: file as u8,
                        rank: rank as u8,
                    },
                    piece,
                )
            })
        })
    })
}

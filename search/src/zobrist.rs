use rules::{Grid, Side};

/// Zobrist keys for position fingerprints.
///
/// One key per (side, piece, square) plus a side-to-move key. Hashes are
/// recomputed from the full grid, since positions expose no move deltas.
///
/// <https://www.chessprogramming.org/Zobrist_Hashing>
#[derive(Clone)]
pub struct Zobrist {
    pieces: [[[u64; 64]; 6]; 2],
    black_to_move: u64,
}

impl Zobrist {
    pub fn new(seed: u64) -> Self {
        let mut rng = SplitMix64::new(seed);
        let mut pieces = [[[0; 64]; 6]; 2];
        for side in pieces.iter_mut() {
            for piece in side.iter_mut() {
                for key in piece.iter_mut() {
                    *key = rng.next_u64();
                }
            }
        }

        Self {
            pieces,
            black_to_move: rng.next_u64(),
        }
    }

    pub fn hash(&self, board: &Grid, side_to_move: Side) -> u64 {
        let mut hash = 0;
        for (rank, row) in board.iter().enumerate() {
            for (file, cell) in row.iter().enumerate() {
                if let Some(piece) = cell {
                    hash ^= self.pieces[piece.side.index()][piece.kind.index()][rank * 8 + file];
                }
            }
        }
        if side_to_move == Side::Black {
            hash ^= self.black_to_move;
        }
        hash
    }
}

/// splitmix64: small, fast and fully determined by its seed.
struct SplitMix64(u64);

impl SplitMix64 {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }
}

mod config;
mod context;
mod eval_bishops;
mod eval_king;
mod eval_material;
mod pst;

pub use config::HCEConfig;
use context::EvalContext;

use crate::piece_values::PieceValues;
use crate::scores::MATE_VALUE;
use crate::traits::HCE;
use rules::{Grid, Side};

pub struct Evaluator {
    piece_values: PieceValues,
    config: HCEConfig,
}

impl Evaluator {
    pub fn new(piece_values: PieceValues, config: HCEConfig) -> Self {
        Self {
            piece_values,
            config,
        }
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(PieceValues::default(), HCEConfig::default())
    }
}

impl HCE for Evaluator {
    fn name(&self) -> String {
        "HCE".to_string()
    }

    fn evaluate(&mut self, board: &Grid, side_to_move: Side, checkmated: bool) -> i32 {
        let ctx = EvalContext::new(board, self.config.endgame_piece_threshold);

        // Black positive, White negative.
        let mut cp = 0;

        cp += eval_material::evaluate(&ctx, Side::Black, &self.piece_values);
        cp -= eval_material::evaluate(&ctx, Side::White, &self.piece_values);

        cp += eval_bishops::evaluate(&ctx, Side::Black, &self.config);
        cp -= eval_bishops::evaluate(&ctx, Side::White, &self.config);

        cp += eval_king::evaluate(&ctx, Side::Black, &self.config);
        cp -= eval_king::evaluate(&ctx, Side::White, &self.config);

        if checkmated {
            cp += match side_to_move {
                Side::White => MATE_VALUE,
                Side::Black => -MATE_VALUE,
            };
        }

        cp
    }
}

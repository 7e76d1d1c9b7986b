// Evaluator interface for the search.
//
// Scores are absolute: positive favours Black, negative favours White.
// The search negates as needed to get the side-to-move view.

use rules::{Grid, Side};

/// Hand-Crafted Evaluation interface.
pub trait HCE: Send {
    fn name(&self) -> String;
    /// `checkmated` is true when `side_to_move` has been mated, which adds the
    /// terminal bonus on top of the static terms.
    fn evaluate(&mut self, board: &Grid, side_to_move: Side, checkmated: bool) -> i32;
}

use crate::{Grid, RulesError, Side, VerboseMove};

/// The narrow contract the engine needs from a rules implementation.
///
/// Moves are exchanged as SAN strings. `apply_move`/`undo_move` mutate in
/// place and form a strict LIFO stack: every applied move must be undone by
/// the caller that applied it.
pub trait Position {
    /// Legal moves in SAN, including `+`/`#` suffixes.
    fn legal_moves(&self) -> Vec<String>;
    /// Legal moves with coordinate squares alongside their SAN.
    fn verbose_moves(&self) -> Vec<VerboseMove>;
    fn apply_move(&mut self, san: &str) -> Result<(), RulesError>;
    /// Takes back the last applied move, returning its SAN.
    fn undo_move(&mut self) -> Option<String>;
    fn is_check(&self) -> bool;
    fn is_checkmate(&self) -> bool;
    fn is_game_over(&self) -> bool;
    fn to_fen(&self) -> String;
    fn board(&self) -> Grid;
    fn turn(&self) -> Side;
    /// SAN of every move applied since the position was created.
    fn move_history(&self) -> Vec<String>;
}

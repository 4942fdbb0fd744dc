//! Opponent abstraction layer used by the play binary and match harness.
//!
//! Defines the common output payload so different selection strategies can be
//! swapped at runtime behind a single trait interface.

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::CandidateMove;

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    /// The chosen move, or `None` when the side to move has no candidate at
    /// all. Callers treat `None` as "the side to move has lost"; it is never
    /// conflated with a playable zero-score move.
    pub best_move: Option<CandidateMove>,
    /// Human-readable diagnostic lines the caller may print or discard.
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    /// Choose one move for the side currently to move. Never mutates the
    /// game state; the caller applies the returned move itself.
    fn choose_move(&mut self, game_state: &GameState) -> Result<EngineOutput, String>;
}

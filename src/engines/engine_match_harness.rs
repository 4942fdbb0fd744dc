//! Minimal head-to-head engine match harness for local testing.
//!
//! Runs two `Engine` implementations against each other without any
//! interactive I/O. The only terminal condition this game knows is a side
//! with no candidate move, which loses; a ply cap guards against endless
//! shuffling since the rules have no draw notion.

use crate::engines::engine_trait::Engine;
use crate::game_state::chess_types::Side;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::apply_move;
use crate::utils::algebraic::location_to_coordinate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// Black ran out of moves.
    WhiteWin,
    /// White ran out of moves.
    BlackWin,
    /// Neither side ran out of moves within the ply cap.
    PlyLimit,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self { max_plies: 500 }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_state: GameState,
    /// Played moves in coordinate notation ("e2e3"), in play order.
    pub played_moves: Vec<String>,
    pub white_move_count: u32,
    pub black_move_count: u32,
}

/// Play a single match from the standard starting position.
pub fn play_engine_match(
    engine_white: Box<dyn Engine>,
    engine_black: Box<dyn Engine>,
    config: MatchConfig,
) -> Result<MatchResult, String> {
    play_engine_match_from_state(engine_white, engine_black, GameState::new_game(), config)
}

/// Play a single match from a caller-provided state, intended for curated
/// positions in tests.
pub fn play_engine_match_from_state(
    mut engine_white: Box<dyn Engine>,
    mut engine_black: Box<dyn Engine>,
    mut state: GameState,
    config: MatchConfig,
) -> Result<MatchResult, String> {
    engine_white.new_game();
    engine_black.new_game();

    let mut played_moves = Vec::<String>::new();
    let mut white_move_count = 0u32;
    let mut black_move_count = 0u32;

    for _ in 0..config.max_plies {
        let mover = state.side_to_move;
        let engine = match mover {
            Side::White => &mut engine_white,
            Side::Black => &mut engine_black,
        };

        let output = engine.choose_move(&state)?;
        let Some(candidate) = output.best_move else {
            let outcome = match mover {
                Side::White => MatchOutcome::BlackWin,
                Side::Black => MatchOutcome::WhiteWin,
            };
            return Ok(MatchResult {
                outcome,
                final_state: state,
                played_moves,
                white_move_count,
                black_move_count,
            });
        };

        let name = engine.name().to_owned();
        apply_move(&mut state, candidate.from, candidate.to).ok_or_else(|| {
            format!(
                "engine {name} produced an illegal move {:?} -> {:?}",
                candidate.from, candidate.to
            )
        })?;

        let mut lan = location_to_coordinate(candidate.from)?;
        lan.push_str(&location_to_coordinate(candidate.to)?);
        played_moves.push(lan);

        match mover {
            Side::White => white_move_count += 1,
            Side::Black => black_move_count += 1,
        }
    }

    Ok(MatchResult {
        outcome: MatchOutcome::PlyLimit,
        final_state: state,
        played_moves,
        white_move_count,
        black_move_count,
    })
}

//! Difficulty-parameterized move selector for the computer side.
//!
//! One-ply greedy capture scoring with a small random jitter, then a
//! level-dependent selection pool: level 1 ignores scores entirely, and each
//! level above it shrinks the pool toward the single best-scoring candidate.
//! There is no look-ahead; "skill" is only the narrowing of the pool.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::{generate_candidates, CandidateMove};

/// Jitter is sampled from `[0, JITTER_SPAN)`. Kept well below the smallest
/// piece value (50) so noise breaks ties without outranking a capture.
const JITTER_SPAN: i32 = 10;

/// The computer opponent. `level` is conventionally 1 (weakest) through 4
/// (strongest) but any positive level is accepted; levels of 5 and above
/// behave like 4. The random source is injected so games can be replayed
/// deterministically.
pub struct SelectorEngine<R: Rng = StdRng> {
    level: u8,
    rng: R,
    name: String,
}

impl SelectorEngine<StdRng> {
    /// A selector with an OS-seeded generator, for interactive play.
    pub fn new(level: u8) -> Self {
        Self::with_rng(level, StdRng::from_os_rng())
    }

    /// A selector whose whole move sequence is reproducible from `seed`.
    pub fn from_seed(level: u8, seed: u64) -> Self {
        Self::with_rng(level, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> SelectorEngine<R> {
    pub fn with_rng(level: u8, rng: R) -> Self {
        Self {
            level,
            rng,
            name: format!("Makruk Selector L{level}"),
        }
    }

    #[inline]
    pub fn level(&self) -> u8 {
        self.level
    }

    #[inline]
    fn capture_score(game_state: &GameState, candidate: &CandidateMove) -> i32 {
        game_state
            .piece_at(candidate.to)
            .map(|piece| piece.kind.value())
            .unwrap_or(0)
    }
}

impl<R: Rng + Send> Engine for SelectorEngine<R> {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&mut self, game_state: &GameState) -> Result<EngineOutput, String> {
        let candidates = generate_candidates(game_state);

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string selector_engine level {} candidates {}",
            self.level,
            candidates.len()
        ));

        if candidates.is_empty() {
            // No move at all: the side to move has lost. Distinct from a
            // playable move that merely scores zero.
            return Ok(out);
        }

        if self.level <= 1 {
            let picked = candidates
                .as_slice()
                .choose(&mut self.rng)
                .ok_or("failed to choose a random candidate")?;
            out.best_move = Some(*picked);
            return Ok(out);
        }

        let mut scored: Vec<(CandidateMove, i32)> = candidates
            .iter()
            .map(|candidate| {
                let score = Self::capture_score(game_state, candidate)
                    + self.rng.random_range(0..JITTER_SPAN);
                (*candidate, score)
            })
            .collect();

        // Stable descending sort keeps enumeration order among equal scores.
        scored.sort_by(|a, b| b.1.cmp(&a.1));

        let pool = usize::from(5u8.saturating_sub(self.level).max(1)).min(scored.len());
        out.info_lines
            .push(format!("info string selector_engine pool {pool}"));

        let picked = scored[..pool]
            .choose(&mut self.rng)
            .ok_or("failed to choose from the candidate pool")?;
        out.best_move = Some(picked.0);
        Ok(out)
    }
}

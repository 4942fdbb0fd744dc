//! Uniform random-move opponent.
//!
//! Equivalent to the selector at level 1, kept as its own engine for
//! diagnostics, harness baselines, and stress-testing move enumeration.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::generate_candidates;

pub struct RandomEngine<R: Rng = StdRng> {
    rng: R,
}

impl RandomEngine<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    pub fn from_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomEngine<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl Default for RandomEngine<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng + Send> Engine for RandomEngine<R> {
    fn name(&self) -> &str {
        "Makruk Random"
    }

    fn choose_move(&mut self, game_state: &GameState) -> Result<EngineOutput, String> {
        let candidates = generate_candidates(game_state);

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string random_engine candidates {}",
            candidates.len()
        ));

        if candidates.is_empty() {
            return Ok(out);
        }

        let picked = candidates
            .as_slice()
            .choose(&mut self.rng)
            .ok_or("failed to choose a random candidate")?;
        out.best_move = Some(*picked);
        Ok(out)
    }
}

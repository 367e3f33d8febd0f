//! Random Move Jungle Engine
//!
//! Picks uniformly among all legal moves. Useful as:
//! - the weakest opponent level
//! - a baseline any searching engine should beat
//! - a stress test for move generation in long arena runs

use jungle_core::{Engine, Position, SearchResult};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

#[cfg(test)]
mod lib_tests;

/// An engine that plays random legal moves.
///
/// There is no evaluation at all; the score is always zero.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible move choice.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, pos: &Position, _depth: u8) -> SearchResult {
        let moves = pos.legal_moves();
        let best_move = moves.choose(&mut self.rng).copied();

        SearchResult {
            best_move,
            score: 0.0,
            depth: 0,
            nodes: 1,
        }
    }

    fn name(&self) -> &str {
        "Random"
    }
}

//! Minimax Jungle Engine
//!
//! Alpha-beta search over cloned positions with a per-call transposition
//! table and evaluation-guided move ordering, plus a randomized variant that
//! breaks ties between equally good moves at random.

pub mod eval;
pub mod randomized;
pub mod search;
pub mod transposition;

use jungle_core::{Engine, Position, SearchResult};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub use eval::{evaluate_with, EvalTier, Evaluator, ParseTierError, Weights, MAX_DISTANCE, WIN_SCORE};
pub use randomized::{choose_move_randomized, search_randomized, RandomizedOutcome};
pub use search::{choose_move, search, SearchOutcome};
pub use transposition::{Bound, TranspositionTable, TtEntry};

/// Deterministic alpha-beta engine.
///
/// Same position, depth and tier always give the same move.
#[derive(Debug, Clone)]
pub struct MinimaxEngine {
    tier: EvalTier,
    name: String,
    /// Table hits of the last search, for statistics
    tt_hits: u64,
}

impl MinimaxEngine {
    pub fn new(tier: EvalTier) -> Self {
        Self {
            tier,
            name: format!("Minimax ({tier})"),
            tt_hits: 0,
        }
    }

    pub fn tier(&self) -> EvalTier {
        self.tier
    }

    pub fn last_tt_hits(&self) -> u64 {
        self.tt_hits
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new(EvalTier::default())
    }
}

impl Engine for MinimaxEngine {
    fn search(&mut self, pos: &Position, depth: u8) -> SearchResult {
        let outcome = search::search(pos, depth, &self.tier);
        self.tt_hits = outcome.tt_hits;

        SearchResult {
            best_move: outcome.best_move,
            score: outcome.score,
            depth,
            nodes: outcome.nodes,
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn new_game(&mut self) {
        self.tt_hits = 0;
    }
}

/// Unpruned minimax that picks uniformly among the best root moves.
#[derive(Debug, Clone)]
pub struct RandomizedMinimaxEngine {
    tier: EvalTier,
    name: String,
    rng: StdRng,
}

impl RandomizedMinimaxEngine {
    pub fn new(tier: EvalTier) -> Self {
        Self::with_rng(tier, StdRng::from_entropy())
    }

    /// Reproducible tie-breaking.
    pub fn with_seed(tier: EvalTier, seed: u64) -> Self {
        Self::with_rng(tier, StdRng::seed_from_u64(seed))
    }

    fn with_rng(tier: EvalTier, rng: StdRng) -> Self {
        Self {
            tier,
            name: format!("Randomized minimax ({tier})"),
            rng,
        }
    }

    pub fn tier(&self) -> EvalTier {
        self.tier
    }
}

impl Engine for RandomizedMinimaxEngine {
    fn search(&mut self, pos: &Position, depth: u8) -> SearchResult {
        let outcome = randomized::search_randomized(pos, depth, &self.tier, &mut self.rng);

        SearchResult {
            best_move: outcome.best_move,
            score: outcome.score,
            depth: depth.max(1),
            nodes: outcome.nodes,
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

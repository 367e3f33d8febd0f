//! Arena configuration: who plays, how many games, how long
//!
//! Players are described either inline on the command line
//! (`minimax:hard:3`, `randomized:easy:2@7`, `random@1`) or as tables in a
//! TOML file:
//!
//! ```toml
//! games = 10
//! max_plies = 200
//!
//! [player_one]
//! policy = "minimax"
//! tier = "hard"
//! depth = 3
//!
//! [player_two]
//! policy = "randomized"
//! tier = "easy"
//! depth = 2
//! seed = 7
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use jungle_core::Engine;
use minimax_engine::{EvalTier, MinimaxEngine, RandomizedMinimaxEngine};
use random_engine::RandomEngine;
use serde::{Deserialize, Serialize};

use crate::error::{ArenaError, ArenaResult};

pub const DEFAULT_DEPTH: u8 = 3;
pub const DEFAULT_GAMES: u32 = 10;
pub const DEFAULT_MAX_PLIES: u32 = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Policy {
    /// Deterministic alpha-beta search.
    Minimax,
    /// Full minimax with random tie-breaking.
    Randomized,
    /// Uniform random legal move.
    Random,
}

impl Policy {
    fn as_str(self) -> &'static str {
        match self {
            Policy::Minimax => "minimax",
            Policy::Randomized => "randomized",
            Policy::Random => "random",
        }
    }
}

/// One side of a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSpec {
    pub policy: Policy,
    #[serde(default)]
    pub tier: EvalTier,
    #[serde(default = "default_depth")]
    pub depth: u8,
    /// Seed for the random policies; entropy when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

fn default_depth() -> u8 {
    DEFAULT_DEPTH
}

impl PlayerSpec {
    pub fn new(policy: Policy) -> Self {
        Self {
            policy,
            tier: EvalTier::default(),
            depth: DEFAULT_DEPTH,
            seed: None,
        }
    }

    /// Build a fresh engine for this spec.
    pub fn build(&self) -> Box<dyn Engine> {
        match (self.policy, self.seed) {
            (Policy::Minimax, _) => Box::new(MinimaxEngine::new(self.tier)),
            (Policy::Randomized, Some(seed)) => {
                Box::new(RandomizedMinimaxEngine::with_seed(self.tier, seed))
            }
            (Policy::Randomized, None) => Box::new(RandomizedMinimaxEngine::new(self.tier)),
            (Policy::Random, Some(seed)) => Box::new(RandomEngine::with_seed(seed)),
            (Policy::Random, None) => Box::new(RandomEngine::new()),
        }
    }
}

impl fmt::Display for PlayerSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.policy.as_str())?;
        if self.policy != Policy::Random {
            write!(f, ":{}:{}", self.tier, self.depth)?;
        }
        if let Some(seed) = self.seed {
            write!(f, "@{seed}")?;
        }
        Ok(())
    }
}

impl FromStr for PlayerSpec {
    type Err = ArenaError;

    /// `minimax[:tier[:depth]]`, `randomized[:tier[:depth]][@seed]` or
    /// `random[@seed]`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| ArenaError::InvalidSpec {
            spec: s.to_string(),
            reason: reason.to_string(),
        };

        let (body, seed) = match s.split_once('@') {
            Some((body, seed)) => {
                let seed = seed
                    .parse::<u64>()
                    .map_err(|_| invalid("seed must be a non-negative integer"))?;
                (body, Some(seed))
            }
            None => (s, None),
        };

        let parts: Vec<&str> = body.split(':').collect();
        let policy = match parts[0].to_lowercase().as_str() {
            "minimax" | "ab" => Policy::Minimax,
            "randomized" | "rand" => Policy::Randomized,
            "random" => Policy::Random,
            _ => return Err(invalid("unknown policy")),
        };

        let mut spec = PlayerSpec::new(policy);
        spec.seed = seed;
        match (policy, parts.len()) {
            (Policy::Random, 1) => {}
            (Policy::Random, _) => return Err(invalid("random takes no tier or depth")),
            (Policy::Minimax, _) if seed.is_some() => {
                return Err(invalid("minimax is deterministic and takes no seed"))
            }
            (_, 1..=3) => {
                if let Some(tier) = parts.get(1) {
                    spec.tier = tier.parse()?;
                }
                if let Some(depth) = parts.get(2) {
                    spec.depth = depth
                        .parse()
                        .map_err(|_| invalid("depth must be an integer 0-255"))?;
                }
            }
            _ => return Err(invalid("too many ':' fields")),
        }
        Ok(spec)
    }
}

/// A complete arena run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArenaConfig {
    #[serde(default = "default_games")]
    pub games: u32,
    /// Plies after which a game is called inconclusive.
    #[serde(default = "default_max_plies")]
    pub max_plies: u32,
    pub player_one: PlayerSpec,
    pub player_two: PlayerSpec,
}

fn default_games() -> u32 {
    DEFAULT_GAMES
}

fn default_max_plies() -> u32 {
    DEFAULT_MAX_PLIES
}

impl ArenaConfig {
    pub fn new(player_one: PlayerSpec, player_two: PlayerSpec) -> Self {
        Self {
            games: DEFAULT_GAMES,
            max_plies: DEFAULT_MAX_PLIES,
            player_one,
            player_two,
        }
    }

    pub fn from_toml_str(text: &str) -> ArenaResult<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> ArenaResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ArenaError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;

//! Memo of searched positions, owned by a single search call.
//!
//! Entries are keyed by `(StateKey, remaining depth)` and remember whether the
//! stored score is exact or only a bound from an alpha-beta cutoff.

use std::collections::HashMap;

use jungle_core::{Move, StateKey};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bound {
    Exact,
    /// The true score is at least the stored one (search failed high).
    Lower,
    /// The true score is at most the stored one (search failed low).
    Upper,
}

impl Bound {
    /// Classify a fail-soft result against the window it was searched with.
    pub fn classify(score: f64, alpha: f64, beta: f64) -> Bound {
        if score <= alpha {
            Bound::Upper
        } else if score >= beta {
            Bound::Lower
        } else {
            Bound::Exact
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TtEntry {
    pub score: f64,
    pub bound: Bound,
    pub best_move: Option<Move>,
}

#[derive(Debug, Default)]
pub struct TranspositionTable {
    entries: HashMap<(StateKey, u8), TtEntry>,
    hits: u64,
}

impl TranspositionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a usable result for a node searched with `[alpha, beta]`.
    ///
    /// Exact entries always answer; bounds only answer when they already
    /// prove a cutoff for this window.
    pub fn probe(&mut self, key: &(StateKey, u8), alpha: f64, beta: f64) -> Option<TtEntry> {
        let entry = *self.entries.get(key)?;
        let usable = match entry.bound {
            Bound::Exact => true,
            Bound::Lower => entry.score >= beta,
            Bound::Upper => entry.score <= alpha,
        };
        if usable {
            self.hits += 1;
            Some(entry)
        } else {
            None
        }
    }

    pub fn get(&self, key: &(StateKey, u8)) -> Option<&TtEntry> {
        self.entries.get(key)
    }

    pub fn store(&mut self, key: (StateKey, u8), entry: TtEntry) {
        self.entries.insert(key, entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Probes answered from the table so far.
    pub fn hits(&self) -> u64 {
        self.hits
    }
}

#[cfg(test)]
#[path = "transposition_tests.rs"]
mod transposition_tests;

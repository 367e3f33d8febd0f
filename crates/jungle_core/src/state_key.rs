//! Canonical position identity for memoization.
//!
//! Two positions share a key when they have the same side to move, the same
//! result and the same multiset of `(square, species, owner)` placements,
//! however they were reached. Terrain is not part of the key: keys are only
//! compared between positions derived from one setup.

use crate::{position::Position, types::*};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StateKey {
    side_to_move: Player,
    winner: Option<Player>,
    /// Sorted by square; at most one entry per square.
    pieces: Vec<(Square, Species, Player)>,
}

impl StateKey {
    pub fn of(pos: &Position) -> Self {
        // `pieces()` walks the board in square order, which is already canonical.
        let pieces = pos
            .pieces()
            .map(|(s, p)| (s, p.species, p.owner))
            .collect();
        StateKey {
            side_to_move: pos.side_to_move,
            winner: pos.winner,
            pieces,
        }
    }

    pub fn side_to_move(&self) -> Player {
        self.side_to_move
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }
}

impl Position {
    pub fn state_key(&self) -> StateKey {
        StateKey::of(self)
    }
}

#[cfg(test)]
#[path = "state_key_tests.rs"]
mod state_key_tests;

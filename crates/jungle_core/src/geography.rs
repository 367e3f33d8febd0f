//! Fixed terrain of a board: river, traps and lairs.
//!
//! Geography is decided when a game is set up and never changes afterwards,
//! so positions share it behind an `Arc` instead of copying it per clone.

use crate::square_set::SquareSet;
use crate::types::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Geography {
    water: SquareSet,
    /// Land squares orthogonally adjacent to water.
    riverbank: SquareSet,
    /// Indexed by the player whose lair the traps guard.
    traps: [SquareSet; 2],
    lairs: [Square; 2],
}

impl Geography {
    /// Build a geography from explicit terrain.
    ///
    /// `traps[p]` and `lairs[p]` belong to player `p` (index 0 = player one).
    pub fn new(water: SquareSet, traps: [SquareSet; 2], lairs: [Square; 2]) -> Self {
        let mut riverbank = SquareSet::EMPTY;
        for s in !water {
            if neighbours(s).any(|n| water.contains(n)) {
                riverbank.insert(s);
            }
        }
        Self {
            water,
            riverbank,
            traps,
            lairs,
        }
    }

    /// The standard 7x9 board: two 2x3 lakes split by the centre file,
    /// lairs in the middle of each home edge with three traps around them.
    pub fn standard() -> Self {
        let mut water = SquareSet::EMPTY;
        for row in 3..=5 {
            for col in [1, 2, 4, 5] {
                if let Some(s) = sq(col, row) {
                    water.insert(s);
                }
            }
        }
        let at = |c: i8, r: i8| (r * COLS + c) as Square;
        let traps = [
            SquareSet::from_squares(&[at(2, 8), at(4, 8), at(3, 7)]),
            SquareSet::from_squares(&[at(2, 0), at(4, 0), at(3, 1)]),
        ];
        let lairs = [at(3, 8), at(3, 0)];
        Self::new(water, traps, lairs)
    }

    #[inline]
    pub fn is_water(&self, sq: Square) -> bool {
        self.water.contains(sq)
    }

    #[inline]
    pub fn water(&self) -> SquareSet {
        self.water
    }

    #[inline]
    pub fn riverbank(&self) -> SquareSet {
        self.riverbank
    }

    /// Traps guarding `player`'s lair. An enemy standing on one of them can be
    /// taken by any of `player`'s pieces.
    #[inline]
    pub fn traps(&self, player: Player) -> SquareSet {
        self.traps[player.idx()]
    }

    #[inline]
    pub fn lair(&self, player: Player) -> Square {
        self.lairs[player.idx()]
    }
}

impl Default for Geography {
    fn default() -> Self {
        Self::standard()
    }
}

use std::sync::Arc;

use tracing::trace;

use crate::geography::Geography;
use crate::rules;
use crate::square_set::SquareSet;
use crate::types::*;

/// A game state: piece placement, turn owner and result.
///
/// Cloning copies the board array by value and shares the geography, so every
/// search node can own an independent position cheaply.
#[derive(Clone, Debug)]
pub struct Position {
    pub board: [Option<Piece>; NUM_SQUARES],
    pub side_to_move: Player,
    pub winner: Option<Player>,
    geography: Arc<Geography>,
}

/// What `apply_move` did with a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was not legal; the position is unchanged.
    Rejected,
    Applied { captured: Option<Piece> },
}

impl MoveOutcome {
    pub fn is_applied(self) -> bool {
        matches!(self, MoveOutcome::Applied { .. })
    }
}

/// Opening placement on the standard board as `(species, col, row)`.
const START_ONE: [(Species, i8, i8); 8] = [
    (Species::Tiger, 0, 8),
    (Species::Lion, 6, 8),
    (Species::Elephant, 0, 6),
    (Species::Dog, 5, 7),
    (Species::Wolf, 2, 6),
    (Species::Cat, 1, 7),
    (Species::Leopard, 4, 6),
    (Species::Rat, 6, 6),
];
const START_TWO: [(Species, i8, i8); 8] = [
    (Species::Lion, 0, 0),
    (Species::Tiger, 6, 0),
    (Species::Elephant, 6, 2),
    (Species::Dog, 1, 1),
    (Species::Wolf, 4, 2),
    (Species::Cat, 5, 1),
    (Species::Leopard, 2, 2),
    (Species::Rat, 0, 2),
];

impl Position {
    /// Standard opening position, player one to move.
    pub fn startpos() -> Self {
        let mut p = Position::empty(Arc::new(Geography::standard()), Player::One);
        for (player, layout) in [(Player::One, START_ONE), (Player::Two, START_TWO)] {
            for (species, col, row) in layout {
                if let Some(s) = sq(col, row) {
                    p.set_piece(s, Some(Piece::new(species, player)));
                }
            }
        }
        p
    }

    /// A board with no pieces on the given terrain.
    pub fn empty(geography: Arc<Geography>, side_to_move: Player) -> Self {
        Position {
            board: [None; NUM_SQUARES],
            side_to_move,
            winner: None,
            geography,
        }
    }

    pub fn geography(&self) -> &Geography {
        &self.geography
    }

    /// The shared handle, for building sibling positions on the same terrain.
    pub fn geography_arc(&self) -> Arc<Geography> {
        Arc::clone(&self.geography)
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board[sq as usize]
    }
    pub fn set_piece(&mut self, sq: Square, pc: Option<Piece>) {
        self.board[sq as usize] = pc;
    }

    /// Live pieces with their squares, in square order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.board
            .iter()
            .enumerate()
            .filter_map(|(i, pc)| pc.map(|p| (i as Square, p)))
    }

    pub fn pieces_of(&self, player: Player) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, p)| p.owner == player)
    }

    /// Squares holding pieces of `player`.
    pub fn occupied_by(&self, player: Player) -> SquareSet {
        let mut set = SquareSet::EMPTY;
        for (s, _) in self.pieces_of(player) {
            set.insert(s);
        }
        set
    }

    pub fn find(&self, species: Species, owner: Player) -> Option<Square> {
        self.pieces_of(owner)
            .find(|(_, p)| p.species == species)
            .map(|(s, _)| s)
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.winner.is_some()
    }

    pub fn legal_destinations(&self, from: Square) -> SquareSet {
        rules::legal_destinations(self, from)
    }

    /// All legal moves for the side to move, pieces in square order.
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut out = Vec::with_capacity(32);
        rules::legal_moves_into(self, &mut out);
        out
    }

    /// Play `mv` for the side to move.
    ///
    /// Illegal requests are no-ops. After a legal move `winner` is set when the
    /// mover entered the enemy lair, took the last enemy piece, or left the
    /// opponent without a legal move.
    pub fn apply_move(&mut self, mv: Move) -> MoveOutcome {
        let Some(piece) = self.piece_at(mv.from) else {
            trace!(%mv, "rejected: empty origin square");
            return MoveOutcome::Rejected;
        };
        if piece.owner != self.side_to_move {
            trace!(%mv, "rejected: not the mover's piece");
            return MoveOutcome::Rejected;
        }
        if !self.legal_destinations(mv.from).contains(mv.to) {
            trace!(%mv, "rejected: illegal destination");
            return MoveOutcome::Rejected;
        }

        let mover = piece.owner;
        let opponent = mover.other();

        // Reaching the enemy lair ends the game before anything else happens.
        if mv.to == self.geography.lair(opponent) {
            self.set_piece(mv.from, None);
            self.set_piece(mv.to, Some(piece));
            self.winner = Some(mover);
            return MoveOutcome::Applied { captured: None };
        }

        let captured = self.board[mv.to as usize].take();
        self.set_piece(mv.from, None);
        self.set_piece(mv.to, Some(piece));
        self.side_to_move = opponent;

        if self.pieces_of(opponent).next().is_none() || !rules::has_any_move(self, opponent) {
            self.winner = Some(mover);
        }

        MoveOutcome::Applied { captured }
    }
}

impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.board == other.board
            && self.side_to_move == other.side_to_move
            && self.winner == other.winner
            && (Arc::ptr_eq(&self.geography, &other.geography)
                || *self.geography == *other.geography)
    }
}

impl Eq for Position {}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

#[cfg(test)]
#[path = "position_tests.rs"]
mod position_tests;

//! Move legality: terrain, capture hierarchy and river jumps.
//!
//! Everything here is a pure function of the position.

use crate::{position::Position, square_set::SquareSet, types::*};

/// Whether `attacker`, moving from `from`, may take `defender` standing on `to`.
///
/// Only the hierarchy part of legality; terrain and ownership are checked by
/// [`can_move_to`].
pub fn can_capture(
    pos: &Position,
    attacker: Piece,
    from: Square,
    defender: Piece,
    to: Square,
) -> bool {
    let geo = pos.geography();
    let in_trap = geo.traps(attacker.owner).contains(to);

    if attacker.species == Species::Elephant && defender.species == Species::Rat && !in_trap {
        return false;
    }
    // A rat coming out of the river cannot attack anything on land.
    if attacker.species == Species::Rat && geo.is_water(from) && !geo.is_water(to) {
        return false;
    }
    if in_trap {
        return true;
    }
    attacker.species.rank() >= defender.species.rank()
        || (attacker.species == Species::Rat && defender.species == Species::Elephant)
}

/// Landing checks shared by steps and jumps: own lair, water and occupancy.
pub fn can_move_to(pos: &Position, from: Square, piece: Piece, to: Square) -> bool {
    let geo = pos.geography();
    if to == geo.lair(piece.owner) {
        return false;
    }
    if piece.species != Species::Rat && geo.is_water(to) {
        return false;
    }
    match pos.piece_at(to) {
        None => true,
        Some(occupant) if occupant.owner == piece.owner => false,
        Some(occupant) => can_capture(pos, piece, from, occupant, to),
    }
}

/// River jumps available to the piece on `from` (empty for non-jumpers).
///
/// A jump crosses at least one water square in a straight line, no rat may
/// sit on any crossed square, and the first land square beyond must be on the
/// board and pass [`can_move_to`].
pub fn jump_destinations(pos: &Position, from: Square) -> SquareSet {
    let mut out = SquareSet::EMPTY;
    let Some(piece) = pos.piece_at(from) else {
        return out;
    };
    if !piece.species.can_jump() || pos.is_terminal() {
        return out;
    }
    let geo = pos.geography();

    for (dc, dr) in DIRECTIONS {
        let (mut c, mut r) = (col_of(from), row_of(from));
        let mut crossed = 0;
        let mut blocked = false;
        let landing = loop {
            c += dc;
            r += dr;
            match sq(c, r) {
                Some(s) if geo.is_water(s) => {
                    crossed += 1;
                    if pos
                        .piece_at(s)
                        .is_some_and(|p| p.species == Species::Rat)
                    {
                        blocked = true;
                    }
                }
                other => break other,
            }
        };
        if crossed == 0 || blocked {
            continue;
        }
        if let Some(to) = landing
            && can_move_to(pos, from, piece, to)
        {
            out.insert(to);
        }
    }
    out
}

/// Every square the piece on `from` may legally move to.
///
/// Empty when the square is empty or the game is already decided.
pub fn legal_destinations(pos: &Position, from: Square) -> SquareSet {
    let mut out = SquareSet::EMPTY;
    let Some(piece) = pos.piece_at(from) else {
        return out;
    };
    if pos.is_terminal() {
        return out;
    }
    for to in neighbours(from) {
        if can_move_to(pos, from, piece, to) {
            out.insert(to);
        }
    }
    out | jump_destinations(pos, from)
}

/// Generate all legal moves for the side to move into the provided buffer.
pub fn legal_moves_into(pos: &Position, out: &mut Vec<Move>) {
    out.clear();
    for (from, _) in pos.pieces_of(pos.side_to_move) {
        for to in legal_destinations(pos, from) {
            out.push(Move::new(from, to));
        }
    }
}

/// Whether `player` has at least one legal move, ignoring whose turn it is.
pub fn has_any_move(pos: &Position, player: Player) -> bool {
    pos.pieces_of(player)
        .any(|(from, _)| !legal_destinations(pos, from).is_empty())
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod rules_tests;

use std::sync::Arc;

use super::*;
use crate::eval::{EvalTier, WIN_SCORE};
use jungle_core::{coord_to_sq, Geography, Piece, Square, Species};

fn at(coord: &str) -> Square {
    coord_to_sq(coord).expect("valid coordinate")
}

fn setup(side: Player, pieces: &[(&str, Species, Player)]) -> Position {
    let mut pos = Position::empty(Arc::new(Geography::standard()), side);
    for &(coord, species, owner) in pieces {
        pos.set_piece(at(coord), Some(Piece::new(species, owner)));
    }
    pos
}

/// Plain minimax without pruning, ordering or memo.
fn reference(pos: &Position, depth: u8, root: Player, eval: &dyn Evaluator) -> f64 {
    if depth == 0 || pos.is_terminal() {
        return eval.evaluate(pos, root);
    }
    let scores: Vec<f64> = children(pos)
        .iter()
        .map(|c| reference(&c.pos, depth - 1, root, eval))
        .collect();
    if scores.is_empty() {
        return eval.evaluate(pos, root);
    }
    if pos.side_to_move == root {
        scores.into_iter().fold(f64::NEG_INFINITY, f64::max)
    } else {
        scores.into_iter().fold(f64::INFINITY, f64::min)
    }
}

fn skirmish() -> Position {
    setup(
        Player::Two,
        &[
            ("D5", Species::Lion, Player::One),
            ("B4", Species::Rat, Player::One),
            ("C3", Species::Wolf, Player::One),
            ("A3", Species::Elephant, Player::One),
            ("D6", Species::Cat, Player::Two),
            ("A6", Species::Tiger, Player::Two),
            ("F7", Species::Dog, Player::Two),
            ("G8", Species::Rat, Player::Two),
        ],
    )
}

#[test]
fn test_search_opening_returns_legal_move() {
    let pos = Position::startpos();
    let result = search(&pos, 1, &EvalTier::Easy);
    let mv = result.best_move.expect("opening has moves");
    assert!(pos.legal_moves().contains(&mv));
    assert!(result.nodes > 0);
}

#[test]
fn test_alpha_beta_matches_plain_minimax() {
    let cases = [
        (Position::startpos(), 2, EvalTier::Medium),
        (Position::startpos(), 3, EvalTier::Easy),
        (skirmish(), 2, EvalTier::Impossible),
        (skirmish(), 3, EvalTier::Hard),
    ];
    for (pos, depth, tier) in cases {
        let expected = reference(&pos, depth, pos.side_to_move, &tier);
        let got = search(&pos, depth, &tier).score;
        assert_eq!(got, expected, "{tier} at depth {depth}");
    }
}

#[test]
fn test_best_move_achieves_reported_score() {
    let pos = skirmish();
    let result = search(&pos, 2, &EvalTier::Hard);
    let mv = result.best_move.expect("side to move has moves");
    let mut next = pos.clone();
    assert!(next.apply_move(mv).is_applied());
    assert_eq!(reference(&next, 1, pos.side_to_move, &EvalTier::Hard), result.score);
}

#[test]
fn test_search_is_deterministic() {
    let pos = skirmish();
    let a = search(&pos, 3, &EvalTier::Medium);
    let b = search(&pos, 3, &EvalTier::Medium);
    assert_eq!(a, b);
}

#[test]
fn test_takes_the_lair_when_it_can() {
    let pos = setup(
        Player::One,
        &[
            ("D8", Species::Dog, Player::One),
            ("B5", Species::Rat, Player::One),
            ("A5", Species::Elephant, Player::Two),
            ("G2", Species::Cat, Player::Two),
        ],
    );
    for depth in 1..=3 {
        let result = search(&pos, depth, &EvalTier::Easy);
        assert_eq!(result.best_move, Some(Move::new(at("D8"), at("D9"))));
        assert_eq!(result.score, WIN_SCORE);
    }
}

#[test]
fn test_sees_the_losing_reply() {
    // The lion on D2 walks into D1 next move unless the cat takes it; D2
    // guards player one's lair, so the cat may.
    let pos = setup(
        Player::One,
        &[
            ("E2", Species::Cat, Player::One),
            ("G5", Species::Elephant, Player::One),
            ("D2", Species::Lion, Player::Two),
            ("A9", Species::Rat, Player::Two),
        ],
    );
    let result = search(&pos, 2, &EvalTier::Easy);
    assert_eq!(result.best_move, Some(Move::new(at("E2"), at("D2"))));
    assert!(result.score > -WIN_SCORE);
}

#[test]
fn test_no_move_when_game_over() {
    let mut pos = Position::startpos();
    pos.winner = Some(Player::Two);
    let result = search(&pos, 3, &EvalTier::Hard);
    assert_eq!(result.best_move, None);
    assert_eq!(result.score, -WIN_SCORE);
}

#[test]
fn test_depth_zero_falls_back_to_first_move() {
    let pos = Position::startpos();
    let first = pos.legal_moves()[0];
    assert_eq!(choose_move(&pos, 0, &EvalTier::Easy), Some(first));
}

#[test]
fn test_table_is_used() {
    let result = search(&Position::startpos(), 3, &EvalTier::Easy);
    assert!(result.tt_hits > 0, "transpositions exist at depth 3");
}

#[test]
fn test_custom_evaluator() {
    // Prefers positions where the mover's rat stands furthest up the board.
    let rat_rank = |pos: &Position, me: Player| {
        pos.find(Species::Rat, me)
            .map(|s| -f64::from(jungle_core::row_of(s)))
            .unwrap_or(-100.0)
    };
    let pos = Position::startpos();
    let mv = choose_move(&pos, 1, &rat_rank).expect("move");
    assert_eq!(mv, Move::new(at("G3"), at("G4")));
}

use std::sync::Arc;

use super::*;
use jungle_core::{coord_to_sq, Geography, Piece, NUM_SQUARES};

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

/// Rotate the board half a turn and swap the armies.
fn mirror(pos: &Position) -> Position {
    let mut out = Position::empty(pos.geography_arc(), pos.side_to_move.other());
    for (s, p) in pos.pieces() {
        let to = (NUM_SQUARES - 1) as Square - s;
        out.set_piece(to, Some(Piece::new(p.species, p.owner.other())));
    }
    out.winner = pos.winner.map(Player::other);
    out
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_terminal_short_circuit() {
    let mut pos = Position::startpos();
    pos.winner = Some(Player::Two);
    for tier in EvalTier::ALL {
        assert_eq!(tier.evaluate(&pos, Player::Two), WIN_SCORE);
        assert_eq!(tier.evaluate(&pos, Player::One), -WIN_SCORE);
    }
}

#[test]
fn test_opening_is_balanced_without_den_defence() {
    let pos = Position::startpos();
    assert!(close(EvalTier::Easy.evaluate(&pos, Player::One), 0.0));
    assert!(close(EvalTier::Medium.evaluate(&pos, Player::Two), 0.0));
}

#[test]
fn test_opening_den_defence_penalty() {
    // The closest enemy pieces (wolf and leopard) stand 7 steps from each lair.
    let pos = Position::startpos();
    assert!(close(EvalTier::Hard.evaluate(&pos, Player::One), -4.0));
    assert!(close(
        EvalTier::Impossible.evaluate(&pos, Player::One),
        -20.0 * 4f64.powf(1.5)
    ));
}

#[test]
fn test_mirrored_position_scores_the_same() {
    let pos = setup(
        Player::One,
        &[
            ("D5", Species::Lion, Player::One),
            ("B4", Species::Rat, Player::One),
            ("C2", Species::Dog, Player::One),
            ("A4", Species::Elephant, Player::Two),
            ("D8", Species::Wolf, Player::Two),
            ("E1", Species::Cat, Player::Two),
        ],
    );
    let flipped = mirror(&pos);
    for tier in EvalTier::ALL {
        let a = tier.evaluate(&pos, Player::One);
        let b = tier.evaluate(&flipped, Player::Two);
        assert!(close(a, b), "{tier}: {a} vs {b}");
    }
}

#[test]
fn test_material_counts() {
    let lone = setup(
        Player::One,
        &[
            ("D5", Species::Elephant, Player::One),
            ("A9", Species::Cat, Player::Two),
        ],
    );
    let extra = setup(
        Player::One,
        &[
            ("D5", Species::Elephant, Player::One),
            ("G7", Species::Dog, Player::One),
            ("A9", Species::Cat, Player::Two),
        ],
    );
    for tier in EvalTier::ALL {
        assert!(
            tier.evaluate(&extra, Player::One) > tier.evaluate(&lone, Player::One),
            "{tier} should like the extra dog"
        );
    }
}

#[test]
fn test_piece_on_enemy_trap_is_worthless() {
    // E1 guards player one's lair, so a player two wolf there has no material.
    let trapped = setup(
        Player::One,
        &[
            ("A5", Species::Tiger, Player::One),
            ("E1", Species::Wolf, Player::Two),
        ],
    );
    let weights = Weights {
        den_progress: 0.0,
        mobility: 0.0,
        ..*EvalTier::Easy.weights()
    };
    assert!(close(evaluate_with(&weights, &trapped, Player::One), 6.0));
}

#[test]
fn test_rat_value_by_tier() {
    let pos = setup(Player::One, &[("A5", Species::Rat, Player::One)]);
    let only_material = |tier: EvalTier| Weights {
        den_progress: 0.0,
        mobility: 0.0,
        rat_position: 0.0,
        riverbank: 0.0,
        den_defence: 0.0,
        ..*tier.weights()
    };
    assert!(close(evaluate_with(&only_material(EvalTier::Easy), &pos, Player::One), 5.0));
    assert!(close(evaluate_with(&only_material(EvalTier::Medium), &pos, Player::One), 5.0));
    assert!(close(evaluate_with(&only_material(EvalTier::Hard), &pos, Player::One), 1.0));
    assert!(close(
        evaluate_with(&only_material(EvalTier::Impossible), &pos, Player::One),
        10.0
    ));
}

#[test]
fn test_medium_penalises_threatened_pieces() {
    // Player two's cat on D6 can be taken by the lion; the lion is safe.
    let threatened = setup(
        Player::One,
        &[
            ("D5", Species::Lion, Player::One),
            ("D6", Species::Cat, Player::Two),
        ],
    );
    let only_threats = Weights {
        material: 0.0,
        den_progress: 0.0,
        mobility: 0.0,
        capture_opportunity: 0.0,
        ..*EvalTier::Medium.weights()
    };
    // -(cat contribution) where the cat loses 0.2 * 2 of its worth.
    assert!(close(evaluate_with(&only_threats, &threatened, Player::One), 0.4));
    assert!(close(evaluate_with(&only_threats, &threatened, Player::Two), -0.4));
}

#[test]
fn test_jump_readiness_needs_open_water() {
    let ready = setup(
        Player::One,
        &[
            ("D5", Species::Lion, Player::One),
            ("G9", Species::Cat, Player::Two),
        ],
    );
    let blocked = setup(
        Player::One,
        &[
            ("D5", Species::Lion, Player::One),
            ("C5", Species::Rat, Player::Two),
            ("E5", Species::Rat, Player::Two),
            ("G9", Species::Cat, Player::Two),
        ],
    );
    let only_jumps = Weights {
        material: 0.0,
        den_progress: 0.0,
        mobility: 0.0,
        jump_ready: 4.0,
        ..EASY
    };
    assert!(close(evaluate_with(&only_jumps, &ready, Player::One), 4.0));
    assert!(close(evaluate_with(&only_jumps, &blocked, Player::One), 0.0));
}

#[test]
fn test_closure_evaluator() {
    let count = |pos: &Position, me: Player| pos.pieces_of(me).count() as f64;
    let pos = Position::startpos();
    assert_eq!(count.evaluate(&pos, Player::One), 8.0);
}

#[test]
fn test_tier_parsing() {
    assert_eq!("hard".parse::<EvalTier>(), Ok(EvalTier::Hard));
    assert_eq!("Impossible".parse::<EvalTier>(), Ok(EvalTier::Impossible));
    assert!("brutal".parse::<EvalTier>().is_err());
    assert_eq!(EvalTier::Medium.to_string(), "medium");
}

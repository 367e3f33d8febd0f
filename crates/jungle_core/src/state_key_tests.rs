use super::*;

fn play(pos: &mut Position, moves: &[(&str, &str)]) {
    for (from, to) in moves {
        let mv = Move::new(coord_to_sq(from).unwrap(), coord_to_sq(to).unwrap());
        assert!(pos.apply_move(mv).is_applied(), "{from}{to} should be legal");
    }
}

#[test]
fn test_transposed_move_orders_share_a_key() {
    let mut a = Position::startpos();
    play(&mut a, &[("A1", "A2"), ("A9", "A8"), ("G1", "G2"), ("G9", "G8")]);

    let mut b = Position::startpos();
    play(&mut b, &[("G1", "G2"), ("G9", "G8"), ("A1", "A2"), ("A9", "A8")]);

    assert_eq!(a.state_key(), b.state_key());
    assert_eq!(a.state_key().piece_count(), 16);
}

#[test]
fn test_side_to_move_is_part_of_key() {
    let pos = Position::startpos();
    let mut flipped = pos.clone();
    flipped.side_to_move = Player::Two;
    assert_ne!(pos.state_key(), flipped.state_key());
}

#[test]
fn test_winner_is_part_of_key() {
    let pos = Position::startpos();
    let mut decided = pos.clone();
    decided.winner = Some(Player::One);
    assert_ne!(pos.state_key(), decided.state_key());
    assert_eq!(decided.state_key().winner(), Some(Player::One));
}

#[test]
fn test_keys_hash_consistently() {
    use std::collections::HashSet;

    let mut seen = HashSet::new();
    seen.insert(Position::startpos().state_key());
    assert!(!seen.insert(Position::startpos().state_key()));
}

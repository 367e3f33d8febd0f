use super::*;
use jungle_core::Player;

#[test]
fn random_engine_returns_legal_move() {
    let mut engine = RandomEngine::new();
    let pos = Position::startpos();

    let result = engine.search(&pos, 1);

    let mv = result.best_move.expect("opening has moves");
    assert!(pos.legal_moves().contains(&mv));
}

#[test]
fn random_engine_handles_finished_game() {
    let mut engine = RandomEngine::with_seed(5);
    let mut pos = Position::startpos();
    pos.winner = Some(Player::One);

    let result = engine.search(&pos, 1);

    assert!(result.best_move.is_none());
}

#[test]
fn random_engine_is_reproducible_with_seed() {
    let pos = Position::startpos();
    let mut a = RandomEngine::with_seed(99);
    let mut b = RandomEngine::with_seed(99);
    for _ in 0..5 {
        assert_eq!(a.search(&pos, 1).best_move, b.search(&pos, 1).best_move);
    }
}

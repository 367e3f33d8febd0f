//! Minimax with random tie-breaking
//!
//! Searches the full tree (no pruning, no memo) so that every root move gets
//! its exact minimax value, then picks uniformly among the moves sharing the
//! best value. Depth 0 is treated as depth 1.

use jungle_core::{Move, Player, Position};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::eval::Evaluator;
use crate::search::children;

#[derive(Debug, Clone, PartialEq)]
pub struct RandomizedOutcome {
    pub best_move: Option<Move>,
    pub score: f64,
    /// Root moves that tied for the best score.
    pub candidates: Vec<Move>,
    pub nodes: u64,
}

pub fn search_randomized<E, R>(
    pos: &Position,
    depth: u8,
    evaluator: &E,
    rng: &mut R,
) -> RandomizedOutcome
where
    E: Evaluator + ?Sized,
    R: Rng + ?Sized,
{
    let root = pos.side_to_move;
    let mut nodes = 1;
    let mut best_score = f64::NEG_INFINITY;
    let mut candidates = Vec::new();

    for child in children(pos) {
        let score = minimax(&child.pos, depth.max(1) - 1, root, evaluator, &mut nodes);
        if score > best_score {
            best_score = score;
            candidates.clear();
            candidates.push(child.mv);
        } else if score == best_score {
            candidates.push(child.mv);
        }
    }

    let best_move = candidates.choose(rng).copied();
    let score = if best_move.is_some() {
        best_score
    } else {
        evaluator.evaluate(pos, root)
    };
    debug!(
        depth,
        nodes,
        ties = candidates.len(),
        score,
        "randomized search finished"
    );

    RandomizedOutcome {
        best_move,
        score,
        candidates,
        nodes,
    }
}

/// The move [`search_randomized`] picks.
pub fn choose_move_randomized<E, R>(
    pos: &Position,
    depth: u8,
    evaluator: &E,
    rng: &mut R,
) -> Option<Move>
where
    E: Evaluator + ?Sized,
    R: Rng + ?Sized,
{
    search_randomized(pos, depth, evaluator, rng).best_move
}

fn minimax<E>(pos: &Position, depth: u8, root: Player, evaluator: &E, nodes: &mut u64) -> f64
where
    E: Evaluator + ?Sized,
{
    *nodes += 1;
    if depth == 0 || pos.is_terminal() {
        return evaluator.evaluate(pos, root);
    }
    let scores = children(pos)
        .into_iter()
        .map(|c| minimax(&c.pos, depth - 1, root, evaluator, nodes));
    let best = if pos.side_to_move == root {
        scores.fold(f64::NEG_INFINITY, f64::max)
    } else {
        scores.fold(f64::INFINITY, f64::min)
    };
    if best.is_finite() {
        best
    } else {
        evaluator.evaluate(pos, root)
    }
}

#[cfg(test)]
#[path = "randomized_tests.rs"]
mod randomized_tests;

//! Depth-limited minimax with alpha-beta pruning
//!
//! Scores are always taken from the root player's point of view: the root
//! player maximizes, the opponent minimizes the same number. Children are
//! ordered by a one-ply evaluation before they are searched, and every node
//! is memoized in a transposition table that lives only for one call.

use jungle_core::{Move, Player, Position};
use tracing::debug;

use crate::eval::Evaluator;
use crate::transposition::{Bound, TranspositionTable, TtEntry};

/// Everything a search call found out.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    /// Best move for the side to move, `None` only when it has no legal move.
    pub best_move: Option<Move>,
    /// Minimax value of the root from the mover's perspective.
    pub score: f64,
    /// Nodes visited (table hits included).
    pub nodes: u64,
    /// Nodes answered from the transposition table.
    pub tt_hits: u64,
}

/// Search `pos` to `depth` plies and report the best move with its score.
///
/// If the tree yields no move (depth 0, or a root without children) the first
/// legal move is returned instead, so callers only see `None` when the side
/// to move is truly stuck or the game is over.
pub fn search<E>(pos: &Position, depth: u8, evaluator: &E) -> SearchOutcome
where
    E: Evaluator + ?Sized,
{
    let mut searcher = Searcher {
        evaluator,
        root: pos.side_to_move,
        table: TranspositionTable::new(),
        nodes: 0,
    };
    let (score, found) = searcher.minimax(pos, depth, f64::NEG_INFINITY, f64::INFINITY);
    let best_move = found.or_else(|| pos.legal_moves().first().copied());

    let best = best_move.map(|m| m.to_string());
    debug!(
        depth,
        nodes = searcher.nodes,
        tt_hits = searcher.table.hits(),
        tt_size = searcher.table.len(),
        score,
        best = ?best,
        "search finished"
    );

    SearchOutcome {
        best_move,
        score,
        nodes: searcher.nodes,
        tt_hits: searcher.table.hits(),
    }
}

/// The move [`search`] would play.
pub fn choose_move<E>(pos: &Position, depth: u8, evaluator: &E) -> Option<Move>
where
    E: Evaluator + ?Sized,
{
    search(pos, depth, evaluator).best_move
}

/// A legal move paired with the position it leads to.
pub(crate) struct Child {
    pub mv: Move,
    pub pos: Position,
}

/// Every legal move of the side to move, applied to its own clone.
pub(crate) fn children(pos: &Position) -> Vec<Child> {
    pos.legal_moves()
        .into_iter()
        .filter_map(|mv| {
            let mut next = pos.clone();
            next.apply_move(mv)
                .is_applied()
                .then_some(Child { mv, pos: next })
        })
        .collect()
}

struct Searcher<'a, E: ?Sized> {
    evaluator: &'a E,
    root: Player,
    table: TranspositionTable,
    nodes: u64,
}

impl<E: Evaluator + ?Sized> Searcher<'_, E> {
    fn minimax(
        &mut self,
        pos: &Position,
        depth: u8,
        mut alpha: f64,
        mut beta: f64,
    ) -> (f64, Option<Move>) {
        self.nodes += 1;

        let key = (pos.state_key(), depth);
        if let Some(hit) = self.table.probe(&key, alpha, beta) {
            return (hit.score, hit.best_move);
        }

        if depth == 0 || pos.is_terminal() {
            let score = self.evaluator.evaluate(pos, self.root);
            self.store(key, score, Bound::Exact, None);
            return (score, None);
        }

        let maximizing = pos.side_to_move == self.root;
        let children = self.ordered_children(pos, maximizing);
        if children.is_empty() {
            let score = self.evaluator.evaluate(pos, self.root);
            self.store(key, score, Bound::Exact, None);
            return (score, None);
        }

        let (alpha_in, beta_in) = (alpha, beta);
        let mut best_score = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        let mut best_move = None;

        for child in children {
            let (score, _) = self.minimax(&child.pos, depth - 1, alpha, beta);
            if maximizing {
                if score > best_score {
                    best_score = score;
                    best_move = Some(child.mv);
                }
                alpha = alpha.max(score);
            } else {
                if score < best_score {
                    best_score = score;
                    best_move = Some(child.mv);
                }
                beta = beta.min(score);
            }
            if beta <= alpha {
                break;
            }
        }

        let bound = Bound::classify(best_score, alpha_in, beta_in);
        self.store(key, best_score, bound, best_move);
        (best_score, best_move)
    }

    /// Children sorted best-first for the side to move, by a static look at
    /// each resulting position. The sort is stable, so equal scores keep
    /// generation order.
    fn ordered_children(&self, pos: &Position, maximizing: bool) -> Vec<Child> {
        let mut scored: Vec<(f64, Child)> = children(pos)
            .into_iter()
            .map(|c| (self.evaluator.evaluate(&c.pos, self.root), c))
            .collect();
        if maximizing {
            scored.sort_by(|a, b| b.0.total_cmp(&a.0));
        } else {
            scored.sort_by(|a, b| a.0.total_cmp(&b.0));
        }
        scored.into_iter().map(|(_, c)| c).collect()
    }

    fn store(
        &mut self,
        key: (jungle_core::StateKey, u8),
        score: f64,
        bound: Bound,
        best_move: Option<Move>,
    ) {
        self.table.store(
            key,
            TtEntry {
                score,
                bound,
                best_move,
            },
        );
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;

pub mod geography;
pub mod notation;
pub mod perft;
pub mod position;
pub mod rules;
pub mod square_set;
pub mod state_key;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use geography::Geography;
pub use notation::{NotationError, START_NOTATION};
pub use perft::perft;
pub use position::{MoveOutcome, Position};
pub use rules::{can_capture, can_move_to, has_any_move, jump_destinations, legal_destinations};
pub use square_set::SquareSet;
pub use state_key::StateKey;
pub use types::*;

// =============================================================================
// Engine trait: implemented by every move-picking policy (search, random, ...)
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best move found (None if the side to move has no legal move)
    pub best_move: Option<Move>,
    /// Evaluation score from the mover's perspective
    pub score: f64,
    /// Search depth in plies
    pub depth: u8,
    /// Number of nodes searched (for stats)
    pub nodes: u64,
}

/// Trait that all jungle engines must implement.
///
/// This allows swapping between the deterministic alpha-beta search, its
/// randomized tie-breaking variant, and the random mover.
pub trait Engine: Send {
    /// Pick a move for the side to move in `pos`.
    ///
    /// # Arguments
    /// * `pos` - The current position to analyze
    /// * `depth` - Search horizon in plies
    ///
    /// # Returns
    /// SearchResult containing best move, score, and statistics
    fn search(&mut self, pos: &Position, depth: u8) -> SearchResult;

    /// Returns the engine's display name
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}

pub mod config;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod select;
pub mod time_control;
#[cfg(any(test, feature = "testing"))]
pub mod tree;
pub mod types;

pub use config::*;
pub use error::*;
pub use eval::PieceValueTable;
pub use game::Game;
pub use rules::{Applied, Rules};
pub use select::{pick_best, top_candidates, ScoredMove};
pub use time_control::*;
pub use types::*;

// Re-exported so callers can name moves and boards without a direct dependency
pub use cozy_chess;

// =============================================================================
// Engine trait — implemented by both search strategies
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult<M> {
    /// The chosen move (None if the position has no legal moves)
    pub best_move: Option<M>,
    /// Score of the chosen move in the engine's own convention
    pub score: Score,
    /// Depth searched in plies
    pub depth: u8,
    /// Number of moves applied during the search
    pub nodes: u64,
}

impl<M> SearchResult<M> {
    /// Result for a position without legal moves.
    pub fn no_move(score: Score, depth: u8) -> Self {
        Self {
            best_move: None,
            score,
            depth,
            nodes: 0,
        }
    }
}

/// Trait that both search strategies implement.
///
/// Engines borrow the position mutably and explore it with scoped
/// apply/undo; on return the position is exactly as it was passed in.
pub trait Engine<R: Rules>: Send {
    /// Search the position and pick a move.
    ///
    /// # Arguments
    /// * `pos` - The position to analyze, restored before returning
    /// * `budget` - The mover's clock; accepted but not consulted
    ///
    /// # Returns
    /// SearchResult containing the chosen move, its score, and statistics
    fn search(&mut self, pos: &mut R, budget: TimeBudget) -> SearchResult<R::Move>;

    /// Returns the engine's name for reports
    fn name(&self) -> &str;

    /// Returns the engine's author
    fn author(&self) -> &str {
        "ML-chess"
    }

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}

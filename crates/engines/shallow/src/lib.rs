//! Shallow Chess Engine
//!
//! Rates every legal move by the worst material outcome after any single
//! reply, then picks at random among the best-rated moves. Much cheaper
//! than the alpha-beta engine while still:
//! - playing a mate in one whenever it exists
//! - never walking into a mate in one
//! - taking draws when behind on material and avoiding them when ahead

mod search;

use chess_core::{pick_best, Engine, Rules, SearchConfig, SearchResult, TimeBudget};
use rand::rngs::StdRng;


/// Plies the shallow search looks ahead: the mover and one reply.
pub const SHALLOW_DEPTH: u8 = 2;

/// A chess engine that plays the move whose worst reply is least bad.
///
/// Ties are broken uniformly at random from the engine's generator, which
/// is seeded from the config when a seed is given.
#[derive(Debug, Clone)]
pub struct ShallowEngine {
    config: SearchConfig,
    rng: StdRng,
    nodes: u64,
}

impl ShallowEngine {
    pub fn new() -> Self {
        Self::with_config(SearchConfig::shallow())
    }

    pub fn with_config(config: SearchConfig) -> Self {
        let rng = config.rng();
        Self {
            config,
            rng,
            nodes: 0,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

impl Default for ShallowEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rules> Engine<R> for ShallowEngine {
    fn search(&mut self, pos: &mut R, _budget: TimeBudget) -> SearchResult<R::Move> {
        self.nodes = 0;

        let mut rated = search::rate_moves(pos, &self.config.piece_values, &mut self.nodes);
        if rated.is_empty() {
            return SearchResult::no_move(0, SHALLOW_DEPTH);
        }

        // `pick_best` leaves `rated` sorted best first
        let best_move = pick_best(&mut rated, &mut self.rng);
        let score = rated[0].score;
        for candidate in rated.iter().take_while(|c| c.score == score) {
            tracing::trace!(mv = ?candidate.mv, score, "top candidate");
        }

        tracing::debug!(
            engine = "shallow",
            nodes = self.nodes,
            best = ?best_move,
            score,
            "search finished"
        );

        SearchResult {
            best_move: Some(best_move),
            score,
            depth: SHALLOW_DEPTH,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Shallow v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

// Re-export for direct use if needed
pub use search::{rate_move, rate_moves};

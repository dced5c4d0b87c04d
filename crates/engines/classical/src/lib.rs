//! Classical Chess Engine
//!
//! Fixed-depth alpha-beta search with material-based evaluation.
//! One of the two strategies the bot can play with; the other is the
//! shallow engine.

mod eval;
mod search;

use chess_core::{Engine, Rules, SearchConfig, SearchResult, TimeBudget};
use rand::rngs::StdRng;

/// Default search depth in plies.
pub const DEFAULT_DEPTH: u8 = 4;

/// Classical chess engine using minimax with alpha-beta pruning.
///
/// This engine uses:
/// - Minimax search with alpha-beta pruning, White maximizing
/// - Material evaluation plus a checkmate term at the leaves
/// - Optional leaf noise from a seeded generator
/// - Deterministic tie policy: the first best move in generation order
#[derive(Debug, Clone)]
pub struct AlphaBetaEngine {
    config: SearchConfig,
    rng: StdRng,
    /// Node counter for statistics
    nodes: u64,
}

impl AlphaBetaEngine {
    pub fn new() -> Self {
        Self::with_config(SearchConfig::alpha_beta(DEFAULT_DEPTH))
    }

    pub fn with_depth(depth: u8) -> Self {
        Self::with_config(SearchConfig::alpha_beta(depth))
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

impl Default for AlphaBetaEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rules> Engine<R> for AlphaBetaEngine {
    fn search(&mut self, pos: &mut R, _budget: TimeBudget) -> SearchResult<R::Move> {
        self.nodes = 0;
        let depth = self.config.depth;
        let mut leaf = LeafEval::new(
            &self.config.piece_values,
            self.config.eval_noise,
            &mut self.rng,
        );

        let outcome = search::pick_best_move(pos, depth, &mut leaf, &mut self.nodes);

        tracing::debug!(
            engine = "alpha-beta",
            depth,
            nodes = self.nodes,
            best = ?outcome.map(|(mv, _)| mv),
            score = ?outcome.map(|(_, s)| s),
            "search finished"
        );

        match outcome {
            Some((mv, score)) => SearchResult {
                best_move: Some(mv),
                score,
                depth,
                nodes: self.nodes,
            },
            None => SearchResult::no_move(leaf.evaluate(pos), depth),
        }
    }

    fn name(&self) -> &str {
        "AlphaBeta v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

// Re-export for direct use if needed
pub use eval::LeafEval;
pub use search::{alpha_beta, pick_best_move};

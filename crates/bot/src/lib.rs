//! Move selection entry point.
//!
//! A [`Bot`] owns one search engine, chosen by [`SearchConfig::strategy`],
//! and answers "which move should the side to move play?" for any position
//! implementing [`Rules`].
//!
//! ```no_run
//! use chess_core::{Game, TimeBudget};
//!
//! let mut pos = Game::startpos();
//! let mv = bot::select_move(&mut pos, TimeBudget::unlimited());
//! assert!(mv.is_some());
//! ```

use std::path::Path;

use chess_core::{ConfigError, Engine, Rules, SearchConfig, SearchResult, Strategy, TimeBudget};
use classical_engine::AlphaBetaEngine;
use shallow_engine::ShallowEngine;

/// The engine behind a bot.
#[derive(Debug, Clone)]
enum Player {
    Shallow(ShallowEngine),
    AlphaBeta(AlphaBetaEngine),
}

impl Player {
    fn new(config: &SearchConfig) -> Self {
        match config.strategy {
            Strategy::Shallow => Player::Shallow(ShallowEngine::with_config(config.clone())),
            Strategy::AlphaBeta => Player::AlphaBeta(AlphaBetaEngine::with_config(config.clone())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Bot {
    player: Player,
}

impl Bot {
    /// Bot with the default configuration: shallow search, entropy-seeded
    /// tie-breaks.
    pub fn new() -> Self {
        Self {
            player: Player::new(&SearchConfig::default()),
        }
    }

    pub fn from_config(config: SearchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            player: Player::new(&config),
        })
    }

    /// Reads a TOML [`SearchConfig`] from `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_config(SearchConfig::load(path)?)
    }

    pub fn strategy(&self) -> Strategy {
        match self.player {
            Player::Shallow(_) => Strategy::Shallow,
            Player::AlphaBeta(_) => Strategy::AlphaBeta,
        }
    }

    /// The move the side to move should play, or `None` when it has no
    /// legal move. `pos` is searched in place and restored before return.
    ///
    /// `budget` is carried to the engine but does not bound the search.
    pub fn select_move<R: Rules>(&mut self, pos: &mut R, budget: TimeBudget) -> Option<R::Move> {
        self.search(pos, budget).best_move
    }

    /// Like [`Bot::select_move`], with the score and node count.
    pub fn search<R: Rules>(&mut self, pos: &mut R, budget: TimeBudget) -> SearchResult<R::Move> {
        let result = match &mut self.player {
            Player::Shallow(engine) => engine.search(pos, budget),
            Player::AlphaBeta(engine) => engine.search(pos, budget),
        };
        if result.best_move.is_none() {
            tracing::debug!(strategy = ?self.strategy(), "no legal move");
        }
        result
    }
}

impl Default for Bot {
    fn default() -> Self {
        Self::new()
    }
}

/// Picks a move with a default-configured [`Bot`].
pub fn select_move<R: Rules>(pos: &mut R, budget: TimeBudget) -> Option<R::Move> {
    Bot::new().select_move(pos, budget)
}

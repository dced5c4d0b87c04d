//! Search configuration, loadable from TOML.
//!
//! ```toml
//! strategy = "alpha_beta"
//! depth = 3
//! eval_noise = 5
//! seed = 42
//! piece_values = [100, 300, 300, 500, 900, 100000]
//! ```

use std::path::Path;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::eval::PieceValueTable;
use crate::types::Score;

/// Deepest alpha-beta search the config accepts.
pub const MAX_DEPTH: u8 = 8;

/// Which search picks the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// One ply for the mover, every reply for the opponent, worst case kept.
    #[default]
    Shallow,
    /// Fixed-depth minimax with alpha-beta pruning.
    AlphaBeta,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    pub strategy: Strategy,
    /// Alpha-beta depth in plies. The shallow search always looks two plies.
    pub depth: u8,
    pub piece_values: PieceValueTable,
    /// Alpha-beta leaves get a uniform jitter in `[-eval_noise, eval_noise)`.
    pub eval_noise: Score,
    /// Seed for tie-breaking and noise. None draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            depth: 4,
            piece_values: PieceValueTable::default(),
            eval_noise: 0,
            seed: None,
        }
    }
}

impl SearchConfig {
    pub fn alpha_beta(depth: u8) -> Self {
        Self {
            strategy: Strategy::AlphaBeta,
            depth,
            ..Default::default()
        }
    }

    pub fn shallow() -> Self {
        Self {
            strategy: Strategy::Shallow,
            ..Default::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: SearchConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), ?config, "loaded search config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.depth == 0 || self.depth > MAX_DEPTH {
            return Err(ConfigError::Invalid(format!(
                "depth must be in 1..={MAX_DEPTH}, got {}",
                self.depth
            )));
        }
        if self.eval_noise < 0 {
            return Err(ConfigError::Invalid(format!(
                "eval_noise must not be negative, got {}",
                self.eval_noise
            )));
        }
        Ok(())
    }

    /// Random source for tie-breaks and evaluation noise.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;

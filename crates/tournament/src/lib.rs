//! Tournament Runner for ML-chess
//!
//! This crate provides infrastructure for:
//! - Playing games between the search strategies, alternating colours
//! - Recording every game as UCI moves with how it ended
//! - Saving and loading match reports as JSON
//!
//! # Usage
//!
//! ```no_run
//! use classical_engine::AlphaBetaEngine;
//! use shallow_engine::ShallowEngine;
//! use tournament::{MatchConfig, MatchRunner};
//!
//! let runner = MatchRunner::new(MatchConfig {
//!     num_games: 4,
//!     ..Default::default()
//! });
//! let result = runner
//!     .run_match(&mut AlphaBetaEngine::with_depth(3), &mut ShallowEngine::new())
//!     .expect("standard start position");
//! println!("{}", result.summary());
//! ```

mod match_runner;
mod results;

pub use match_runner::*;
pub use results::*;

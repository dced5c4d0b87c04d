//! Match runner for playing games between engines

use chess_core::{Engine, Game, GameError, Rules, TimeBudget};
use std::time::Duration;

use crate::results::{GameRecord, GameResult, MatchResult, Termination};

/// Configuration for a match
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Clock handed to the engines on every move (None = no limit)
    pub time_per_move: Option<Duration>,
    /// Maximum plies per game before declaring draw
    pub max_plies: u32,
    /// Whether to alternate colors each game
    pub alternate_colors: bool,
    /// Starting position (None = standard start)
    pub start_fen: Option<String>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            time_per_move: None,
            max_plies: 200,
            alternate_colors: true,
            start_fen: None,
        }
    }
}

impl MatchConfig {
    fn budget(&self) -> TimeBudget {
        match self.time_per_move {
            Some(time) => TimeBudget::remaining(time),
            None => TimeBudget::unlimited(),
        }
    }

    fn start_position(&self) -> Result<Game, GameError> {
        match &self.start_fen {
            Some(fen) => Game::from_fen(fen),
            None => Ok(Game::startpos()),
        }
    }
}

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Run a match between two engines
    ///
    /// Returns the result from engine1's perspective, or the parse error
    /// if the configured start position is not valid FEN.
    pub fn run_match(
        &self,
        engine1: &mut dyn Engine<Game>,
        engine2: &mut dyn Engine<Game>,
    ) -> Result<MatchResult, GameError> {
        let start = self.config.start_position()?;
        let mut result = MatchResult::new(engine1.name(), engine2.name());

        for game_num in 0..self.config.num_games {
            // Alternate colors if configured
            let engine1_white = !self.config.alternate_colors || game_num % 2 == 0;

            let (record, game_result) = if engine1_white {
                let record = self.play_game(start.clone(), engine1, engine2);
                let r = record.result;
                (record, r)
            } else {
                // Flip result since engine1 is black
                let record = self.play_game(start.clone(), engine2, engine1);
                let r = record.result.flipped();
                (record, r)
            };

            tracing::info!(
                game = game_num + 1,
                of = self.config.num_games,
                result = record.result.as_pgn(),
                termination = ?record.termination,
                plies = record.moves.len(),
                engine1_white,
                "game finished"
            );

            result.record(game_result, record);
        }

        tracing::info!(summary = %result.summary(), "match finished");
        Ok(result)
    }

    /// Play a single game from `pos`, result from White's perspective
    pub fn play_game(
        &self,
        mut pos: Game,
        white: &mut dyn Engine<Game>,
        black: &mut dyn Engine<Game>,
    ) -> GameRecord {
        white.new_game();
        black.new_game();

        let mut moves = Vec::new();
        let (result, termination) = loop {
            if let Some(ending) = game_over(&pos) {
                break ending;
            }
            if moves.len() as u32 >= self.config.max_plies {
                break (GameResult::Draw, Termination::MoveLimit);
            }

            let engine: &mut dyn Engine<Game> = if pos.white_to_move() {
                &mut *white
            } else {
                &mut *black
            };
            let search = engine.search(&mut pos, self.config.budget());

            match search.best_move {
                Some(mv) => {
                    moves.push(pos.move_to_uci(mv));
                    pos.apply(mv);
                }
                None => {
                    // Legal moves remain, so the engine forfeits
                    tracing::warn!(
                        engine = engine.name(),
                        fen = %pos.fen(),
                        "engine returned no move"
                    );
                    let forfeit = if pos.white_to_move() {
                        GameResult::Loss
                    } else {
                        GameResult::Win
                    };
                    break (forfeit, Termination::NoMove);
                }
            }
        };

        GameRecord {
            white: white.name().to_string(),
            black: black.name().to_string(),
            result,
            termination,
            moves,
            final_fen: pos.fen(),
        }
    }
}

/// Result from White's perspective if the game is over.
fn game_over(pos: &Game) -> Option<(GameResult, Termination)> {
    if pos.is_checkmate() {
        let result = if pos.white_to_move() {
            GameResult::Loss // White is mated, white loses
        } else {
            GameResult::Win // Black is mated, white wins
        };
        return Some((result, Termination::Checkmate));
    }
    if pos.is_draw() {
        return Some((GameResult::Draw, Termination::Draw));
    }
    None
}

/// Quick utility to run a single match
pub fn quick_match(
    engine1: &mut dyn Engine<Game>,
    engine2: &mut dyn Engine<Game>,
    num_games: u32,
) -> Result<MatchResult, GameError> {
    let config = MatchConfig {
        num_games,
        ..Default::default()
    };
    let runner = MatchRunner::new(config);
    runner.run_match(engine1, engine2)
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;

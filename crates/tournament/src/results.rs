//! Match results storage and reporting

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Result of a single game
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

impl GameResult {
    /// The same game seen from the other player's side.
    pub fn flipped(self) -> Self {
        match self {
            GameResult::Win => GameResult::Loss,
            GameResult::Loss => GameResult::Win,
            GameResult::Draw => GameResult::Draw,
        }
    }

    /// PGN-style result, given from White's side.
    pub fn as_pgn(self) -> &'static str {
        match self {
            GameResult::Win => "1-0",
            GameResult::Loss => "0-1",
            GameResult::Draw => "1/2-1/2",
        }
    }
}

/// How a game ended
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    Checkmate,
    /// Stalemate, repetition, fifty-move rule or insufficient material
    Draw,
    /// The move cap was reached before the game ended
    MoveLimit,
    /// An engine returned no move in a position that still had legal moves
    NoMove,
}

/// One played game
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameRecord {
    pub white: String,
    pub black: String,
    /// From White's side
    pub result: GameResult,
    pub termination: Termination,
    /// Moves in UCI notation
    pub moves: Vec<String>,
    pub final_fen: String,
}

/// Result of a match (multiple games), from engine1's side
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchResult {
    pub engine1: String,
    pub engine2: String,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub games: Vec<GameRecord>,
}

impl MatchResult {
    pub fn new(engine1: &str, engine2: &str) -> Self {
        Self {
            engine1: engine1.to_string(),
            engine2: engine2.to_string(),
            ..Default::default()
        }
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Add a game whose result is given from engine1's side.
    pub fn record(&mut self, result: GameResult, game: GameRecord) {
        match result {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
        self.games.push(game);
    }

    /// Score from engine1's perspective (1 for win, 0.5 for draw, 0 for loss)
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total
    }

    /// One-line `+W -L =D` summary.
    pub fn summary(&self) -> String {
        format!(
            "{} vs {}: +{} -{} ={} ({:.1}%)",
            self.engine1,
            self.engine2,
            self.wins,
            self.losses,
            self.draws,
            self.score() * 100.0
        )
    }

    /// Save results to a JSON file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize match result")?;
        std::fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))
    }

    /// Load results from a JSON file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Generate a text report, one line per game
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== {} ===\n\n", self.summary()));
        report.push_str(&format!(
            "{:<4} {:<20} {:<20} {:<8} {:<11} {:>6}\n",
            "#", "White", "Black", "Result", "Ending", "Plies"
        ));
        report.push_str(&"-".repeat(74));
        report.push('\n');

        for (i, game) in self.games.iter().enumerate() {
            report.push_str(&format!(
                "{:<4} {:<20} {:<20} {:<8} {:<11} {:>6}\n",
                i + 1,
                game.white,
                game.black,
                game.result.as_pgn(),
                format!("{:?}", game.termination),
                game.moves.len()
            ));
        }

        report
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;

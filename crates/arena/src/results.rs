//! Match statistics, reports and JSON storage

use std::path::Path;
use std::time::Duration;

use jungle_core::Player;
use serde::{Deserialize, Serialize};

use crate::error::{ArenaError, ArenaResult};

/// Why a game stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameEnd {
    /// A lair was entered, an army was wiped out or a side was left without moves.
    Decided,
    /// An engine had no move to offer.
    NoMove,
    /// An engine offered a move the rules rejected.
    IllegalMove,
    /// The ply limit was reached.
    PlyLimit,
}

/// Result of one game.
#[derive(Debug, Clone, PartialEq)]
pub struct GameRecord {
    /// `None` when the game was inconclusive.
    pub winner: Option<Player>,
    pub end: GameEnd,
    pub plies: u32,
    /// Total time spent choosing moves, per player.
    pub think_time: [Duration; 2],
    /// Searches made, per player.
    pub searches: [u32; 2],
}

/// Aggregated results of a match between two fixed seats.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchStats {
    pub player_one: String,
    pub player_two: String,
    pub games: u32,
    pub player_one_wins: u32,
    pub player_two_wins: u32,
    pub inconclusive: u32,
    pub total_plies: u64,
    /// Seconds spent searching, per player.
    pub think_secs: [f64; 2],
    pub searches: [u64; 2],
}

impl MatchStats {
    pub fn new(player_one: &str, player_two: &str) -> Self {
        Self {
            player_one: player_one.to_string(),
            player_two: player_two.to_string(),
            ..Default::default()
        }
    }

    pub fn record(&mut self, game: &GameRecord) {
        self.games += 1;
        match game.winner {
            Some(Player::One) => self.player_one_wins += 1,
            Some(Player::Two) => self.player_two_wins += 1,
            None => self.inconclusive += 1,
        }
        self.total_plies += u64::from(game.plies);
        for p in Player::ALL {
            self.think_secs[p.idx()] += game.think_time[p.idx()].as_secs_f64();
            self.searches[p.idx()] += u64::from(game.searches[p.idx()]);
        }
    }

    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::One => self.player_one_wins,
            Player::Two => self.player_two_wins,
        }
    }

    fn rate(&self, count: u32) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            f64::from(count) / f64::from(self.games) * 100.0
        }
    }

    /// Percentage of games won by `player`.
    pub fn win_rate(&self, player: Player) -> f64 {
        self.rate(self.wins(player))
    }

    pub fn inconclusive_rate(&self) -> f64 {
        self.rate(self.inconclusive)
    }

    pub fn avg_plies(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.total_plies as f64 / f64::from(self.games)
        }
    }

    /// Mean seconds per move for `player`.
    pub fn avg_think_secs(&self, player: Player) -> f64 {
        let n = self.searches[player.idx()];
        if n == 0 {
            0.0
        } else {
            self.think_secs[player.idx()] / n as f64
        }
    }

    /// Save results to JSON file
    pub fn save(&self, path: &Path) -> ArenaResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| ArenaError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load results from JSON file
    pub fn load(path: &Path) -> ArenaResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| ArenaError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str("=== Final Statistics ===\n");
        report.push_str(&format!("Results after {} games:\n", self.games));
        report.push_str(&format!(
            "Player 1 ({}) wins: {} ({:.2}%)\n",
            self.player_one,
            self.player_one_wins,
            self.win_rate(Player::One)
        ));
        report.push_str(&format!(
            "Player 2 ({}) wins: {} ({:.2}%)\n",
            self.player_two,
            self.player_two_wins,
            self.win_rate(Player::Two)
        ));
        report.push_str(&format!(
            "Inconclusive: {} ({:.2}%)\n",
            self.inconclusive,
            self.inconclusive_rate()
        ));
        report.push_str(&format!("Average plies per game: {:.2}\n", self.avg_plies()));
        report.push_str(&format!(
            "Average time per move for player 1: {:.4} seconds\n",
            self.avg_think_secs(Player::One)
        ));
        report.push_str(&format!(
            "Average time per move for player 2: {:.4} seconds\n",
            self.avg_think_secs(Player::Two)
        ));
        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;

//! Match runner for playing games between engines

use std::time::{Duration, Instant};

use jungle_core::{Engine, MoveOutcome, Player, Position};
use tracing::{debug, info, warn};

use crate::config::{ArenaConfig, PlayerSpec};
use crate::results::{GameEnd, GameRecord, MatchStats};

/// An engine in its seat, with the depth it searches to.
pub struct Seat {
    pub label: String,
    pub engine: Box<dyn Engine>,
    pub depth: u8,
}

impl Seat {
    pub fn new(engine: Box<dyn Engine>, depth: u8) -> Self {
        Self {
            label: engine.name().to_string(),
            engine,
            depth,
        }
    }

    pub fn from_spec(spec: &PlayerSpec) -> Self {
        Self {
            label: spec.to_string(),
            engine: spec.build(),
            depth: spec.depth,
        }
    }
}

/// Configuration for a match
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Plies per game before calling it inconclusive
    pub max_plies: u32,
    /// Print progress during match
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: crate::config::DEFAULT_GAMES,
            max_plies: crate::config::DEFAULT_MAX_PLIES,
            verbose: true,
        }
    }
}

/// Runs matches between two engines with fixed sides: the first seat is
/// always player one.
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn run_match(&self, one: &mut Seat, two: &mut Seat) -> MatchStats {
        let mut stats = MatchStats::new(&one.label, &two.label);

        for game_num in 0..self.config.num_games {
            let record = self.play_game(one, two);
            stats.record(&record);

            info!(
                game = game_num + 1,
                winner = ?record.winner,
                end = ?record.end,
                plies = record.plies,
                "game finished"
            );

            if self.config.verbose {
                let outcome = match record.winner {
                    Some(Player::One) => "1-0",
                    Some(Player::Two) => "0-1",
                    None => "*",
                };
                println!(
                    "Game {}/{}: {} after {} plies - Score: {}-{}-{}",
                    game_num + 1,
                    self.config.num_games,
                    outcome,
                    record.plies,
                    stats.player_one_wins,
                    stats.player_two_wins,
                    stats.inconclusive
                );
            }
        }

        stats
    }

    /// Play a single game from the opening position.
    pub fn play_game(&self, one: &mut Seat, two: &mut Seat) -> GameRecord {
        self.play_from(Position::startpos(), one, two)
    }

    pub fn play_from(&self, mut pos: Position, one: &mut Seat, two: &mut Seat) -> GameRecord {
        one.engine.new_game();
        two.engine.new_game();

        let mut think_time = [Duration::ZERO; 2];
        let mut searches = [0u32; 2];
        let mut plies = 0;

        let (winner, end) = loop {
            if let Some(w) = pos.winner {
                break (Some(w), GameEnd::Decided);
            }
            if plies >= self.config.max_plies {
                break (None, GameEnd::PlyLimit);
            }

            let side = pos.side_to_move;
            let seat = match side {
                Player::One => &mut *one,
                Player::Two => &mut *two,
            };

            let start = Instant::now();
            let result = seat.engine.search(&pos, seat.depth);
            think_time[side.idx()] += start.elapsed();
            searches[side.idx()] += 1;

            let Some(mv) = result.best_move else {
                warn!(?side, plies, "engine returned no move, scoring as a loss");
                break (Some(side.other()), GameEnd::NoMove);
            };

            match pos.apply_move(mv) {
                MoveOutcome::Applied { captured } => {
                    debug!(?side, %mv, ?captured, score = result.score, "move");
                    plies += 1;
                }
                MoveOutcome::Rejected => {
                    warn!(?side, %mv, "engine played an illegal move, scoring as a loss");
                    break (Some(side.other()), GameEnd::IllegalMove);
                }
            }
        };

        GameRecord {
            winner,
            end,
            plies,
            think_time,
            searches,
        }
    }
}

/// Build both seats from a config and play the whole match.
pub fn run_config(config: &ArenaConfig, verbose: bool) -> MatchStats {
    let runner = MatchRunner::new(MatchConfig {
        num_games: config.games,
        max_plies: config.max_plies,
        verbose,
    });
    let mut one = Seat::from_spec(&config.player_one);
    let mut two = Seat::from_spec(&config.player_two);
    runner.run_match(&mut one, &mut two)
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;

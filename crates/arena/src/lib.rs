//! Arena for jungle engines
//!
//! This crate provides infrastructure for:
//! - Playing AI-vs-AI matches with fixed sides
//! - Collecting win, length and think-time statistics
//! - Reading match setups from TOML and writing reports as JSON
//!
//! # Usage
//!
//! ```bash
//! # Hard minimax against a seeded randomized easy player
//! cargo run -p arena -- match minimax:hard:3 randomized:easy:2@7 --games 20
//!
//! # Everything from a config file, report saved as JSON
//! cargo run -p arena -- run arena.toml --json results.json
//! ```

mod config;
mod error;
mod match_runner;
mod results;

pub use config::*;
pub use error::*;
pub use match_runner::*;
pub use results::*;

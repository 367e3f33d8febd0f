//! Arena CLI
//!
//! Play AI-vs-AI matches and print win statistics.

use std::env;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use arena::{run_config, ArenaConfig, ArenaResult, PlayerSpec};
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("Jungle Arena");
    println!();
    println!("Usage:");
    println!("  arena match <player1> <player2> [--games N] [--max-plies N] [--json FILE]");
    println!("  arena run <config.toml> [--games N] [--max-plies N] [--json FILE]");
    println!();
    println!("Players:");
    println!("  minimax[:tier[:depth]]               - Alpha-beta search");
    println!("  randomized[:tier[:depth]][@seed]     - Minimax with random tie-breaks");
    println!("  random[@seed]                        - Uniform random legal moves");
    println!("  tiers: easy, medium, hard, impossible");
    println!();
    println!("Examples:");
    println!("  arena match minimax:hard:3 randomized:easy:2@7 --games 20");
    println!("  arena run arena.toml --json results.json");
}

/// Flags shared by both commands.
#[derive(Default)]
struct Overrides {
    games: Option<u32>,
    max_plies: Option<u32>,
    json: Option<PathBuf>,
}

impl Overrides {
    fn parse(args: &[String]) -> Self {
        let mut out = Overrides::default();
        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--games" | "-g" => {
                    if i + 1 < args.len() {
                        out.games = args[i + 1].parse().ok();
                        i += 1;
                    }
                }
                "--max-plies" | "-m" => {
                    if i + 1 < args.len() {
                        out.max_plies = args[i + 1].parse().ok();
                        i += 1;
                    }
                }
                "--json" | "-j" => {
                    if i + 1 < args.len() {
                        out.json = Some(PathBuf::from(&args[i + 1]));
                        i += 1;
                    }
                }
                other => eprintln!("Ignoring unknown argument: {other}"),
            }
            i += 1;
        }
        out
    }

    fn apply(&self, config: &mut ArenaConfig) {
        if let Some(games) = self.games {
            config.games = games;
        }
        if let Some(max_plies) = self.max_plies {
            config.max_plies = max_plies;
        }
    }
}

fn run_match(args: &[String]) -> ArenaResult<()> {
    let one: PlayerSpec = args[0].parse()?;
    let two: PlayerSpec = args[1].parse()?;
    let overrides = Overrides::parse(&args[2..]);

    let mut config = ArenaConfig::new(one, two);
    overrides.apply(&mut config);
    play(&config, overrides.json.as_deref())
}

fn run_file(args: &[String]) -> ArenaResult<()> {
    let mut config = ArenaConfig::load(Path::new(&args[0]))?;
    let overrides = Overrides::parse(&args[1..]);
    overrides.apply(&mut config);
    play(&config, overrides.json.as_deref())
}

fn play(config: &ArenaConfig, json: Option<&Path>) -> ArenaResult<()> {
    println!(
        "=== Match: {} vs {} ===",
        config.player_one, config.player_two
    );
    println!("Games: {}, Max plies: {}", config.games, config.max_plies);
    println!();

    let stats = run_config(config, true);

    println!();
    stats.print_report();

    if let Some(path) = json {
        stats.save(path)?;
        println!("Results written to {}", path.display());
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        print_usage();
        return ExitCode::SUCCESS;
    }

    let result = match args[1].as_str() {
        "match" if args.len() >= 4 => run_match(&args[2..]),
        "run" if args.len() >= 3 => run_file(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        _ => {
            eprintln!("Error: missing or unknown command");
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

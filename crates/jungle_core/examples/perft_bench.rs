//! Perft benchmark for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example perft_bench -p jungle_core -- [depth] [notation]
//!
//! Examples:
//!   # Default: depth 4 from the opening
//!   cargo flamegraph --example perft_bench -p jungle_core
//!
//!   # Custom depth and position (lions facing each other across the river)
//!   cargo flamegraph --example perft_bench -p jungle_core -- 4 "7/7/3l3/7/7/7/3L3/7/7 1"

use jungle_core::{perft, Position, START_NOTATION};
use std::env;
use std::time::Instant;

/// Test positions for profiling
const TEST_POSITIONS: &[(&str, &str)] = &[
    ("Opening", START_NOTATION),
    ("Lions at the river", "7/7/3l3/7/7/7/3L3/7/7 1"),
    (
        "Rats in the water",
        "l5t/1d3c1/2j1w1e/1r5/7/4R2/E1W1J2/1C3D1/T5L 1",
    ),
];

fn main() {
    let args: Vec<String> = env::args().collect();

    let depth: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(4);

    if let Some(text) = args.get(2) {
        match Position::from_notation(text) {
            Ok(pos) => run_single_position(&pos, depth),
            Err(e) => eprintln!("Invalid position: {e}"),
        }
    } else {
        run_all_positions(depth);
    }
}

fn nps(nodes: u64, secs: f64) -> f64 {
    if secs > 0.0 {
        nodes as f64 / secs
    } else {
        0.0
    }
}

fn run_single_position(pos: &Position, depth: u8) {
    println!("Position: {}", pos.to_notation());
    println!("Depth: {depth}");
    println!();

    let start = Instant::now();
    let nodes = perft(pos, depth);
    let elapsed = start.elapsed();

    println!("Nodes: {nodes}");
    println!("Time: {elapsed:.3?}");
    println!("NPS: {:.0}", nps(nodes, elapsed.as_secs_f64()));
}

fn run_all_positions(depth: u8) {
    println!("=== Perft Benchmark Suite ===");
    println!("Depth: {depth}");
    println!();

    let mut total_nodes = 0u64;
    let mut total_time = std::time::Duration::ZERO;

    for (name, text) in TEST_POSITIONS {
        let Ok(pos) = Position::from_notation(text) else {
            eprintln!("{name}: invalid notation");
            continue;
        };

        print!("{name:.<30}");

        let start = Instant::now();
        let nodes = perft(&pos, depth);
        let elapsed = start.elapsed();

        total_nodes += nodes;
        total_time += elapsed;

        println!(
            " {nodes:>12} nodes in {elapsed:>8.3?} ({:>10.0} nps)",
            nps(nodes, elapsed.as_secs_f64())
        );
    }

    println!();
    println!("{:=<70}", "");
    println!(
        "TOTAL: {total_nodes} nodes in {total_time:.3?} ({:.0} nps)",
        nps(total_nodes, total_time.as_secs_f64())
    );
}

// Standalone replay tool for re-evaluating recorded Battlesnake decisions
//
// Usage:
//   cargo run --bin replay -- <log_file> [options]
//
// Options:
//   --all                  Replay all turns
//   --turns <turn1,turn2>  Replay specific turns (comma-separated)
//   --verbose              Show detailed output for each turn
//   --config <path>        Path to Snake.toml (default: Snake.toml)
//   --seed <n>             Seed for the random tie-break (default: 0)

use std::env;
use std::process;

use survivor_snake::config::Config;
use survivor_snake::replay::ReplayEngine;

fn print_usage() {
    eprintln!("Battlesnake Replay Tool");
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("  replay <log_file> [OPTIONS]");
    eprintln!();
    eprintln!("OPTIONS:");
    eprintln!("  --all                   Replay all turns in the log");
    eprintln!("  --turns <T1,T2,...>     Replay specific turns (comma-separated)");
    eprintln!("  --verbose               Show detailed output for each turn");
    eprintln!("  --config <path>         Path to Snake.toml (default: Snake.toml)");
    eprintln!("  --seed <n>              Seed for the random tie-break (default: 0)");
    eprintln!("  --help                  Show this help message");
    eprintln!();
    eprintln!("EXAMPLES:");
    eprintln!("  replay battlesnake_debug.jsonl --all");
    eprintln!("  replay battlesnake_debug.jsonl --turns 5,10,15 --verbose");
}

fn parse_turns(s: &str) -> Result<Vec<i32>, String> {
    s.split(',')
        .map(|t| {
            t.trim()
                .parse::<i32>()
                .map_err(|e| format!("Invalid turn number '{}': {}", t, e))
        })
        .collect()
}

/// Returns the value following a flag, or exits with usage
fn flag_value<'a>(args: &'a [String], i: usize, flag: &str) -> &'a str {
    match args.get(i + 1) {
        Some(value) => value,
        None => {
            eprintln!("Error: {} requires a value", flag);
            process::exit(1);
        }
    }
}

fn run(args: &[String]) -> Result<(), String> {
    let log_file = &args[1];
    let mut config_path = "Snake.toml".to_string();
    let mut verbose = false;
    let mut seed = 0u64;
    let mut turns: Option<Vec<i32>> = None;
    let mut replay_all = false;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--all" => replay_all = true,
            "--turns" => {
                turns = Some(parse_turns(flag_value(args, i, "--turns"))?);
                i += 1;
            }
            "--verbose" => verbose = true,
            "--config" => {
                config_path = flag_value(args, i, "--config").to_string();
                i += 1;
            }
            "--seed" => {
                let raw = flag_value(args, i, "--seed");
                seed = raw
                    .parse()
                    .map_err(|e| format!("Invalid seed '{}': {}", raw, e))?;
                i += 1;
            }
            other => return Err(format!("Unknown option: {}", other)),
        }
        i += 1;
    }

    let config = Config::from_file(&config_path).unwrap_or_else(|e| {
        eprintln!("Warning: {} - using hardcoded defaults", e);
        Config::default_hardcoded()
    });

    let engine = ReplayEngine::new(config, seed, verbose);
    let entries = engine.load_log_file(log_file)?;

    let results = match (turns, replay_all) {
        (Some(turns), _) => engine.replay_turns(&entries, &turns)?,
        (None, true) => engine.replay_all(&entries),
        (None, false) => return Err("Specify --all or --turns".to_string()),
    };

    engine.print_report(&results);
    Ok(())
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || args.iter().any(|a| a == "--help") {
        print_usage();
        process::exit(if args.iter().any(|a| a == "--help") { 0 } else { 1 });
    }

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

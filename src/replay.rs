// Replay module for re-evaluating recorded decisions
//
// This module provides functionality to:
// 1. Parse JSONL decision logs written by the debug logger
// 2. Re-run move selection on each recorded board
// 3. Check whether the recorded move is one the current policy accepts
// 4. Print a summary report

use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use crate::config::Config;
use crate::debug_logger::DecisionLogEntry;
use crate::selector::{select_move, DecisionKind};
use crate::types::Direction;

/// Result of replaying a single turn
#[derive(Debug, Clone)]
pub struct ReplayResult {
    pub turn: i32,
    pub original_move: Direction,
    pub replayed_move: Direction,
    /// Whether the original move is among the moves the policy could pick now
    pub consistent: bool,
    pub kind: DecisionKind,
    pub best_score: u32,
    pub threshold: u32,
    pub computation_time_us: u128,
}

/// Statistics for a complete replay session
#[derive(Debug, Default)]
pub struct ReplayStats {
    pub total_turns: usize,
    pub consistent: usize,
    pub inconsistent: usize,
    pub no_safe_moves: usize,
    pub consistency_rate: f64,
}

/// Replay engine for analyzing decision logs
pub struct ReplayEngine {
    config: Config,
    seed: u64,
    verbose: bool,
}

impl ReplayEngine {
    /// Creates a new replay engine; `seed` drives the random tie-break for every turn
    pub fn new(config: Config, seed: u64, verbose: bool) -> Self {
        ReplayEngine {
            config,
            seed,
            verbose,
        }
    }

    /// Loads all log entries from a JSONL file
    pub fn load_log_file<P: AsRef<Path>>(&self, log_path: P) -> Result<Vec<DecisionLogEntry>, String> {
        let file = File::open(log_path.as_ref())
            .map_err(|e| format!("Failed to open log file: {}", e))?;

        let reader = BufReader::new(file);
        let mut entries = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| format!("Failed to read line {}: {}", line_num + 1, e))?;

            if line.trim().is_empty() {
                continue;
            }

            let entry: DecisionLogEntry = serde_json::from_str(&line)
                .map_err(|e| format!("Failed to parse JSON on line {}: {}", line_num + 1, e))?;

            entries.push(entry);
        }

        info!("Loaded {} log entries", entries.len());
        Ok(entries)
    }

    /// Replays a single log entry and compares the result
    pub fn replay_entry(&self, entry: &DecisionLogEntry) -> Result<ReplayResult, String> {
        let you = entry
            .board
            .snakes
            .iter()
            .find(|s| s.id == entry.you_id)
            .ok_or_else(|| {
                format!(
                    "Turn {}: snake '{}' not found in board state",
                    entry.turn, entry.you_id
                )
            })?;

        let start_time = Instant::now();
        let mut rng = StdRng::seed_from_u64(self.seed ^ entry.turn as u64);
        let decision = select_move(&entry.board, you, entry.turn, &self.config.safety, &mut rng);
        let computation_time_us = start_time.elapsed().as_micros();

        let consistent = decision.acceptable().contains(&entry.chosen_move);
        let result = ReplayResult {
            turn: entry.turn,
            original_move: entry.chosen_move,
            replayed_move: decision.direction,
            consistent,
            kind: decision.kind,
            best_score: decision.best_score(),
            threshold: decision.threshold,
            computation_time_us,
        };

        if self.verbose {
            if consistent {
                info!(
                    "Turn {}: ✓ {} accepted ({:?}, best {} / {}, {}us)",
                    result.turn,
                    result.original_move,
                    result.kind,
                    result.best_score,
                    result.threshold,
                    result.computation_time_us
                );
            } else {
                warn!(
                    "Turn {}: ✗ {} not accepted, replay chose {} ({:?}, best {} / {})",
                    result.turn,
                    result.original_move,
                    result.replayed_move,
                    result.kind,
                    result.best_score,
                    result.threshold
                );
            }
        }

        Ok(result)
    }

    /// Replays all entries in a log file
    pub fn replay_all(&self, entries: &[DecisionLogEntry]) -> Vec<ReplayResult> {
        entries
            .iter()
            .filter_map(|entry| match self.replay_entry(entry) {
                Ok(result) => Some(result),
                Err(e) => {
                    warn!("Failed to replay turn {}: {}", entry.turn, e);
                    None
                }
            })
            .collect()
    }

    /// Replays specific turns from a log file
    pub fn replay_turns(
        &self,
        entries: &[DecisionLogEntry],
        turn_numbers: &[i32],
    ) -> Result<Vec<ReplayResult>, String> {
        let mut results = Vec::new();

        for turn_num in turn_numbers {
            let entry = entries
                .iter()
                .find(|e| e.turn == *turn_num)
                .ok_or_else(|| format!("Turn {} not found in log file", turn_num))?;

            results.push(self.replay_entry(entry)?);
        }

        Ok(results)
    }

    /// Generates statistics from replay results
    pub fn generate_stats(&self, results: &[ReplayResult]) -> ReplayStats {
        let total_turns = results.len();
        let consistent = results.iter().filter(|r| r.consistent).count();
        let no_safe_moves = results
            .iter()
            .filter(|r| r.kind == DecisionKind::NoSafeMoves)
            .count();
        let consistency_rate = if total_turns > 0 {
            (consistent as f64 / total_turns as f64) * 100.0
        } else {
            0.0
        };

        ReplayStats {
            total_turns,
            consistent,
            inconsistent: total_turns - consistent,
            no_safe_moves,
            consistency_rate,
        }
    }

    /// Prints a detailed report of replay results
    pub fn print_report(&self, results: &[ReplayResult]) {
        let stats = self.generate_stats(results);

        println!("\n═══════════════════════════════════════════════════════════");
        println!("                    REPLAY REPORT");
        println!("═══════════════════════════════════════════════════════════");
        println!("Total Turns:    {}", stats.total_turns);
        println!(
            "Consistent:     {} ({:.1}%)",
            stats.consistent, stats.consistency_rate
        );
        println!("Inconsistent:   {}", stats.inconsistent);
        println!("No safe moves:  {}", stats.no_safe_moves);
        println!("═══════════════════════════════════════════════════════════\n");

        let inconsistent: Vec<_> = results.iter().filter(|r| !r.consistent).collect();
        if !inconsistent.is_empty() {
            println!("Turns where the recorded move is no longer accepted:");
            for result in inconsistent {
                println!(
                    "Turn {}: {} → {} ({:?}, best {} / {})",
                    result.turn,
                    result.original_move,
                    result.replayed_move,
                    result.kind,
                    result.best_score,
                    result.threshold
                );
            }
            println!();
        }
    }
}

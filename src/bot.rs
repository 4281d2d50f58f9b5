// Battlesnake bot: binds configuration, randomness and decision logging to the API endpoints
//
// The move decision itself is synchronous and lives in `selector`; this module runs it on
// the blocking pool under the configured time budget and degrades to the safety filter
// alone if the search does not finish in time.

use log::{error, info, warn};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use serde_json::{json, Value};
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::debug_logger::DebugLogger;
use crate::safety::safe_directions;
use crate::selector::{select_move, FALLBACK_DIRECTION};
use crate::types::{Battlesnake, Board, Direction, Game};

/// Battlesnake Bot with OOP-style API
/// Takes static configuration dependencies and exposes methods corresponding to API endpoints
pub struct Bot {
    config: Config,
    /// Source of per-decision seeds; every decision gets its own generator
    rng: Mutex<StdRng>,
    logger: DebugLogger,
}

impl Bot {
    /// Creates a new Bot instance with decision logging disabled
    ///
    /// # Arguments
    /// * `config` - Static configuration that does not change during the bot's lifetime
    pub fn new(config: Config) -> Self {
        Self::with_logger(config, DebugLogger::disabled())
    }

    /// Creates a new Bot instance that records each decision through `logger`
    pub fn with_logger(config: Config, logger: DebugLogger) -> Self {
        let rng = match config.search.seed {
            Some(seed) => {
                info!("Move selection seeded with {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_os_rng(),
        };

        Bot {
            config,
            rng: Mutex::new(rng),
            logger,
        }
    }

    /// Returns bot metadata and appearance
    /// Corresponds to GET / endpoint
    pub fn info(&self) -> Value {
        info!("INFO");

        let appearance = &self.config.appearance;
        json!({
            "apiversion": "1",
            "author": appearance.author,
            "color": appearance.color,
            "head": appearance.head,
            "tail": appearance.tail,
        })
    }

    /// Called when a game starts
    /// Corresponds to POST /start endpoint
    pub fn start(&self, game: &Game, _turn: &i32, _board: &Board, _you: &Battlesnake) {
        info!("GAME START {}", game.id);
    }

    /// Called when a game ends
    /// Corresponds to POST /end endpoint
    pub fn end(&self, game: &Game, _turn: &i32, _board: &Board, _you: &Battlesnake) {
        info!("GAME OVER {}", game.id);
    }

    /// Computes and returns the next move
    /// Corresponds to POST /move endpoint
    ///
    /// # Arguments
    /// * `_game` - Current game metadata
    /// * `turn` - Current turn number
    /// * `board` - Current board state
    /// * `you` - Your snake's current state
    ///
    /// # Returns
    /// * `Value` - JSON response containing the chosen move direction
    pub async fn get_move(
        &self,
        _game: &Game,
        turn: &i32,
        board: &Board,
        you: &Battlesnake,
    ) -> Value {
        let start_time = Instant::now();
        let turn = *turn;
        let seed: u64 = self.rng.lock().random();

        // Clone data needed for the blocking task
        let task_board = board.clone();
        let task_you = you.clone();
        let rules = self.config.safety.clone();

        let search = tokio::task::spawn_blocking(move || {
            let mut rng = StdRng::seed_from_u64(seed);
            select_move(&task_board, &task_you, turn, &rules, &mut rng)
        });

        let budget = Duration::from_millis(self.config.timing.effective_budget_ms());
        let chosen_move = match tokio::time::timeout(budget, search).await {
            Ok(Ok(decision)) => {
                info!(
                    "Turn {}: {:?} decision, best score {} of {} ({}ms)",
                    turn,
                    decision.kind,
                    decision.best_score(),
                    decision.threshold,
                    start_time.elapsed().as_millis()
                );
                decision.direction
            }
            Ok(Err(e)) => {
                error!("Turn {}: move computation failed: {}", turn, e);
                self.filter_only_move(board, you, seed)
            }
            Err(_) => {
                warn!(
                    "Turn {}: search exceeded {}ms, using safety filter only",
                    turn,
                    budget.as_millis()
                );
                self.filter_only_move(board, you, seed)
            }
        };

        info!("MOVE {}: {}", turn, chosen_move);
        self.logger
            .log_move(turn, you.id.clone(), board.clone(), chosen_move);

        json!({ "move": chosen_move.as_str() })
    }

    /// Random member of the immediate-safety pool, or the fixed fallback if it is empty
    fn filter_only_move(&self, board: &Board, you: &Battlesnake, seed: u64) -> Direction {
        let pool = safe_directions(you, board, &self.config.safety);
        let mut rng = StdRng::seed_from_u64(seed);
        pool.choose(&mut rng).copied().unwrap_or(FALLBACK_DIRECTION)
    }
}

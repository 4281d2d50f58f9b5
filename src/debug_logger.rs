// Debug logging module for asynchronous decision logging
//
// Fire-and-forget writes so the move response is never held up by disk I/O.
// Each decision becomes one line of a JSONL file that the replay tool can read back.

use log::error;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::types::{Board, Direction};

/// Represents a single debug log entry
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DecisionLogEntry {
    pub turn: i32,
    pub you_id: String,
    pub chosen_move: Direction,
    pub board: Board,
    pub timestamp: String,
}

impl DecisionLogEntry {
    fn now(turn: i32, you_id: String, board: Board, chosen_move: Direction) -> Self {
        DecisionLogEntry {
            turn,
            you_id,
            chosen_move,
            board,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Shared debug logger state
/// Uses Arc<Mutex<File>> to allow concurrent async writes from multiple tasks
#[derive(Clone)]
pub struct DebugLogger {
    file: Arc<Mutex<Option<File>>>,
    enabled: bool,
}

impl DebugLogger {
    /// Creates a new debug logger
    /// If enabled is true, initializes the log file (truncating if it exists)
    pub async fn new(enabled: bool, log_file_path: &str) -> Self {
        if !enabled {
            return Self::disabled();
        }

        match OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(log_file_path)
            .await
        {
            Ok(file) => {
                log::info!("Debug logging enabled: {}", log_file_path);
                DebugLogger {
                    file: Arc::new(Mutex::new(Some(file))),
                    enabled: true,
                }
            }
            Err(e) => {
                error!("Failed to create debug log file '{}': {}", log_file_path, e);
                Self::disabled()
            }
        }
    }

    /// Creates a disabled debug logger (no-op)
    pub fn disabled() -> Self {
        DebugLogger {
            file: Arc::new(Mutex::new(None)),
            enabled: false,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Logs a move decision asynchronously (fire-and-forget)
    /// Must be called from within a tokio runtime
    pub fn log_move(&self, turn: i32, you_id: String, board: Board, chosen_move: Direction) {
        if !self.enabled {
            return;
        }

        let entry = DecisionLogEntry::now(turn, you_id, board, chosen_move);
        let file_handle = self.file.clone();

        tokio::spawn(async move {
            Self::write_entry(file_handle, entry).await;
        });
    }

    /// Writes one entry and flushes, reporting failures through the logger
    async fn write_entry(
        file_handle: Arc<Mutex<Option<File>>>,
        entry: DecisionLogEntry,
    ) {
        let mut file_guard = file_handle.lock().await;

        if let Some(file) = file_guard.as_mut() {
            match serde_json::to_string(&entry) {
                Ok(json_line) => {
                    let line_with_newline = format!("{}\n", json_line);
                    if let Err(e) = file.write_all(line_with_newline.as_bytes()).await {
                        error!("Failed to write debug log entry: {}", e);
                    } else if let Err(e) = file.flush().await {
                        error!("Failed to flush debug log: {}", e);
                    }
                }
                Err(e) => {
                    error!("Failed to serialize debug log entry: {}", e);
                }
            }
        }
    }

    /// Writes one entry and waits for it to reach the file
    pub async fn log_move_and_wait(
        &self,
        turn: i32,
        you_id: String,
        board: Board,
        chosen_move: Direction,
    ) {
        if !self.enabled {
            return;
        }
        let entry = DecisionLogEntry::now(turn, you_id, board, chosen_move);
        Self::write_entry(self.file.clone(), entry).await;
    }
}

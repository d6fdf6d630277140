//! Play driver: runs engine turns off the interactive thread and keeps the
//! session state a front end needs.

pub mod config;
pub mod game;
pub mod worker;

pub use config::{ConfigError, EngineConfig, PlayConfig, PlayerKind, PlayersConfig};
pub use game::Game;
pub use worker::{find_best_move, spawn_search, SearchHandle, SearchPoll, SearchWorker, WorkerError};

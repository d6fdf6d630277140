pub mod board;
pub mod error;
pub mod limits;
pub mod movegen;
pub mod notation;
pub mod perft;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::FenError;
pub use limits::*;
pub use movegen::*;
pub use notation::*;
pub use perft::{perft, perft_divide};
pub use types::*;

// =============================================================================
// Engine trait: implemented by every move picker
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best move found (None if no legal moves or the search was cut short
    /// before any root move finished)
    pub best_move: Option<Move>,
    /// Evaluation score in centipawns from the side to move's perspective
    pub score: i32,
    /// Search depth requested
    pub depth: u8,
    /// Number of nodes searched
    pub nodes: u64,
    /// Whether search was stopped early (cancelled or out of time)
    pub stopped: bool,
}

/// Trait that all move pickers implement.
///
/// The caller passes the legal moves it already holds for `state`; engines
/// only ever return one of them.
pub trait Engine: Send {
    /// Search the position with the given search limits.
    ///
    /// # Arguments
    /// * `state` - The current position to analyze
    /// * `moves` - Legal moves for `state`
    /// * `limits` - Search limits (depth, time, stop signal)
    fn search(&mut self, state: &GameState, moves: &[Move], limits: &SearchLimits) -> SearchResult;

    /// Returns the engine's name for log output
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}

//! Classical Chess Engine
//!
//! Alpha-beta search with material and piece-square evaluation.
//! This is the computer opponent used by the play driver.

mod eval;
mod search;

use chess_core::{Engine, GameState, Move, SearchLimits, SearchResult};
use tracing::debug;

/// Classical chess engine using negamax with alpha-beta pruning.
///
/// This engine uses:
/// - Negamax search with alpha-beta pruning to a fixed depth
/// - Capture-first move ordering
/// - Material plus piece-square evaluation
/// - A shared stop signal so the owner can cancel a running search
#[derive(Debug, Clone, Default)]
pub struct ClassicalEngine {
    /// Node counter for statistics
    nodes: u64,
}

impl ClassicalEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }
}

impl Engine for ClassicalEngine {
    fn search(&mut self, state: &GameState, moves: &[Move], limits: &SearchLimits) -> SearchResult {
        self.nodes = 0;
        limits.start();

        let outcome = search::pick_best_move(state, moves, limits, &mut self.nodes);

        debug!(
            depth = limits.depth,
            nodes = self.nodes,
            stopped = outcome.stopped,
            best = ?outcome.best_move.map(|(mv, _)| mv.chess_notation()),
            "classical search finished"
        );

        SearchResult {
            best_move: outcome.best_move.map(|(mv, _)| mv),
            score: outcome.best_move.map(|(_, s)| s).unwrap_or(0),
            depth: limits.depth,
            nodes: self.nodes,
            stopped: outcome.stopped,
        }
    }

    fn name(&self) -> &str {
        "Classical v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

// Re-export for direct use if needed
pub use eval::{evaluate, PIECE_VALUES};
pub use search::{order_moves, pick_best_move, SearchOutcome, MATE_SCORE};

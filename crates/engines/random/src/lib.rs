//! Random Move Chess Engine
//!
//! Selects moves uniformly at random from the legal moves it is given.
//! Used as:
//! - The fallback whenever the alpha-beta search returns no move
//! - A baseline opponent for quick self-play checks

use chess_core::{Engine, GameState, Move, SearchLimits, SearchResult};
use rand::seq::SliceRandom;
use rand::{thread_rng, Rng};


/// Picks one of `moves` uniformly at random; None only when `moves` is empty.
pub fn find_random_move(moves: &[Move]) -> Option<Move> {
    find_random_move_with(moves, &mut thread_rng())
}

/// Same as [`find_random_move`] with a caller-supplied generator.
pub fn find_random_move_with<R: Rng + ?Sized>(moves: &[Move], rng: &mut R) -> Option<Move> {
    moves.choose(rng).copied()
}

/// A chess engine that plays random legal moves.
#[derive(Debug, Clone, Default)]
pub struct RandomEngine {
    nodes: u64,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, _state: &GameState, moves: &[Move], _limits: &SearchLimits) -> SearchResult {
        self.nodes = 1;

        SearchResult {
            best_move: find_random_move(moves),
            score: 0,
            depth: 1,
            nodes: self.nodes,
            stopped: false,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

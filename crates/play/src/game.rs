//! One interactive game: the position, who plays each side, square
//! selection for human input, and the engine turn running in the background.

use chess_core::{move_log_text, parse_coordinate_move, Color, GameState, Move, Square};
use random_engine::find_random_move;
use tracing::{info, warn};

use crate::config::{EngineConfig, PlayConfig, PlayerKind, PlayersConfig};
use crate::worker::{SearchPoll, SearchWorker, WorkerError};

#[derive(Debug)]
pub struct Game {
    state: GameState,
    /// Legal moves for `state`, refreshed after every change
    valid_moves: Vec<Move>,
    players: PlayersConfig,
    engine: EngineConfig,
    selected: Option<Square>,
    clicks: Vec<Square>,
    worker: SearchWorker,
    /// Set by undo/reset so the engine does not start in the same frame
    move_undone: bool,
}

impl Game {
    pub fn new(config: PlayConfig) -> Self {
        let mut state = GameState::new();
        let valid_moves = state.valid_moves();
        info!(white = %config.players.white, black = %config.players.black, "new game");
        Self {
            state,
            valid_moves,
            players: config.players,
            engine: config.engine,
            selected: None,
            clicks: Vec::with_capacity(2),
            worker: SearchWorker::new(),
            move_undone: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn valid_moves(&self) -> &[Move] {
        &self.valid_moves
    }

    pub fn player_to_move(&self) -> PlayerKind {
        self.players.for_side(self.state.side_to_move)
    }

    pub fn is_human_turn(&self) -> bool {
        self.player_to_move() == PlayerKind::Human
    }

    pub fn is_over(&self) -> bool {
        self.state.checkmate || self.state.stalemate
    }

    /// True while an engine search for the current position is in flight.
    pub fn is_engine_thinking(&self) -> bool {
        self.worker.is_searching()
    }

    /// True while any search thread is still alive, including cancelled ones.
    pub fn is_worker_busy(&mut self) -> bool {
        self.worker.is_busy()
    }

    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    /// Destinations of the legal moves from the selected square.
    pub fn highlighted_targets(&self) -> Vec<Square> {
        let Some(from) = self.selected else {
            return Vec::new();
        };
        let mut targets: Vec<Square> = self
            .valid_moves
            .iter()
            .filter(|m| m.start == from)
            .map(|m| m.end)
            .collect();
        targets.dedup();
        targets
    }

    /// Handles a click on `sq`. Returns the move played, if the click
    /// completed one.
    pub fn click(&mut self, sq: Square) -> Option<Move> {
        if self.is_over() || !self.is_human_turn() {
            return None;
        }

        if !sq.is_on_board() || self.selected == Some(sq) {
            self.clear_selection();
            return None;
        }

        self.selected = Some(sq);
        self.clicks.push(sq);
        if self.clicks.len() < 2 {
            return None;
        }

        let legal = Move::new(self.clicks[0], self.clicks[1], &self.state.board)
            .and_then(|intent| self.valid_moves.iter().find(|m| **m == intent).copied());
        match legal {
            Some(mv) => {
                self.apply(mv);
                Some(mv)
            }
            None => {
                self.clicks.clear();
                self.clicks.push(sq);
                None
            }
        }
    }

    /// Plays coordinate text like `e2e4` or `e7e8n` for a human side.
    pub fn play_text(&mut self, txt: &str) -> Option<Move> {
        if self.is_over() || !self.is_human_turn() {
            return None;
        }
        let mv = parse_coordinate_move(&self.state, txt)?;
        self.apply(mv);
        Some(mv)
    }

    /// Takes back the last move, cancelling any search in flight.
    pub fn undo(&mut self) {
        self.worker.cancel();
        if let Some(mv) = self.state.undo_move() {
            info!(mv = %mv, "move undone");
        }
        self.refresh();
        self.move_undone = true;
    }

    /// Back to the start position, cancelling any search in flight.
    pub fn reset(&mut self) {
        self.worker.cancel();
        self.state = GameState::new();
        self.refresh();
        self.move_undone = true;
        info!("game reset");
    }

    /// Drives the engine side; call once per frame. Returns the engine move
    /// applied this frame, if any.
    pub fn tick(&mut self) -> Option<Move> {
        if std::mem::take(&mut self.move_undone) {
            return None;
        }
        if self.is_over() {
            return None;
        }

        if !self.worker.is_searching() {
            let engine = self.player_to_move().engine()?;
            match self
                .worker
                .start(&self.state, &self.valid_moves, engine, self.engine.limits())
            {
                Ok(()) => {}
                // A cancelled search is still winding down.
                Err(WorkerError::Busy) => return None,
                Err(e) => {
                    warn!(error = %e, "could not start search");
                    return self.apply_engine_move(None);
                }
            }
        }

        match self.worker.poll()? {
            SearchPoll::Pending => None,
            SearchPoll::Ready(mv) => self.apply_engine_move(mv),
        }
    }

    pub fn status_text(&self) -> Option<&'static str> {
        if self.state.checkmate {
            Some(match self.state.side_to_move {
                Color::White => "Black wins by checkmate",
                Color::Black => "White wins by checkmate",
            })
        } else if self.state.stalemate {
            Some("Stalemate")
        } else {
            None
        }
    }

    pub fn move_log_text(&self) -> String {
        move_log_text(&self.state.move_log)
    }

    fn apply_engine_move(&mut self, mv: Option<Move>) -> Option<Move> {
        let found = mv.and_then(|mv| self.valid_moves.iter().find(|m| **m == mv).copied());
        let mv = match found {
            Some(mv) => mv,
            None => {
                warn!("engine returned no move, playing a random one");
                find_random_move(&self.valid_moves)?
            }
        };
        self.apply(mv);
        Some(mv)
    }

    fn apply(&mut self, mv: Move) {
        let player = self.player_to_move();
        self.state.make_move(mv);
        info!(player = %player, mv = %mv, "move played");
        self.refresh();
    }

    fn refresh(&mut self) {
        self.valid_moves = self.state.valid_moves();
        self.clear_selection();
    }

    /// Drops any selected square and pending first click.
    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.clicks.clear();
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;

//! Background engine search.
//!
//! Each search runs on its own named thread against a snapshot of the game.
//! The result comes back over a one-shot channel that the frame loop polls
//! without blocking. Cancelling raises the search's stop signal and drops the
//! receiver, so a result that arrives late is thrown away.

use std::thread::{self, JoinHandle};
use std::time::Instant;

use chess_core::{Engine, GameState, Move, SearchLimits, StopSignal};
use classical_engine::ClassicalEngine;
use thiserror::Error;
use tokio::sync::oneshot::{self, error::TryRecvError};
use tracing::{debug, info, warn};

use crate::config::EngineConfig;

#[derive(Debug, Error)]
pub enum WorkerError {
    #[error("a previous search is still running")]
    Busy,
    #[error("failed to spawn search thread: {0}")]
    Spawn(#[from] std::io::Error),
}

/// State of a running search as seen from the frame loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPoll {
    Pending,
    /// Finished; None when the engine had nothing to offer.
    Ready(Option<Move>),
}

/// Owner side of one background search.
#[derive(Debug)]
pub struct SearchHandle {
    rx: oneshot::Receiver<Option<Move>>,
    stop: StopSignal,
    thread: JoinHandle<()>,
    started: Instant,
}

impl SearchHandle {
    /// Never blocks.
    pub fn poll(&mut self) -> SearchPoll {
        match self.rx.try_recv() {
            Ok(mv) => SearchPoll::Ready(mv),
            Err(TryRecvError::Empty) => SearchPoll::Pending,
            // The worker went away without answering.
            Err(TryRecvError::Closed) => {
                warn!("search thread exited without a result");
                SearchPoll::Ready(None)
            }
        }
    }

    pub fn is_alive(&self) -> bool {
        !self.thread.is_finished()
    }

    /// Stops the search and discards whatever it would have returned.
    /// The thread winds down on its own; the returned handle can be joined.
    pub fn cancel(self) -> JoinHandle<()> {
        self.stop.stop();
        debug!(elapsed_ms = self.started.elapsed().as_millis() as u64, "search cancelled");
        self.thread
    }
}

/// Starts `engine` on a snapshot of `state` and returns immediately.
pub fn spawn_search(
    state: &GameState,
    valid_moves: &[Move],
    mut engine: Box<dyn Engine>,
    limits: SearchLimits,
) -> Result<SearchHandle, WorkerError> {
    let (tx, rx) = oneshot::channel();
    let stop = limits.stop.clone();
    let snapshot = state.clone();
    let moves = valid_moves.to_vec();

    let thread = thread::Builder::new()
        .name("search".into())
        .spawn(move || {
            let result = engine.search(&snapshot, &moves, &limits);
            info!(
                engine = engine.name(),
                depth = result.depth,
                nodes = result.nodes,
                score = result.score,
                stopped = result.stopped,
                best = ?result.best_move.map(|m| m.chess_notation()),
                "search finished"
            );
            if tx.send(result.best_move).is_err() {
                debug!("search result discarded");
            }
        })?;

    Ok(SearchHandle {
        rx,
        stop,
        thread,
        started: Instant::now(),
    })
}

/// Alpha-beta search for the side to move in `state`.
pub fn find_best_move(
    state: &GameState,
    valid_moves: &[Move],
    config: &EngineConfig,
) -> Result<SearchHandle, WorkerError> {
    spawn_search(state, valid_moves, Box::new(ClassicalEngine::new()), config.limits())
}

/// Keeps at most one search thread alive at a time.
#[derive(Debug, Default)]
pub struct SearchWorker {
    active: Option<SearchHandle>,
    retiring: Vec<JoinHandle<()>>,
}

impl SearchWorker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a search unless one is running or a cancelled one has not
    /// exited yet.
    pub fn start(
        &mut self,
        state: &GameState,
        valid_moves: &[Move],
        engine: Box<dyn Engine>,
        limits: SearchLimits,
    ) -> Result<(), WorkerError> {
        if self.is_busy() {
            return Err(WorkerError::Busy);
        }
        debug!(
            engine = engine.name(),
            depth = limits.depth,
            moves = valid_moves.len(),
            "starting search"
        );
        self.active = Some(spawn_search(state, valid_moves, engine, limits)?);
        Ok(())
    }

    /// True while a search is in flight and its result has not been taken.
    pub fn is_searching(&self) -> bool {
        self.active.is_some()
    }

    /// True while any search thread, cancelled or not, is still alive.
    pub fn is_busy(&mut self) -> bool {
        self.reap();
        self.active.is_some() || !self.retiring.is_empty()
    }

    /// None when no search is in flight. A ready result is handed out once.
    pub fn poll(&mut self) -> Option<SearchPoll> {
        let poll = self.active.as_mut()?.poll();
        if let SearchPoll::Ready(_) = poll {
            if let Some(done) = self.active.take() {
                self.retiring.push(done.thread);
            }
        }
        Some(poll)
    }

    /// Cancels the in-flight search, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.active.take() {
            self.retiring.push(handle.cancel());
        }
    }

    fn reap(&mut self) {
        let (done, running): (Vec<_>, Vec<_>) = std::mem::take(&mut self.retiring)
            .into_iter()
            .partition(|t| t.is_finished());
        self.retiring = running;
        for thread in done {
            if thread.join().is_err() {
                warn!("search thread panicked");
            }
        }
    }
}

impl Drop for SearchWorker {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;

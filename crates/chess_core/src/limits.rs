//! How far a search may go, and how its owner tells it to quit.
//!
//! The owner of a background search keeps a clone of the [`StopSignal`] it
//! handed over. Raising it from the owner's thread is how an undo or reset
//! abandons a search mid-flight; a search started after the raise still sees
//! it, so a cancelled search never restarts by accident.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

/// Depth bound plus an optional wall-clock cap, with the signal the search
/// polls to find out it has been cancelled.
#[derive(Debug, Clone)]
pub struct SearchLimits {
    /// Plies below the root
    pub depth: u8,
    /// Wall-clock cap per move, None for a purely depth-bounded search
    pub move_time: Option<Duration>,
    pub stop: StopSignal,
}

impl SearchLimits {
    pub fn depth(depth: u8) -> Self {
        Self {
            depth,
            move_time: None,
            stop: StopSignal::new(None),
        }
    }

    pub fn depth_and_time(depth: u8, move_time: Duration) -> Self {
        Self {
            depth,
            move_time: Some(move_time),
            stop: StopSignal::new(Some(move_time)),
        }
    }

    /// True once the owner cancelled or the deadline was seen to pass.
    #[inline]
    pub fn should_stop(&self) -> bool {
        self.stop.is_stopped()
    }

    /// Marks the moment the search begins; the deadline counts from here.
    pub fn start(&self) {
        self.stop.start();
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::depth(3)
    }
}

/// Cancellation flag shared by every clone, optionally backed by a deadline.
///
/// The search side only ever reads the flag, except that [`check_time`]
/// raises it when the deadline has passed. Deadline checks read the clock, so
/// searches make them every [`should_check`] nodes rather than at each node.
///
/// [`check_time`]: StopSignal::check_time
/// [`should_check`]: StopSignal::should_check
#[derive(Debug, Clone)]
pub struct StopSignal {
    raised: Arc<AtomicBool>,
    started_at: Arc<RwLock<Option<Instant>>>,
    deadline: Option<Duration>,
    /// Nodes between deadline checks
    check_every: u64,
}

impl StopSignal {
    pub fn new(deadline: Option<Duration>) -> Self {
        Self {
            raised: Arc::new(AtomicBool::new(false)),
            started_at: Arc::new(RwLock::new(None)),
            deadline,
            check_every: 1024,
        }
    }

    /// Records the start time. Leaves an earlier cancellation in place.
    pub fn start(&self) {
        if let Ok(mut started_at) = self.started_at.write() {
            *started_at = Some(Instant::now());
        }
    }

    /// Cancels the search holding the other clone.
    pub fn stop(&self) {
        self.raised.store(true, Ordering::SeqCst);
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.raised.load(Ordering::Relaxed)
    }

    /// True when cancelled or past the deadline; in the latter case the flag
    /// is raised so later `is_stopped` calls agree.
    pub fn check_time(&self) -> bool {
        if self.is_stopped() {
            return true;
        }

        if let Some(deadline) = self.deadline
            && self.elapsed() >= deadline
        {
            self.stop();
            return true;
        }

        false
    }

    /// Whether the node counter has reached the next deadline check.
    #[inline]
    pub fn should_check(&self, nodes: u64) -> bool {
        nodes.is_multiple_of(self.check_every)
    }

    /// Zero until `start` has been called.
    pub fn elapsed(&self) -> Duration {
        self.started_at
            .read()
            .ok()
            .and_then(|s| s.map(|s| s.elapsed()))
            .unwrap_or(Duration::ZERO)
    }
}

impl Default for StopSignal {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
#[path = "limits_tests.rs"]
mod limits_tests;

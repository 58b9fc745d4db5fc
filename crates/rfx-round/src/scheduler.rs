//! Tick scheduling — the injected clock/scheduler collaborator
//!
//! The engine owns no timers. The host arranges for each armed
//! `TickHandle` to come back after the configured spin speed, on the same
//! serial queue that carries user stop actions. Delivery order is arrival
//! order, so a stop issued before a pending tick is always processed
//! first; the tick then dies on its generation check.

use std::time::Duration;

use crate::engine::RoundEngine;
use crate::reel::TickHandle;
use crate::store::ScoreStore;

/// Host-side tick scheduling
pub trait TickScheduler {
    /// Arrange for `handle` to be delivered back to the engine after `delay`
    fn schedule(&mut self, delay: Duration, handle: TickHandle);
}

/// Deterministic serial-queue scheduler
///
/// Orders pending handles by their logical due time and delivers them
/// synchronously, with no wall-clock sleeping. Used by tests and headless
/// simulation; an interactive host would use its own event-loop timers.
#[derive(Debug, Default)]
pub struct QueueScheduler {
    queue: Vec<TickHandle>,
}

impl QueueScheduler {
    /// Create an empty scheduler
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of pending handles
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Remove and return the earliest-due handle
    pub fn pop_due(&mut self) -> Option<TickHandle> {
        if self.queue.is_empty() {
            return None;
        }
        Some(self.queue.remove(0))
    }

    /// Schedule all handles from a round start
    pub fn schedule_all(&mut self, delay: Duration, handles: impl IntoIterator<Item = TickHandle>) {
        for handle in handles {
            self.schedule(delay, handle);
        }
    }

    /// Deliver the earliest pending tick to the engine, re-arming it if it
    /// fired live. Returns `false` when the queue is empty.
    pub fn deliver_next<S: ScoreStore>(&mut self, engine: &mut RoundEngine<S>) -> bool {
        let Some(handle) = self.pop_due() else {
            return false;
        };
        if let Some(next) = engine.tick(handle) {
            let delay = Duration::from_secs_f64(engine.config().spin_speed);
            self.schedule(delay, next);
        }
        true
    }

    /// Deliver up to `count` ticks; returns how many were delivered
    pub fn deliver<S: ScoreStore>(&mut self, engine: &mut RoundEngine<S>, count: usize) -> usize {
        let mut delivered = 0;
        while delivered < count && self.deliver_next(engine) {
            delivered += 1;
        }
        delivered
    }
}

impl TickScheduler for QueueScheduler {
    fn schedule(&mut self, _delay: Duration, handle: TickHandle) {
        // Logical due time already lives on the handle; the wall-clock
        // delay is an interactive host's concern.
        let pos = self
            .queue
            .iter()
            .position(|h| h.due_ms() > handle.due_ms())
            .unwrap_or(self.queue.len());
        self.queue.insert(pos, handle);
    }
}

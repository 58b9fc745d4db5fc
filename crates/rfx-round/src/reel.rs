//! Reel state and cancellable tick handles

use crate::symbols::SymbolSet;

/// Number of reels in a round
pub const REEL_COUNT: usize = 3;

/// One independently cycling reel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reel {
    /// Current value (1..=9)
    pub value: u8,
    /// Whether the reel is cycling
    pub spinning: bool,
    /// Bumped on every start/stop/reset; a tick handle armed against an
    /// older generation never fires
    generation: u64,
}

impl Reel {
    /// Create a stopped reel showing `value`
    pub fn new(value: u8) -> Self {
        Self {
            value,
            spinning: false,
            generation: 0,
        }
    }

    /// Begin spinning; returns the generation new tick handles must carry
    pub(crate) fn start(&mut self) -> u64 {
        self.spinning = true;
        self.generation += 1;
        self.generation
    }

    /// Stop spinning; pending handles become inert
    pub(crate) fn stop(&mut self) {
        self.spinning = false;
        self.generation += 1;
    }

    /// Reset to a starting value, stopped
    pub(crate) fn reset(&mut self, value: u8) {
        self.value = value;
        self.spinning = false;
        self.generation += 1;
    }

    /// Advance one step of the symbol cycle
    pub(crate) fn advance(&mut self) {
        self.value = SymbolSet::advance(self.value);
    }

    /// Validate a tick at fire time: the reel must still be spinning and
    /// the handle's generation must match
    pub fn accepts_tick(&self, generation: u64) -> bool {
        self.spinning && generation == self.generation
    }
}

/// Armed timer handle for one reel tick
///
/// Scheduling a handle does not guarantee it fires against current state:
/// the engine re-validates generation and spin state when the handle is
/// delivered, which is the sole cancellation mechanism. A handle outlived
/// by a stop, a reset, or a newer round is inert.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickHandle {
    reel: usize,
    generation: u64,
    due_ms: f64,
}

impl TickHandle {
    pub(crate) fn new(reel: usize, generation: u64, due_ms: f64) -> Self {
        Self {
            reel,
            generation,
            due_ms,
        }
    }

    /// Which reel this handle ticks
    pub fn reel(&self) -> usize {
        self.reel
    }

    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }

    /// Logical due time in milliseconds from round start
    pub fn due_ms(&self) -> f64 {
        self.due_ms
    }

    /// Re-arm for the next tick, one interval later
    pub(crate) fn rearm(self, interval_ms: f64) -> Self {
        Self {
            due_ms: self.due_ms + interval_ms,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stopped_reel_rejects_ticks() {
        let mut reel = Reel::new(1);
        let generation = reel.start();
        assert!(reel.accepts_tick(generation));

        reel.stop();
        assert!(!reel.accepts_tick(generation));
    }

    #[test]
    fn test_restart_invalidates_old_generation() {
        let mut reel = Reel::new(1);
        let old = reel.start();
        reel.stop();
        let new = reel.start();

        assert!(!reel.accepts_tick(old));
        assert!(reel.accepts_tick(new));
    }

    #[test]
    fn test_reset_invalidates_and_stops() {
        let mut reel = Reel::new(9);
        let generation = reel.start();
        reel.reset(4);

        assert_eq!(reel.value, 4);
        assert!(!reel.spinning);
        assert!(!reel.accepts_tick(generation));
    }

    #[test]
    fn test_rearm_advances_due_time() {
        let handle = TickHandle::new(0, 1, 100.0);
        let next = handle.rearm(100.0);
        assert_eq!(next.reel(), 0);
        assert_eq!(next.due_ms(), 200.0);
    }
}

//! Gravity clock - turns elapsed time into gravity ticks
//!
//! The clock follows the speed stream. Every speed publication restarts the
//! interval from zero, even when the value did not change, so a score change
//! always buys the falling piece a full interval.

use crate::store::{StateStream, TryNext};

#[derive(Debug)]
pub struct GravityClock {
    speed: StateStream<u32>,
    interval_ms: u32,
    elapsed_ms: u32,
    stopped: bool,
}

impl GravityClock {
    /// Follow `speed`. The stream's replayed current value arms the clock.
    pub fn new(speed: StateStream<u32>) -> Self {
        let mut clock = Self {
            speed,
            interval_ms: 0,
            elapsed_ms: 0,
            stopped: false,
        };
        clock.sync();
        clock
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Pick up pending speed publications; any publication restarts the interval.
    fn sync(&mut self) {
        loop {
            match self.speed.try_next() {
                TryNext::Value(ms) => {
                    self.interval_ms = ms;
                    self.elapsed_ms = 0;
                }
                TryNext::Empty => break,
                TryNext::Closed => {
                    self.stopped = true;
                    break;
                }
            }
        }
    }

    /// Advance by `elapsed_ms` and return how many ticks fell due.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        self.sync();
        if self.stopped || self.interval_ms == 0 {
            return 0;
        }

        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);
        let due = self.elapsed_ms / self.interval_ms;
        self.elapsed_ms %= self.interval_ms;
        due
    }

    /// Restart the interval after a tick changed the speed mid-advance.
    pub fn resync(&mut self) {
        self.sync();
    }

    pub fn stop(&mut self) {
        self.stopped = true;
    }
}

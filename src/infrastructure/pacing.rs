//! Politeness throttle after each card request
//!
//! The delay is drawn uniformly from a closed millisecond window and blocks
//! the calling thread. It has no effect on correctness.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Closed interval `[min_ms, max_ms]` for a randomized pause
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PacingWindow {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl PacingWindow {
    pub const fn new(min_ms: u64, max_ms: u64) -> Self {
        Self { min_ms, max_ms }
    }

    /// Draw a delay from the window. An inverted window collapses to `min_ms`.
    pub fn sample(&self) -> Duration {
        if self.max_ms <= self.min_ms {
            return Duration::from_millis(self.min_ms);
        }
        Duration::from_millis(fastrand::u64(self.min_ms..=self.max_ms))
    }

    pub const fn is_valid(&self) -> bool {
        self.min_ms <= self.max_ms
    }
}

/// Inserts the pause that follows each card
pub trait Pacer {
    fn pause(&self, window: PacingWindow);
}

impl<P: Pacer + ?Sized> Pacer for &P {
    fn pause(&self, window: PacingWindow) {
        (**self).pause(window);
    }
}

/// Sleeps for a uniformly random duration within the window
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomPacer;

impl Pacer for RandomPacer {
    fn pause(&self, window: PacingWindow) {
        let delay = window.sample();
        debug!("Pacing for {:?}", delay);
        std::thread::sleep(delay);
    }
}

/// Never sleeps. For replaying saved pages and for tests
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPacing;

impl Pacer for NoPacing {
    fn pause(&self, _window: PacingWindow) {}
}

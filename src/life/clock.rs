//! Generation throttle
//!
//! The host calls `advance` once per animation frame with its timestamp; the
//! automaton only steps when a full interval has passed.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationClock {
    /// Milliseconds between generations
    pub interval_ms: f64,
    /// Phase-aligned time of the last generation
    last_time: f64,
}

impl GenerationClock {
    pub fn new(interval_ms: f64) -> Self {
        debug_assert!(interval_ms > 0.0);
        Self {
            interval_ms,
            last_time: 0.0,
        }
    }

    /// Returns true when a generation is due at `now` (ms).
    /// The remainder past the interval is kept so the cadence doesn't drift.
    pub fn advance(&mut self, now: f64) -> bool {
        let delta = now - self.last_time;
        if delta > self.interval_ms {
            self.last_time = now - delta % self.interval_ms;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_per_interval() {
        let mut clock = GenerationClock::new(250.0);
        assert!(!clock.advance(16.0));
        assert!(!clock.advance(250.0));
        assert!(clock.advance(266.0));
        // Aligned to 250; next due after 500
        assert!(!clock.advance(400.0));
        assert!(!clock.advance(500.0));
        assert!(clock.advance(516.0));
    }

    #[test]
    fn test_long_stall_fires_once() {
        let mut clock = GenerationClock::new(250.0);
        assert!(clock.advance(1100.0));
        // Phase kept at 1000
        assert!(!clock.advance(1200.0));
        assert!(clock.advance(1251.0));
    }
}

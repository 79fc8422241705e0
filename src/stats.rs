//! `SearchStats` tracks how many hashes a search has computed and how long it
//! has been running. It does no printing itself; the binary formats it.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
pub struct SearchStats {
    start_time: Instant,
    attempts: u64,
}

impl SearchStats {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            attempts: 0,
        }
    }

    pub fn tick(&mut self) {
        self.attempts += 1;
    }

    pub fn attempts(&self) -> u64 {
        self.attempts
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Average rate since start in hashes per second.
    pub fn hashes_per_sec(&self) -> f64 {
        let secs = self.elapsed().as_secs_f64();
        if secs <= 0.0 {
            0.0
        } else {
            self.attempts as f64 / secs
        }
    }

    /// One-line status summary, e.g. `[10M hashes] counter=10000000 rate=6.42 MH/s`.
    pub fn status_line(&self, counter: u64) -> String {
        format!(
            "[{:.0}M hashes] counter={} rate={:.2} MH/s",
            self.attempts as f64 / 1_000_000.0,
            counter,
            self.hashes_per_sec() / 1_000_000.0
        )
    }
}

impl Default for SearchStats {
    fn default() -> Self {
        Self::new()
    }
}

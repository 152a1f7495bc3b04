//! Wall-clock stopwatch.
//!
//! Used by callers to report how long a solve or simulation took. It never
//! feeds back into numeric results.

use std::time::{Duration, Instant};

/// A simple stopwatch based on [`Instant`].
///
/// Conversion units:
/// - 1 s = 1_000 ms
/// - 1 s = 1_000_000 us
/// - 1 s = 1_000_000_000 ns
#[derive(Clone, Copy, Debug)]
pub struct Stopwatch {
    start: Instant,
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}

impl Stopwatch {
    /// Create a stopwatch that is already running.
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Restart the measurement from now.
    pub fn start(&mut self) {
        self.start = Instant::now();
    }

    /// Same as [`Stopwatch::start`].
    pub fn reset(&mut self) {
        self.start();
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Elapsed time in seconds, derived from the microsecond count.
    pub fn elapsed_s(&self) -> f64 {
        self.elapsed_us() as f64 / 1_000_000.0
    }

    pub fn elapsed_ms(&self) -> u128 {
        self.elapsed().as_millis()
    }

    pub fn elapsed_us(&self) -> u128 {
        self.elapsed().as_micros()
    }

    pub fn elapsed_ns(&self) -> u128 {
        self.elapsed().as_nanos()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn units_are_consistent() {
        let sw = Stopwatch::new();
        std::thread::sleep(Duration::from_millis(2));
        let ns = sw.elapsed_ns();
        let us = sw.elapsed_us();
        let ms = sw.elapsed_ms();
        assert!(ns >= 2_000_000);
        assert!(us >= 2_000);
        assert!(ms >= 2);
        assert!(sw.elapsed_s() >= 0.002);
    }

    #[test]
    fn reset_restarts_measurement() {
        let mut sw = Stopwatch::new();
        std::thread::sleep(Duration::from_millis(20));
        let before = sw.elapsed();
        sw.reset();
        assert!(sw.elapsed() < before);
    }
}

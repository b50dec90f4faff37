use std::time::{Duration, Instant};

/// Accumulating stopwatch used for the per-case and whole-run timings in the progress log.
#[derive(Clone, Debug)]
pub struct AccTimer {
    consumed: Duration,
    since: Instant,
}

impl AccTimer {
    /// Creates a timer that is already running, as if `start()` had been called.
    #[inline]
    pub fn new() -> Self {
        Self {
            consumed: Duration::ZERO,
            since: Instant::now(),
        }
    }

    /// Marks the start of a measured span.
    #[inline]
    pub fn start(&mut self) {
        self.since = Instant::now();
    }

    /// Closes the span opened by the last `start()` and adds it to the total.
    #[inline]
    pub fn elapsed(&mut self) {
        self.consumed += self.since.elapsed();
    }

    #[inline]
    pub fn get_total_ms(&self) -> u64 {
        self.consumed.as_millis() as u64
    }
}

impl Default for AccTimer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulates_closed_spans_only() {
        let mut timer = AccTimer::new();
        assert_eq!(timer.get_total_ms(), 0);
        std::thread::sleep(Duration::from_millis(3));
        timer.elapsed();
        let first = timer.get_total_ms();
        assert!(first >= 3);
        std::thread::sleep(Duration::from_millis(5));
        timer.start();
        timer.elapsed();
        assert!(timer.get_total_ms() < first + 5);
    }
}

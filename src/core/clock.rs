use std::time::Instant;

/// Source of wall-clock time in seconds since an arbitrary origin
pub trait TimeSource {
    fn now(&mut self) -> f64;
}

/// Monotonic wall clock measuring seconds since its creation
#[derive(Debug)]
pub struct Clock {
    origin: Instant,
}

impl Clock {
    /// Create new clock starting now
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    /// Seconds elapsed since the clock was created or last reset
    pub fn elapsed(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }

    /// Reset clock to current time
    pub fn reset(&mut self) {
        self.origin = Instant::now();
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for Clock {
    fn now(&mut self) -> f64 {
        self.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn clock_measures_elapsed() {
        let mut clock = Clock::new();
        let start = clock.now();

        thread::sleep(Duration::from_millis(10));
        let delta = clock.now() - start;

        assert!(delta >= 0.009);
    }

    #[test]
    fn clock_resets() {
        let mut clock = Clock::new();

        thread::sleep(Duration::from_millis(10));
        clock.reset();

        // Should be very small since we just reset
        assert!(clock.elapsed() < 0.005);
    }
}

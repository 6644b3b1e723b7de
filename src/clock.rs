use std::time::Instant;

/// Frame clock - measures per-frame delta time.
///
/// Deltas are capped so a stall (debugger pause, window drag) does not
/// teleport the camera on the next frame.
#[derive(Debug)]
pub struct Clock {
    last_tick: Instant,
    max_delta: f32,
}

impl Clock {
    /// Default cap of 100ms per frame
    pub fn new() -> Self {
        Self::with_max_delta(0.1)
    }

    pub fn with_max_delta(max_delta: f32) -> Self {
        Self {
            last_tick: Instant::now(),
            max_delta,
        }
    }

    /// Seconds since the last tick, capped; advances the clock
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        delta.min(self.max_delta)
    }

    /// Forget elapsed time, e.g. after a blocking operation
    pub fn reset(&mut self) {
        self.last_tick = Instant::now();
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn clock_measures_delta() {
        let mut clock = Clock::new();

        thread::sleep(Duration::from_millis(10));
        let delta = clock.tick();

        // Should be roughly 10ms; allow generous scheduler slack
        assert!(delta >= 0.009 && delta <= 0.05);
    }

    #[test]
    fn clock_caps_long_stalls() {
        let mut clock = Clock::with_max_delta(0.005);

        thread::sleep(Duration::from_millis(15));
        let delta = clock.tick();

        assert!(delta <= 0.005);
    }

    #[test]
    fn clock_resets() {
        let mut clock = Clock::new();

        thread::sleep(Duration::from_millis(10));
        clock.reset();

        let delta = clock.tick();
        assert!(delta < 0.005);
    }
}

use std::time::Instant;

/// Scene clock - time since start plus per-frame delta
#[derive(Debug)]
pub struct Clock {
    start: Instant,
    last_tick: Instant,
}

impl Clock {
    /// Create new clock starting now
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_tick: now,
        }
    }

    /// Get delta time since last tick and advance clock
    /// Returns delta in seconds
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        delta
    }

    /// Seconds since the clock started (or was last reset)
    pub fn elapsed(&self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }

    /// Reset clock to current time
    pub fn reset(&mut self) {
        let now = Instant::now();
        self.start = now;
        self.last_tick = now;
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

/// Frames-per-second counter averaged over a fixed window
#[derive(Debug, Clone, Copy)]
pub struct FpsCounter {
    interval: f32,
    frames: u32,
    accumulated: f32,
}

impl FpsCounter {
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            frames: 0,
            accumulated: 0.0,
        }
    }

    /// Count one frame; returns the new average whenever a window completes
    pub fn frame(&mut self, delta: f32) -> Option<f32> {
        self.frames += 1;
        self.accumulated += delta;
        if self.accumulated < self.interval {
            return None;
        }
        let fps = self.frames as f32 / self.accumulated;
        self.frames = 0;
        self.accumulated = 0.0;
        Some(fps)
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

        assert!(delta >= 0.009);
        assert!(clock.elapsed() >= delta);
    }

    #[test]
    fn clock_resets() {
        let mut clock = Clock::new();

        thread::sleep(Duration::from_millis(10));
        clock.reset();

        assert!(clock.elapsed() < 0.009);
        assert!(clock.tick() < 0.009);
    }

    #[test]
    fn fps_counter_reports_per_window() {
        let mut fps = FpsCounter::new(1.0);
        assert_eq!(fps.frame(0.25), None);
        assert_eq!(fps.frame(0.25), None);
        assert_eq!(fps.frame(0.25), None);
        assert_eq!(fps.frame(0.25), Some(4.0));

        // Window restarts after reporting
        assert_eq!(fps.frame(0.5), None);
        assert_eq!(fps.frame(0.5), Some(2.0));
    }
}

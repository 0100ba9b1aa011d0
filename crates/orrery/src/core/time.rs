/// Most ticks run for a single frame; a long stall does not replay unbounded history.
pub const MAX_STEPS_PER_FRAME: u32 = 10;

/// Fixed timestep accumulator.
/// Turns variable host frame deltas into whole simulation ticks.
pub struct FixedTimestep {
    /// The fixed delta time per tick.
    dt: f32,
    /// Accumulated time from variable frame deltas.
    accumulator: f32,
}

impl FixedTimestep {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
        }
    }

    /// Add frame time to the accumulator. Returns the number of fixed steps to run.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt;
        self.accumulator = self.accumulator.min(self.dt * MAX_STEPS_PER_FRAME as f32);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;
        steps
    }

    /// The fixed delta time.
    pub fn dt(&self) -> f32 {
        self.dt
    }
}

/// Number of recent frames averaged by `FrameClock`.
const FPS_WINDOW: usize = 10;

/// Frame-rate estimate for display. Never used to drive the simulation.
pub struct FrameClock {
    frames: [f32; FPS_WINDOW],
    next: usize,
    filled: usize,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            frames: [0.0; FPS_WINDOW],
            next: 0,
            filled: 0,
        }
    }

    /// Record one frame's duration in seconds. Non-positive deltas are ignored.
    pub fn record(&mut self, frame_dt: f32) {
        if frame_dt <= 0.0 {
            return;
        }
        self.frames[self.next] = frame_dt;
        self.next = (self.next + 1) % FPS_WINDOW;
        self.filled = (self.filled + 1).min(FPS_WINDOW);
    }

    /// Frames per second averaged over the last few frames (0.0 before any frame).
    pub fn fps(&self) -> f32 {
        if self.filled == 0 {
            return 0.0;
        }
        let total: f32 = self.frames[..self.filled].iter().sum();
        self.filled as f32 / total
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_step_exact() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        let steps = ts.accumulate(1.0 / 60.0);
        assert_eq!(steps, 1);
    }

    #[test]
    fn accumulates_partial() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        let steps = ts.accumulate(0.008); // half a frame
        assert_eq!(steps, 0);
        let steps = ts.accumulate(0.010); // over one frame total
        assert_eq!(steps, 1);
    }

    #[test]
    fn caps_at_ten_steps() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        let steps = ts.accumulate(1.0); // 60 frames worth
        assert_eq!(steps, MAX_STEPS_PER_FRAME);
    }

    #[test]
    fn leftover_carries_into_next_frame() {
        let mut ts = FixedTimestep::new(0.25);
        assert_eq!(ts.accumulate(0.6), 2);
        assert_eq!(ts.accumulate(0.15), 1);
        assert_eq!(ts.accumulate(0.0), 0);
    }

    #[test]
    fn fps_starts_at_zero() {
        let clock = FrameClock::new();
        assert_eq!(clock.fps(), 0.0);
    }

    #[test]
    fn fps_averages_recent_frames() {
        let mut clock = FrameClock::new();
        clock.record(1.0 / 30.0);
        assert!((clock.fps() - 30.0).abs() < 0.01);
        clock.record(1.0 / 60.0);
        // 2 frames in 0.05 s
        assert!((clock.fps() - 40.0).abs() < 0.01);
        for _ in 0..10 {
            clock.record(1.0 / 60.0);
        }
        assert!((clock.fps() - 60.0).abs() < 0.01);
    }

    #[test]
    fn fps_ignores_non_positive_frames() {
        let mut clock = FrameClock::new();
        clock.record(0.0);
        clock.record(-1.0);
        assert_eq!(clock.fps(), 0.0);
    }
}

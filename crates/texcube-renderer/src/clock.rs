//! Monotonic frame clock: elapsed time for animation, frame rate for logs.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

const DEFAULT_WINDOW: usize = 120;

/// Time source handed to `RenderState::draw`.
pub struct FrameClock {
    start: Instant,
    last_tick: Instant,
    frame_times: VecDeque<Duration>,
    window: usize,
    frames: u64,
}

impl FrameClock {
    /// Start the clock now, averaging frame rate over the last 120 frames.
    pub fn new() -> Self {
        Self::with_window(DEFAULT_WINDOW)
    }

    pub fn with_window(window: usize) -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_tick: now,
            frame_times: VecDeque::with_capacity(window.max(1)),
            window: window.max(1),
            frames: 0,
        }
    }

    /// Seconds since the clock started.
    pub fn elapsed_secs(&self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }

    /// Mark the end of a frame.
    pub fn tick(&mut self) {
        let now = Instant::now();
        self.frame_times.push_back(now - self.last_tick);
        self.last_tick = now;
        self.frames += 1;
        if self.frame_times.len() > self.window {
            self.frame_times.pop_front();
        }
    }

    /// Frames ticked since start.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Average frames per second over the window; 0 before the first tick.
    pub fn fps(&self) -> f64 {
        let total: f64 = self.frame_times.iter().map(Duration::as_secs_f64).sum();
        if total <= 0.0 {
            return 0.0;
        }
        self.frame_times.len() as f64 / total
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

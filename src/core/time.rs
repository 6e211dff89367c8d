//! Frame timing utilities

use std::time::{Duration, Instant};

/// Default weight given to the previous FPS estimate
pub const DEFAULT_FPS_SMOOTHING: f32 = 0.9;

/// Snapshot of frame timing, handed to renderers
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FrameStats {
    pub fps: f32,
    pub delta_secs: f32,
    pub frame_count: u64,
}

/// Tracks frame timing and an exponentially smoothed FPS estimate
pub struct FrameTimer {
    last_frame: Instant,
    delta: Duration,
    frame_count: u64,
    fps: f32,
    /// Weight of the previous estimate, in [0, 1)
    smoothing: f32,
}

impl FrameTimer {
    /// Create a new frame timer
    pub fn new() -> Self {
        Self::with_smoothing(DEFAULT_FPS_SMOOTHING)
    }

    /// Create a timer with a custom smoothing factor (clamped to [0, 0.999])
    pub fn with_smoothing(smoothing: f32) -> Self {
        Self {
            last_frame: Instant::now(),
            delta: Duration::ZERO,
            frame_count: 0,
            fps: 0.0,
            smoothing: smoothing.clamp(0.0, 0.999),
        }
    }

    /// Call once per frame to update timing
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    /// Update timing as if the frame ended at `now`
    pub fn tick_at(&mut self, now: Instant) {
        self.delta = now.saturating_duration_since(self.last_frame);
        self.last_frame = now;
        self.frame_count += 1;

        let elapsed = self.delta.as_secs_f32();
        if elapsed > 0.0 {
            let instant_fps = 1.0 / elapsed;
            self.fps = self.smoothing * self.fps + (1.0 - self.smoothing) * instant_fps;
        }
    }

    /// Get delta time in seconds
    pub fn delta_secs(&self) -> f32 {
        self.delta.as_secs_f32()
    }

    /// Get delta time as Duration
    pub fn delta(&self) -> Duration {
        self.delta
    }

    /// Get smoothed FPS
    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// Get total frame count
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn stats(&self) -> FrameStats {
        FrameStats {
            fps: self.fps,
            delta_secs: self.delta_secs(),
            frame_count: self.frame_count,
        }
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_count_and_delta() {
        let mut timer = FrameTimer::new();
        let start = timer.last_frame;

        timer.tick_at(start + Duration::from_millis(20));
        timer.tick_at(start + Duration::from_millis(40));

        assert_eq!(timer.frame_count(), 2);
        assert!((timer.delta_secs() - 0.02).abs() < 1e-4);
    }

    #[test]
    fn test_fps_converges_to_frame_rate() {
        let mut timer = FrameTimer::new();
        let start = timer.last_frame;

        // 100 frames at a steady 50 fps
        for i in 1..=100u64 {
            timer.tick_at(start + Duration::from_millis(20 * i));
        }

        assert!((timer.fps() - 50.0).abs() < 1.0, "fps = {}", timer.fps());
    }

    #[test]
    fn test_zero_delta_keeps_fps() {
        let mut timer = FrameTimer::with_smoothing(0.0);
        let start = timer.last_frame;

        timer.tick_at(start + Duration::from_millis(10));
        let fps = timer.fps();
        timer.tick_at(start + Duration::from_millis(10));

        assert_eq!(timer.fps(), fps);
        assert_eq!(timer.frame_count(), 2);
    }
}

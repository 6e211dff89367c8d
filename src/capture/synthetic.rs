//! Stand-in camera producing solid frames at a fixed rate.

use std::thread;
use std::time::Duration;

use image::Rgb;

use super::{Frame, FrameSource};

/// Produces dark solid frames whose shade steps with every frame.
pub struct SyntheticSource {
    width: u32,
    height: u32,
    interval: Duration,
    frame_index: u64,
}

impl SyntheticSource {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            interval: Duration::ZERO,
            frame_index: 0,
        }
    }

    /// Sleep `interval` before every frame, like a real device would block.
    /// Unpaced by default.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Number of frames produced so far
    pub fn frames_produced(&self) -> u64 {
        self.frame_index
    }
}

impl FrameSource for SyntheticSource {
    fn frame_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn capture(&mut self) -> Option<Frame> {
        if !self.interval.is_zero() {
            thread::sleep(self.interval);
        }
        let shade = (self.frame_index % 32) as u8;
        self.frame_index += 1;
        Some(Frame::from_pixel(self.width, self.height, Rgb([shade, shade, shade + 16])))
    }
}

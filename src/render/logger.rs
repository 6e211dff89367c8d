//! Renderer that reports the world state through the log

use crate::capture::Frame;
use super::{Renderer, WorldView};

/// Logs a status line every `every` frames at debug level
pub struct LogRenderer {
    every: u64,
    frames_rendered: u64,
    last_block_count: usize,
}

impl LogRenderer {
    pub fn new(every: u64) -> Self {
        Self {
            every: every.max(1),
            frames_rendered: 0,
            last_block_count: 0,
        }
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    pub fn last_block_count(&self) -> usize {
        self.last_block_count
    }
}

impl Default for LogRenderer {
    fn default() -> Self {
        Self::new(60)
    }
}

impl Renderer for LogRenderer {
    fn render(&mut self, frame: &Frame, view: &WorldView) {
        self.frames_rendered += 1;
        self.last_block_count = view.blocks.len();

        if self.frames_rendered % self.every == 0 {
            let (w, h) = frame.dimensions();
            log::debug!(
                "frame {} ({}x{}) | {:.1} fps | blocks {} | cursor {} | color {}/{} | gesture {}",
                view.stats.frame_count,
                w,
                h,
                view.stats.fps,
                view.blocks.len(),
                view.cursor,
                view.color_index + 1,
                view.palette_len,
                view.gesture.map_or("none", |g| g.name()),
            );
        }
    }
}

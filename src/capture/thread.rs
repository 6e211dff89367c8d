//! Background capture thread feeding a [`FrameSlot`].

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::core::{Error, Result};
use super::{Frame, FrameSlot};

/// Back-off after a failed grab
const RETRY_DELAY: Duration = Duration::from_millis(2);

/// A camera-like device. `capture` may block until the next frame.
pub trait FrameSource: Send + 'static {
    /// Nominal frame size in pixels
    fn frame_size(&self) -> (u32, u32);

    /// Grab the next frame; `None` when the grab failed
    fn capture(&mut self) -> Option<Frame>;
}

/// Owns the capture thread. Dropping the handle stops the thread.
pub struct CaptureThread {
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<u64>>,
    slot: FrameSlot,
    frame_size: (u32, u32),
}

impl CaptureThread {
    /// Start capturing from `source` into `slot`.
    pub fn spawn<S: FrameSource>(mut source: S, slot: FrameSlot) -> Result<Self> {
        let frame_size = source.frame_size();
        let running = Arc::new(AtomicBool::new(true));

        let thread_running = running.clone();
        let thread_slot = slot.clone();
        let handle = thread::Builder::new()
            .name("holoblock-capture".into())
            .spawn(move || {
                let mut frames = 0u64;
                while thread_running.load(Ordering::Acquire) {
                    match source.capture() {
                        Some(frame) => {
                            thread_slot.publish(frame);
                            frames += 1;
                        }
                        None => thread::sleep(RETRY_DELAY),
                    }
                }
                frames
            })
            .map_err(|e| Error::Capture(format!("failed to spawn capture thread: {}", e)))?;

        log::info!("Capture started: {}x{}", frame_size.0, frame_size.1);

        Ok(Self {
            running,
            handle: Some(handle),
            slot,
            frame_size,
        })
    }

    /// Slot this thread publishes into
    pub fn slot(&self) -> &FrameSlot {
        &self.slot
    }

    pub fn frame_size(&self) -> (u32, u32) {
        self.frame_size
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
            && self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Stop the thread and wait for it. Returns the number of frames captured.
    pub fn stop(mut self) -> Result<u64> {
        self.shutdown()
    }

    fn shutdown(&mut self) -> Result<u64> {
        self.running.store(false, Ordering::Release);
        let Some(handle) = self.handle.take() else {
            return Ok(0);
        };
        let frames = handle
            .join()
            .map_err(|_| Error::Capture("capture thread panicked".into()))?;
        log::info!("Capture stopped after {} frames", frames);
        Ok(frames)
    }
}

impl Drop for CaptureThread {
    fn drop(&mut self) {
        if let Err(e) = self.shutdown() {
            log::error!("{}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::SyntheticSource;

    /// Fails every other grab
    struct Flaky {
        inner: SyntheticSource,
        fail: bool,
    }

    impl FrameSource for Flaky {
        fn frame_size(&self) -> (u32, u32) {
            self.inner.frame_size()
        }

        fn capture(&mut self) -> Option<Frame> {
            self.fail = !self.fail;
            if self.fail { None } else { self.inner.capture() }
        }
    }

    fn wait_for_frame(slot: &FrameSlot) {
        for _ in 0..500 {
            if slot.has_frame() {
                return;
            }
            thread::sleep(Duration::from_millis(2));
        }
        panic!("no frame captured");
    }

    #[test]
    fn test_capture_publishes_frames() {
        let slot = FrameSlot::new();
        let capture = CaptureThread::spawn(SyntheticSource::new(32, 24), slot.clone()).unwrap();

        wait_for_frame(&slot);
        assert!(capture.is_running());
        assert_eq!(slot.latest().unwrap().dimensions(), (32, 24));

        let frames = capture.stop().unwrap();
        assert!(frames >= 1);
    }

    #[test]
    fn test_failed_grabs_are_skipped() {
        let slot = FrameSlot::new();
        let source = Flaky {
            inner: SyntheticSource::new(8, 8),
            fail: false,
        };
        let capture = CaptureThread::spawn(source, slot.clone()).unwrap();

        wait_for_frame(&slot);
        assert_eq!(capture.frame_size(), (8, 8));
    }

    #[test]
    fn test_drop_stops_thread() {
        let slot = FrameSlot::new();
        {
            let _capture = CaptureThread::spawn(SyntheticSource::new(4, 4), slot.clone()).unwrap();
            wait_for_frame(&slot);
        }
        let frame = slot.latest();
        thread::sleep(Duration::from_millis(10));
        // No thread left to publish
        assert!(Arc::ptr_eq(&frame.unwrap(), &slot.latest().unwrap()));
    }
}

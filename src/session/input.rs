//! Input seams: frame acquisition and hand tracking.

use std::sync::Arc;

use glam::Vec2;

use crate::capture::{CaptureThread, Frame, FrameSlot};
use crate::gesture::{self, Gesture, HandLandmarks};

/// Hand state for one frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InputSample {
    /// Hand position in frame pixels
    pub position: Vec2,
    /// Recognised gesture, `None` if the pose matched nothing
    pub gesture: Option<Gesture>,
}

/// Supplies the latest camera frame without blocking
pub trait InputProvider {
    /// Nominal frame size in pixels
    fn frame_size(&self) -> (u32, u32);

    /// Latest complete frame, `None` if nothing is available yet
    fn acquire(&mut self) -> Option<Arc<Frame>>;
}

/// Extracts the hand from a frame. `None` means no hand was found.
pub trait HandTracker {
    fn track(&mut self, frame: &Frame) -> Option<InputSample>;
}

/// Black-box landmark model
pub trait LandmarkDetector {
    fn detect(&mut self, frame: &Frame) -> Option<HandLandmarks>;
}

/// Reads frames published by a capture thread
pub struct CameraInput {
    slot: FrameSlot,
    frame_size: (u32, u32),
}

impl CameraInput {
    pub fn new(slot: FrameSlot, frame_size: (u32, u32)) -> Self {
        Self { slot, frame_size }
    }

    /// Read from the slot a running capture thread publishes into
    pub fn from_capture(capture: &CaptureThread) -> Self {
        Self::new(capture.slot().clone(), capture.frame_size())
    }
}

impl InputProvider for CameraInput {
    fn frame_size(&self) -> (u32, u32) {
        self.frame_size
    }

    fn acquire(&mut self) -> Option<Arc<Frame>> {
        self.slot.latest()
    }
}

/// Runs a landmark detector and classifies the pose.
/// The wrist landmark is used as the hand position.
pub struct LandmarkTracker<D> {
    detector: D,
}

impl<D: LandmarkDetector> LandmarkTracker<D> {
    pub fn new(detector: D) -> Self {
        Self { detector }
    }

    pub fn detector(&self) -> &D {
        &self.detector
    }
}

impl<D: LandmarkDetector> HandTracker for LandmarkTracker<D> {
    fn track(&mut self, frame: &Frame) -> Option<InputSample> {
        let hand = self.detector.detect(frame)?;
        let (width, height) = frame.dimensions();
        Some(InputSample {
            position: hand.wrist_px(width, height),
            gesture: gesture::classify(&hand),
        })
    }
}

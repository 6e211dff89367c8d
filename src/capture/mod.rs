//! Frame acquisition.
//!
//! A [`CaptureThread`] pulls frames from a [`FrameSource`] on its own thread
//! and publishes each one into a [`FrameSlot`]. The session reads the slot
//! at its own pace and never waits on the device.

pub mod slot;
pub mod thread;
pub mod synthetic;

pub use slot::FrameSlot;
pub use thread::{CaptureThread, FrameSource};
pub use synthetic::SyntheticSource;

/// A captured RGB frame
pub type Frame = image::RgbImage;

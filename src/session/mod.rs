//! Session orchestration.
//!
//! A [`Session`] owns the voxel world and runs the per-frame pipeline:
//! acquire a frame, track the hand, move the cursor, debounce gestures into
//! edits, then hand a snapshot to the renderer.

pub mod config;
pub mod control;
pub mod input;
pub mod runner;
pub mod script;

pub use config::{CaptureConfig, SessionConfig};
pub use control::{ControlCommand, StopSignal};
pub use input::{
    CameraInput, HandTracker, InputProvider, InputSample, LandmarkDetector, LandmarkTracker,
};
pub use runner::{Session, SessionStats, TickOutcome};
pub use script::{GestureScript, ScriptStep, ScriptedTracker};

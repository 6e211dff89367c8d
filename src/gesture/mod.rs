//! Hand gesture recognition and debouncing.
//!
//! [`classify`] turns a hand landmark set into a [`Gesture`];
//! [`GestureInterpreter`] turns the per-frame gesture stream into
//! discrete [`EditCommand`](crate::voxel::EditCommand)s.

pub mod label;
pub mod classify;
pub mod interpreter;

pub use label::Gesture;
pub use classify::{HandLandmarks, classify, LANDMARK_COUNT};
pub use interpreter::{GestureInterpreter, InterpreterConfig, InterpreterState};

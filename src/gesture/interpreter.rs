//! Gesture debouncing state machine.
//!
//! Edits fire on the rising edge of a gesture label and are followed by a
//! cooldown. Holding a gesture fires it once; it fires again only after the
//! label changes, which includes releasing the hand (no gesture) in between.
//! Labels seen while cooling down are still remembered, so a gesture that
//! started during the cooldown does not fire when the cooldown ends.

use serde::{Deserialize, Serialize};

use crate::math::GridCell;
use crate::voxel::EditCommand;
use super::label::Gesture;

/// Cooldown lengths, in frames, after each edit-producing gesture
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterpreterConfig {
    pub place_frames: u32,
    pub delete_frames: u32,
    pub color_frames: u32,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            place_frames: 15,
            delete_frames: 15,
            color_frames: 30,
        }
    }
}

impl InterpreterConfig {
    /// Same cooldown for every gesture
    pub fn uniform(frames: u32) -> Self {
        Self {
            place_frames: frames,
            delete_frames: frames,
            color_frames: frames,
        }
    }
}

/// Debounce state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InterpreterState {
    #[default]
    Idle,
    Cooling {
        frames_remaining: u32,
        gesture: Gesture,
    },
}

/// Turns a per-frame gesture stream into discrete edits.
#[derive(Clone, Debug, Default)]
pub struct GestureInterpreter {
    config: InterpreterConfig,
    state: InterpreterState,
    /// Last label processed; `None` after a release
    last_gesture: Option<Gesture>,
}

impl GestureInterpreter {
    pub fn new(config: InterpreterConfig) -> Self {
        Self {
            config,
            state: InterpreterState::Idle,
            last_gesture: None,
        }
    }

    pub fn state(&self) -> InterpreterState {
        self.state
    }

    pub fn last_gesture(&self) -> Option<Gesture> {
        self.last_gesture
    }

    pub fn config(&self) -> &InterpreterConfig {
        &self.config
    }

    /// Advance one frame. Returns the edit to apply this frame, if any.
    pub fn step(&mut self, current: Option<Gesture>, cursor: GridCell) -> Option<EditCommand> {
        if let InterpreterState::Cooling { frames_remaining, gesture } = self.state {
            let frames_remaining = frames_remaining.saturating_sub(1);
            self.state = if frames_remaining == 0 {
                InterpreterState::Idle
            } else {
                InterpreterState::Cooling { frames_remaining, gesture }
            };
        }

        let Some(gesture) = current else {
            self.last_gesture = None;
            return None;
        };

        let mut edit = None;
        if self.state == InterpreterState::Idle && self.last_gesture != Some(gesture) {
            let (command, cooldown) = match gesture {
                Gesture::Place => (Some(EditCommand::Place(cursor)), self.config.place_frames),
                Gesture::Delete => (Some(EditCommand::Remove(cursor)), self.config.delete_frames),
                Gesture::ChangeColor => (Some(EditCommand::CycleColor), self.config.color_frames),
                Gesture::Move | Gesture::Rotate => (None, 0),
            };
            if command.is_some() && cooldown > 0 {
                self.state = InterpreterState::Cooling {
                    frames_remaining: cooldown,
                    gesture,
                };
            }
            if let Some(command) = command {
                log::debug!("Gesture {} -> {:?}", gesture, command);
            }
            edit = command;
        }

        self.last_gesture = Some(gesture);
        edit
    }

    /// Forget the remembered label and any pending cooldown
    pub fn reset(&mut self) {
        self.state = InterpreterState::Idle;
        self.last_gesture = None;
    }
}

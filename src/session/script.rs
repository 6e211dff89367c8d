//! Scripted hand input for headless runs.
//!
//! A script is a list of steps, each holding a gesture and hand position for
//! some number of frames. Steps may also send control commands when they
//! start. When the script runs out the tracker raises the stop signal.

use std::path::Path;
use std::sync::mpsc::Sender;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::capture::Frame;
use crate::core::Result;
use crate::gesture::Gesture;
use super::control::{ControlCommand, StopSignal};
use super::input::{HandTracker, InputSample};

/// One segment of scripted input
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScriptStep {
    /// Frames this step lasts
    pub frames: u32,
    /// Gesture held for the step; `None` means no gesture
    #[serde(default)]
    pub gesture: Option<Gesture>,
    /// Hand position as a fraction of the frame size (0..1).
    /// Missing keeps the previous position.
    #[serde(default)]
    pub position: Option<[f32; 2]>,
    /// Hide the hand entirely for this step
    #[serde(default)]
    pub hidden: bool,
    /// Commands sent when the step begins
    #[serde(default)]
    pub control: Vec<ControlCommand>,
}

impl ScriptStep {
    pub fn hold(frames: u32, gesture: Option<Gesture>, position: [f32; 2]) -> Self {
        Self {
            frames,
            gesture,
            position: Some(position),
            hidden: false,
            control: Vec::new(),
        }
    }

    pub fn release(frames: u32) -> Self {
        Self {
            frames,
            gesture: None,
            position: None,
            hidden: false,
            control: Vec::new(),
        }
    }

    pub fn with_control(mut self, command: ControlCommand) -> Self {
        self.control.push(command);
        self
    }
}

/// An ordered list of steps
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GestureScript {
    pub steps: Vec<ScriptStep>,
}

impl GestureScript {
    pub fn new(steps: Vec<ScriptStep>) -> Self {
        Self { steps }
    }

    /// Load a script from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let script: Self = serde_json::from_str(&json)?;
        log::info!(
            "Loaded script from {} ({} steps, {} frames)",
            path.display(),
            script.steps.len(),
            script.total_frames()
        );
        Ok(script)
    }

    pub fn total_frames(&self) -> u64 {
        self.steps.iter().map(|s| s.frames as u64).sum()
    }

    /// Short staircase build used by the headless binary. Ends with two
    /// blocks on the ground and one above them.
    pub fn demo() -> Self {
        let p = Some(Gesture::Place);
        Self::new(vec![
            ScriptStep::hold(20, Some(Gesture::Move), [0.2, 0.5]),
            ScriptStep::hold(20, p, [0.2, 0.5]),
            ScriptStep::release(20),
            ScriptStep::hold(20, p, [0.3, 0.5]),
            ScriptStep::release(20),
            ScriptStep::hold(40, Some(Gesture::ChangeColor), [0.3, 0.5]),
            ScriptStep::release(20).with_control(ControlCommand::CursorUp),
            ScriptStep::hold(20, p, [0.4, 0.5]),
            ScriptStep::release(20).with_control(ControlCommand::CursorDown),
            ScriptStep::hold(20, Some(Gesture::Delete), [0.2, 0.5]),
            ScriptStep::release(20),
        ])
    }
}

/// Plays a [`GestureScript`] back as hand tracking output.
pub struct ScriptedTracker {
    script: GestureScript,
    step: usize,
    frames_left: u32,
    started: bool,
    /// Last position as a frame fraction
    position: [f32; 2],
    stop: StopSignal,
    controls: Option<Sender<ControlCommand>>,
}

impl ScriptedTracker {
    pub fn new(script: GestureScript, stop: StopSignal) -> Self {
        Self {
            script,
            step: 0,
            frames_left: 0,
            started: false,
            position: [0.5, 0.5],
            stop,
            controls: None,
        }
    }

    /// Forward step control commands to a session
    pub fn with_controls(mut self, controls: Sender<ControlCommand>) -> Self {
        self.set_controls(controls);
        self
    }

    pub fn set_controls(&mut self, controls: Sender<ControlCommand>) {
        self.controls = Some(controls);
    }

    pub fn is_finished(&self) -> bool {
        self.step >= self.script.steps.len()
    }

    /// Index of the step being played
    pub fn current_step(&self) -> usize {
        self.step
    }

    fn begin_step(&mut self) {
        let step = &self.script.steps[self.step];
        self.frames_left = step.frames;
        if let Some(position) = step.position {
            self.position = position;
        }
        if let Some(controls) = &self.controls {
            for &command in &step.control {
                if controls.send(command).is_err() {
                    log::warn!("Control channel closed, dropping {:?}", command);
                }
            }
        }
        log::debug!("Script step {} ({} frames)", self.step, step.frames);
    }

    /// Move to the next step with frames left. Returns false at the end.
    fn advance(&mut self) -> bool {
        if self.started && self.is_finished() {
            return false;
        }
        loop {
            if self.started {
                if self.frames_left > 0 {
                    return true;
                }
                self.step += 1;
            }
            self.started = true;
            if self.is_finished() {
                return false;
            }
            self.begin_step();
        }
    }
}

impl HandTracker for ScriptedTracker {
    fn track(&mut self, frame: &Frame) -> Option<InputSample> {
        if !self.advance() {
            if !self.stop.is_raised() {
                log::info!("Script finished");
                self.stop.raise();
            }
            return None;
        }

        self.frames_left -= 1;
        let step = &self.script.steps[self.step];
        if step.hidden {
            return None;
        }

        let (width, height) = frame.dimensions();
        Some(InputSample {
            position: Vec2::new(self.position[0] * width as f32, self.position[1] * height as f32),
            gesture: step.gesture,
        })
    }
}

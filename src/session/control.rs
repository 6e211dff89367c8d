//! Out-of-band session commands and cooperative stop.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::{Deserialize, Serialize};

/// Commands that bypass gesture recognition (keyboard shortcuts, scripts)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlCommand {
    /// Remove every block
    ClearWorld,
    /// Raise the cursor one level
    CursorUp,
    /// Lower the cursor one level
    CursorDown,
    /// End the session loop
    Stop,
}

/// Shared stop flag, checked once per loop iteration
#[derive(Clone, Debug, Default)]
pub struct StopSignal {
    flag: Arc<AtomicBool>,
}

impl StopSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raise(&self) {
        self.flag.store(true, Ordering::Release);
    }

    pub fn is_raised(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }
}

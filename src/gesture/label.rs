//! Gesture labels produced by hand tracking

use serde::{Deserialize, Serialize};

/// A recognised hand gesture. "No gesture" is represented as `None`
/// wherever a per-frame label is passed around.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gesture {
    /// Open hand, all five fingers extended
    Place,
    /// Closed fist
    Delete,
    /// Index finger only
    Move,
    /// Two fingers extended
    Rotate,
    /// Thumb up, other fingers curled
    ChangeColor,
}

impl Gesture {
    pub const ALL: [Gesture; 5] = [
        Gesture::Place,
        Gesture::Delete,
        Gesture::Move,
        Gesture::Rotate,
        Gesture::ChangeColor,
    ];

    /// Lower-case label as shown in status lines
    pub fn name(&self) -> &'static str {
        match self {
            Gesture::Place => "place",
            Gesture::Delete => "delete",
            Gesture::Move => "move",
            Gesture::Rotate => "rotate",
            Gesture::ChangeColor => "change_color",
        }
    }
}

impl std::fmt::Display for Gesture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

//! Discrete world edits emitted by the gesture interpreter.

use crate::math::GridCell;

/// A single world edit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditCommand {
    /// Place a block at the cell using the current palette color
    Place(GridCell),
    /// Remove the block at the cell, if any
    Remove(GridCell),
    /// Advance the palette selection
    CycleColor,
}

impl EditCommand {
    /// Cell targeted by this edit, if it targets one
    pub fn target(&self) -> Option<GridCell> {
        match self {
            EditCommand::Place(cell) | EditCommand::Remove(cell) => Some(*cell),
            EditCommand::CycleColor => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target() {
        let cell = GridCell::new(1, 2, 3);
        assert_eq!(EditCommand::Place(cell).target(), Some(cell));
        assert_eq!(EditCommand::Remove(cell).target(), Some(cell));
        assert_eq!(EditCommand::CycleColor.target(), None);
    }
}

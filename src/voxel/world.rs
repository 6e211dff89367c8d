//! Sparse voxel world with palette selection and edit cursor.

use std::collections::HashMap;

use glam::Vec3;

use crate::core::{Error, Result};
use crate::math::{self, GridCell};
use crate::math::cell::clamp_axis;
use super::color::{Color, Palette};
use super::edit::EditCommand;

/// Default number of cells per axis
pub const DEFAULT_GRID_SIZE: u32 = 20;

/// Default edge length of a block in world units
pub const DEFAULT_BLOCK_SIZE: f32 = 0.5;

/// Owns the placed blocks, the active color and the cursor for one session.
///
/// Blocks are stored sparsely: a cell with no entry has no block. Every
/// stored cell and the cursor lie inside `[0, grid_size - 1]` on all axes.
#[derive(Clone, Debug)]
pub struct VoxelWorld {
    grid_size: u32,
    block_size: f32,
    blocks: HashMap<GridCell, Color>,
    palette: Palette,
    cursor: GridCell,
}

impl VoxelWorld {
    /// Create an empty world. The cursor starts at the floor centre.
    pub fn new(grid_size: u32, block_size: f32, palette: Palette) -> Result<Self> {
        if grid_size == 0 {
            return Err(Error::InvalidConfig("grid size must be positive, got 0".into()));
        }
        if grid_size > i32::MAX as u32 {
            return Err(Error::InvalidConfig(format!(
                "grid size must be in 1..={}, got {}",
                i32::MAX,
                grid_size
            )));
        }
        if !(block_size > 0.0) || !block_size.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "block size must be positive and finite, got {}",
                block_size
            )));
        }

        let centre = (grid_size / 2) as i32;
        Ok(Self {
            grid_size,
            block_size,
            blocks: HashMap::new(),
            palette,
            cursor: GridCell::new(centre, 0, centre),
        })
    }

    pub fn grid_size(&self) -> u32 {
        self.grid_size
    }

    pub fn block_size(&self) -> f32 {
        self.block_size
    }

    pub fn in_bounds(&self, cell: GridCell) -> bool {
        cell.in_bounds(self.grid_size)
    }

    // -- blocks ------------------------------------------------------------

    /// Place a block, overwriting any block already at `cell`.
    ///
    /// Uses the current palette color when `color` is `None`. Returns
    /// false without touching the world when `cell` is out of bounds or
    /// `color` has a channel outside [0, 1].
    pub fn place_block(&mut self, cell: GridCell, color: Option<Color>) -> bool {
        if !self.in_bounds(cell) {
            log::warn!("Rejected placement outside grid at {}", cell);
            return false;
        }
        let color = color.unwrap_or_else(|| self.palette.current());
        if !color.is_valid() {
            log::warn!("Rejected placement at {} with invalid color {:?}", cell, color);
            return false;
        }
        self.blocks.insert(cell, color);
        true
    }

    /// Remove the block at `cell`. Returns false if there was none.
    pub fn remove_block(&mut self, cell: GridCell) -> bool {
        self.blocks.remove(&cell).is_some()
    }

    pub fn has_block(&self, cell: GridCell) -> bool {
        self.blocks.contains_key(&cell)
    }

    pub fn color_at(&self, cell: GridCell) -> Option<Color> {
        self.blocks.get(&cell).copied()
    }

    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Copy of every block. Later edits do not affect the returned list.
    pub fn all_blocks(&self) -> Vec<(GridCell, Color)> {
        self.blocks.iter().map(|(cell, color)| (*cell, *color)).collect()
    }

    /// Remove every block. Cursor and color selection are kept.
    pub fn clear_world(&mut self) {
        let removed = self.blocks.len();
        self.blocks.clear();
        log::info!("World cleared ({} blocks removed)", removed);
    }

    // -- palette -----------------------------------------------------------

    /// Select the next palette color. Placed blocks keep their color.
    pub fn cycle_color(&mut self) {
        let color = self.palette.cycle();
        log::info!("Color changed to {:?} (index {})", color.to_array(), self.palette.index());
    }

    pub fn current_color(&self) -> Color {
        self.palette.current()
    }

    pub fn color_index(&self) -> usize {
        self.palette.index()
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    // -- cursor ------------------------------------------------------------

    pub fn cursor(&self) -> GridCell {
        self.cursor
    }

    /// Set cursor x/z. Values are clamped into the grid.
    pub fn update_cursor_xz(&mut self, gx: i32, gz: i32) {
        self.cursor.x = clamp_axis(gx, self.grid_size);
        self.cursor.z = clamp_axis(gz, self.grid_size);
    }

    /// Raise the cursor one level; no-op at the top
    pub fn move_cursor_up(&mut self) {
        self.cursor.y = clamp_axis(self.cursor.y.saturating_add(1), self.grid_size);
    }

    /// Lower the cursor one level; no-op at the floor
    pub fn move_cursor_down(&mut self) {
        self.cursor.y = clamp_axis(self.cursor.y.saturating_sub(1), self.grid_size);
    }

    // -- edits -------------------------------------------------------------

    /// Apply an interpreter edit and report the store outcome.
    pub fn apply(&mut self, edit: &EditCommand) -> bool {
        match *edit {
            EditCommand::Place(cell) => {
                let placed = self.place_block(cell, None);
                if placed {
                    log::info!("Block placed at {}", cell);
                }
                placed
            }
            EditCommand::Remove(cell) => {
                let removed = self.remove_block(cell);
                if removed {
                    log::info!("Block removed from {}", cell);
                } else {
                    log::debug!("No block to remove at {}", cell);
                }
                removed
            }
            EditCommand::CycleColor => {
                self.cycle_color();
                true
            }
        }
    }

    // -- coordinates -------------------------------------------------------

    /// Snap a world position to a cell of this grid
    pub fn world_to_grid(&self, pos: Vec3) -> GridCell {
        math::world_to_grid(pos, self.block_size, self.grid_size)
    }

    /// World position of a cell of this grid
    pub fn cell_to_world(&self, cell: GridCell) -> Vec3 {
        math::grid_to_world(cell, self.block_size)
    }
}

impl Default for VoxelWorld {
    fn default() -> Self {
        let centre = (DEFAULT_GRID_SIZE / 2) as i32;
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            block_size: DEFAULT_BLOCK_SIZE,
            blocks: HashMap::new(),
            palette: Palette::default(),
            cursor: GridCell::new(centre, 0, centre),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::new(1.0, 0.0, 0.0);
    const BLUE: Color = Color::new(0.0, 0.0, 1.0);

    #[test]
    fn test_new_world() {
        let world = VoxelWorld::default();
        assert_eq!(world.block_count(), 0);
        assert_eq!(world.cursor(), GridCell::new(10, 0, 10));
        assert_eq!(world.color_index(), 0);
    }

    #[test]
    fn test_invalid_construction() {
        assert!(VoxelWorld::new(0, 0.5, Palette::default()).is_err());
        let err = VoxelWorld::new(u32::MAX, 0.5, Palette::default()).unwrap_err();
        assert!(err.to_string().contains("1..=2147483647"), "{}", err);
        assert!(VoxelWorld::new(20, 0.0, Palette::default()).is_err());
        assert!(VoxelWorld::new(20, f32::NAN, Palette::default()).is_err());
        assert!(VoxelWorld::new(20, 0.5, Palette::default()).is_ok());
    }

    #[test]
    fn test_remove_twice() {
        let mut world = VoxelWorld::default();
        let cell = GridCell::new(3, 4, 5);
        world.place_block(cell, None);
        assert_eq!(world.block_count(), 1);

        assert!(world.remove_block(cell));
        assert!(!world.remove_block(cell));
        assert_eq!(world.block_count(), 0);
    }

    #[test]
    fn test_place_overwrites() {
        let mut world = VoxelWorld::default();
        let cell = GridCell::new(1, 1, 1);

        assert!(world.place_block(cell, Some(RED)));
        assert!(world.place_block(cell, Some(BLUE)));

        assert_eq!(world.block_count(), 1);
        assert_eq!(world.color_at(cell), Some(BLUE));
    }

    #[test]
    fn test_place_out_of_bounds() {
        let mut world = VoxelWorld::default();
        assert!(!world.place_block(GridCell::new(20, 0, 0), Some(RED)));
        assert!(!world.place_block(GridCell::new(0, -1, 0), None));
        assert_eq!(world.block_count(), 0);
    }

    #[test]
    fn test_place_invalid_color() {
        let mut world = VoxelWorld::default();
        let cell = GridCell::new(1, 1, 1);
        world.place_block(cell, Some(BLUE));

        assert!(!world.place_block(cell, Some(Color::new(1.5, 0.0, 0.0))));
        assert!(!world.place_block(GridCell::new(2, 2, 2), Some(Color::new(0.0, -0.1, 0.0))));
        assert!(!world.place_block(GridCell::new(3, 3, 3), Some(Color::new(f32::NAN, 0.0, 0.0))));

        assert_eq!(world.block_count(), 1);
        assert_eq!(world.color_at(cell), Some(BLUE));
    }

    #[test]
    fn test_place_uses_current_color() {
        let mut world = VoxelWorld::default();
        world.cycle_color();
        let cell = GridCell::new(0, 0, 0);
        world.place_block(cell, None);
        assert_eq!(world.color_at(cell), Some(Color::CYAN));
    }

    #[test]
    fn test_cycle_keeps_placed_colors() {
        let mut world = VoxelWorld::default();
        let cell = GridCell::new(2, 2, 2);
        world.place_block(cell, None);
        world.cycle_color();
        world.cycle_color();
        assert_eq!(world.color_at(cell), Some(Color::NEON_BLUE));
        assert_eq!(world.current_color(), Color::PURPLE);
    }

    #[test]
    fn test_cycle_wraps_after_palette_length() {
        let mut world = VoxelWorld::default();
        for _ in 0..5 {
            world.cycle_color();
        }
        assert_eq!(world.color_index(), 0);
    }

    #[test]
    fn test_cursor_saturates() {
        let mut world = VoxelWorld::default();
        world.move_cursor_down();
        assert_eq!(world.cursor().y, 0);

        for _ in 0..30 {
            world.move_cursor_up();
        }
        assert_eq!(world.cursor().y, 19);
    }

    #[test]
    fn test_update_cursor_xz_clamps_and_keeps_y() {
        let mut world = VoxelWorld::default();
        world.move_cursor_up();
        world.update_cursor_xz(-4, 99);
        assert_eq!(world.cursor(), GridCell::new(0, 1, 19));
    }

    #[test]
    fn test_clear_world_keeps_cursor_and_color() {
        let mut world = VoxelWorld::default();
        world.place_block(GridCell::new(1, 0, 1), None);
        world.place_block(GridCell::new(2, 0, 1), None);
        world.cycle_color();
        world.move_cursor_up();

        world.clear_world();

        assert_eq!(world.block_count(), 0);
        assert_eq!(world.color_index(), 1);
        assert_eq!(world.cursor().y, 1);
    }

    #[test]
    fn test_all_blocks_is_snapshot() {
        let mut world = VoxelWorld::default();
        world.place_block(GridCell::new(1, 2, 3), Some(RED));
        let snapshot = world.all_blocks();

        world.clear_world();

        assert_eq!(snapshot, vec![(GridCell::new(1, 2, 3), RED)]);
    }

    #[test]
    fn test_apply_edits() {
        let mut world = VoxelWorld::default();
        let cell = world.cursor();

        assert!(world.apply(&EditCommand::Place(cell)));
        assert!(world.has_block(cell));
        assert!(world.apply(&EditCommand::CycleColor));
        assert_eq!(world.color_index(), 1);
        assert!(world.apply(&EditCommand::Remove(cell)));
        assert!(!world.apply(&EditCommand::Remove(cell)));
    }

    #[test]
    fn test_coordinate_helpers() {
        let world = VoxelWorld::default();
        let cell = GridCell::new(4, 1, 7);
        assert_eq!(world.world_to_grid(world.cell_to_world(cell)), cell);
    }
}

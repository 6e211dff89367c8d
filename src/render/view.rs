//! Per-frame world snapshot handed to renderers

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};

use crate::core::time::FrameStats;
use crate::gesture::Gesture;
use crate::math::GridCell;
use crate::voxel::{Color, VoxelWorld};

/// One block ready for instanced drawing (24 bytes)
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct BlockInstance {
    /// Block position in world space
    pub position: [f32; 3],
    /// Linear RGB
    pub color: [f32; 3],
}

/// Everything a renderer needs for one frame. Owns its data, so it stays
/// consistent even if the world is edited while it is being drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct WorldView {
    /// Blocks sorted by cell
    pub blocks: Vec<BlockInstance>,
    pub cursor: GridCell,
    pub cursor_world: Vec3,
    pub block_size: f32,
    pub grid_size: u32,
    pub current_color: Color,
    pub color_index: usize,
    pub palette_len: usize,
    /// Gesture recognised this frame
    pub gesture: Option<Gesture>,
    /// Hand position in pixels, if a hand was tracked
    pub hand: Option<Vec2>,
    pub stats: FrameStats,
}

impl WorldView {
    /// Snapshot the world state
    pub fn capture(
        world: &VoxelWorld,
        gesture: Option<Gesture>,
        hand: Option<Vec2>,
        stats: FrameStats,
    ) -> Self {
        let mut cells = world.all_blocks();
        cells.sort_unstable_by_key(|(cell, _)| *cell);

        let blocks = cells
            .into_iter()
            .map(|(cell, color)| BlockInstance {
                position: world.cell_to_world(cell).to_array(),
                color: color.to_array(),
            })
            .collect();

        Self {
            blocks,
            cursor: world.cursor(),
            cursor_world: world.cell_to_world(world.cursor()),
            block_size: world.block_size(),
            grid_size: world.grid_size(),
            current_color: world.current_color(),
            color_index: world.color_index(),
            palette_len: world.palette().len(),
            gesture,
            hand,
            stats,
        }
    }

    /// Block data as raw bytes for a vertex buffer
    pub fn instance_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.blocks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_sorts_and_positions_blocks() {
        let mut world = VoxelWorld::default();
        world.place_block(GridCell::new(2, 0, 0), Some(Color::ORANGE));
        world.place_block(GridCell::new(1, 0, 0), None);

        let view = WorldView::capture(&world, Some(Gesture::Place), None, FrameStats::default());

        assert_eq!(view.blocks.len(), 2);
        assert_eq!(view.blocks[0].position, [0.5, 0.0, 0.0]);
        assert_eq!(view.blocks[0].color, Color::NEON_BLUE.to_array());
        assert_eq!(view.blocks[1].position, [1.0, 0.0, 0.0]);
        assert_eq!(view.cursor_world, Vec3::new(5.0, 0.0, 5.0));
        assert_eq!(view.palette_len, 5);
        assert_eq!(view.instance_bytes().len(), 48);
    }

    #[test]
    fn test_view_is_detached_from_world() {
        let mut world = VoxelWorld::default();
        world.place_block(GridCell::new(0, 0, 0), None);
        let view = WorldView::capture(&world, None, None, FrameStats::default());

        world.clear_world();
        assert_eq!(view.blocks.len(), 1);
    }
}

//! Grid math: cell coordinates and position mapping

pub mod cell;
pub mod mapping;

pub use cell::GridCell;
pub use mapping::{world_to_grid, grid_to_world, map_input_to_cursor_xz};

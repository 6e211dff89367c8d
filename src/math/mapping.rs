//! Conversions between continuous positions and grid cells.
//!
//! All functions are pure. Rounding in [`world_to_grid`] uses ties-to-even,
//! so a coordinate exactly halfway between two cells goes to the even one
//! (`0.25 / 0.5 = 0.5` maps to cell 0, `0.75 / 0.5 = 1.5` maps to cell 2).

use glam::{Vec2, Vec3};

use crate::core::{Error, Result};
use super::cell::{GridCell, clamp_axis};

/// Snap a world position to the nearest grid cell, clamped into the grid.
pub fn world_to_grid(pos: Vec3, block_size: f32, grid_size: u32) -> GridCell {
    let snap = |v: f32| clamp_axis((v / block_size).round_ties_even() as i32, grid_size);
    GridCell::new(snap(pos.x), snap(pos.y), snap(pos.z))
}

/// World position of a cell. Inverse of the unclamped snap in [`world_to_grid`].
pub fn grid_to_world(cell: GridCell, block_size: f32) -> Vec3 {
    Vec3::new(
        cell.x as f32 * block_size,
        cell.y as f32 * block_size,
        cell.z as f32 * block_size,
    )
}

/// Map a pixel-space input position to cursor x/z.
///
/// Screen x drives grid x, screen y drives grid z. Fails with
/// [`Error::InvalidDimension`] when the frame has no area.
pub fn map_input_to_cursor_xz(
    input: Vec2,
    frame_width: f32,
    frame_height: f32,
    grid_size: u32,
) -> Result<(i32, i32)> {
    if !(frame_width > 0.0 && frame_height > 0.0)
        || !frame_width.is_finite()
        || !frame_height.is_finite()
    {
        return Err(Error::InvalidDimension {
            width: frame_width,
            height: frame_height,
        });
    }

    let scale = grid_size as f32;
    let gx = ((input.x / frame_width) * scale) as i32;
    let gz = ((input.y / frame_height) * scale) as i32;

    Ok((clamp_axis(gx, grid_size), clamp_axis(gz, grid_size)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_world_to_grid_rounds_and_clamps() {
        assert_eq!(world_to_grid(Vec3::new(1.1, 0.2, 4.9), 0.5, 20), GridCell::new(2, 0, 10));
        assert_eq!(world_to_grid(Vec3::new(-3.0, 100.0, 0.0), 0.5, 20), GridCell::new(0, 19, 0));
    }

    #[test]
    fn test_world_to_grid_ties_to_even() {
        assert_eq!(world_to_grid(Vec3::new(0.25, 0.75, 1.25), 0.5, 20), GridCell::new(0, 2, 2));
    }

    #[test]
    fn test_round_trip_all_cells() {
        let grid_size = 20;
        for block_size in [0.5f32, 0.1, 1.0, 0.37] {
            for x in 0..grid_size as i32 {
                for y in 0..grid_size as i32 {
                    for z in 0..grid_size as i32 {
                        let cell = GridCell::new(x, y, z);
                        let world = grid_to_world(cell, block_size);
                        assert_eq!(world_to_grid(world, block_size, grid_size), cell);
                    }
                }
            }
        }
    }

    #[test]
    fn test_grid_to_world() {
        assert_eq!(grid_to_world(GridCell::new(2, 0, 4), 0.5), Vec3::new(1.0, 0.0, 2.0));
    }

    #[test]
    fn test_map_input_to_cursor() {
        let (gx, gz) = map_input_to_cursor_xz(Vec2::new(640.0, 360.0), 1280.0, 720.0, 20).unwrap();
        assert_eq!((gx, gz), (10, 10));

        let (gx, gz) = map_input_to_cursor_xz(Vec2::new(0.0, 719.0), 1280.0, 720.0, 20).unwrap();
        assert_eq!((gx, gz), (0, 19));
    }

    #[test]
    fn test_map_input_clamps_outside_frame() {
        let (gx, gz) = map_input_to_cursor_xz(Vec2::new(1280.0, -50.0), 1280.0, 720.0, 20).unwrap();
        assert_eq!((gx, gz), (19, 0));
    }

    #[test]
    fn test_map_input_rejects_degenerate_frame() {
        let err = map_input_to_cursor_xz(Vec2::ZERO, 0.0, 720.0, 20).unwrap_err();
        assert!(matches!(err, Error::InvalidDimension { .. }));
        assert!(map_input_to_cursor_xz(Vec2::ZERO, 1280.0, -1.0, 20).is_err());
        assert!(map_input_to_cursor_xz(Vec2::ZERO, f32::NAN, 720.0, 20).is_err());
    }
}

//! Integer grid cell coordinates

use glam::IVec3;

/// A cell of the voxel grid.
///
/// Components are signed so that out-of-range requests can be expressed
/// and rejected by the store instead of wrapping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub struct GridCell {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl GridCell {
    /// Create a new grid cell
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Whether every component lies in [0, grid_size - 1]
    pub fn in_bounds(&self, grid_size: u32) -> bool {
        let size = i64::from(grid_size);
        [self.x, self.y, self.z]
            .iter()
            .all(|&v| v >= 0 && i64::from(v) < size)
    }

    /// Clamp every component into [0, grid_size - 1]
    pub fn clamped(self, grid_size: u32) -> Self {
        Self {
            x: clamp_axis(self.x, grid_size),
            y: clamp_axis(self.y, grid_size),
            z: clamp_axis(self.z, grid_size),
        }
    }
}

impl From<IVec3> for GridCell {
    fn from(v: IVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<GridCell> for IVec3 {
    fn from(c: GridCell) -> Self {
        IVec3::new(c.x, c.y, c.z)
    }
}

impl From<(i32, i32, i32)> for GridCell {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Self::new(x, y, z)
    }
}

impl std::fmt::Display for GridCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Clamp a single axis into [0, grid_size - 1]. A zero grid clamps to 0.
pub fn clamp_axis(v: i32, grid_size: u32) -> i32 {
    let max = i32::try_from(grid_size.saturating_sub(1)).unwrap_or(i32::MAX);
    v.clamp(0, max)
}

//! Block storage and editing

pub mod color;
pub mod edit;
pub mod world;

pub use color::{Color, Palette};
pub use edit::EditCommand;
pub use world::VoxelWorld;

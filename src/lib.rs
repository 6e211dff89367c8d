//! Holoblock - gesture-driven voxel building over a live camera feed

pub mod core;
pub mod math;
pub mod voxel;
pub mod gesture;
pub mod capture;
pub mod render;
pub mod session;

//! Voxel buffer
//!
//! Per-voxel brightness written by the foreground between frames.

pub mod buffer;

pub use buffer::{VoxelBuffer, VoxelError};

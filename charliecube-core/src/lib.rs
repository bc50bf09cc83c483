//! Board-agnostic core logic for the charlieplexed LED cube
//!
//! This crate contains the render pipeline and nothing that depends on a
//! specific chip:
//!
//! - Voxel buffer written by the foreground
//! - Pin mapping tables (voxel index to anode/cathode pair)
//! - Frame compiler building the cyclic display list
//! - Render step walking the list with software PWM
//! - Frame clock pacing animation frames
//! - Hardware abstraction trait for lighting a single LED
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

pub mod clock;
pub mod config;
pub mod cube;
pub mod display;
pub mod mapping;
pub mod render;
pub mod traits;
pub mod voxel;

pub use clock::FrameClock;
pub use cube::{Cube, CubeHandles};
pub use display::{CompileReport, DisplayList, DisplayNode, FrameCompiler};
pub use mapping::{PinId, PinMap, PinPair, PinTable};
pub use render::{Renderer, TickReport};
pub use traits::LedDriver;
pub use voxel::{VoxelBuffer, VoxelError};

/// Voxels in the reference cube (4×4×4 RGB)
pub const VOXEL_COUNT: usize = 192;

/// Highest distinguishable brightness level
///
/// Display nodes carry brightness in four bits; buffer values above this
/// saturate when compiled.
pub const MAX_BRIGHTNESS: u8 = 15;

//! Display list
//!
//! Compiled form of the voxel buffer that the render interrupt replays.

pub mod compiler;
pub mod list;
pub mod node;

pub use compiler::{CompileReport, FrameCompiler};
pub use list::{Cursor, DisplayList, ListView, BANK_COUNT};
pub use node::{quantize, DisplayNode, SlotIndex, FIRST_SLOT, MAX_SLOTS, SENTINEL_SLOT};

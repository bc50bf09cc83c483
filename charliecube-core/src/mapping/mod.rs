//! Pin mapping
//!
//! Maps voxel indices to the anode/cathode pair that lights them. The
//! mapping is configuration data injected into the compiler, not part of
//! the render algorithm.

pub mod charliecube;
pub mod table;

pub use charliecube::{charliecube_table, CHARLIECUBE_PAIRS, CHARLIECUBE_PINS};
pub use table::{MappingError, PinId, PinMap, PinPair, PinTable};

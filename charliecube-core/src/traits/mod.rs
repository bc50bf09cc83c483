//! Hardware abstraction traits
//!
//! These traits define the interface between the render pipeline and
//! hardware-specific implementations.

pub mod driver;

pub use driver::LedDriver;

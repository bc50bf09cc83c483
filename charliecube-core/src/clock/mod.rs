//! Frame timing
//!
//! Counts frame timer interrupts and tells the foreground when an
//! animation frame has been on display long enough.

pub mod frame;

pub use frame::FrameClock;

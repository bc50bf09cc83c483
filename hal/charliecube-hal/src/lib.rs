//! Charliecube Hardware Abstraction Layer
//!
//! This crate defines the register-level capability the LED cube needs from
//! a chip: three independent port groups whose pins can be switched between
//! output and high-impedance input, and whose outputs can be driven high or
//! low. Chip-specific HALs implement it; the render pipeline never touches
//! registers directly.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  charliecube-core (render pipeline)     │
//! └─────────────────────────────────────────┘
//!                     │ LedDriver
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  charliecube-drivers (pin → port bits)  │
//! └─────────────────────────────────────────┘
//!                     │ PortRegisters
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  charliecube-hal (this crate - traits)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │charliecube-hal│
//!             │   -rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`port::PortRegisters`] - Direction and level masks per port group

#![no_std]
#![deny(unsafe_code)]

pub mod port;

// Re-export key items at crate root for convenience
pub use port::{PortGroup, PortRegisters, PORT_GROUPS};

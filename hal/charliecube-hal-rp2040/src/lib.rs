//! RP2040-specific HAL for the charliecube firmware
//!
//! This crate provides RP2040-specific implementations of the shared
//! `charliecube-hal` traits:
//!
//! - Tri-state port groups built from `Flex` GPIOs
//! - Pin taking by GPIO number for generated pin tables

#![no_std]

pub mod pins;
pub mod port;

pub use charliecube_hal::{PortGroup, PortRegisters};
pub use port::{FlexPort, PinError};

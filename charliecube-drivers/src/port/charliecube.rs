//! Port assignment of the reference cube
//!
//! Pins 0-5 sit on D2-D7, pins 6-11 on B0-B5 and pins 12-15 on C0-C3.

use charliecube_core::mapping::CHARLIECUBE_PINS;
use charliecube_hal::PortGroup;

use super::PinBits;

/// Register bits for the 16 lines of the reference cube
pub const CHARLIECUBE_PORT_BITS: [PinBits; CHARLIECUBE_PINS as usize] = [
    PinBits::on(PortGroup::D, 2),
    PinBits::on(PortGroup::D, 3),
    PinBits::on(PortGroup::D, 4),
    PinBits::on(PortGroup::D, 5),
    PinBits::on(PortGroup::D, 6),
    PinBits::on(PortGroup::D, 7),
    PinBits::on(PortGroup::B, 0),
    PinBits::on(PortGroup::B, 1),
    PinBits::on(PortGroup::B, 2),
    PinBits::on(PortGroup::B, 3),
    PinBits::on(PortGroup::B, 4),
    PinBits::on(PortGroup::B, 5),
    PinBits::on(PortGroup::C, 0),
    PinBits::on(PortGroup::C, 1),
    PinBits::on(PortGroup::C, 2),
    PinBits::on(PortGroup::C, 3),
];

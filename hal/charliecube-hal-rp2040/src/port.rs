//! Port groups over `Flex` GPIOs
//!
//! The RP2040 has no 8-bit ports, so each group is an arbitrary set of up
//! to eight GPIOs, each assigned to one bit of the group's masks. Bit set
//! in the direction mask: push-pull output. Bit clear: input without pulls,
//! which leaves the line floating.

use embassy_rp::gpio::{Flex, Level, Pull};
use heapless::Vec;

use charliecube_hal::{PortGroup, PortRegisters};

/// Error attaching a GPIO to a port group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinError {
    /// Bit number is not 0-7
    BitOutOfRange { bit: u8 },
    /// Another GPIO already holds this bit
    BitTaken { group: PortGroup, bit: u8 },
}

struct Line {
    mask: u8,
    pin: Flex<'static>,
}

/// Three port groups of `Flex` pins
pub struct FlexPort {
    groups: [Vec<Line, 8>; 3],
}

impl Default for FlexPort {
    fn default() -> Self {
        Self::new()
    }
}

impl FlexPort {
    /// Create a port with no pins attached
    pub const fn new() -> Self {
        Self {
            groups: [Vec::new(), Vec::new(), Vec::new()],
        }
    }

    /// Assign a GPIO to `bit` of `group`
    ///
    /// The pin is released (input, no pulls) before it is stored.
    pub fn attach(&mut self, group: PortGroup, bit: u8, mut pin: Flex<'static>) -> Result<(), PinError> {
        if bit > 7 {
            return Err(PinError::BitOutOfRange { bit });
        }
        let mask = 1 << bit;
        let lines = &mut self.groups[group.index()];
        if lines.iter().any(|line| line.mask == mask) {
            return Err(PinError::BitTaken { group, bit });
        }

        pin.set_pull(Pull::None);
        pin.set_as_input();
        pin.set_level(Level::Low);

        // Eight distinct bits always fit
        lines
            .push(Line { mask, pin })
            .map_err(|_| PinError::BitTaken { group, bit })
    }
}

impl PortRegisters for FlexPort {
    fn write_direction(&mut self, group: PortGroup, mask: u8) {
        for line in self.groups[group.index()].iter_mut() {
            if mask & line.mask != 0 {
                line.pin.set_as_output();
            } else {
                line.pin.set_as_input();
            }
        }
    }

    fn write_level(&mut self, group: PortGroup, mask: u8) {
        for line in self.groups[group.index()].iter_mut() {
            let level = if mask & line.mask != 0 {
                Level::High
            } else {
                Level::Low
            };
            line.pin.set_level(level);
        }
    }
}

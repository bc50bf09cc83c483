//! Port-register LED driver
//!
//! Translates logical pin indices into per-group bit masks and drives the
//! matrix through any [`PortRegisters`] implementation.

pub mod charliecube;

pub use charliecube::CHARLIECUBE_PORT_BITS;

use charliecube_core::{LedDriver, PinPair};
use charliecube_hal::{PortGroup, PortRegisters, PORT_GROUPS};

/// Register bits of one logical pin in each port group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinBits {
    masks: [u8; 3],
}

impl PinBits {
    /// Pin that touches no register (lighting through it does nothing)
    pub const NONE: Self = Self { masks: [0; 3] };

    /// Pin on bit `bit` of `group`
    pub const fn on(group: PortGroup, bit: u8) -> Self {
        let mut masks = [0; 3];
        masks[group.index()] = 1 << (bit & 7);
        Self { masks }
    }

    /// Mask for one group
    pub const fn mask(&self, group: PortGroup) -> u8 {
        self.masks[group.index()]
    }

    pub const fn is_none(&self) -> bool {
        self.masks[0] == 0 && self.masks[1] == 0 && self.masks[2] == 0
    }
}

/// [`LedDriver`] over three tri-state port groups
///
/// Lighting a pair makes the anode and cathode outputs, drives the anode
/// high and leaves the cathode low; every other pin stays an input. A pair
/// naming a pin outside the table is left dark.
pub struct PortLedDriver<R, const PINS: usize> {
    regs: R,
    pins: [PinBits; PINS],
}

impl<R: PortRegisters, const PINS: usize> PortLedDriver<R, PINS> {
    /// Wrap the registers and release every pin
    pub fn new(regs: R, pins: [PinBits; PINS]) -> Self {
        let mut driver = Self { regs, pins };
        driver.regs.release_all();
        driver
    }

    /// Bits of one logical pin
    pub fn bits(&self, pin: u8) -> Option<PinBits> {
        self.pins.get(pin as usize).copied()
    }

    pub fn registers(&self) -> &R {
        &self.regs
    }

    /// Release every pin and return the registers
    pub fn release(mut self) -> R {
        self.regs.release_all();
        self.regs
    }
}

impl<R: PortRegisters, const PINS: usize> LedDriver for PortLedDriver<R, PINS> {
    fn release_all(&mut self) {
        self.regs.release_all();
    }

    fn light(&mut self, pair: PinPair) {
        let (Some(anode), Some(cathode)) = (self.bits(pair.anode), self.bits(pair.cathode)) else {
            return;
        };

        for group in PORT_GROUPS {
            self.regs
                .write_direction(group, anode.mask(group) | cathode.mask(group));
        }
        for group in PORT_GROUPS {
            self.regs.write_level(group, anode.mask(group));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct FakeRegisters {
        direction: [u8; 3],
        level: [u8; 3],
    }

    impl PortRegisters for FakeRegisters {
        fn write_direction(&mut self, group: PortGroup, mask: u8) {
            self.direction[group.index()] = mask;
        }

        fn write_level(&mut self, group: PortGroup, mask: u8) {
            self.level[group.index()] = mask;
        }
    }

    const PINS: [PinBits; 4] = [
        PinBits::on(PortGroup::D, 2),
        PinBits::on(PortGroup::D, 3),
        PinBits::on(PortGroup::B, 0),
        PinBits::on(PortGroup::C, 3),
    ];

    #[test]
    fn test_light_same_group() {
        let mut driver = PortLedDriver::new(FakeRegisters::default(), PINS);
        driver.release_all();
        driver.light(PinPair::new(1, 0));

        let regs = driver.registers();
        assert_eq!(regs.direction, [0, 0, 0b0000_1100]);
        assert_eq!(regs.level, [0, 0, 0b0000_1000]);
    }

    #[test]
    fn test_light_across_groups() {
        let mut driver = PortLedDriver::new(FakeRegisters::default(), PINS);
        driver.release_all();
        driver.light(PinPair::new(2, 3));

        let regs = driver.registers();
        assert_eq!(regs.direction, [0x01, 0x08, 0]);
        assert_eq!(regs.level, [0x01, 0, 0]);
    }

    #[test]
    fn test_release_floats_everything() {
        let mut driver = PortLedDriver::new(FakeRegisters::default(), PINS);
        driver.light(PinPair::new(3, 0));
        driver.release_all();

        let regs = driver.release();
        assert_eq!(regs.direction, [0; 3]);
        assert_eq!(regs.level, [0; 3]);
    }

    #[test]
    fn test_unknown_pin_is_inert() {
        let mut driver = PortLedDriver::new(FakeRegisters::default(), PINS);
        driver.release_all();
        driver.light(PinPair::new(0, 9));

        let regs = driver.registers();
        assert_eq!(regs.direction, [0; 3]);
        assert_eq!(regs.level, [0; 3]);
    }

    #[test]
    fn test_pin_bits() {
        let bits = PinBits::on(PortGroup::C, 5);
        assert_eq!(bits.mask(PortGroup::C), 0x20);
        assert_eq!(bits.mask(PortGroup::B), 0);
        assert!(!bits.is_none());
        assert!(PinBits::NONE.is_none());
    }
}

//! Port group abstractions
//!
//! A charlieplexed matrix needs every line to be tri-state: driven high,
//! driven low, or released to high impedance. The cube's lines are spread
//! over three port groups of up to eight pins each.

/// One of the three independent port groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PortGroup {
    B,
    C,
    D,
}

/// All port groups, in register order
pub const PORT_GROUPS: [PortGroup; 3] = [PortGroup::B, PortGroup::C, PortGroup::D];

impl PortGroup {
    /// Index of this group into per-group arrays
    pub const fn index(self) -> usize {
        match self {
            PortGroup::B => 0,
            PortGroup::C => 1,
            PortGroup::D => 2,
        }
    }
}

/// Register access for the three port groups
///
/// Each call replaces the whole mask for one group. A set bit in the
/// direction mask makes that pin an output, a clear bit releases it to
/// high impedance. The level mask only matters for pins that are outputs.
///
/// Implementations are called from the render interrupt, so they must not
/// block or allocate.
pub trait PortRegisters {
    /// Write the direction mask (1 = output, 0 = high-Z input)
    fn write_direction(&mut self, group: PortGroup, mask: u8);

    /// Write the output level mask (1 = high, 0 = low)
    fn write_level(&mut self, group: PortGroup, mask: u8);

    /// Release every pin of every group
    ///
    /// Levels are cleared before directions so no pin is ever left
    /// sourcing current while the others are switched.
    fn release_all(&mut self) {
        for group in PORT_GROUPS {
            self.write_level(group, 0);
        }
        for group in PORT_GROUPS {
            self.write_direction(group, 0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Registers {
        direction: [u8; 3],
        level: [u8; 3],
        writes: usize,
    }

    impl PortRegisters for Registers {
        fn write_direction(&mut self, group: PortGroup, mask: u8) {
            self.direction[group.index()] = mask;
            self.writes += 1;
        }

        fn write_level(&mut self, group: PortGroup, mask: u8) {
            self.level[group.index()] = mask;
            self.writes += 1;
        }
    }

    #[test]
    fn test_release_all_clears_every_group() {
        let mut regs = Registers {
            direction: [0xFF, 0x0F, 0xF0],
            level: [0x01, 0x02, 0x04],
            writes: 0,
        };
        regs.release_all();
        assert_eq!(regs.direction, [0, 0, 0]);
        assert_eq!(regs.level, [0, 0, 0]);
        assert_eq!(regs.writes, 6);
    }

    #[test]
    fn test_group_indices() {
        for (i, group) in PORT_GROUPS.into_iter().enumerate() {
            assert_eq!(group.index(), i);
        }
    }
}

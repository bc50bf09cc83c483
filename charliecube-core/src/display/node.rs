//! Display node encoding
//!
//! A node is packed into one 32-bit word so the render interrupt can read
//! it with a single atomic load:
//!
//! ```text
//!  31        20 19  16 15     8 7      0
//! ┌────────────┬──────┬────────┬────────┐
//! │ next slot  │level │cathode │ anode  │
//! └────────────┴──────┴────────┴────────┘
//! ```

use crate::mapping::PinPair;
use crate::MAX_BRIGHTNESS;

/// Index of a node slot within one storage bank
pub type SlotIndex = u16;

/// Slot 0 anchors the cycle and is never rendered
pub const SENTINEL_SLOT: SlotIndex = 0;

/// First real node of every compiled list
pub const FIRST_SLOT: SlotIndex = 1;

/// Slots addressable by the 12-bit successor field
pub const MAX_SLOTS: usize = 1 << 12;

const CATHODE_SHIFT: u32 = 8;
const LEVEL_SHIFT: u32 = 16;
const NEXT_SHIFT: u32 = 20;
const LEVEL_MASK: u32 = 0x0F;
const NEXT_MASK: u32 = 0x0FFF;

/// Quantize a buffer brightness to a node level
///
/// Levels are four bits wide; brighter values saturate instead of wrapping
/// so a lit voxel never compiles to a dark node.
pub const fn quantize(brightness: u8) -> u8 {
    if brightness > MAX_BRIGHTNESS {
        MAX_BRIGHTNESS
    } else {
        brightness
    }
}

/// One entry of the display list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayNode {
    /// Conductors to drive
    pub pair: PinPair,
    /// Quantized brightness (0-15)
    pub level: u8,
    /// Successor slot
    pub next: SlotIndex,
}

impl DisplayNode {
    /// Sentinel of an empty list: dark, linked to itself
    pub const EMPTY: Self = Self {
        pair: PinPair::new(0, 0),
        level: 0,
        next: SENTINEL_SLOT,
    };

    pub const fn new(pair: PinPair, brightness: u8, next: SlotIndex) -> Self {
        Self {
            pair,
            level: quantize(brightness),
            next,
        }
    }

    /// Pack into a storage word
    pub const fn pack(self) -> u32 {
        (self.pair.anode as u32)
            | ((self.pair.cathode as u32) << CATHODE_SHIFT)
            | (((self.level as u32) & LEVEL_MASK) << LEVEL_SHIFT)
            | (((self.next as u32) & NEXT_MASK) << NEXT_SHIFT)
    }

    /// Unpack a storage word
    pub const fn unpack(word: u32) -> Self {
        Self {
            pair: PinPair::new(word as u8, (word >> CATHODE_SHIFT) as u8),
            level: ((word >> LEVEL_SHIFT) & LEVEL_MASK) as u8,
            next: ((word >> NEXT_SHIFT) & NEXT_MASK) as SlotIndex,
        }
    }

    /// Same word with a different successor
    pub const fn with_next(word: u32, next: SlotIndex) -> u32 {
        (word & !(NEXT_MASK << NEXT_SHIFT)) | (((next as u32) & NEXT_MASK) << NEXT_SHIFT)
    }
}

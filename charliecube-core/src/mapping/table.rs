//! Pin pair tables and validation

/// Logical pin index (0-based)
pub type PinId = u8;

/// Conductor pair that lights one LED
///
/// The anode is driven high and the cathode low; every other line is left
/// floating so no other LED in the matrix sees a forward voltage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinPair {
    pub anode: PinId,
    pub cathode: PinId,
}

impl PinPair {
    pub const fn new(anode: PinId, cathode: PinId) -> Self {
        Self { anode, cathode }
    }
}

/// Mapping validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MappingError {
    /// Anode and cathode are the same line
    SelfPair { index: usize },
    /// A pin index is not below the table's pin count
    PinOutOfRange { index: usize, pin: PinId },
    /// Two voxels share the same pair
    DuplicatePair { index: usize, first: usize },
}

/// Source of pin pairs for the frame compiler
///
/// Returning `None` marks an entry as unmapped; the compiler treats such a
/// voxel as inert and leaves it out of the display list.
pub trait PinMap {
    /// Pin pair for a voxel index
    fn pair(&self, index: usize) -> Option<PinPair>;
}

impl PinMap for [PinPair] {
    fn pair(&self, index: usize) -> Option<PinPair> {
        self.get(index).copied()
    }
}

impl<const N: usize> PinMap for [PinPair; N] {
    fn pair(&self, index: usize) -> Option<PinPair> {
        self.get(index).copied()
    }
}

impl<T: PinMap + ?Sized> PinMap for &T {
    fn pair(&self, index: usize) -> Option<PinPair> {
        (**self).pair(index)
    }
}

/// Validated mapping with one pair per voxel
///
/// Construction rejects self pairs, pins outside `[0, pin_count)` and
/// duplicate pairs. `new` is a `const fn`, so a table built into a `const`
/// item is checked when the firmware is compiled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinTable<const N: usize> {
    pairs: [PinPair; N],
    pin_count: u8,
}

impl<const N: usize> PinTable<N> {
    /// Validate and wrap a table of pairs
    pub const fn new(pairs: [PinPair; N], pin_count: u8) -> Result<Self, MappingError> {
        let mut index = 0;
        while index < N {
            let pair = pairs[index];
            if pair.anode == pair.cathode {
                return Err(MappingError::SelfPair { index });
            }
            if pair.anode >= pin_count {
                return Err(MappingError::PinOutOfRange {
                    index,
                    pin: pair.anode,
                });
            }
            if pair.cathode >= pin_count {
                return Err(MappingError::PinOutOfRange {
                    index,
                    pin: pair.cathode,
                });
            }

            let mut first = 0;
            while first < index {
                let other = pairs[first];
                if other.anode == pair.anode && other.cathode == pair.cathode {
                    return Err(MappingError::DuplicatePair { index, first });
                }
                first += 1;
            }
            index += 1;
        }

        Ok(Self { pairs, pin_count })
    }

    /// Number of logical pins the table spans
    pub const fn pin_count(&self) -> u8 {
        self.pin_count
    }

    /// All pairs in voxel order
    pub fn pairs(&self) -> &[PinPair; N] {
        &self.pairs
    }
}

impl<const N: usize> PinMap for PinTable<N> {
    fn pair(&self, index: usize) -> Option<PinPair> {
        self.pairs.get(index).copied()
    }
}

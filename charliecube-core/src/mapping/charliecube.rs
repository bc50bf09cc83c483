//! Reference 4×4×4 RGB cube wiring
//!
//! Sixteen column lines drive 192 LEDs (64 positions × 3 colour dies).
//! Entries are grouped four to a row, in voxel index order.

use super::table::{PinPair, PinTable};
use crate::VOXEL_COUNT;

/// Logical pins used by the reference cube
pub const CHARLIECUBE_PINS: u8 = 16;

const fn p(anode: u8, cathode: u8) -> PinPair {
    PinPair::new(anode, cathode)
}

/// Anode/cathode pair of every voxel in the reference cube
#[rustfmt::skip]
pub const CHARLIECUBE_PAIRS: [PinPair; VOXEL_COUNT] = [
    p(3, 7), p(15, 3), p(11, 15), p(7, 11),
    p(3, 6), p(12, 3), p(10, 12), p(6, 10),
    p(3, 5), p(14, 3), p(9, 14), p(5, 9),
    p(3, 4), p(13, 3), p(8, 13), p(4, 8),
    p(2, 7), p(14, 2), p(10, 14), p(7, 10),
    p(2, 6), p(13, 2), p(11, 13), p(6, 11),
    p(2, 5), p(15, 2), p(8, 15), p(5, 8),
    p(2, 4), p(12, 2), p(9, 12), p(4, 9),
    p(1, 7), p(13, 1), p(9, 13), p(7, 9),
    p(1, 6), p(14, 1), p(8, 14), p(6, 8),
    p(1, 5), p(12, 1), p(11, 12), p(5, 11),
    p(1, 4), p(15, 1), p(10, 15), p(4, 10),
    p(0, 7), p(12, 0), p(8, 12), p(7, 8),
    p(0, 6), p(15, 0), p(9, 15), p(6, 9),
    p(0, 5), p(13, 0), p(10, 13), p(5, 10),
    p(0, 4), p(14, 0), p(11, 14), p(4, 11),
    p(15, 7), p(11, 3), p(7, 15), p(3, 11),
    p(12, 6), p(10, 3), p(6, 12), p(3, 10),
    p(14, 5), p(9, 3), p(5, 14), p(3, 9),
    p(13, 4), p(8, 3), p(4, 13), p(3, 8),
    p(14, 7), p(10, 2), p(7, 14), p(2, 10),
    p(13, 6), p(11, 2), p(6, 13), p(2, 11),
    p(15, 5), p(8, 2), p(5, 15), p(2, 8),
    p(12, 4), p(9, 2), p(4, 12), p(2, 9),
    p(13, 7), p(9, 1), p(7, 13), p(1, 9),
    p(14, 6), p(8, 1), p(6, 14), p(1, 8),
    p(12, 5), p(11, 1), p(5, 12), p(1, 11),
    p(15, 4), p(10, 1), p(4, 15), p(1, 10),
    p(12, 7), p(8, 0), p(7, 12), p(0, 8),
    p(15, 6), p(9, 0), p(6, 15), p(0, 9),
    p(13, 5), p(10, 0), p(5, 13), p(0, 10),
    p(14, 4), p(11, 0), p(4, 14), p(0, 11),
    p(11, 7), p(7, 3), p(3, 15), p(15, 11),
    p(10, 6), p(6, 3), p(3, 12), p(12, 10),
    p(9, 5), p(5, 3), p(3, 14), p(14, 9),
    p(8, 4), p(4, 3), p(3, 13), p(13, 8),
    p(10, 7), p(7, 2), p(2, 14), p(14, 10),
    p(11, 6), p(6, 2), p(2, 13), p(13, 11),
    p(8, 5), p(5, 2), p(2, 15), p(15, 8),
    p(9, 4), p(4, 2), p(2, 12), p(12, 9),
    p(9, 7), p(7, 1), p(1, 13), p(13, 9),
    p(8, 6), p(6, 1), p(1, 14), p(14, 8),
    p(11, 5), p(5, 1), p(1, 12), p(12, 11),
    p(10, 4), p(4, 1), p(1, 15), p(15, 10),
    p(8, 7), p(7, 0), p(0, 12), p(12, 8),
    p(9, 6), p(6, 0), p(0, 15), p(15, 9),
    p(10, 5), p(5, 0), p(0, 13), p(13, 10),
    p(11, 4), p(4, 0), p(0, 14), p(14, 11),
];

const CHARLIECUBE_TABLE: PinTable<VOXEL_COUNT> =
    match PinTable::new(CHARLIECUBE_PAIRS, CHARLIECUBE_PINS) {
        Ok(table) => table,
        Err(_) => panic!("reference cube wiring has an invalid pair"),
    };

/// Validated reference table
pub const fn charliecube_table() -> PinTable<VOXEL_COUNT> {
    CHARLIECUBE_TABLE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::PinMap;

    #[test]
    fn test_reference_table_shape() {
        let table = charliecube_table();
        assert_eq!(table.pairs().len(), VOXEL_COUNT);
        assert_eq!(table.pin_count(), CHARLIECUBE_PINS);
        assert_eq!(table.pair(0), Some(PinPair::new(3, 7)));
        assert_eq!(table.pair(191), Some(PinPair::new(14, 11)));
    }

    #[test]
    fn test_every_pin_is_used() {
        let mut used = [false; CHARLIECUBE_PINS as usize];
        for pair in CHARLIECUBE_PAIRS {
            used[pair.anode as usize] = true;
            used[pair.cathode as usize] = true;
        }
        assert!(used.iter().all(|&u| u));
    }
}

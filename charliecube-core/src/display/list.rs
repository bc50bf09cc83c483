//! Double-banked display list storage
//!
//! Node storage is a fixed arena of `N + 1` slots per bank. Slot 0 is the
//! sentinel, slots `1..=N` hold compiled nodes. The foreground compiles
//! into the bank the render interrupt is not reading and then publishes
//! it with a single store to the cursor, so the interrupt only ever sees
//! a complete cycle.

use portable_atomic::{AtomicU16, AtomicU32, Ordering};

use super::node::{DisplayNode, SlotIndex, FIRST_SLOT, MAX_SLOTS, SENTINEL_SLOT};

/// Storage banks per list
pub const BANK_COUNT: u8 = 2;

/// Position of the render step within the published list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cursor {
    pub bank: u8,
    pub slot: SlotIndex,
}

impl Cursor {
    const fn pack(self) -> u32 {
        ((self.bank as u32) << 16) | self.slot as u32
    }

    const fn unpack(word: u32) -> Self {
        Self {
            bank: (word >> 16) as u8,
            slot: word as SlotIndex,
        }
    }

    /// True while the list behind the cursor is empty
    pub const fn is_idle(self) -> bool {
        self.slot == SENTINEL_SLOT
    }
}

/// One bank of node slots
pub(crate) struct Bank<const N: usize> {
    sentinel: AtomicU32,
    nodes: [AtomicU32; N],
    len: AtomicU16,
}

impl<const N: usize> Bank<N> {
    const fn new() -> Self {
        Self {
            sentinel: AtomicU32::new(0),
            nodes: [const { AtomicU32::new(0) }; N],
            len: AtomicU16::new(0),
        }
    }

    /// Storage word for a slot; anything past the arena reads as the sentinel
    fn slot(&self, slot: SlotIndex) -> &AtomicU32 {
        match slot {
            SENTINEL_SLOT => &self.sentinel,
            _ => self
                .nodes
                .get(slot as usize - FIRST_SLOT as usize)
                .unwrap_or(&self.sentinel),
        }
    }

    pub(crate) fn load(&self, slot: SlotIndex) -> DisplayNode {
        DisplayNode::unpack(self.slot(slot).load(Ordering::Relaxed))
    }

    pub(crate) fn store(&self, slot: SlotIndex, node: DisplayNode) {
        self.slot(slot).store(node.pack(), Ordering::Relaxed);
    }

    /// Point a stored node at a different successor
    pub(crate) fn relink(&self, slot: SlotIndex, next: SlotIndex) {
        let cell = self.slot(slot);
        let word = cell.load(Ordering::Relaxed);
        cell.store(DisplayNode::with_next(word, next), Ordering::Relaxed);
    }

    pub(crate) fn set_len(&self, len: usize) {
        self.len.store(len as u16, Ordering::Relaxed);
    }

    fn len(&self) -> usize {
        self.len.load(Ordering::Relaxed) as usize
    }
}

/// Cyclic display list shared between the compiler and the render step
///
/// All state is atomic, so one list can live in a `static` and be reached
/// from the foreground and from interrupt handlers at the same time. Use
/// [`crate::Cube::split`] to obtain the halves that actually read and
/// write it.
pub struct DisplayList<const N: usize> {
    banks: [Bank<N>; BANK_COUNT as usize],
    cursor: AtomicU32,
}

impl<const N: usize> Default for DisplayList<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> DisplayList<N> {
    const CAPACITY_CHECK: () = assert!(
        N + 1 <= MAX_SLOTS,
        "display list holds more nodes than a successor link can address"
    );

    /// Create an empty list (both banks hold only a self-linked sentinel)
    pub const fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::CAPACITY_CHECK;
        Self {
            banks: [Bank::new(), Bank::new()],
            cursor: AtomicU32::new(0),
        }
    }

    /// Current render position
    pub fn cursor(&self) -> Cursor {
        Cursor::unpack(self.cursor.load(Ordering::Acquire))
    }

    /// View of the list the render step is currently replaying
    pub fn published(&self) -> ListView<'_, N> {
        let bank = self.cursor().bank;
        ListView {
            bank: self.bank(bank),
            index: bank,
        }
    }

    pub(crate) fn bank(&self, bank: u8) -> &Bank<N> {
        &self.banks[(bank % BANK_COUNT) as usize]
    }

    /// Repoint the render step at a freshly compiled list
    pub(crate) fn publish(&self, cursor: Cursor) {
        self.cursor.store(cursor.pack(), Ordering::Release);
    }

    /// Move the render step from `from` to its successor
    ///
    /// Fails when a publication replaced the cursor after `from` was read;
    /// the new list's head then stays in place.
    pub(crate) fn advance(&self, from: Cursor, next: SlotIndex) -> bool {
        let to = Cursor {
            bank: from.bank,
            slot: next,
        };
        self.cursor
            .compare_exchange(from.pack(), to.pack(), Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }
}

/// Read-only view of one published bank
pub struct ListView<'a, const N: usize> {
    bank: &'a Bank<N>,
    index: u8,
}

impl<'a, const N: usize> ListView<'a, N> {
    /// Bank the view reads from
    pub fn bank(&self) -> u8 {
        self.index
    }

    /// Number of nodes in the cycle
    pub fn len(&self) -> usize {
        self.bank.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Slot of the first real node, or the sentinel for an empty list
    pub fn head(&self) -> SlotIndex {
        self.bank.load(SENTINEL_SLOT).next
    }

    /// Node stored in a slot
    pub fn node(&self, slot: SlotIndex) -> DisplayNode {
        self.bank.load(slot)
    }

    /// Nodes of one lap in render order
    ///
    /// Stops after returning to the head, or after `N + 1` steps if the
    /// links are broken.
    pub fn iter(&self) -> impl Iterator<Item = DisplayNode> + 'a {
        let bank = self.bank;
        let head = self.head();
        let mut slot = head;
        let mut steps = 0usize;
        core::iter::from_fn(move || {
            if head == SENTINEL_SLOT || steps > N || (steps > 0 && slot == head) {
                return None;
            }
            let node = bank.load(slot);
            slot = node.next;
            steps += 1;
            Some(node)
        })
    }

    /// Walk at most `N + 1` links and check that they close into one cycle
    /// through exactly `len` nodes
    pub fn is_cyclic(&self) -> bool {
        let len = self.len();
        let head = self.head();
        if len == 0 {
            return head == SENTINEL_SLOT;
        }
        if head != FIRST_SLOT {
            return false;
        }

        let mut slot = head;
        for step in 1..=N + 1 {
            if slot == SENTINEL_SLOT {
                return false;
            }
            slot = self.bank.load(slot).next;
            if slot == head {
                return step == len;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::PinPair;

    #[test]
    fn test_new_list_is_idle() {
        let list: DisplayList<4> = DisplayList::new();
        assert_eq!(list.cursor(), Cursor { bank: 0, slot: 0 });
        assert!(list.cursor().is_idle());

        let view = list.published();
        assert!(view.is_empty());
        assert_eq!(view.head(), SENTINEL_SLOT);
        assert_eq!(view.iter().count(), 0);
        assert!(view.is_cyclic());
    }

    #[test]
    fn test_out_of_arena_reads_sentinel() {
        let list: DisplayList<2> = DisplayList::new();
        let bank = list.bank(0);
        bank.store(SENTINEL_SLOT, DisplayNode::new(PinPair::new(0, 0), 0, 1));
        assert_eq!(bank.load(3).next, 1);
        assert_eq!(bank.load(400).next, 1);
    }

    #[test]
    fn test_broken_cycle_detected() {
        let list: DisplayList<3> = DisplayList::new();
        let bank = list.bank(0);
        bank.store(SENTINEL_SLOT, DisplayNode::new(PinPair::new(0, 0), 0, 1));
        bank.store(1, DisplayNode::new(PinPair::new(0, 1), 5, 2));
        bank.store(2, DisplayNode::new(PinPair::new(1, 0), 5, 2));
        bank.set_len(2);
        assert!(!list.published().is_cyclic());
        // Iteration is still bounded
        assert_eq!(list.published().iter().count(), 4);

        bank.relink(2, 1);
        assert!(list.published().is_cyclic());
        assert_eq!(list.published().iter().count(), 2);
    }

    #[test]
    fn test_advance_loses_to_publish() {
        let list: DisplayList<4> = DisplayList::new();
        list.publish(Cursor { bank: 1, slot: 1 });
        let stale = Cursor { bank: 0, slot: 1 };
        assert!(!list.advance(stale, 2));
        assert_eq!(list.cursor(), Cursor { bank: 1, slot: 1 });

        assert!(list.advance(list.cursor(), 2));
        assert_eq!(list.cursor(), Cursor { bank: 1, slot: 2 });
    }
}

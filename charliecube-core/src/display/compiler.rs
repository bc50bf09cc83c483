//! Frame compiler
//!
//! Turns the voxel buffer into a display list containing only the lit
//! voxels, in index order, and publishes it to the render step.

use super::list::{Cursor, DisplayList, BANK_COUNT};
use super::node::{DisplayNode, SlotIndex, FIRST_SLOT, SENTINEL_SLOT};
use crate::mapping::PinMap;
use crate::voxel::VoxelBuffer;

/// Outcome of one compile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CompileReport {
    /// Nodes in the published list
    pub len: usize,
    /// Lit voxels skipped because the map had no pair for them
    pub unmapped: usize,
    /// Bank the list was written to
    pub bank: u8,
}

/// Foreground half of a [`DisplayList`]
pub struct FrameCompiler<'a, const N: usize> {
    list: &'a DisplayList<N>,
}

impl<'a, const N: usize> FrameCompiler<'a, N> {
    pub(crate) fn new(list: &'a DisplayList<N>) -> Self {
        Self { list }
    }

    /// List this compiler publishes to
    pub fn list(&self) -> &'a DisplayList<N> {
        self.list
    }

    /// Compile `buffer` and publish the result
    ///
    /// Runs in O(N) without allocating. The render step keeps replaying
    /// the previous list until the final cursor store, then restarts at the
    /// head of the new one.
    pub fn compile<M: PinMap + ?Sized>(
        &mut self,
        buffer: &VoxelBuffer<N>,
        map: &M,
    ) -> CompileReport {
        let back = (self.list.cursor().bank + 1) % BANK_COUNT;
        let bank = self.list.bank(back);

        let mut len = 0usize;
        let mut unmapped = 0usize;
        for (index, &brightness) in buffer.as_slice().iter().enumerate() {
            if brightness == 0 {
                continue;
            }
            let Some(pair) = map.pair(index) else {
                unmapped += 1;
                continue;
            };

            // Append at the tail; the tail link is closed below
            let slot = FIRST_SLOT + len as SlotIndex;
            bank.store(slot, DisplayNode::new(pair, brightness, slot + 1));
            len += 1;
        }

        let head = if len == 0 {
            SENTINEL_SLOT
        } else {
            let tail = FIRST_SLOT + (len - 1) as SlotIndex;
            bank.relink(tail, FIRST_SLOT);
            FIRST_SLOT
        };
        bank.store(
            SENTINEL_SLOT,
            DisplayNode {
                next: head,
                ..DisplayNode::EMPTY
            },
        );
        bank.set_len(len);

        self.list.publish(Cursor {
            bank: back,
            slot: head,
        });

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "display list: {} nodes in bank {} ({} unmapped)",
            len,
            back,
            unmapped
        );

        CompileReport {
            len,
            unmapped,
            bank: back,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::PinPair;

    const PAIRS: [PinPair; 4] = [
        PinPair::new(0, 1),
        PinPair::new(1, 0),
        PinPair::new(0, 2),
        PinPair::new(2, 0),
    ];

    fn pairs_of<const N: usize>(list: &DisplayList<N>) -> [(PinPair, u8); 4] {
        let mut out = [(PinPair::new(0, 0), 0); 4];
        for (slot, node) in out.iter_mut().zip(list.published().iter()) {
            *slot = (node.pair, node.level);
        }
        out
    }

    #[test]
    fn test_compile_index_order() {
        let list: DisplayList<4> = DisplayList::new();
        let mut compiler = FrameCompiler::new(&list);
        let mut buffer = VoxelBuffer::<4>::new();
        buffer.set(3, 9).unwrap();
        buffer.set(1, 200).unwrap();

        let report = compiler.compile(&buffer, &PAIRS);
        assert_eq!(report.len, 2);
        assert_eq!(report.unmapped, 0);

        let view = list.published();
        assert!(view.is_cyclic());
        let nodes: [(PinPair, u8); 4] = pairs_of(&list);
        assert_eq!(nodes[0], (PinPair::new(1, 0), 15));
        assert_eq!(nodes[1], (PinPair::new(2, 0), 9));
        assert_eq!(list.cursor().slot, FIRST_SLOT);
    }

    #[test]
    fn test_empty_buffer_publishes_sentinel() {
        let list: DisplayList<4> = DisplayList::new();
        let mut compiler = FrameCompiler::new(&list);
        let mut buffer = VoxelBuffer::<4>::new();
        buffer.fill(3);
        compiler.compile(&buffer, &PAIRS);

        buffer.clear();
        let report = compiler.compile(&buffer, &PAIRS);
        assert_eq!(report.len, 0);
        assert!(list.cursor().is_idle());
        assert!(list.published().is_empty());
        assert!(list.published().is_cyclic());
        assert_eq!(list.published().node(SENTINEL_SLOT), DisplayNode::EMPTY);
    }

    #[test]
    fn test_compile_alternates_banks() {
        let list: DisplayList<4> = DisplayList::new();
        let mut compiler = FrameCompiler::new(&list);
        let mut buffer = VoxelBuffer::<4>::new();
        buffer.fill(4);

        let first = compiler.compile(&buffer, &PAIRS);
        let first_nodes = pairs_of(&list);
        let second = compiler.compile(&buffer, &PAIRS);
        assert_ne!(first.bank, second.bank);
        assert_eq!(first_nodes, pairs_of(&list));
    }

    #[test]
    fn test_unmapped_voxels_are_inert() {
        let list: DisplayList<4> = DisplayList::new();
        let mut compiler = FrameCompiler::new(&list);
        let mut buffer = VoxelBuffer::<4>::new();
        buffer.fill(1);

        // Only the first two voxels have pairs
        let report = compiler.compile(&buffer, &PAIRS[..2]);
        assert_eq!(report.len, 2);
        assert_eq!(report.unmapped, 2);
        assert!(list.published().is_cyclic());
    }

    #[test]
    fn test_full_list_closes_cycle() {
        let list: DisplayList<4> = DisplayList::new();
        let mut compiler = FrameCompiler::new(&list);
        let mut buffer = VoxelBuffer::<4>::new();
        buffer.fill(15);
        compiler.compile(&buffer, &PAIRS);

        let view = list.published();
        assert_eq!(view.len(), 4);
        assert_eq!(view.node(4).next, FIRST_SLOT);
        assert_eq!(
            view.node(SENTINEL_SLOT),
            DisplayNode {
                next: FIRST_SLOT,
                ..DisplayNode::EMPTY
            }
        );
        assert!(view.is_cyclic());
    }
}

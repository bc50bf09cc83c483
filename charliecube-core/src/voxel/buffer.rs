//! Voxel buffer implementation

use core::ops::{Index, IndexMut};

/// Voxel buffer errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum VoxelError {
    /// Index is not below the voxel count
    OutOfRange { index: usize },
}

/// Brightness of every voxel in the cube
///
/// A value of 0 means the voxel is off and will not be rendered at all.
/// Values are stored as written; quantization happens when the buffer is
/// compiled into a display list.
///
/// The buffer belongs to the foreground. The render interrupt never reads
/// it, so changes only become visible after the next compile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoxelBuffer<const N: usize> {
    brightness: [u8; N],
}

impl<const N: usize> Default for VoxelBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> VoxelBuffer<N> {
    /// Create a buffer with every voxel off
    pub const fn new() -> Self {
        Self { brightness: [0; N] }
    }

    /// Number of voxels
    pub const fn len(&self) -> usize {
        N
    }

    /// True for a zero-sized cube
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Turn every voxel off
    pub fn clear(&mut self) {
        self.brightness = [0; N];
    }

    /// Set every voxel to the same brightness
    pub fn fill(&mut self, brightness: u8) {
        self.brightness = [brightness; N];
    }

    /// Set one voxel
    ///
    /// Out-of-range indices are rejected and leave the buffer untouched.
    pub fn set(&mut self, index: usize, brightness: u8) -> Result<(), VoxelError> {
        let slot = self
            .brightness
            .get_mut(index)
            .ok_or(VoxelError::OutOfRange { index })?;
        *slot = brightness;
        Ok(())
    }

    /// Brightness of one voxel, or None if out of range
    pub fn get(&self, index: usize) -> Option<u8> {
        self.brightness.get(index).copied()
    }

    /// Iterate brightness values in index order
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.brightness.iter().copied()
    }

    /// Number of voxels that will be rendered
    pub fn lit_count(&self) -> usize {
        self.brightness.iter().filter(|&&b| b != 0).count()
    }

    /// Raw brightness values
    pub fn as_slice(&self) -> &[u8] {
        &self.brightness
    }
}

/// Indexing panics on out-of-range access
impl<const N: usize> Index<usize> for VoxelBuffer<N> {
    type Output = u8;

    fn index(&self, index: usize) -> &u8 {
        &self.brightness[index]
    }
}

impl<const N: usize> IndexMut<usize> for VoxelBuffer<N> {
    fn index_mut(&mut self, index: usize) -> &mut u8 {
        &mut self.brightness[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_buffer_is_dark() {
        let buffer = VoxelBuffer::<8>::new();
        assert_eq!(buffer.len(), 8);
        assert_eq!(buffer.lit_count(), 0);
        assert!(buffer.iter().all(|b| b == 0));
    }

    #[test]
    fn test_set_and_get() {
        let mut buffer = VoxelBuffer::<8>::new();
        buffer.set(3, 9).unwrap();
        assert_eq!(buffer.get(3), Some(9));
        assert_eq!(buffer[3], 9);
        assert_eq!(buffer.lit_count(), 1);
    }

    #[test]
    fn test_set_out_of_range_is_rejected() {
        let mut buffer = VoxelBuffer::<8>::new();
        assert_eq!(buffer.set(8, 1), Err(VoxelError::OutOfRange { index: 8 }));
        assert_eq!(buffer.get(8), None);
        assert_eq!(buffer.lit_count(), 0);
    }

    #[test]
    fn test_no_clamping() {
        let mut buffer = VoxelBuffer::<4>::new();
        buffer.set(0, 200).unwrap();
        assert_eq!(buffer[0], 200);
    }

    #[test]
    fn test_clear() {
        let mut buffer = VoxelBuffer::<4>::new();
        buffer.fill(7);
        assert_eq!(buffer.lit_count(), 4);
        buffer.clear();
        assert_eq!(buffer.lit_count(), 0);
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_range_panics() {
        let mut buffer = VoxelBuffer::<4>::new();
        buffer[4] = 1;
    }
}

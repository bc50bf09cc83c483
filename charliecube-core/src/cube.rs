//! Cube state shared between the foreground and both interrupts

use crate::clock::FrameClock;
use crate::config::CubeConfig;
use crate::display::{DisplayList, FrameCompiler};
use crate::render::Renderer;

/// Everything the render pipeline shares across execution contexts
///
/// Meant to live in a `static` (e.g. a `StaticCell`). [`Cube::split`] hands
/// out one handle per context:
///
/// - foreground: [`FrameCompiler`]
/// - render interrupt: [`Renderer`]
/// - frame timer interrupt and foreground: [`FrameClock`]
pub struct Cube<const N: usize> {
    list: DisplayList<N>,
    clock: FrameClock,
}

impl<const N: usize> Default for Cube<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-context handles into a [`Cube`]
pub struct CubeHandles<'a, const N: usize> {
    pub compiler: FrameCompiler<'a, N>,
    pub renderer: Renderer<'a, N>,
    pub clock: &'a FrameClock,
}

impl<const N: usize> Cube<N> {
    /// Create a cube with an empty display list and a disarmed clock
    pub const fn new() -> Self {
        Self {
            list: DisplayList::new(),
            clock: FrameClock::new(),
        }
    }

    /// Split into per-context handles and arm the frame clock
    pub fn split(&mut self, config: &CubeConfig) -> CubeHandles<'_, N> {
        self.clock.arm(config.frame_ticks);
        CubeHandles {
            compiler: FrameCompiler::new(&self.list),
            renderer: Renderer::new(&self.list, config.pwm_period),
            clock: &self.clock,
        }
    }

    pub fn list(&self) -> &DisplayList<N> {
        &self.list
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::charliecube_table;
    use crate::traits::driver::fake::RecordingDriver;
    use crate::voxel::VoxelBuffer;
    use crate::VOXEL_COUNT;

    #[test]
    fn test_split_arms_clock() {
        let mut cube: Cube<VOXEL_COUNT> = Cube::new();
        let config = CubeConfig::default();
        let handles = cube.split(&config);
        assert_eq!(handles.clock.max_ticks(), config.frame_ticks);
        assert_eq!(handles.renderer.pwm_period(), config.pwm_period.get());
    }

    #[test]
    fn test_reference_cube_pipeline() {
        let mut cube: Cube<VOXEL_COUNT> = Cube::new();
        let config = CubeConfig::default();
        let CubeHandles {
            mut compiler,
            mut renderer,
            clock,
        } = cube.split(&config);
        let table = charliecube_table();
        let mut driver = RecordingDriver::default();

        let mut buffer = VoxelBuffer::<VOXEL_COUNT>::new();
        buffer.set(0, 15).unwrap();
        buffer.set(191, 15).unwrap();
        let report = compiler.compile(&buffer, &table);
        assert_eq!(report.len, 2);

        let report = renderer.tick(&mut driver);
        assert_eq!(report.lit, table.pairs().first().copied());
        let report = renderer.tick(&mut driver);
        assert_eq!(report.lit, table.pairs().last().copied());
        assert!(report.lap_completed);

        for _ in 0..config.frame_ticks {
            clock.tick();
        }
        assert!(clock.take_elapsed());
    }
}

//! Start-up lamp test
//!
//! Lights every voxel on its own for one frame, in index order, so a
//! wiring fault shows up as a dark or misplaced LED.

use defmt::*;

use charliecube_core::{FrameClock, FrameCompiler, PinMap, VoxelBuffer, MAX_BRIGHTNESS};

use crate::tasks::wait_frame;

/// Sweep a single lit voxel across the whole cube
///
/// Leaves the buffer cleared and an empty list published.
pub async fn lamp_test<M: PinMap + ?Sized, const N: usize>(
    compiler: &mut FrameCompiler<'_, N>,
    buffer: &mut VoxelBuffer<N>,
    map: &M,
    clock: &FrameClock,
) {
    info!("Lamp test: {} voxels", N);

    let mut dark = 0usize;
    for index in 0..N {
        buffer.clear();
        if let Err(e) = buffer.set(index, MAX_BRIGHTNESS) {
            warn!("Lamp test skipped voxel: {}", e);
            continue;
        }

        let report = compiler.compile(buffer, map);
        if report.len == 0 {
            dark += 1;
        }
        wait_frame(clock).await;
    }

    buffer.clear();
    compiler.compile(buffer, map);

    if dark > 0 {
        warn!("Lamp test done, {} voxels unmapped", dark);
    } else {
        info!("Lamp test done");
    }
}

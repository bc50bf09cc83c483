//! Foreground task
//!
//! Owns the voxel buffer and the frame compiler. Runs the lamp test once,
//! then recompiles the buffer every time the frame clock elapses.

use defmt::*;

use charliecube_core::config::CubeConfig;
use charliecube_core::mapping::charliecube_table;
use charliecube_core::{FrameClock, FrameCompiler, VoxelBuffer, MAX_BRIGHTNESS, VOXEL_COUNT};

use super::wait_frame;
use crate::config::LAMP_TEST_MS;
use crate::selftest::lamp_test;

/// Frames between progress logs
const LOG_INTERVAL_FRAMES: u32 = 100;

/// Foreground task - writes the buffer and paces compiles by frame
#[embassy_executor::task]
pub async fn foreground_task(
    mut compiler: FrameCompiler<'static, VOXEL_COUNT>,
    clock: &'static FrameClock,
    config: CubeConfig,
) {
    info!("Foreground task started");

    let table = charliecube_table();
    let mut buffer = VoxelBuffer::<VOXEL_COUNT>::new();

    clock.arm(config.frame_ticks_for_ms(LAMP_TEST_MS));
    lamp_test(&mut compiler, &mut buffer, &table, clock).await;

    clock.arm(config.frame_ticks);
    buffer.fill(MAX_BRIGHTNESS);

    let mut frames: u32 = 0;
    loop {
        let report = compiler.compile(&buffer, &table);
        if report.unmapped > 0 {
            warn!("{} lit voxels have no pin pair", report.unmapped);
        }

        wait_frame(clock).await;

        frames = frames.wrapping_add(1);
        if frames % LOG_INTERVAL_FRAMES == 0 {
            debug!("{} frames shown ({} nodes)", frames, report.len);
        }
    }
}

//! Frame tick task
//!
//! Counts frame timer ticks on the frame clock and wakes the foreground
//! when a frame has elapsed.

use defmt::*;
use embassy_time::{Duration, Ticker};

use charliecube_core::FrameClock;

use crate::channels::FRAME_ELAPSED;

/// Frame tick task - feeds the frame clock at the frame timer rate
#[embassy_executor::task]
pub async fn frame_tick_task(clock: &'static FrameClock, frame_hz: u32) {
    info!("Frame tick task started: {} Hz", frame_hz);

    let mut ticker = Ticker::every(Duration::from_hz(frame_hz as u64));

    loop {
        ticker.next().await;

        if clock.tick() {
            trace!("Frame elapsed");
            FRAME_ELAPSED.signal(());
        }
    }
}

/// Wait until the frame clock elapses, then clear its flag
pub async fn wait_frame(clock: &FrameClock) {
    loop {
        if clock.take_elapsed() {
            return;
        }
        FRAME_ELAPSED.wait().await;
    }
}

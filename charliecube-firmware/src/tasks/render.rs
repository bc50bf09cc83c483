//! Render task
//!
//! Runs on the highest-priority interrupt executor and advances the
//! display list by one LED per tick.

use defmt::*;
use embassy_time::{Duration, Ticker};

use charliecube_core::{Renderer, VOXEL_COUNT};
use charliecube_drivers::port::PortLedDriver;
use charliecube_hal_rp2040::FlexPort;

use crate::config::CUBE_PINS;

/// LED driver of the cube lines
pub type CubeDriver = PortLedDriver<FlexPort, CUBE_PINS>;

/// Render task - one display list step per tick
#[embassy_executor::task]
pub async fn render_task(
    mut renderer: Renderer<'static, VOXEL_COUNT>,
    mut driver: CubeDriver,
    render_hz: u32,
) {
    info!(
        "Render task started: {} Hz, PWM period {}",
        render_hz,
        renderer.pwm_period()
    );

    let mut ticker = Ticker::every(Duration::from_hz(render_hz as u64));

    loop {
        ticker.next().await;
        renderer.tick(&mut driver);
    }
}

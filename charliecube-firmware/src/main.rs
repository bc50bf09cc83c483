//! Charliecube - Charlieplexed LED Cube Firmware
//!
//! Main firmware binary for RP2040-based LED cube controllers.
//!
//! Three execution contexts share one `Cube`:
//!
//! - render task on a high-priority interrupt executor (one LED per tick)
//! - frame tick task on a medium-priority interrupt executor
//! - foreground task on the thread-mode executor (buffer and compiler)

#![no_std]
#![no_main]

use cortex_m_rt::entry;
use defmt::*;
use embassy_executor::{Executor, InterruptExecutor};
use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use charliecube_core::{Cube, CubeHandles, VOXEL_COUNT};
use charliecube_drivers::port::PortLedDriver;
use charliecube_hal_rp2040::FlexPort;

#[macro_use]
mod config;
mod channels;
mod selftest;
mod tasks;

static CUBE: StaticCell<Cube<VOXEL_COUNT>> = StaticCell::new();

static EXECUTOR_RENDER: InterruptExecutor = InterruptExecutor::new();
static EXECUTOR_FRAME: InterruptExecutor = InterruptExecutor::new();
static EXECUTOR_MAIN: StaticCell<Executor> = StaticCell::new();

#[interrupt]
unsafe fn SWI_IRQ_1() {
    EXECUTOR_RENDER.on_interrupt()
}

#[interrupt]
unsafe fn SWI_IRQ_0() {
    EXECUTOR_FRAME.on_interrupt()
}

/// Main entry point
#[entry]
fn main() -> ! {
    info!("Charliecube firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Attach the cube lines to their port group bits, all released
    let lines = take_cube_lines!(p);
    let mut port = FlexPort::new();
    for ((group, bit), line) in config::CUBE_LINES.into_iter().zip(lines) {
        unwrap!(port.attach(group, bit, line));
    }
    let driver = PortLedDriver::new(port, config::CUBE_PORT_BITS);
    info!("{} cube lines attached", config::CUBE_PINS);

    let cube_config = config::CUBE_CONFIG;
    info!(
        "Render {} Hz, frame {} Hz, {} ticks per frame, worst-case lap rate {} Hz",
        cube_config.timing.render_hz,
        cube_config.timing.frame_hz,
        cube_config.frame_ticks,
        cube_config.timing.lap_rate_hz(VOXEL_COUNT)
    );

    let cube = CUBE.init(Cube::new());
    let CubeHandles {
        compiler,
        renderer,
        clock,
    } = cube.split(&cube_config);

    // Render preempts the frame tick, which preempts the foreground
    interrupt::SWI_IRQ_1.set_priority(Priority::P1);
    let spawner = EXECUTOR_RENDER.start(interrupt::SWI_IRQ_1);
    unwrap!(spawner.spawn(tasks::render_task(
        renderer,
        driver,
        cube_config.timing.render_hz
    )));

    interrupt::SWI_IRQ_0.set_priority(Priority::P2);
    let spawner = EXECUTOR_FRAME.start(interrupt::SWI_IRQ_0);
    unwrap!(spawner.spawn(tasks::frame_tick_task(clock, cube_config.timing.frame_hz)));

    info!("Interrupt tasks spawned");

    let executor = EXECUTOR_MAIN.init(Executor::new());
    executor.run(|spawner| {
        unwrap!(spawner.spawn(tasks::foreground_task(compiler, clock, cube_config)));
    })
}

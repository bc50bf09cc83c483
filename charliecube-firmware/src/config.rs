//! Deployment configuration
//!
//! Timing and pin assignment come from `cube.toml`. The build script
//! validates the file and generates the constants included below.

use charliecube_core::config::{CubeConfig, PwmPeriod, TimingConfig};
use charliecube_core::mapping::CHARLIECUBE_PINS;
use charliecube_core::VOXEL_COUNT;
use charliecube_drivers::port::PinBits;
use charliecube_hal_rp2040::PortGroup;

include!(concat!(env!("OUT_DIR"), "/cube_config.rs"));

const _: () = assert!(
    CUBE_PINS == CHARLIECUBE_PINS as usize,
    "cube.toml must assign every line of the pin map"
);

/// Interrupt rates
pub const TIMING: TimingConfig = {
    let timing = TimingConfig::new(RENDER_HZ, FRAME_HZ);
    if timing.validate(VOXEL_COUNT).is_err() {
        panic!("cube.toml timing breaks the flicker budget");
    }
    timing
};

/// Laps per PWM cycle
pub const PWM: PwmPeriod = match PwmPeriod::new(PWM_PERIOD) {
    Ok(period) => period,
    Err(_) => panic!("cube.toml pwm_period out of range"),
};

/// Render pipeline configuration for normal frames
pub const CUBE_CONFIG: CubeConfig = {
    let base = CubeConfig::new(TIMING, PWM, 0);
    CubeConfig::new(TIMING, PWM, base.frame_ticks_for_ms(FRAME_MS))
};

/// Register bits of every logical pin
pub const CUBE_PORT_BITS: [PinBits; CUBE_PINS] = port_bits(&CUBE_LINES);

const fn port_bits(lines: &[(PortGroup, u8); CUBE_PINS]) -> [PinBits; CUBE_PINS] {
    let mut bits = [PinBits::NONE; CUBE_PINS];
    let mut pin = 0;
    while pin < CUBE_PINS {
        let (group, bit) = lines[pin];
        bits[pin] = PinBits::on(group, bit);
        pin += 1;
    }
    bits
}

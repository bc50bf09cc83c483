//! Configuration types
//!
//! Deployment parameters for the render pipeline. The firmware builds these
//! from `cube.toml` at compile time; host tests use the defaults.

pub mod types;

pub use types::{
    overflow_rate_hz, ConfigError, CubeConfig, PwmPeriod, TimingConfig, DEFAULT_FRAME_TICKS,
    DEFAULT_PWM_PERIOD, MAX_PWM_PERIOD, MIN_LAP_RATE_HZ,
};

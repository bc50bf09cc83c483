//! Configuration type definitions

use core::fmt;

use crate::MAX_BRIGHTNESS;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Laps per PWM cycle in the reference deployment
pub const DEFAULT_PWM_PERIOD: u8 = 8;

/// Longest PWM cycle in which a full-brightness node is lit on every lap
pub const MAX_PWM_PERIOD: u8 = MAX_BRIGHTNESS;

/// Frame timer ticks per animation frame (~100 ms at 244 Hz)
pub const DEFAULT_FRAME_TICKS: u32 = 24;

/// Slowest acceptable lap rate with every voxel lit
///
/// Below this the eye sees the scan instead of a steady cube.
pub const MIN_LAP_RATE_HZ: u32 = 60;

/// Reference MCU clock used by the default timing
const REFERENCE_CLOCK_HZ: u32 = 16_000_000;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// PWM period must be 1..=15
    PwmPeriodOutOfRange { period: u8 },
    /// A timer rate or prescaler is zero
    ZeroRate,
    /// Frame timer must tick slower than the render interrupt
    FrameRateNotBelowRender,
    /// A full lap takes longer than the flicker budget allows
    LapRateTooLow { lap_rate_hz: u32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::PwmPeriodOutOfRange { period } => {
                write!(f, "pwm period {} outside 1..={}", period, MAX_PWM_PERIOD)
            }
            ConfigError::ZeroRate => write!(f, "timer rate is zero"),
            ConfigError::FrameRateNotBelowRender => {
                write!(f, "frame timer must be slower than render interrupt")
            }
            ConfigError::LapRateTooLow { lap_rate_hz } => write!(
                f,
                "lap rate {} Hz below {} Hz flicker budget",
                lap_rate_hz, MIN_LAP_RATE_HZ
            ),
        }
    }
}

/// Overflow rate of a free-running timer
///
/// `clock_hz / (prescaler * counter_span)`, e.g. a 16 MHz clock with an
/// 8-bit counter and no prescaling overflows at 62 500 Hz.
pub const fn overflow_rate_hz(clock_hz: u32, prescaler: u32, counter_span: u32) -> u32 {
    let divisor = prescaler.saturating_mul(counter_span);
    if divisor == 0 {
        0
    } else {
        clock_hz / divisor
    }
}

/// Number of laps over which brightness is expressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct PwmPeriod(u8);

impl PwmPeriod {
    pub const fn new(period: u8) -> Result<Self, ConfigError> {
        if period == 0 || period > MAX_PWM_PERIOD {
            Err(ConfigError::PwmPeriodOutOfRange { period })
        } else {
            Ok(Self(period))
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }
}

impl Default for PwmPeriod {
    fn default() -> Self {
        Self(DEFAULT_PWM_PERIOD)
    }
}

impl TryFrom<u8> for PwmPeriod {
    type Error = ConfigError;

    fn try_from(period: u8) -> Result<Self, Self::Error> {
        Self::new(period)
    }
}

impl From<PwmPeriod> for u8 {
    fn from(period: PwmPeriod) -> Self {
        period.0
    }
}

/// Interrupt rates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimingConfig {
    /// Render interrupt rate (one LED step per tick)
    pub render_hz: u32,
    /// Frame timer rate
    pub frame_hz: u32,
}

impl Default for TimingConfig {
    /// 16 MHz clock, 8-bit counters: render at prescaler 1, frame timer at 256
    fn default() -> Self {
        Self {
            render_hz: overflow_rate_hz(REFERENCE_CLOCK_HZ, 1, 256),
            frame_hz: overflow_rate_hz(REFERENCE_CLOCK_HZ, 256, 256),
        }
    }
}

impl TimingConfig {
    pub const fn new(render_hz: u32, frame_hz: u32) -> Self {
        Self {
            render_hz,
            frame_hz,
        }
    }

    /// Derive both rates from timer prescalers
    pub const fn from_prescalers(
        clock_hz: u32,
        counter_span: u32,
        render_prescaler: u32,
        frame_prescaler: u32,
    ) -> Result<Self, ConfigError> {
        let render_hz = overflow_rate_hz(clock_hz, render_prescaler, counter_span);
        let frame_hz = overflow_rate_hz(clock_hz, frame_prescaler, counter_span);
        if render_hz == 0 || frame_hz == 0 {
            return Err(ConfigError::ZeroRate);
        }
        Ok(Self::new(render_hz, frame_hz))
    }

    /// Lap rate when `lit` voxels are in the display list
    pub const fn lap_rate_hz(&self, lit: usize) -> u32 {
        if lit == 0 {
            return self.render_hz;
        }
        self.render_hz / lit as u32
    }

    /// Check the rates against the flicker budget for a cube of `voxels`
    pub const fn validate(&self, voxels: usize) -> Result<(), ConfigError> {
        if self.render_hz == 0 || self.frame_hz == 0 {
            return Err(ConfigError::ZeroRate);
        }
        if self.frame_hz >= self.render_hz {
            return Err(ConfigError::FrameRateNotBelowRender);
        }
        let lap_rate_hz = self.lap_rate_hz(voxels);
        if lap_rate_hz < MIN_LAP_RATE_HZ {
            return Err(ConfigError::LapRateTooLow { lap_rate_hz });
        }
        Ok(())
    }
}

/// Complete render pipeline configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CubeConfig {
    pub timing: TimingConfig,
    pub pwm_period: PwmPeriod,
    /// Frame timer ticks per animation frame (0 = disarmed)
    pub frame_ticks: u32,
}

impl Default for CubeConfig {
    fn default() -> Self {
        Self {
            timing: TimingConfig::default(),
            pwm_period: PwmPeriod::default(),
            frame_ticks: DEFAULT_FRAME_TICKS,
        }
    }
}

impl CubeConfig {
    pub const fn new(timing: TimingConfig, pwm_period: PwmPeriod, frame_ticks: u32) -> Self {
        Self {
            timing,
            pwm_period,
            frame_ticks,
        }
    }

    /// Frame timer ticks covering `ms` milliseconds (at least one)
    pub const fn frame_ticks_for_ms(&self, ms: u32) -> u32 {
        let ticks = (ms as u64 * self.timing.frame_hz as u64) / 1000;
        if ticks == 0 {
            1
        } else if ticks > u32::MAX as u64 {
            u32::MAX
        } else {
            ticks as u32
        }
    }

    /// Worst-case time for one PWM cycle with every voxel lit, in microseconds
    pub const fn pwm_cycle_us(&self, voxels: usize) -> u64 {
        if self.timing.render_hz == 0 {
            return u64::MAX;
        }
        voxels as u64 * self.pwm_period.get() as u64 * 1_000_000 / self.timing.render_hz as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::VOXEL_COUNT;

    #[test]
    fn test_reference_rates() {
        let timing = TimingConfig::default();
        assert_eq!(timing.render_hz, 62_500);
        assert_eq!(timing.frame_hz, 244);
        assert_eq!(timing.lap_rate_hz(VOXEL_COUNT), 325);
        assert_eq!(timing.validate(VOXEL_COUNT), Ok(()));
    }

    #[test]
    fn test_from_prescalers() {
        let timing = TimingConfig::from_prescalers(16_000_000, 256, 8, 1024).unwrap();
        assert_eq!(timing.render_hz, 7_812);
        assert_eq!(timing.frame_hz, 61);
        assert_eq!(
            TimingConfig::from_prescalers(16_000_000, 256, 0, 1024),
            Err(ConfigError::ZeroRate)
        );
    }

    #[test]
    fn test_lap_budget() {
        // 7.8 kHz over 192 voxels is only 40 laps per second
        let timing = TimingConfig::new(7_812, 61);
        assert_eq!(
            timing.validate(VOXEL_COUNT),
            Err(ConfigError::LapRateTooLow { lap_rate_hz: 40 })
        );
        assert_eq!(timing.validate(64), Ok(()));
    }

    #[test]
    fn test_frame_must_be_slower() {
        let timing = TimingConfig::new(1_000, 1_000);
        assert_eq!(
            timing.validate(1),
            Err(ConfigError::FrameRateNotBelowRender)
        );
    }

    #[test]
    fn test_pwm_period_range() {
        assert!(PwmPeriod::new(0).is_err());
        assert_eq!(PwmPeriod::new(1).map(PwmPeriod::get), Ok(1));
        assert_eq!(PwmPeriod::new(15).map(PwmPeriod::get), Ok(15));
        assert_eq!(
            PwmPeriod::new(16),
            Err(ConfigError::PwmPeriodOutOfRange { period: 16 })
        );
        assert_eq!(PwmPeriod::default().get(), DEFAULT_PWM_PERIOD);
    }

    #[test]
    fn test_frame_ticks_for_ms() {
        let config = CubeConfig::default();
        assert_eq!(config.frame_ticks_for_ms(1000), 244);
        assert_eq!(config.frame_ticks_for_ms(100), 24);
        assert_eq!(config.frame_ticks_for_ms(1), 1);
    }

    #[test]
    fn test_pwm_cycle_time() {
        let config = CubeConfig::default();
        // 192 steps × 8 laps at 62.5 kHz
        assert_eq!(config.pwm_cycle_us(VOXEL_COUNT), 24_576);
    }
}

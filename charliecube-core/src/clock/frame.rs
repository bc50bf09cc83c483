//! Frame clock implementation

use portable_atomic::{AtomicBool, AtomicU32, Ordering};

/// Paces animation frames from the frame timer interrupt
///
/// The timer calls [`FrameClock::tick`]; after `max_ticks` calls the clock
/// raises its elapsed flag and starts counting again from zero. The flag
/// stays raised until the foreground takes it, so at most one pending
/// frame is ever reported.
#[derive(Debug)]
pub struct FrameClock {
    ticks: AtomicU32,
    max_ticks: AtomicU32,
    elapsed: AtomicBool,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    /// Create a disarmed clock
    pub const fn new() -> Self {
        Self {
            ticks: AtomicU32::new(0),
            max_ticks: AtomicU32::new(0),
            elapsed: AtomicBool::new(false),
        }
    }

    /// Restart counting with a new frame length
    ///
    /// Any pending elapsed flag is dropped. `max_ticks == 0` disarms the
    /// clock.
    pub fn arm(&self, max_ticks: u32) {
        critical_section::with(|_| {
            self.ticks.store(0, Ordering::Relaxed);
            self.max_ticks.store(max_ticks, Ordering::Relaxed);
            self.elapsed.store(false, Ordering::Release);
        });
    }

    /// Stop raising the elapsed flag
    pub fn disarm(&self) {
        self.arm(0);
    }

    /// Count one frame timer interrupt
    ///
    /// Returns true when this tick completed a frame.
    pub fn tick(&self) -> bool {
        critical_section::with(|_| {
            let max_ticks = self.max_ticks.load(Ordering::Relaxed);
            if max_ticks == 0 {
                return false;
            }

            let ticks = self.ticks.load(Ordering::Relaxed) + 1;
            if ticks >= max_ticks {
                self.ticks.store(0, Ordering::Relaxed);
                self.elapsed.store(true, Ordering::Release);
                true
            } else {
                self.ticks.store(ticks, Ordering::Relaxed);
                false
            }
        })
    }

    /// Read and clear the elapsed flag
    pub fn take_elapsed(&self) -> bool {
        self.elapsed.swap(false, Ordering::AcqRel)
    }

    /// Peek at the elapsed flag without clearing it
    pub fn is_elapsed(&self) -> bool {
        self.elapsed.load(Ordering::Acquire)
    }

    /// Ticks counted in the current frame
    pub fn ticks(&self) -> u32 {
        self.ticks.load(Ordering::Relaxed)
    }

    /// Configured frame length (0 when disarmed)
    pub fn max_ticks(&self) -> u32 {
        self.max_ticks.load(Ordering::Relaxed)
    }

    pub fn is_armed(&self) -> bool {
        self.max_ticks() != 0
    }
}

//! LED driver trait for the charlieplexed matrix

use crate::mapping::PinPair;

/// Trait for lighting one LED of the matrix at a time
///
/// Implementations sit in the hot path of the render interrupt: they must
/// not block, allocate, or log.
pub trait LedDriver {
    /// Stop driving every line (all pins high impedance)
    fn release_all(&mut self);

    /// Drive the anode high and the cathode low
    ///
    /// Called only after `release_all`, so implementations may assume every
    /// other line is already floating.
    fn light(&mut self, pair: PinPair);
}

impl<T: LedDriver + ?Sized> LedDriver for &mut T {
    fn release_all(&mut self) {
        (**self).release_all();
    }

    fn light(&mut self, pair: PinPair) {
        (**self).light(pair);
    }
}

/// Recording driver for unit tests
#[cfg(test)]
pub(crate) mod fake {
    use super::*;

    /// Remembers the currently lit pair and how often pins were released
    #[derive(Debug, Default)]
    pub(crate) struct RecordingDriver {
        pub(crate) lit: Option<PinPair>,
        pub(crate) releases: usize,
        pub(crate) lights: usize,
    }

    impl LedDriver for RecordingDriver {
        fn release_all(&mut self) {
            self.lit = None;
            self.releases += 1;
        }

        fn light(&mut self, pair: PinPair) {
            assert!(self.lit.is_none(), "light without release");
            self.lit = Some(pair);
            self.lights += 1;
        }
    }
}

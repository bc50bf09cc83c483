//! Render step
//!
//! Called from the high-rate render interrupt. Each call shows at most one
//! LED, so with `L` nodes in the list every LED is on for `1/L` of the time
//! at best. Brightness comes from software PWM on top of that: the PWM
//! counter advances once per lap and a node is only lit while its level is
//! above the counter.

use crate::config::PwmPeriod;
use crate::display::{DisplayList, FIRST_SLOT};
use crate::mapping::PinPair;
use crate::traits::LedDriver;

/// What one render step did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickReport {
    /// Pair driven until the next step, if any
    pub lit: Option<PinPair>,
    /// The cursor wrapped back to the head of the list
    pub lap_completed: bool,
}

/// Interrupt half of a [`DisplayList`]
///
/// Owns the PWM counter. Nothing else writes it, so it is a plain field.
pub struct Renderer<'a, const N: usize> {
    list: &'a DisplayList<N>,
    pwm: u8,
    period: u8,
}

impl<'a, const N: usize> Renderer<'a, N> {
    pub(crate) fn new(list: &'a DisplayList<N>, period: PwmPeriod) -> Self {
        Self {
            list,
            pwm: 0,
            period: period.get(),
        }
    }

    /// Current PWM counter, in `[0, period)`
    pub fn pwm_phase(&self) -> u8 {
        self.pwm
    }

    /// Laps per PWM cycle
    pub fn pwm_period(&self) -> u8 {
        self.period
    }

    /// Advance the display by one step
    ///
    /// Releases every pin, lights the node under the cursor if its level is
    /// above the PWM counter, and moves to the successor. An empty list
    /// leaves all pins released and the cursor on the sentinel.
    pub fn tick<D: LedDriver + ?Sized>(&mut self, driver: &mut D) -> TickReport {
        let cursor = self.list.cursor();
        let node = self.list.bank(cursor.bank).load(cursor.slot);

        driver.release_all();

        if cursor.is_idle() {
            return TickReport {
                lit: None,
                lap_completed: false,
            };
        }

        let lit = if node.level > self.pwm {
            driver.light(node.pair);
            Some(node.pair)
        } else {
            None
        };

        // A failed advance means a new list was published mid-step; its
        // head is where the next step starts.
        let lap_completed = self.list.advance(cursor, node.next) && node.next == FIRST_SLOT;
        if lap_completed {
            self.pwm = (self.pwm + 1) % self.period;
        }

        TickReport { lit, lap_completed }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::FrameCompiler;
    use crate::traits::driver::fake::RecordingDriver;
    use crate::voxel::VoxelBuffer;

    const PAIRS: [PinPair; 3] = [PinPair::new(0, 1), PinPair::new(1, 2), PinPair::new(2, 0)];

    fn period(laps: u8) -> PwmPeriod {
        PwmPeriod::new(laps).unwrap()
    }

    #[test]
    fn test_empty_list_drives_nothing() {
        let list: DisplayList<3> = DisplayList::new();
        let mut renderer = Renderer::new(&list, period(8));
        let mut driver = RecordingDriver::default();

        for _ in 0..10 {
            let report = renderer.tick(&mut driver);
            assert_eq!(report.lit, None);
            assert!(!report.lap_completed);
        }
        assert_eq!(driver.lights, 0);
        assert_eq!(driver.releases, 10);
        assert!(list.cursor().is_idle());
        assert_eq!(renderer.pwm_phase(), 0);
    }

    #[test]
    fn test_lap_advances_pwm_once() {
        let list: DisplayList<3> = DisplayList::new();
        let mut compiler = FrameCompiler::new(&list);
        let mut renderer = Renderer::new(&list, period(4));
        let mut driver = RecordingDriver::default();
        let mut buffer = VoxelBuffer::<3>::new();
        buffer.set(0, 2).unwrap();
        buffer.set(2, 2).unwrap();
        compiler.compile(&buffer, &PAIRS);

        let head = list.cursor();
        assert!(!renderer.tick(&mut driver).lap_completed);
        assert_eq!(renderer.pwm_phase(), 0);
        assert!(renderer.tick(&mut driver).lap_completed);
        assert_eq!(renderer.pwm_phase(), 1);
        assert_eq!(list.cursor(), head);
    }

    #[test]
    fn test_pwm_wraps_at_period() {
        let list: DisplayList<3> = DisplayList::new();
        let mut compiler = FrameCompiler::new(&list);
        let mut renderer = Renderer::new(&list, period(3));
        let mut driver = RecordingDriver::default();
        let mut buffer = VoxelBuffer::<3>::new();
        buffer.set(1, 1).unwrap();
        compiler.compile(&buffer, &PAIRS);

        // Single node: every step is a lap
        let phases: [u8; 4] = core::array::from_fn(|_| {
            renderer.tick(&mut driver);
            renderer.pwm_phase()
        });
        assert_eq!(phases, [1, 2, 0, 1]);
    }

    #[test]
    fn test_level_is_duty_in_laps() {
        let list: DisplayList<3> = DisplayList::new();
        let mut compiler = FrameCompiler::new(&list);
        let mut renderer = Renderer::new(&list, period(8));
        let mut driver = RecordingDriver::default();
        let mut buffer = VoxelBuffer::<3>::new();
        buffer.set(0, 3).unwrap();
        buffer.set(1, 15).unwrap();
        compiler.compile(&buffer, &PAIRS);

        let mut lit = [0usize; 2];
        for _ in 0..8 * 2 {
            if let Some(pair) = renderer.tick(&mut driver).lit {
                let index = PAIRS.iter().position(|p| *p == pair).unwrap();
                lit[index] += 1;
            }
        }
        assert_eq!(lit, [3, 8]);
    }

    #[test]
    fn test_publish_restarts_at_head() {
        let list: DisplayList<3> = DisplayList::new();
        let mut compiler = FrameCompiler::new(&list);
        let mut renderer = Renderer::new(&list, period(8));
        let mut driver = RecordingDriver::default();
        let mut buffer = VoxelBuffer::<3>::new();
        buffer.fill(15);
        compiler.compile(&buffer, &PAIRS);

        renderer.tick(&mut driver);
        assert_eq!(driver.lit, Some(PAIRS[0]));

        // Truncates the lap in progress without counting it
        buffer.set(0, 0).unwrap();
        compiler.compile(&buffer, &PAIRS);
        let report = renderer.tick(&mut driver);
        assert_eq!(report.lit, Some(PAIRS[1]));
        assert!(!report.lap_completed);
        assert_eq!(renderer.pwm_phase(), 0);
    }
}

//! Stat counter ramp.
//!
//! Counts up from zero towards a target in fixed increments of
//! `ceil(target / steps)`, then settles exactly on the target.

use crate::format::group_thousands;

/// Default number of increments to reach the target.
pub const DEFAULT_STEPS: u32 = 60;

/// Default delay between increments, in milliseconds.
pub const DEFAULT_INTERVAL_MS: u64 = 30;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterRamp {
    target: f64,
    step: f64,
    value: f64,
    done: bool,
}

impl CounterRamp {
    pub fn new(target: f64, steps: u32) -> Self {
        let step = if steps == 0 {
            target
        } else {
            (target / f64::from(steps)).ceil()
        };
        Self {
            target,
            step,
            value: 0.0,
            done: false,
        }
    }

    /// Advance one increment and return the value to display.
    ///
    /// Once the target is reached every further tick returns it unchanged.
    pub fn tick(&mut self) -> f64 {
        if self.done {
            return self.value;
        }
        self.value += self.step;
        if !(self.value < self.target) {
            self.value = self.target;
            self.done = true;
        }
        self.value
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Current value with grouping and a unit suffix, e.g. `"1,400M"`.
    pub fn display(&self, suffix: &str) -> String {
        format!("{}{}", group_thousands(self.value), suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_is_rounded_up() {
        assert_eq!(CounterRamp::new(1400.0, 60).step(), 24.0);
        assert_eq!(CounterRamp::new(99.9, 60).step(), 2.0);
        assert_eq!(CounterRamp::new(0.2, 60).step(), 1.0);
    }

    #[test]
    fn ramps_to_1400_then_idles() {
        let mut ramp = CounterRamp::new(1400.0, 60);
        let mut previous = ramp.value();
        let mut ticks = 0;
        while !ramp.is_done() {
            let value = ramp.tick();
            assert!(value > previous);
            previous = value;
            ticks += 1;
        }
        assert_eq!(ramp.value(), 1400.0);
        assert_eq!(ticks, 59);

        assert_eq!(ramp.tick(), 1400.0);
        assert_eq!(ramp.tick(), 1400.0);
    }

    #[test]
    fn small_targets_land_on_first_tick() {
        let mut ramp = CounterRamp::new(0.2, 60);
        assert_eq!(ramp.tick(), 0.2);
        assert!(ramp.is_done());
    }

    #[test]
    fn fractional_target_is_exact() {
        let mut ramp = CounterRamp::new(99.9, 60);
        while !ramp.is_done() {
            ramp.tick();
        }
        assert_eq!(ramp.display("%"), "99.9%");
    }

    #[test]
    fn zero_steps_jumps_to_target() {
        let mut ramp = CounterRamp::new(50.0, 0);
        assert_eq!(ramp.tick(), 50.0);
        assert!(ramp.is_done());
    }

    #[test]
    fn display_groups_thousands() {
        let mut ramp = CounterRamp::new(1400.0, 60);
        while !ramp.is_done() {
            ramp.tick();
        }
        assert_eq!(ramp.display("M"), "1,400M");
    }
}

//! Fixed-timestep accumulator.
//!
//! The driving clock hands over whatever time elapsed since the last frame;
//! the scheduler banks it and pays it out in whole `update_interval` slices,
//! running one simulation step per slice.

/// Substituted when a non-positive update rate is requested.
///
/// Note this differs from the default rate of 20 in [`crate::config::Config`].
pub const FALLBACK_UPDATES_PER_SECOND: f64 = 10.0;

#[derive(Debug, Clone, PartialEq)]
pub struct FixedStepScheduler {
    updates_per_second: f64,
    update_interval: f64,
    accumulator: f64,
    max_steps_per_tick: Option<u32>,
}

impl FixedStepScheduler {
    pub fn new(updates_per_second: f64) -> Self {
        let updates_per_second = if updates_per_second.is_finite() && updates_per_second > 0.0 {
            updates_per_second
        } else {
            log::warn!(
                "updates per second must be positive, got {updates_per_second}; using {FALLBACK_UPDATES_PER_SECOND}"
            );
            FALLBACK_UPDATES_PER_SECOND
        };
        FixedStepScheduler {
            updates_per_second,
            update_interval: 1.0 / updates_per_second,
            accumulator: 0.0,
            max_steps_per_tick: None,
        }
    }

    /// Cap the number of catch-up steps a single [`tick`](Self::tick) may run.
    ///
    /// Once the cap is hit, whole intervals still owed are dropped and only the
    /// fractional remainder is carried into the next tick.
    pub fn with_max_steps_per_tick(mut self, max_steps: u32) -> Self {
        self.max_steps_per_tick = Some(max_steps);
        self
    }

    pub fn updates_per_second(&self) -> f64 {
        self.updates_per_second
    }

    /// Seconds between simulation steps.
    pub fn update_interval(&self) -> f64 {
        self.update_interval
    }

    /// Time banked but not yet spent on a step.
    pub fn accumulator(&self) -> f64 {
        self.accumulator
    }

    pub fn max_steps_per_tick(&self) -> Option<u32> {
        self.max_steps_per_tick
    }

    /// Bank `delta_time` seconds and call `step` once per whole interval owed.
    ///
    /// Returns how many steps ran. Negative or non-finite deltas add nothing.
    pub fn tick<F: FnMut()>(&mut self, delta_time: f64, mut step: F) -> u32 {
        if delta_time.is_finite() && delta_time > 0.0 {
            self.accumulator += delta_time;
        }

        let mut steps = 0;
        while self.accumulator >= self.update_interval {
            if self.max_steps_per_tick.is_some_and(|max| steps >= max) {
                let owed = (self.accumulator / self.update_interval).floor();
                log::warn!("falling behind: dropping {owed} simulation steps after {steps} this frame");
                self.accumulator %= self.update_interval;
                break;
            }
            step();
            self.accumulator -= self.update_interval;
            steps += 1;
        }
        steps
    }

    /// Forget any banked time.
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn drains_whole_intervals_and_keeps_the_residue() {
        let mut scheduler = FixedStepScheduler::new(10.0);
        let mut calls = 0;
        let steps = scheduler.tick(0.35, || calls += 1);
        assert_eq!(steps, 3);
        assert_eq!(calls, 3);
        assert!((scheduler.accumulator() - 0.05).abs() < EPSILON);
    }

    #[test]
    fn short_frames_accumulate_until_an_interval_is_owed() {
        let mut scheduler = FixedStepScheduler::new(20.0);
        assert_eq!(scheduler.tick(0.02, || {}), 0);
        assert_eq!(scheduler.tick(0.02, || {}), 0);
        assert_eq!(scheduler.tick(0.02, || {}), 1);
        assert!((scheduler.accumulator() - 0.01).abs() < EPSILON);
    }

    #[test]
    fn catch_up_is_unbounded_by_default() {
        let mut scheduler = FixedStepScheduler::new(4.0);
        assert_eq!(scheduler.max_steps_per_tick(), None);
        assert_eq!(scheduler.tick(10.0, || {}), 40);
        assert_eq!(scheduler.accumulator(), 0.0);
    }

    #[test]
    fn capped_catch_up_discards_whole_intervals() {
        let mut scheduler = FixedStepScheduler::new(10.0).with_max_steps_per_tick(4);
        assert_eq!(scheduler.tick(1.25, || {}), 4);
        assert!(scheduler.accumulator() < scheduler.update_interval());
        assert!((scheduler.accumulator() - 0.05).abs() < 1e-6);
    }

    #[test]
    fn non_positive_rate_falls_back() {
        for rate in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let scheduler = FixedStepScheduler::new(rate);
            assert_eq!(scheduler.updates_per_second(), FALLBACK_UPDATES_PER_SECOND);
            assert!((scheduler.update_interval() - 0.1).abs() < EPSILON);
        }
    }

    #[test]
    fn bogus_deltas_are_ignored() {
        let mut scheduler = FixedStepScheduler::new(10.0);
        assert_eq!(scheduler.tick(-1.0, || {}), 0);
        assert_eq!(scheduler.tick(f64::NAN, || {}), 0);
        assert_eq!(scheduler.accumulator(), 0.0);
    }

    #[test]
    fn reset_forgets_banked_time() {
        let mut scheduler = FixedStepScheduler::new(10.0);
        scheduler.tick(0.05, || {});
        scheduler.reset();
        assert_eq!(scheduler.tick(0.06, || {}), 0);
    }
}

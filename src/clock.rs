/*
 * Step Clock Module
 *
 * Fixed-timestep accumulator that decouples the simulation tick from the
 * display refresh rate. Each frame adds its elapsed time; the clock reports
 * how many whole intervals are due and keeps the remainder for the next frame.
 * A slow frame runs at most `max_steps_per_frame` steps and drops the backlog
 * rather than spiralling.
 */

use std::time::Duration;

// Upper bound on catch-up steps in a single frame
pub const MAX_STEPS_PER_FRAME: usize = 5;

/// Split `accumulated` into whole `interval`s (capped at `max_steps`) and the
/// leftover time carried into the next frame.
///
/// The leftover is always shorter than one interval, so a backlog beyond the
/// cap is discarded. A zero interval never produces steps.
pub fn steps_due(accumulated: Duration, interval: Duration, max_steps: usize) -> (usize, Duration) {
    let interval_nanos = interval.as_nanos();
    if interval_nanos == 0 {
        return (0, accumulated);
    }

    let accumulated_nanos = accumulated.as_nanos();
    let due = accumulated_nanos / interval_nanos;
    let remainder = (accumulated_nanos % interval_nanos) as u64;

    let steps = usize::try_from(due).unwrap_or(usize::MAX).min(max_steps);
    (steps, Duration::from_nanos(remainder))
}

#[derive(Debug, Clone)]
pub struct StepClock {
    interval: Duration,
    accumulator: Duration,
    max_steps_per_frame: usize,
}

impl StepClock {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            accumulator: Duration::ZERO,
            max_steps_per_frame: MAX_STEPS_PER_FRAME,
        }
    }

    // Add one frame's elapsed time and return the number of steps to run now
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        self.accumulator += elapsed;
        let (steps, remainder) = steps_due(self.accumulator, self.interval, self.max_steps_per_frame);
        self.accumulator = remainder;
        steps
    }

    // Forget pending time, e.g. while paused
    pub fn reset(&mut self) {
        self.accumulator = Duration::ZERO;
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn pending(&self) -> Duration {
        self.accumulator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICK: Duration = Duration::from_millis(25);

    #[test]
    fn short_frame_carries_time_forward() {
        assert_eq!(steps_due(Duration::from_millis(16), TICK, 5), (0, Duration::from_millis(16)));
    }

    #[test]
    fn whole_intervals_become_steps() {
        assert_eq!(steps_due(Duration::from_millis(60), TICK, 5), (2, Duration::from_millis(10)));
        assert_eq!(steps_due(TICK, TICK, 5), (1, Duration::ZERO));
    }

    #[test]
    fn backlog_beyond_cap_is_dropped() {
        let (steps, rest) = steps_due(Duration::from_millis(1010), TICK, 5);
        assert_eq!(steps, 5);
        assert_eq!(rest, Duration::from_millis(10));
    }

    #[test]
    fn zero_interval_never_steps() {
        assert_eq!(steps_due(Duration::from_millis(100), Duration::ZERO, 5), (0, Duration::from_millis(100)));
    }

    #[test]
    fn sixty_hz_frames_tick_at_forty_hz() {
        // One second of ~60 Hz frames runs the simulation 40 times
        let mut clock = StepClock::new(TICK);
        let frame = Duration::from_micros(16_667);
        let total: usize = (0..60).map(|_| clock.advance(frame)).sum();
        assert_eq!(total, 40);
        assert!(clock.pending() < clock.interval());
    }

    #[test]
    fn faster_display_does_not_speed_up_simulation() {
        let mut slow = StepClock::new(TICK);
        let mut fast = StepClock::new(TICK);
        let slow_steps: usize = (0..60).map(|_| slow.advance(Duration::from_micros(16_667))).sum();
        let fast_steps: usize = (0..144).map(|_| fast.advance(Duration::from_micros(6_945))).sum();
        assert_eq!(slow_steps, fast_steps);
    }

    #[test]
    fn reset_discards_pending_time() {
        let mut clock = StepClock::new(TICK);
        assert_eq!(clock.advance(Duration::from_millis(20)), 0);
        clock.reset();
        assert_eq!(clock.advance(Duration::from_millis(20)), 0);
        assert_eq!(clock.pending(), Duration::from_millis(20));
    }
}

//! Eased count-up from zero to a target number.
//!
//! Timestamps are plain milliseconds (the browser passes
//! `performance.now()`), so tests can drive the animation frame by frame.

use std::time::Duration;
use tracing::debug;

/// Cubic ease-out: fast start, gentle landing.
pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

/// Animation phase.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Phase {
    /// Waiting for the run gate; displays 0.
    Idle,
    /// Frames are being produced.
    Animating { started_at: f64 },
    /// Displays the target; no more frames.
    Settled,
}

/// What [`CountUp::start`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Start {
    /// Frames should be scheduled until a tick reports `done`.
    Animating,
    /// Reduced motion: jumped straight to the target.
    Settled(u32),
    /// Already started once; nothing to do.
    Ignored,
}

/// One animation frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame {
    pub value: u32,
    /// No further frames are needed.
    pub done: bool,
}

/// Drives a displayed number from 0 to `target` over `duration`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CountUp {
    target: u32,
    duration_ms: f64,
    phase: Phase,
    value: u32,
}

impl CountUp {
    pub fn new(target: u32, duration: Duration) -> Self {
        Self {
            target,
            duration_ms: duration.as_secs_f64() * 1000.0,
            phase: Phase::Idle,
            value: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// Leave `Idle`. One-shot: later calls are ignored.
    pub fn start(&mut self, now_ms: f64, reduced_motion: bool) -> Start {
        if self.phase != Phase::Idle {
            return Start::Ignored;
        }
        if reduced_motion {
            debug!(value = self.target, "reduced motion, skipping count-up");
            self.settle();
            return Start::Settled(self.value);
        }
        self.phase = Phase::Animating { started_at: now_ms };
        Start::Animating
    }

    /// Advance to `now_ms`.
    pub fn tick(&mut self, now_ms: f64) -> Frame {
        let Phase::Animating { started_at } = self.phase else {
            return Frame {
                value: self.value,
                done: true,
            };
        };

        let t = if self.duration_ms <= 0.0 {
            1.0
        } else {
            ((now_ms - started_at) / self.duration_ms).clamp(0.0, 1.0)
        };

        if t >= 1.0 {
            self.settle();
        } else {
            self.value = (f64::from(self.target) * ease_out_cubic(t)).round() as u32;
        }

        Frame {
            value: self.value,
            done: self.phase == Phase::Settled,
        }
    }

    fn settle(&mut self) {
        self.phase = Phase::Settled;
        self.value = self.target;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const DURATION: Duration = Duration::from_millis(900);

    #[test]
    fn easing_hits_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert!((ease_out_cubic(0.5) - 0.875).abs() < f64::EPSILON);
    }

    #[test]
    fn idle_until_started() {
        let mut count = CountUp::new(90, DURATION);
        assert_eq!(count.phase(), Phase::Idle);
        assert_eq!(count.tick(500.0), Frame { value: 0, done: true });
    }

    #[test]
    fn animates_monotonically_to_target() {
        let mut count = CountUp::new(90, DURATION);
        assert_eq!(count.start(1000.0, false), Start::Animating);

        let mut previous = 0;
        let mut now = 1000.0;
        loop {
            let frame = count.tick(now);
            assert!(frame.value >= previous, "{} < {previous} at {now}", frame.value);
            assert!(frame.value <= 90);
            previous = frame.value;
            if frame.done {
                break;
            }
            now += 16.0;
        }

        assert_eq!(previous, 90);
        assert!(now >= 1900.0);
        assert_eq!(count.phase(), Phase::Settled);
    }

    #[test]
    fn settles_exactly_at_duration() {
        let mut count = CountUp::new(90, DURATION);
        count.start(0.0, false);
        let before = count.tick(899.0);
        assert!(!before.done);
        assert_eq!(count.tick(900.0), Frame { value: 90, done: true });
        assert_eq!(count.tick(5000.0), Frame { value: 90, done: true });
    }

    #[test]
    fn midpoint_follows_cubic_curve() {
        let mut count = CountUp::new(80, DURATION);
        count.start(0.0, false);
        assert_eq!(count.tick(450.0).value, 70);
    }

    #[test]
    fn reduced_motion_jumps_to_target() {
        let mut count = CountUp::new(90, DURATION);
        assert_eq!(count.start(0.0, true), Start::Settled(90));
        assert_eq!(count.value(), 90);
        assert_eq!(count.phase(), Phase::Settled);
    }

    #[test]
    fn start_is_one_shot() {
        let mut count = CountUp::new(25, DURATION);
        assert_eq!(count.start(0.0, false), Start::Animating);
        count.tick(300.0);
        assert_eq!(count.start(300.0, false), Start::Ignored);
        assert_eq!(count.phase(), Phase::Animating { started_at: 0.0 });
    }

    #[test]
    fn zero_duration_settles_on_first_tick() {
        let mut count = CountUp::new(65, Duration::ZERO);
        count.start(10.0, false);
        assert_eq!(count.tick(10.0), Frame { value: 65, done: true });
    }
}

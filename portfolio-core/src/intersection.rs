//! Visibility threshold trigger.

use crate::CoreError;
use tracing::debug;

/// Slack for subpixel rounding in browser-reported ratios.
pub const CROSSING_TOLERANCE: f64 = 0.005;

/// Decides when an observed element counts as "in view".
///
/// The browser reports the visible fraction of the element on every
/// threshold crossing; [`IntersectionTrigger::observe`] says whether that
/// report should fire the callback. Firing is repeatable, so callbacks are
/// expected to be idempotent (setting a flag).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionTrigger {
    threshold: f64,
    fired: u32,
}

impl IntersectionTrigger {
    pub fn new(threshold: f64) -> Result<Self, CoreError> {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(CoreError::InvalidThreshold(threshold));
        }
        Ok(Self { threshold, fired: 0 })
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// How many reports have fired so far.
    pub fn fired(&self) -> u32 {
        self.fired
    }

    /// Returns `true` when `visible_fraction >= threshold`.
    pub fn observe(&mut self, visible_fraction: f64) -> bool {
        let fire = visible_fraction >= self.threshold;
        if fire {
            self.fired += 1;
            debug!(visible_fraction, threshold = self.threshold, "intersection threshold reached");
        }
        fire
    }

    /// Like [`observe`](Self::observe), for an observer entry.
    ///
    /// An intersecting entry whose ratio lands within
    /// [`CROSSING_TOLERANCE`] under the threshold counts as reaching it: the
    /// browser only reports at crossings, and may round the crossing ratio
    /// down by a hair.
    pub fn observe_crossing(&mut self, visible_fraction: f64, is_intersecting: bool) -> bool {
        let near = self.threshold - visible_fraction <= CROSSING_TOLERANCE;
        let fraction = if is_intersecting && near {
            visible_fraction.max(self.threshold)
        } else {
            visible_fraction
        };
        self.observe(fraction)
    }
}

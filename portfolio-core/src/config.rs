//! Timing and geometry constants for the page's reactive behaviors.
//!
//! The defaults are the values the site has always shipped with. They are
//! plain data: the site builds one [`SiteConfig`] at startup and hands it to
//! the component tree through context.

use std::time::Duration;

/// Distance below the viewport top used as the scroll-spy probe.
pub const SCROLL_LOOKAHEAD_PX: f64 = 100.0;

/// Idle window for scroll handling.
pub const SCROLL_DEBOUNCE: Duration = Duration::from_millis(50);

/// Scroll offset past which the navbar is drawn raised.
pub const SHADOW_OFFSET_PX: f64 = 50.0;

/// Length of the stats count-up animation.
pub const COUNT_UP_DURATION: Duration = Duration::from_millis(900);

/// Visible fraction of the stats block that starts the count-up.
pub const STATS_VISIBILITY_THRESHOLD: f64 = 0.3;

/// Latency of the simulated contact submission.
pub const SUBMIT_LATENCY: Duration = Duration::from_millis(1200);

/// Runtime view of the constants above.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SiteConfig {
    /// Scroll-spy probe offset in CSS pixels
    pub scroll_lookahead: f64,
    /// Debounce window for scroll events
    pub scroll_debounce: Duration,
    /// Navbar shadow threshold in CSS pixels
    pub shadow_offset: f64,
    /// Count-up animation length
    pub count_up_duration: Duration,
    /// Stats visibility threshold (0.0..=1.0)
    pub stats_threshold: f64,
    /// Simulated submission delay
    pub submit_latency: Duration,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            scroll_lookahead: SCROLL_LOOKAHEAD_PX,
            scroll_debounce: SCROLL_DEBOUNCE,
            shadow_offset: SHADOW_OFFSET_PX,
            count_up_duration: COUNT_UP_DURATION,
            stats_threshold: STATS_VISIBILITY_THRESHOLD,
            submit_latency: SUBMIT_LATENCY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_shipped_constants() {
        let config = SiteConfig::default();
        assert_eq!(config.scroll_lookahead, 100.0);
        assert_eq!(config.scroll_debounce, Duration::from_millis(50));
        assert_eq!(config.shadow_offset, 50.0);
        assert_eq!(config.count_up_duration, Duration::from_millis(900));
        assert_eq!(config.stats_threshold, 0.3);
        assert_eq!(config.submit_latency, Duration::from_millis(1200));
    }
}

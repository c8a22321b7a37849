//! Timing and storage settings for the page behaviors.
//!
//! Every controller receives its settings from [`BehaviorConfig`] rather than
//! hard-coding them, so tests can shorten or inspect them. The defaults are the
//! values the live site runs with.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

/// localStorage key holding the theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Divisor that turns a counter target into its per-tick increment.
pub const COUNTER_SPEED: u64 = 200;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BehaviorConfig {
    pub counter_tick: Duration,
    pub counter_speed: u64,
    /// Fraction of the impact section that must be on screen before counters start.
    pub counter_visibility_threshold: f64,
    pub slide_interval: Duration,
    pub chat_reply_delay: Duration,
    pub success_banner_duration: Duration,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            counter_tick: Duration::from_millis(10),
            counter_speed: COUNTER_SPEED,
            counter_visibility_threshold: 0.5,
            slide_interval: Duration::from_millis(5000),
            chat_reply_delay: Duration::from_millis(500),
            success_banner_duration: Duration::from_millis(5000),
        }
    }
}

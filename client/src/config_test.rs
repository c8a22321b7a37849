use super::*;

#[test]
fn defaults_match_live_site_timings() {
    let config = BehaviorConfig::default();
    assert_eq!(config.counter_tick, Duration::from_millis(10));
    assert_eq!(config.counter_speed, 200);
    assert_eq!(config.slide_interval, Duration::from_secs(5));
    assert_eq!(config.chat_reply_delay, Duration::from_millis(500));
    assert_eq!(config.success_banner_duration, Duration::from_secs(5));
}

#[test]
fn counters_wait_for_half_the_section() {
    assert!((BehaviorConfig::default().counter_visibility_threshold - 0.5).abs() < f64::EPSILON);
}

#[test]
fn theme_key_is_plain_theme() {
    assert_eq!(THEME_STORAGE_KEY, "theme");
}

use rbreakalert::utils::{format_duration, parse_duration};
use std::time::Duration;

#[test]
fn parse_accepts_common_forms() {
    assert_eq!(parse_duration("90s").unwrap(), Duration::from_secs(90));
    assert_eq!(parse_duration("15m").unwrap(), Duration::from_secs(900));
    assert_eq!(parse_duration("2h").unwrap(), Duration::from_secs(7200));
    assert_eq!(parse_duration("1h30m").unwrap(), Duration::from_secs(5400));
    assert_eq!(parse_duration("1h 30m").unwrap(), Duration::from_secs(5400));
    assert_eq!(parse_duration("1h30m20s").unwrap(), Duration::from_secs(5420));
}

#[test]
fn parse_bare_number_means_seconds() {
    assert_eq!(parse_duration("40").unwrap(), Duration::from_secs(40));
    assert_eq!(parse_duration("0").unwrap(), Duration::ZERO);
}

#[test]
fn parse_accepts_milliseconds() {
    assert_eq!(parse_duration("250ms").unwrap(), Duration::from_millis(250));
    assert_eq!(parse_duration("100ms").unwrap(), Duration::from_millis(100));
}

#[test]
fn parse_trims_whitespace() {
    assert_eq!(parse_duration(" 5m ").unwrap(), Duration::from_secs(300));
}

#[test]
fn parse_rejects_garbage() {
    assert!(parse_duration("").is_err());
    assert!(parse_duration("   ").is_err());
    assert!(parse_duration("abc").is_err());
    assert!(parse_duration("12x").is_err());
    assert!(parse_duration("m").is_err());
    assert!(parse_duration("1.5s").is_err());
    assert!(parse_duration("-5s").is_err());
    assert!(parse_duration("30m5h").is_err());
}

#[test]
fn format_picks_the_largest_unit() {
    assert_eq!(format_duration(Duration::ZERO), "0s");
    assert_eq!(format_duration(Duration::from_secs(45)), "45s");
    assert_eq!(format_duration(Duration::from_secs(75)), "1m 15s");
    assert_eq!(format_duration(Duration::from_secs(3725)), "1h 02m 05s");
}

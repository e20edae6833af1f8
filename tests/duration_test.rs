use course_runtime::runtime::duration::{format_duration, format_duration_verbose, parse_duration};

#[test]
fn test_clock_hours_minutes_seconds() {
    for (h, m, s) in [(0, 0, 1), (1, 0, 0), (2, 5, 9), (12, 59, 59), (99, 30, 0)] {
        let text = format!("{}:{:02}:{:02}", h, m, s);
        assert_eq!(parse_duration(text.as_str()), h * 3600 + m * 60 + s, "{}", text);
    }
}

#[test]
fn test_clock_minutes_seconds() {
    for (m, s) in [(0, 5), (6, 28), (12, 0), (59, 59), (99, 1)] {
        let text = format!("{}:{:02}", m, s);
        assert_eq!(parse_duration(text.as_str()), m * 60 + s, "{}", text);
    }
}

#[test]
fn test_empty_and_unrecognized_are_zero() {
    assert_eq!(parse_duration(""), 0);
    assert_eq!(parse_duration(None), 0);
    assert_eq!(parse_duration("no numbers here"), 0);
    assert_eq!(parse_duration("()[]"), 0);
}

#[test]
fn test_unit_suffixes() {
    assert_eq!(parse_duration("1h 30m 45s"), 5445);
    assert_eq!(parse_duration("30m"), 1800);
    assert_eq!(parse_duration("45s"), 45);
    assert_eq!(parse_duration("2h"), 7200);
    assert_eq!(parse_duration("1h30m"), 5400);
}

#[test]
fn test_minute_words() {
    assert_eq!(parse_duration("90 min"), 5400);
    assert_eq!(parse_duration("45 minutes"), 2700);
    assert_eq!(parse_duration("1 minute"), 60);
    assert_eq!(parse_duration("(15 MIN)"), 900);
}

#[test]
fn test_clock_wins_over_units() {
    // "6:28" is read before the "5m" ever gets a chance.
    assert_eq!(parse_duration("5m then 6:28"), 388);
}

#[test]
fn test_two_part_clock_is_never_hours() {
    assert_eq!(parse_duration("[6:28]"), 6 * 60 + 28);
}

#[test]
fn test_renderings() {
    assert_eq!(format_duration_verbose(5445), "1h 30m 45s");
    assert_eq!(format_duration(5445), "1h 30m");
    assert_eq!(format_duration(59), "0m");
    assert_eq!(format_duration_verbose(3600), "1h 0m 0s");
}

use once_cell::sync::Lazy;
use regex::Regex;

/// `H:MM:SS` or `MM:SS`, anywhere in the text.
pub const CLOCK_PATTERN: &str = r"\d{1,2}:\d{2}(?::\d{2})?";

/// Unit-suffixed forms: `1h 30m 45s`, `30m`, `45s`, `90 min`, `10 min 30s`.
pub const UNIT_PATTERN: &str =
    r"\b(?:\d+h(?:\s*\d+m)?(?:\s*\d+s)?|\d+m(?:\s*\d+s)?|\d+s|\d+\s*(?i:min(?:ute)?s?)(?:\s*\d+s)?)\b";

static BRACKETS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[()\[\]]").expect("bracket pattern"));

static CLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{1,2}):(\d{2})(?::(\d{2}))?").expect("clock pattern"));

static COMPOSITE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:(\d+)h)?(?:\s*(\d+)m)?(?:\s*(\d+)s)?").expect("composite pattern")
});

static MINUTES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d+)\s*(?:min|minutes?)").expect("minutes pattern"));

/// Parse a free-form duration into whole seconds.
///
/// Formats are tried in order and the first one that matches wins:
/// colon-separated (`1:02:03`, `6:28`), letter-suffixed (`1h 2m 3s`) and
/// word-suffixed minutes (`90 min`). A two-part colon value is always read as
/// minutes and seconds. Anything unrecognized, empty or absent yields 0.
pub fn parse_duration<'a>(input: impl Into<Option<&'a str>>) -> u64 {
    let Some(raw) = input.into() else {
        return 0;
    };
    let text = BRACKETS.replace_all(raw, "");
    let text = text.trim();
    if text.is_empty() {
        return 0;
    }

    if let Some(caps) = CLOCK.captures(text) {
        let first = number(caps.get(1).map(|m| m.as_str()));
        let second = number(caps.get(2).map(|m| m.as_str()));
        return match caps.get(3) {
            Some(third) => hms(first, second, number(Some(third.as_str()))),
            None => hms(0, first, second),
        };
    }

    // Every group is optional: text that does not open with a component gives
    // an empty match here and falls through to the minutes form.
    let composite = COMPOSITE
        .captures(text)
        .filter(|caps| (1..=3).any(|i| caps.get(i).is_some()));
    if let Some(caps) = composite {
        return hms(
            number(caps.get(1).map(|m| m.as_str())),
            number(caps.get(2).map(|m| m.as_str())),
            number(caps.get(3).map(|m| m.as_str())),
        );
    }

    if let Some(caps) = MINUTES.captures(text) {
        return number(caps.get(1).map(|m| m.as_str())).saturating_mul(60);
    }

    0
}

fn number(digits: Option<&str>) -> u64 {
    digits.and_then(|d| d.parse().ok()).unwrap_or(0)
}

fn hms(hours: u64, minutes: u64, seconds: u64) -> u64 {
    hours
        .saturating_mul(3600)
        .saturating_add(minutes.saturating_mul(60))
        .saturating_add(seconds)
}

/// Compact rendering: `1h 20m`, or `20m` under an hour.
pub fn format_duration(secs: u64) -> String {
    let hours = secs / 3600;
    let mins = (secs % 3600) / 60;
    if hours > 0 {
        format!("{}h {}m", hours, mins)
    } else {
        format!("{}m", mins)
    }
}

/// Verbose rendering: `1h 20m 28s`, `20m 28s` or `28s`.
pub fn format_duration_verbose(secs: u64) -> String {
    let hours = secs / 3600;
    let mins = (secs % 3600) / 60;
    let rest = secs % 60;
    if hours > 0 {
        format!("{}h {}m {}s", hours, mins, rest)
    } else if mins > 0 {
        format!("{}m {}s", mins, rest)
    } else {
        format!("{}s", rest)
    }
}

use crate::error::RuntimeError;
use crate::runtime::duration::{
    CLOCK_PATTERN, UNIT_PATTERN, format_duration, format_duration_verbose, parse_duration,
};
use crate::runtime::models::{
    Completion, LectureEntry, ProgressEstimate, RuntimeReport, RuntimeSummary,
};
use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern"));

/// Extraction patterns in priority order. Group 1 is the duration text handed
/// to the parser; group 0 is what gets cut out of the title.
static EXTRACTORS: Lazy<Vec<Regex>> = Lazy::new(|| {
    let any = format!("(?:{}|{})", CLOCK_PATTERN, UNIT_PATTERN);
    [
        format!(r"\(\s*({})\s*\)", any),
        format!(r"\[\s*({})\s*\]", any),
        format!(r"\s+({})\s*$", any),
        // Loose unit matches mid-title are too easy to hit by accident.
        format!(r"({})", CLOCK_PATTERN),
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("extraction pattern"))
    .collect()
});

/// Collapse whitespace runs to a single space and trim.
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_string()
}

struct Extracted<'t> {
    matched: &'t str,
    duration: &'t str,
}

fn find_duration(text: &str) -> Option<Extracted<'_>> {
    EXTRACTORS.iter().find_map(|re| {
        re.captures(text).and_then(|caps| {
            Some(Extracted {
                matched: caps.get(0)?.as_str(),
                duration: caps.get(1)?.as_str(),
            })
        })
    })
}

/// Extract the duration embedded in a single lecture label.
pub fn extract_entry(label: &str) -> LectureEntry {
    let normalized = normalize_whitespace(label);

    // Every pattern matches whitespace with `\s`, so collapsing runs never
    // loses a match; the raw label is only a second chance.
    let found = find_duration(&normalized).or_else(|| find_duration(label));
    let Some(found) = found else {
        return LectureEntry {
            label: label.to_string(),
            title: normalized,
            duration: None,
            seconds: 0,
        };
    };

    let seconds = parse_duration(found.duration);
    if seconds == 0 {
        log::debug!("Could not parse time: {}", found.duration);
        return LectureEntry {
            label: label.to_string(),
            title: normalized,
            duration: None,
            seconds: 0,
        };
    }

    let title = normalize_whitespace(&normalized.replacen(found.matched, "", 1));
    LectureEntry {
        label: label.to_string(),
        title,
        duration: Some(found.duration.to_string()),
        seconds,
    }
}

/// Build the runtime summary for an ordered list of lecture labels.
///
/// Never fails: items without a recognizable duration contribute nothing and
/// are only counted.
pub fn summarize<I, S>(labels: I) -> RuntimeSummary
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let entries: Vec<LectureEntry> = labels
        .into_iter()
        .map(|label| extract_entry(label.as_ref()))
        .collect();

    let mut total_seconds: u64 = 0;
    let mut videos_with_time = 0;
    for entry in &entries {
        if entry.has_duration() {
            total_seconds = total_seconds.saturating_add(entry.seconds);
            videos_with_time += 1;
            log::debug!(
                "Video {}: \"{}\" - {} ({}s)",
                videos_with_time,
                entry.title,
                entry.duration.as_deref().unwrap_or_default(),
                entry.seconds
            );
        } else {
            log::debug!("No duration found: \"{}\"", preview(&entry.title));
        }
    }

    log::info!(
        "Total: {}s from {}/{} videos",
        total_seconds,
        videos_with_time,
        entries.len()
    );

    RuntimeSummary {
        total_seconds,
        video_count: entries.len(),
        videos_with_time,
        formatted_time: format_duration_verbose(total_seconds),
        compact_time: format_duration(total_seconds),
        entries,
    }
}

/// Derive the remaining-time estimate for a summary.
pub fn estimate(summary: &RuntimeSummary, completion: Completion) -> ProgressEstimate {
    let remaining_seconds = summary.remaining_seconds(completion);
    ProgressEstimate {
        completion_percent: completion,
        remaining_percent: completion.remaining_percent(),
        remaining_seconds,
        remaining_time: format_duration(remaining_seconds),
    }
}

/// Summarize a page and estimate the remaining time.
///
/// Returns an error when there is nothing to show: no labels at all, or no
/// label with a duration. Callers must skip rendering in that case.
pub fn aggregate<I, S>(labels: I, completion: Completion) -> Result<RuntimeReport, RuntimeError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let summary = summarize(labels);
    check(&summary)?;

    let progress = estimate(&summary, completion);
    let coverage_percent = summary.coverage_percent().unwrap_or_default();
    Ok(RuntimeReport {
        summary,
        progress,
        coverage_percent,
    })
}

/// Reject summaries that have nothing to render.
pub fn check(summary: &RuntimeSummary) -> Result<(), RuntimeError> {
    if summary.video_count == 0 {
        return Err(RuntimeError::NoItems);
    }
    if summary.videos_with_time == 0 {
        return Err(RuntimeError::NoDurations {
            video_count: summary.video_count,
        });
    }
    Ok(())
}

fn preview(text: &str) -> String {
    if text.chars().count() > 50 {
        format!("{}...", text.chars().take(50).collect::<String>())
    } else {
        text.to_string()
    }
}

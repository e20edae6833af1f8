use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

static MIN_WIDTH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"min-width:\s*(\d+)%").expect("min-width pattern"));

/// One lecture label after duration extraction.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct LectureEntry {
    /// Label exactly as the host page supplied it
    pub label: String,
    /// Normalized label with the matched duration text removed
    pub title: String,
    /// Matched duration text, e.g. `6:28` or `1h 2m`
    pub duration: Option<String>,
    pub seconds: u64,
}

impl LectureEntry {
    pub fn has_duration(&self) -> bool {
        self.seconds > 0
    }
}

/// Totals over every lecture label of one page.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct RuntimeSummary {
    pub total_seconds: u64,
    pub video_count: usize,
    pub videos_with_time: usize,
    pub formatted_time: String,
    pub compact_time: String,
    pub entries: Vec<LectureEntry>,
}

impl RuntimeSummary {
    /// Quizzes, resources and anything else without a duration.
    pub fn items_without_time(&self) -> usize {
        self.video_count - self.videos_with_time
    }

    /// Share of items with a duration, rounded half up. `None` for an empty page.
    pub fn coverage_percent(&self) -> Option<u32> {
        if self.video_count == 0 {
            return None;
        }
        let with = self.videos_with_time as u64;
        let count = self.video_count as u64;
        Some(((200 * with + count) / (2 * count)) as u32)
    }

    pub fn remaining_seconds(&self, completion: Completion) -> u64 {
        let remaining = u128::from(completion.remaining_percent());
        let scaled = (u128::from(self.total_seconds) * remaining + 50) / 100;
        scaled as u64
    }
}

/// Course completion as reported by the page, clamped to `0..=100`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
#[serde(transparent)]
pub struct Completion(u8);

impl Completion {
    pub fn new(percent: i64) -> Self {
        Self(percent.clamp(0, 100) as u8)
    }

    pub fn percent(self) -> u8 {
        self.0
    }

    pub fn remaining_percent(self) -> u8 {
        100 - self.0
    }

    pub fn is_known(self) -> bool {
        self.0 > 0
    }

    /// Read a percentage label such as `25%` or ` 40 `.
    ///
    /// Only the leading integer counts (`25.7%` is 25). Text with no leading
    /// number is treated as no progress.
    pub fn parse(text: &str) -> Self {
        leading_integer(&text.trim().replace('%', ""))
            .map(Self::new)
            .unwrap_or_default()
    }

    /// Read the progress-bar fallback: an inline style carrying `min-width: N%`.
    pub fn from_style(style: &str) -> Option<Self> {
        MIN_WIDTH
            .captures(style)
            .and_then(|caps| caps[1].parse::<i64>().ok())
            .map(Self::new)
    }
}

impl fmt::Display for Completion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

fn leading_integer(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    // Anything too long for i64 is far outside 0..=100 anyway.
    let value = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}

/// Remaining-time estimate for a given completion.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ProgressEstimate {
    pub completion_percent: Completion,
    pub remaining_percent: u8,
    pub remaining_seconds: u64,
    pub remaining_time: String,
}

/// Everything a renderer needs for one page.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct RuntimeReport {
    pub summary: RuntimeSummary,
    pub progress: ProgressEstimate,
    pub coverage_percent: u32,
}

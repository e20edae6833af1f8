//! Summary widgets. Renderers only see a finished [`RuntimeReport`], the
//! summary plus its completion estimate; they never touch the host page.

use crate::OutputFormat;
use crate::runtime::duration::format_duration_verbose;
use crate::runtime::models::{LectureEntry, RuntimeReport, RuntimeSummary};
use anyhow::{Context, Result};
use std::fmt::Write as _;
use termtree::Tree;

pub const WIDGET_ID: &str = "course-runtime-display";

const ESTIMATE_NOTE: &str = "* Time remaining is estimated based on video content only";

/// A rendered summary, ready to be shown in place of the previous one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Widget {
    pub id: &'static str,
    pub format: OutputFormat,
    pub body: String,
}

pub trait Renderer {
    fn render(&self, report: &RuntimeReport) -> Result<Widget>;
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn render(&self, report: &RuntimeReport) -> Result<Widget> {
        (**self).render(report)
    }
}

/// Build the renderer for an output format.
pub fn renderer_for(format: OutputFormat, show_details: bool) -> Box<dyn Renderer> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer { show_details }),
        OutputFormat::Json => Box::new(JsonRenderer),
        OutputFormat::Html => Box::new(HtmlRenderer),
    }
}

/// Terminal rendering of the sidebar widget.
pub struct TextRenderer {
    pub show_details: bool,
}

impl Renderer for TextRenderer {
    fn render(&self, report: &RuntimeReport) -> Result<Widget> {
        let summary = &report.summary;
        let progress = &report.progress;
        let completion = progress.completion_percent;
        let mut out = String::new();

        writeln!(out, "VIDEO RUNTIME")?;
        writeln!(out, "{:<18}{}", "Total Video Time:", summary.compact_time)?;
        if completion.is_known() {
            writeln!(out, "{:<18}{}", "Time Remaining:", progress.remaining_time)?;
            writeln!(out)?;
            writeln!(out, "Course Progress: {} complete", completion)?;
            writeln!(
                out,
                "{}% remaining ≈ {} of video content",
                progress.remaining_percent, progress.remaining_time
            )?;
        }

        if self.show_details {
            writeln!(out)?;
            writeln!(out, "Calculation Details")?;
            writeln!(
                out,
                "  Video Lessons: {} with duration info",
                summary.videos_with_time
            )?;
            writeln!(
                out,
                "  Other Content: {} items (quizzes, resources, etc.)",
                summary.items_without_time()
            )?;
            writeln!(
                out,
                "  Coverage: {}% of course items have video duration",
                report.coverage_percent
            )?;
            writeln!(
                out,
                "  Total Seconds: {}",
                group_thousands(summary.total_seconds)
            )?;
            write!(out, "{}", breakdown_tree(summary))?;
            writeln!(out, "{}", ESTIMATE_NOTE)?;
        }

        Ok(Widget {
            id: WIDGET_ID,
            format: OutputFormat::Text,
            body: out,
        })
    }
}

fn entry_line(entry: &LectureEntry) -> String {
    match &entry.duration {
        Some(_) => format!("{} ({})", entry.title, format_duration_verbose(entry.seconds)),
        None => format!("{} (no duration)", entry.title),
    }
}

fn breakdown_tree(summary: &RuntimeSummary) -> Tree<String> {
    let root = format!("Lectures ({})", summary.formatted_time);
    let mut tree = Tree::new(root);
    for entry in &summary.entries {
        tree.push(Tree::new(entry_line(entry)));
    }
    tree
}

/// The full report as pretty JSON.
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, report: &RuntimeReport) -> Result<Widget> {
        let body = serde_json::to_string_pretty(report)
            .context("Failed to serialize runtime report")?;
        Ok(Widget {
            id: WIDGET_ID,
            format: OutputFormat::Json,
            body,
        })
    }
}

/// Sidebar markup, inserted after the page's own progress block.
pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn render(&self, report: &RuntimeReport) -> Result<Widget> {
        let summary = &report.summary;
        let progress = &report.progress;
        let completion = progress.completion_percent;
        let mut out = String::new();

        writeln!(
            out,
            r#"<div id="{}" class="course-progress">"#,
            WIDGET_ID
        )?;
        writeln!(
            out,
            r#"  <button class="runtime-refresh" title="Recalculate runtime">🔄</button>"#
        )?;
        writeln!(out, r#"  <div class="runtime-title">VIDEO RUNTIME</div>"#)?;
        writeln!(out, r#"  <div class="runtime-stats">"#)?;
        writeln!(
            out,
            r#"    <div class="runtime-row"><span>Total Video Time:</span><span class="runtime-total">{}</span></div>"#,
            summary.compact_time
        )?;
        if completion.is_known() {
            writeln!(
                out,
                r#"    <div class="runtime-row"><span>Time Remaining:</span><span class="runtime-remaining">{}</span></div>"#,
                progress.remaining_time
            )?;
        }
        writeln!(out, "  </div>")?;
        if completion.is_known() {
            writeln!(out, r#"  <div class="runtime-progress">"#)?;
            writeln!(
                out,
                "    <div>Course Progress: {} complete</div>",
                completion
            )?;
            writeln!(
                out,
                "    <div>{}% remaining ≈ {} of video content</div>",
                progress.remaining_percent, progress.remaining_time
            )?;
            writeln!(out, "  </div>")?;
        }
        writeln!(out, r#"  <details class="runtime-details">"#)?;
        writeln!(out, "    <summary>Calculation Details</summary>")?;
        writeln!(
            out,
            "    <div><strong>Video Lessons:</strong> {} with duration info</div>",
            summary.videos_with_time
        )?;
        writeln!(
            out,
            "    <div><strong>Other Content:</strong> {} items (quizzes, resources, etc.)</div>",
            summary.items_without_time()
        )?;
        writeln!(
            out,
            "    <div><strong>Coverage:</strong> {}% of course items have video duration</div>",
            report.coverage_percent
        )?;
        writeln!(
            out,
            "    <div><strong>Total Seconds:</strong> {}</div>",
            group_thousands(summary.total_seconds)
        )?;
        writeln!(out, "    <ol>")?;
        for entry in &summary.entries {
            writeln!(out, "      <li>{}</li>", escape_html(&entry_line(entry)))?;
        }
        writeln!(out, "    </ol>")?;
        writeln!(out, "    <em>{}</em>", ESTIMATE_NOTE)?;
        writeln!(out, "  </details>")?;
        writeln!(out, "</div>")?;

        Ok(Widget {
            id: WIDGET_ID,
            format: OutputFormat::Html,
            body: out,
        })
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// `4828` -> `4,828`
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Holds the one widget currently on display.
#[derive(Debug, Default)]
pub struct WidgetSlot {
    current: Option<Widget>,
}

impl WidgetSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&Widget> {
        self.current.as_ref()
    }

    /// Remove the widget on display, if any.
    pub fn clear(&mut self) -> Option<Widget> {
        self.current.take()
    }

    /// Show `widget`, returning the one it replaced.
    pub fn replace(&mut self, widget: Widget) -> Option<Widget> {
        self.current.replace(widget)
    }
}

use crate::OutputFormat;
use crate::host::PageSnapshot;
use crate::render::{Widget, renderer_for};
use crate::tracker::Tracker;
use crate::watcher::Trigger;
use anyhow::{Context, Result};
use std::io::Read;
use std::path::PathBuf;

/// Read the page snapshot from `file`, or stdin when absent.
pub fn read_snapshot(file: Option<&PathBuf>) -> Result<PageSnapshot> {
    match file {
        Some(path) => PageSnapshot::load(path),
        None => {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read lecture labels from stdin")?;
            PageSnapshot::parse(&content)
        }
    }
}

/// Render one summary for a snapshot. `progress` replaces whatever completion
/// the snapshot carries.
pub fn render_once(
    mut snapshot: PageSnapshot,
    progress: Option<String>,
    format: OutputFormat,
    show_details: bool,
) -> Result<Option<Widget>> {
    if let Some(progress) = progress {
        snapshot.progress = Some(progress);
        snapshot.progress_style = None;
    }

    let mut tracker = Tracker::new(renderer_for(format, show_details));
    let widget = tracker.recompute(&snapshot, &Trigger::PageReady)?;
    Ok(widget.cloned())
}

pub fn summary(
    file: Option<PathBuf>,
    progress: Option<String>,
    format: OutputFormat,
    show_details: bool,
) -> Result<()> {
    let snapshot = read_snapshot(file.as_ref())?;

    match render_once(snapshot, progress, format, show_details)? {
        Some(widget) => println!("{}", widget.body.trim_end()),
        None => eprintln!("No lecture durations found; nothing to display."),
    }

    Ok(())
}

use crate::host::PageSnapshot;
use crate::render::{Renderer, Widget, WidgetSlot};
use crate::runtime::aggregator::aggregate;
use crate::watcher::Trigger;
use anyhow::Result;

/// Recomputes the runtime summary for a page and keeps its widget current.
pub struct Tracker<R> {
    renderer: R,
    slot: WidgetSlot,
}

impl<R: Renderer> Tracker<R> {
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            slot: WidgetSlot::new(),
        }
    }

    pub fn current(&self) -> Option<&Widget> {
        self.slot.current()
    }

    /// Drop the widget on display and, if the page has runtime data, render a
    /// new one. Automatic and manual triggers behave identically.
    pub fn recompute(
        &mut self,
        snapshot: &PageSnapshot,
        trigger: &Trigger,
    ) -> Result<Option<&Widget>> {
        log::info!("Recomputing runtime ({:?})", trigger);
        if self.slot.clear().is_some() {
            log::debug!("Removed existing runtime display");
        }

        if !snapshot.is_curriculum() {
            log::info!("Not on a course curriculum page or no lectures found");
            return Ok(None);
        }

        let report = match aggregate(&snapshot.lectures, snapshot.completion()) {
            Ok(report) => report,
            Err(reason) => {
                log::info!("Skipping runtime display: {}", reason);
                return Ok(None);
            }
        };

        log::info!(
            "Total runtime {}, {} remaining",
            report.summary.formatted_time,
            report.progress.remaining_time
        );
        let widget = self.renderer.render(&report)?;
        self.slot.replace(widget);
        Ok(self.slot.current())
    }
}

use crate::OutputFormat;
use crate::config::{Config, TimingConfig};
use crate::host::{FileHost, HostPage};
use crate::render::{Renderer, Widget, renderer_for};
use crate::tracker::Tracker;
use crate::watcher::{NavigationWatcher, Trigger};
use anyhow::Result;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio::time::{MissedTickBehavior, interval, sleep};

/// Let the page settle, then recompute from a fresh capture.
async fn cycle<H, R, F>(
    host: &H,
    tracker: &mut Tracker<R>,
    timing: &TimingConfig,
    trigger: Trigger,
    emit: &mut F,
) -> Result<()>
where
    H: HostPage,
    R: Renderer,
    F: FnMut(&Trigger, Option<&Widget>),
{
    sleep(trigger.settle_delay(timing)).await;

    let snapshot = match host.capture() {
        Ok(snapshot) => snapshot,
        Err(e) => {
            log::warn!("Skipping recompute, page unavailable: {:#}", e);
            return Ok(());
        }
    };
    let widget = tracker.recompute(&snapshot, &trigger)?;
    emit(&trigger, widget);
    Ok(())
}

/// Run the tracker against a host page until `max_cycles` recomputes have
/// happened (forever when `None`).
///
/// Recomputes once when the page is ready, again whenever the page location
/// changes, and whenever a manual refresh arrives on `refresh`.
pub async fn watch_loop<H, R, F>(
    host: &H,
    tracker: &mut Tracker<R>,
    timing: &TimingConfig,
    mut refresh: mpsc::Receiver<()>,
    max_cycles: Option<usize>,
    mut emit: F,
) -> Result<()>
where
    H: HostPage,
    R: Renderer,
    F: FnMut(&Trigger, Option<&Widget>),
{
    timing.validate()?;

    let initial = host.capture()?;
    let mut watcher = NavigationWatcher::new(initial.url);
    let mut cycles = 0;
    let done = |cycles: usize| max_cycles.is_some_and(|max| cycles >= max);

    cycle(host, tracker, timing, Trigger::PageReady, &mut emit).await?;
    cycles += 1;

    let mut ticker = interval(std::time::Duration::from_millis(timing.poll_interval_ms));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut refresh_open = true;

    while !done(cycles) {
        let trigger = tokio::select! {
            _ = ticker.tick() => {
                match host.capture() {
                    Ok(snapshot) => watcher.poll(&snapshot.url),
                    Err(e) => {
                        log::warn!("Could not read page location: {:#}", e);
                        None
                    }
                }
            }
            message = refresh.recv(), if refresh_open => {
                match message {
                    Some(()) => Some(Trigger::Refresh),
                    None => {
                        refresh_open = false;
                        None
                    }
                }
            }
        };

        if let Some(trigger) = trigger {
            if let Trigger::Navigation { to, .. } = &trigger {
                log::info!("URL changed to {}, reinitializing...", to);
            }
            cycle(host, tracker, timing, trigger, &mut emit).await?;
            cycles += 1;
        }
    }

    Ok(())
}

/// Forward each line typed on stdin as a manual refresh request.
fn spawn_stdin_refresh() -> mpsc::Receiver<()> {
    let (tx, rx) = mpsc::channel(8);
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Ok(Some(_)) = lines.next_line().await {
            if tx.send(()).await.is_err() {
                break;
            }
        }
    });
    rx
}

pub async fn watch(
    config: &Config,
    file: PathBuf,
    format: OutputFormat,
    show_details: bool,
) -> Result<()> {
    let host = FileHost::new(file);
    let mut tracker = Tracker::new(renderer_for(format, show_details));
    let refresh = spawn_stdin_refresh();

    println!(
        "Watching {} (press Enter to recalculate, Ctrl-C to stop)",
        host.path().display()
    );

    watch_loop(
        &host,
        &mut tracker,
        &config.timing,
        refresh,
        None,
        |trigger, widget| match widget {
            Some(widget) => {
                println!("{}", widget.body.trim_end());
                println!();
            }
            None => eprintln!("No runtime data on this page ({:?}).", trigger),
        },
    )
    .await
}

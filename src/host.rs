//! The host page as seen by the tracker: its location, the lecture labels it
//! lists and whatever progress indicator it shows.

use crate::runtime::models::Completion;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// State of the host page at one instant.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct PageSnapshot {
    #[serde(default)]
    pub url: String,
    /// Progress label text, e.g. `25%`
    #[serde(default)]
    pub progress: Option<String>,
    /// Inline style of the progress bar fill, used when there is no label
    #[serde(default)]
    pub progress_style: Option<String>,
    #[serde(default)]
    pub lectures: Vec<String>,
}

impl PageSnapshot {
    /// Read a snapshot from JSON, or from plain text with one label per line.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim_start().starts_with('{') {
            return serde_json::from_str(content).context("Failed to parse page snapshot JSON");
        }

        let lectures = content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect();
        Ok(Self {
            lectures,
            ..Self::default()
        })
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read page snapshot: {}", path.display()))?;
        Self::parse(&content)
    }

    /// Completion shown on the page; the label wins over the progress bar.
    pub fn completion(&self) -> Completion {
        if let Some(text) = &self.progress {
            return Completion::parse(text);
        }
        self.progress_style
            .as_deref()
            .and_then(Completion::from_style)
            .unwrap_or_default()
    }

    /// Whether the page lists any lectures at all.
    pub fn is_curriculum(&self) -> bool {
        !self.lectures.is_empty()
    }
}

/// Source of page snapshots.
pub trait HostPage {
    fn capture(&self) -> Result<PageSnapshot>;
}

/// A host page backed by a snapshot file, re-read on every capture.
pub struct FileHost {
    path: PathBuf,
}

impl FileHost {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HostPage for FileHost {
    fn capture(&self) -> Result<PageSnapshot> {
        PageSnapshot::load(&self.path)
    }
}

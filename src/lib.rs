pub mod commands;
pub mod config;
pub mod error;
pub mod host;
pub mod render;
pub mod runtime;
pub mod tracker;
pub mod watcher;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, ValueEnum, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Html,
}

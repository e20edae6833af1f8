use thiserror::Error;

/// Reasons a page yields nothing worth rendering.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    #[error("no lecture items found")]
    NoItems,
    #[error("none of the {video_count} lecture items carry a duration")]
    NoDurations { video_count: usize },
}

pub mod config;
pub mod parse;
pub mod summary;
pub mod watch;

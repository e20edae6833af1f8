pub mod aggregator;
pub mod duration;
pub mod models;

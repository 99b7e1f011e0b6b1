//! Core library for the `temptweet` CLI.
//!
//! This crate defines:
//! - Fetching the Bureau of Meteorology latest-observations page
//! - Locating a station's row and extracting its readings
//! - Formatting the status text and publishing it
//! - Configuration handling
//!
//! It is used by `temptweet-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
mod html;
pub mod message;
pub mod model;
pub mod pipeline;
pub mod publisher;
pub mod station;

#[cfg(test)]
mod test_support;

pub use config::Config;
pub use error::{Reading, TempTweetError};
pub use extract::{Readings, RowLayout};
pub use fetch::PageFetcher;
pub use model::{Credentials, Observation, Report, StationRow};
pub use pipeline::RunContext;
pub use publisher::{DryRunPublisher, Publisher, StatusPublisher, publisher_from_config};

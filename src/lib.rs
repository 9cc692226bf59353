//! Sitekit - Library for building static-site assets
//!
//! This library provides functionality to:
//! - Generate font-face stylesheet fragments from converted font files
//! - Compose asset tasks into series/parallel pipelines and run them
//! - Watch a source tree and re-run the tasks mapped to changed assets

pub mod cli;
pub mod config;
pub mod fonts;
pub mod paths;
pub mod pipeline;
pub mod tasks;
pub mod watch;

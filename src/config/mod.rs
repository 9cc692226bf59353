//! Configuration module for the sitekit build system
//!
//! Provides types and parsing for `site.toml` project configuration.

pub mod loader;
pub mod schema;

pub use loader::*;
pub use schema::*;

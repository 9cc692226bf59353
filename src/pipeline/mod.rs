//! Pipeline module for sitekit
//!
//! Provides the task graph and runner that compose asset tasks into the
//! named `build`, `clean`, and watch-triggered pipelines.
//!
//! # Overview
//!
//! The pipeline consists of:
//! - **Graph**: named task steps composed with series/parallel nodes
//! - **Context**: configuration, profile, and resolved paths for a run
//! - **Runner**: executes a graph (series = fail-fast, parallel = join-all)
//!
//! # Example
//!
//! ```ignore
//! use sitekit::pipeline::{build_graph, Runner, TaskContext};
//! use sitekit::config::load_config;
//!
//! let config = load_config(None)?;
//! let context = TaskContext::new(config, project_root);
//! let result = Runner::new(context).run(&build_graph())?;
//! println!("{}", result.summary());
//! ```

pub mod context;
pub mod graph;
pub mod result;
pub mod runner;

pub use context::*;
pub use graph::*;
pub use result::*;
pub use runner::*;

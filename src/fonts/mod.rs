//! Font-face stylesheet generation
//!
//! Scans a directory of already-converted web fonts and synthesizes one
//! `@include font-face(...)` directive per distinct font file basename,
//! inferring the CSS family name and numeric weight from the filename.
//! The resulting fragment is consumed by the stylesheet compilation step.

pub mod style;
pub mod weight;

pub use style::{FontFaceEntry, FontStyleError, FontStyleGenerator, StyleReport};
pub use weight::{infer_weight, DEFAULT_WEIGHT};

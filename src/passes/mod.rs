//! Text transformation passes for sidebar-migrate.
//!
//! This module handles:
//! - Compiling pass descriptions into regex or literal matchers
//! - Running the ordered pipeline over page content

pub mod compiler;
pub mod pipeline;

pub use compiler::{CompiledPass, Matcher};
pub use pipeline::{Pipeline, PipelineOutcome};

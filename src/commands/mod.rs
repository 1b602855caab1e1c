//! CLI command implementations.
//!
//! methodloc has a single command: analyze a project or solution and print
//! per-class, per-method LOC.

pub mod analyze;

pub use analyze::{analyze_path, handle_analyze, AnalyzeConfig};

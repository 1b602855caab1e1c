//! Source analyzers.
//!
//! Only C# is analyzed. The analyzer turns a parsed document into per-class
//! method LOC, leaving cross-document merging to [`crate::metrics`].

pub mod csharp;

pub use csharp::{analyze_tree, CSharpParser};

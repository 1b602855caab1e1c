// Export modules for library usage
pub mod analyzers;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod io;
pub mod metrics;
pub mod observability;
pub mod workspace;

// Re-export commonly used types
pub use crate::core::{ClassLoc, LocReport, MethodLoc, SyntaxTree};

pub use crate::analyzers::csharp::{count_block_loc, count_method_loc, find_classes};
pub use crate::analyzers::{analyze_tree, CSharpParser};

pub use crate::commands::analyze_path;
pub use crate::config::{Config, MethodKeyMode, ParseFailurePolicy};
pub use crate::errors::{Error, Result};
pub use crate::io::output::{render_report, OutputWriter, TextWriter};
pub use crate::metrics::LocAggregator;
pub use crate::workspace::{InputKind, Workspace};

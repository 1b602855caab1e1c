//! Configuration for an analysis run.
//!
//! Settings come from a `.methodloc.toml` file, either passed explicitly with
//! `--config` or discovered by walking up from the current directory.

mod core;
mod loader;

pub use self::core::{Config, MethodKeyMode, ParseFailurePolicy, CONFIG_FILE_NAME};
pub use loader::{directory_ancestors, load_config, load_config_from, parse_config};

use serde::{Deserialize, Serialize};

/// File name searched for when no explicit config path is given
pub const CONFIG_FILE_NAME: &str = ".methodloc.toml";

/// How methods sharing a name inside one class are keyed in the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MethodKeyMode {
    /// Key by name and parameter types, so overloads are reported separately
    #[default]
    Signature,
    /// Key by name only; the last overload seen replaces earlier ones
    Name,
}

/// What to do when a source document cannot be parsed at all
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseFailurePolicy {
    /// Stop the run and report the offending file
    #[default]
    Abort,
    /// Log the offending file and continue without it
    Skip,
}

/// Root configuration structure for methodloc
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Method keying mode for overloads
    #[serde(default)]
    pub method_key: MethodKeyMode,

    /// Behavior when a document yields no syntax tree
    #[serde(default)]
    pub parse_failure: ParseFailurePolicy,

    /// Glob patterns, relative to each project directory, of documents to leave out
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Parse documents on the rayon thread pool
    #[serde(default = "default_parallel")]
    pub parallel: bool,
}

fn default_parallel() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            method_key: MethodKeyMode::default(),
            parse_failure: ParseFailurePolicy::default(),
            exclude: Vec::new(),
            parallel: default_parallel(),
        }
    }
}

//! Error types for loading, parsing and configuring an analysis run.
//!
//! Every variant is fatal to the current run; the binary reports the error
//! chain and exits non-zero. Usage errors (missing path argument) never reach
//! this type because `clap` rejects them before any work starts.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for methodloc operations
#[derive(Debug, Error)]
pub enum Error {
    /// A solution, project or source document could not be resolved or read
    #[error("Failed to load {}: {message}", path.display())]
    Load {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    /// A source document could not be turned into a syntax tree
    #[error("Failed to parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    /// Configuration file errors
    #[error("Configuration error in {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    /// The C# grammar could not be loaded into the parser
    #[error("Failed to set C# language: {0}")]
    Language(#[from] tree_sitter::LanguageError),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a load error without an underlying I/O cause.
    pub fn load(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Load {
            path: path.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create a load error wrapping the I/O failure that caused it.
    pub fn load_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Load {
            path: path.into(),
            message: source.to_string(),
            source: Some(source),
        }
    }

    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Path of the file the error is about, when there is one.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::Load { path, .. } | Self::Parse { path, .. } | Self::Config { path, .. } => {
                Some(path)
            }
            Self::Language(_) | Self::Io(_) => None,
        }
    }
}

/// Result type alias for methodloc operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn load_error_names_path_and_cause() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = Error::load_io("app/App.csproj", io);

        assert_eq!(err.to_string(), "Failed to load app/App.csproj: no such file");
        assert!(err.source().is_some());
        assert_eq!(err.path(), Some(std::path::Path::new("app/App.csproj")));
    }

    #[test]
    fn parse_error_without_source() {
        let err = Error::parse("Foo.cs", "parser returned no tree");
        assert_eq!(err.to_string(), "Failed to parse Foo.cs: parser returned no tree");
        assert!(err.source().is_none());
    }

    #[test]
    fn io_error_has_no_path() {
        let err: Error = std::io::Error::other("broken pipe").into();
        assert!(err.path().is_none());
    }
}

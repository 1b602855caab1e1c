use std::fs;
use std::path::{Path, PathBuf};

use super::core::{Config, CONFIG_FILE_NAME};
use crate::errors::{Error, Result};

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Parse a config from TOML text
pub fn parse_config(contents: &str) -> std::result::Result<Config, String> {
    toml::from_str::<Config>(contents).map_err(|e| e.to_string())
}

/// Load an explicitly requested config file. Any failure is an error.
pub fn load_config_from(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path).map_err(|e| Error::config(path, e.to_string()))?;
    let config = parse_config(&contents).map_err(|e| Error::config(path, e))?;
    tracing::debug!(path = %path.display(), "Loaded config");
    Ok(config)
}

/// Generate `start` and its ancestors, nearest first, up to `max_depth` entries
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Try a discovered config file. Unreadable or malformed files are reported and ignored.
fn try_load_config_from_path(config_path: &Path) -> Option<Config> {
    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            // Only log actual errors, not "file not found"
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(path = %config_path.display(), error = %e, "Failed to read config file");
            }
            return None;
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            tracing::debug!(path = %config_path.display(), "Loaded config");
            Some(config)
        }
        Err(e) => {
            tracing::warn!(
                path = %config_path.display(),
                "Invalid config file: {}. Using defaults.",
                e.trim_end()
            );
            None
        }
    }
}

/// Resolve the configuration for a run.
///
/// An explicit path must load cleanly. Otherwise the nearest `.methodloc.toml`
/// above `start` is used, falling back to defaults.
pub fn load_config(explicit: Option<&Path>, start: &Path) -> Result<Config> {
    if let Some(path) = explicit {
        return load_config_from(path);
    }

    let config = directory_ancestors(start.to_path_buf(), MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            tracing::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            Config::default()
        });
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MethodKeyMode, ParseFailurePolicy};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn empty_file_yields_defaults() {
        assert_eq!(parse_config("").unwrap(), Config::default());
    }

    #[test]
    fn parses_all_keys() {
        let config = parse_config(
            r#"
method_key = "name"
parse_failure = "skip"
exclude = ["**/*.g.cs", "Migrations/**"]
parallel = false
"#,
        )
        .unwrap();

        assert_eq!(config.method_key, MethodKeyMode::Name);
        assert_eq!(config.parse_failure, ParseFailurePolicy::Skip);
        assert_eq!(config.exclude, vec!["**/*.g.cs", "Migrations/**"]);
        assert!(!config.parallel);
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(parse_config("threshold = 3").is_err());
    }

    #[test]
    fn ancestors_are_bounded() {
        let dirs: Vec<_> = directory_ancestors(PathBuf::from("/a/b/c/d"), 3).collect();
        assert_eq!(
            dirs,
            vec![
                PathBuf::from("/a/b/c/d"),
                PathBuf::from("/a/b/c"),
                PathBuf::from("/a/b")
            ]
        );
    }

    #[test]
    fn discovers_config_in_parent_directory() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("src").join("app");
        fs::create_dir_all(&nested).unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "method_key = \"name\"\n").unwrap();

        let config = load_config(None, &nested).unwrap();
        assert_eq!(config.method_key, MethodKeyMode::Name);
    }

    #[test]
    fn malformed_discovered_config_falls_back_to_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "method_key = 42\n").unwrap();

        let config = load_config(None, temp.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn malformed_explicit_config_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("custom.toml");
        fs::write(&path, "parallel = \"yes\"\n").unwrap();

        let err = load_config(Some(&path), temp.path()).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let temp = TempDir::new().unwrap();
        let err = load_config(Some(&temp.path().join("absent.toml")), temp.path()).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }
}

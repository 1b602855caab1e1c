//! `.csproj` parsing and compile item resolution.
//!
//! Only the parts of MSBuild evaluation that decide which `.cs` files are
//! compiled are modelled: the SDK default glob, `Compile Include` and
//! `Compile Remove` items. Conditions are not evaluated; every item counts.

use crate::errors::{Error, Result};
use glob::{MatchOptions, Pattern};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

static XML_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());
static SDK_PROJECT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)<Project\b[^>]*\bSdk\s*=\s*"|<Sdk\s+Name\s*=|<Import\b[^>]*\bSdk\s*="#)
        .unwrap()
});
static DEFAULT_ITEMS_DISABLED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)<(EnableDefaultCompileItems|EnableDefaultItems)>\s*false\s*</(EnableDefaultCompileItems|EnableDefaultItems)>",
    )
    .unwrap()
});
static COMPILE_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"<Compile\b([^>]*)>").unwrap());
static ITEM_ATTRIBUTE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\b(Include|Remove)\s*=\s*"([^"]*)""#).unwrap());

/// Directories MSBuild leaves out of the default compile glob
const DEFAULT_EXCLUDED_DIRS: &[&str] = &["bin", "obj"];

/// What a project file says about its compile items
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectSpec {
    pub sdk_style: bool,
    /// SDK default `**/*.cs` glob is in effect
    pub default_items: bool,
    pub includes: Vec<String>,
    pub removes: Vec<String>,
}

/// Read the compile item declarations out of project XML
pub fn parse_project(contents: &str) -> ProjectSpec {
    let contents = XML_COMMENT.replace_all(contents, "");
    let sdk_style = SDK_PROJECT.is_match(&contents);
    let default_items = sdk_style && !DEFAULT_ITEMS_DISABLED.is_match(&contents);

    let mut spec = ProjectSpec {
        sdk_style,
        default_items,
        ..ProjectSpec::default()
    };

    for item in COMPILE_ITEM.captures_iter(&contents) {
        for attribute in ITEM_ATTRIBUTE.captures_iter(&item[1]) {
            let values = attribute[2]
                .split(';')
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(|v| v.replace('\\', "/"));
            match &attribute[1] {
                "Include" => spec.includes.extend(values),
                _ => spec.removes.extend(values),
            }
        }
    }
    spec
}

/// Resolve the `.cs` documents a project compiles, sorted and de-duplicated.
///
/// `exclude` holds extra glob patterns relative to the project directory.
pub fn project_documents(project: &Path, exclude: &[String]) -> Result<Vec<PathBuf>> {
    let contents = std::fs::read_to_string(project).map_err(|e| Error::load_io(project, e))?;
    let spec = parse_project(&contents);
    let dir = project.parent().unwrap_or_else(|| Path::new(""));

    let mut documents = BTreeSet::new();
    if spec.default_items {
        documents.extend(default_compile_items(dir));
    }
    for include in &spec.includes {
        documents.extend(resolve_include(project, dir, include)?);
    }

    let removes = compile_patterns(project, spec.removes.iter().chain(exclude));
    documents.retain(|path| {
        let relative = relative_path(dir, path);
        !removes.iter().any(|p| p.matches_with(&relative, match_options()))
    });

    tracing::debug!(
        project = %project.display(),
        sdk_style = spec.sdk_style,
        documents = documents.len(),
        "Resolved compile items"
    );
    Ok(documents.into_iter().collect())
}

fn match_options() -> MatchOptions {
    MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: false,
    }
}

fn is_excluded_dir(entry: &DirEntry) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || DEFAULT_EXCLUDED_DIRS.contains(&name.as_ref())
}

fn is_csharp_file(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("cs"))
}

/// `**/*.cs` under the project directory, minus `bin/`, `obj/` and hidden directories
fn default_compile_items(dir: &Path) -> Vec<PathBuf> {
    let relative_root = dir.as_os_str().is_empty();
    let root = if relative_root { Path::new(".") } else { dir };
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_excluded_dir(entry))
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!(error = %e, "Skipping unreadable directory entry");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file() && is_csharp_file(entry.path()))
        .map(|entry| {
            let path = entry.into_path();
            if relative_root {
                if let Ok(stripped) = path.strip_prefix(".") {
                    return stripped.to_path_buf();
                }
            }
            path
        })
        .collect()
}

fn resolve_include(project: &Path, dir: &Path, include: &str) -> Result<Vec<PathBuf>> {
    if include.contains("$(") || include.contains("@(") {
        tracing::warn!(
            project = %project.display(),
            item = include,
            "Skipping compile item that uses MSBuild properties"
        );
        return Ok(Vec::new());
    }

    if !include.contains(|c| c == '*' || c == '?') {
        let path = dir.join(include);
        if !path.is_file() {
            return Err(Error::load(
                project,
                format!("compile item {} does not exist", path.display()),
            ));
        }
        return Ok(vec![path]);
    }

    let pattern = dir.join(include);
    let paths = glob::glob_with(&pattern.to_string_lossy(), match_options())
        .map_err(|e| Error::load(project, format!("invalid compile item '{include}': {e}")))?;
    Ok(paths
        .filter_map(|entry| entry.ok())
        .filter(|path| path.is_file())
        .collect())
}

fn compile_patterns<'a>(project: &Path, patterns: impl Iterator<Item = &'a String>) -> Vec<Pattern> {
    patterns
        .filter_map(|raw| match Pattern::new(&raw.replace('\\', "/")) {
            Ok(pattern) => Some(pattern),
            Err(e) => {
                tracing::warn!(
                    project = %project.display(),
                    pattern = %raw,
                    error = %e,
                    "Ignoring invalid exclusion pattern"
                );
                None
            }
        })
        .collect()
}

/// `path` relative to `dir` with `/` separators, for glob matching
fn relative_path(dir: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(dir).unwrap_or(path);
    let relative = relative.strip_prefix(".").unwrap_or(relative);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

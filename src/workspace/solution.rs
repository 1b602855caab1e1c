//! `.sln` parsing.
//!
//! Only `Project(...)` lines matter: each names a project and its path
//! relative to the solution directory.

use crate::errors::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};

/// One `Project(...)` entry of a solution file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionEntry {
    pub name: String,
    /// Path as written in the solution, with `/` separators
    pub path: String,
}

impl SolutionEntry {
    pub fn is_csharp_project(&self) -> bool {
        self.path.to_ascii_lowercase().ends_with(".csproj")
    }
}

static PROJECT_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?m)^\s*Project\("\{[^}]*\}"\)\s*=\s*"([^"]*)"\s*,\s*"([^"]*)"\s*,\s*"\{[^}]*\}""#)
        .unwrap()
});

/// Every `Project(...)` entry in solution order
pub fn parse_solution(contents: &str) -> Vec<SolutionEntry> {
    PROJECT_LINE
        .captures_iter(contents)
        .map(|caps| SolutionEntry {
            name: caps[1].to_string(),
            path: caps[2].replace('\\', "/"),
        })
        .collect()
}

/// Paths of the C# projects a solution references, resolved against its directory.
pub fn solution_projects(solution: &Path) -> Result<Vec<PathBuf>> {
    let contents =
        std::fs::read_to_string(solution).map_err(|e| Error::load_io(solution, e))?;
    let base = solution.parent().unwrap_or_else(|| Path::new(""));

    let mut projects = Vec::new();
    for entry in parse_solution(&contents) {
        if !entry.is_csharp_project() {
            tracing::debug!(
                solution = %solution.display(),
                entry = %entry.name,
                "Ignoring solution entry that is not a C# project"
            );
            continue;
        }
        let path = base.join(&entry.path);
        if !path.is_file() {
            return Err(Error::load(
                solution,
                format!("project '{}' not found at {}", entry.name, path.display()),
            ));
        }
        projects.push(path);
    }

    if projects.is_empty() {
        return Err(Error::load(solution, "solution references no C# projects"));
    }
    Ok(projects)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    const SOLUTION: &str = indoc! {r#"
        Microsoft Visual Studio Solution File, Format Version 12.00
        # Visual Studio Version 17
        Project("{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}") = "Core", "src\Core\Core.csproj", "{11111111-1111-1111-1111-111111111111}"
        EndProject
        Project("{2150E333-8FDC-42A3-9474-1A3956D46DE8}") = "docs", "docs", "{22222222-2222-2222-2222-222222222222}"
        EndProject
        Project("{9A19103F-16F7-4668-BE54-9A1E7A4F7556}") = "Web", "src\Web\Web.csproj", "{33333333-3333-3333-3333-333333333333}"
        EndProject
        Global
        EndGlobal
    "#};

    #[test]
    fn parses_project_entries_in_order() {
        let entries = parse_solution(SOLUTION);
        assert_eq!(
            entries,
            vec![
                SolutionEntry {
                    name: "Core".to_string(),
                    path: "src/Core/Core.csproj".to_string()
                },
                SolutionEntry {
                    name: "docs".to_string(),
                    path: "docs".to_string()
                },
                SolutionEntry {
                    name: "Web".to_string(),
                    path: "src/Web/Web.csproj".to_string()
                },
            ]
        );
        assert!(!entries[1].is_csharp_project());
    }

    #[test]
    fn resolves_projects_relative_to_solution() {
        let temp = TempDir::new().unwrap();
        for dir in ["src/Core", "src/Web"] {
            std::fs::create_dir_all(temp.path().join(dir)).unwrap();
        }
        std::fs::write(temp.path().join("src/Core/Core.csproj"), "<Project />").unwrap();
        std::fs::write(temp.path().join("src/Web/Web.csproj"), "<Project />").unwrap();
        let sln = temp.path().join("App.sln");
        std::fs::write(&sln, SOLUTION).unwrap();

        let projects = solution_projects(&sln).unwrap();
        assert_eq!(
            projects,
            vec![
                temp.path().join("src/Core/Core.csproj"),
                temp.path().join("src/Web/Web.csproj"),
            ]
        );
    }

    #[test]
    fn missing_project_is_a_load_error() {
        let temp = TempDir::new().unwrap();
        let sln = temp.path().join("App.sln");
        std::fs::write(&sln, SOLUTION).unwrap();

        let err = solution_projects(&sln).unwrap_err();
        assert!(err.to_string().contains("project 'Core' not found"));
    }

    #[test]
    fn solution_without_projects_is_a_load_error() {
        let temp = TempDir::new().unwrap();
        let sln = temp.path().join("Empty.sln");
        std::fs::write(&sln, "Global\nEndGlobal\n").unwrap();

        assert!(matches!(
            solution_projects(&sln),
            Err(Error::Load { .. })
        ));
    }
}

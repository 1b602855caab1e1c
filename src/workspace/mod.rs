//! Loading the C# sources a project or solution compiles.
//!
//! A [`Workspace`] is opened once per run, holds every loaded document, and
//! is released when dropped, whichever way the run ends.

pub mod project;
pub mod solution;

pub use project::{parse_project, project_documents, ProjectSpec};
pub use solution::{parse_solution, solution_projects, SolutionEntry};

use crate::config::Config;
use crate::errors::{Error, Result};
use std::path::{Path, PathBuf};

/// How the input path is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Solution,
    Project,
}

impl InputKind {
    /// `.sln` files are solutions; anything else is treated as a project file.
    pub fn from_path(path: &Path) -> Self {
        match path.extension() {
            Some(ext) if ext.eq_ignore_ascii_case("sln") => Self::Solution,
            _ => Self::Project,
        }
    }
}

/// A loaded source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    pub path: PathBuf,
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct Project {
    pub name: String,
    pub path: PathBuf,
    pub documents: Vec<SourceDocument>,
}

impl Project {
    pub fn load(path: &Path, exclude: &[String]) -> Result<Self> {
        let documents = project_documents(path, exclude)?
            .into_iter()
            .map(|document| {
                let text = std::fs::read_to_string(&document)
                    .map_err(|e| Error::load_io(&document, e))?;
                Ok(SourceDocument {
                    path: document,
                    text,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self {
            name,
            path: path.to_path_buf(),
            documents,
        })
    }
}

#[derive(Debug)]
pub struct Workspace {
    path: PathBuf,
    kind: InputKind,
    projects: Vec<Project>,
}

impl Workspace {
    /// Load every project named by `path` and read all their documents.
    pub fn open(path: &Path, config: &Config) -> Result<Self> {
        let metadata = std::fs::metadata(path).map_err(|e| Error::load_io(path, e))?;
        if !metadata.is_file() {
            return Err(Error::load(path, "not a project or solution file"));
        }

        let kind = InputKind::from_path(path);
        let project_paths = match kind {
            InputKind::Solution => solution_projects(path)?,
            InputKind::Project => vec![path.to_path_buf()],
        };
        let projects = project_paths
            .iter()
            .map(|project| Project::load(project, &config.exclude))
            .collect::<Result<Vec<_>>>()?;

        let workspace = Self {
            path: path.to_path_buf(),
            kind,
            projects,
        };
        tracing::info!(
            path = %path.display(),
            projects = workspace.projects.len(),
            documents = workspace.document_count(),
            "Workspace opened"
        );
        Ok(workspace)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn kind(&self) -> InputKind {
        self.kind
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn document_count(&self) -> usize {
        self.projects.iter().map(|p| p.documents.len()).sum()
    }
}

impl Drop for Workspace {
    fn drop(&mut self) {
        tracing::trace!(path = %self.path.display(), "Workspace released");
    }
}

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::errors::StorageError;
use super::project::Project;
use crate::shared::json_file;

const PROJECTS_FILE_NAME: &str = "projects.json";

/// Status describing how the projects file was loaded from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ProjectsLoadStatus {
    Loaded,
    Missing,
    Invalid(String),
}

/// Result of loading the projects file.
#[derive(Debug, Clone)]
pub(crate) struct ProjectsLoad {
    projects: Vec<Project>,
    status: ProjectsLoadStatus,
}

impl ProjectsLoad {
    fn new(projects: Vec<Project>, status: ProjectsLoadStatus) -> Self {
        Self { projects, status }
    }

    /// Consume the value and return both payload and status.
    pub(crate) fn into_parts(self) -> (Vec<Project>, ProjectsLoadStatus) {
        (self.projects, self.status)
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct ProjectsFile {
    #[serde(default)]
    projects: Vec<Project>,
}

/// Default location of the projects file in the user config directory.
pub(crate) fn projects_path() -> PathBuf {
    json_file::config_dir().join(PROJECTS_FILE_NAME)
}

pub(crate) fn load_projects(
    path: &Path,
) -> Result<ProjectsLoad, StorageError> {
    let Some(data) = json_file::read_if_exists(path)? else {
        return Ok(ProjectsLoad::new(
            Vec::new(),
            ProjectsLoadStatus::Missing,
        ));
    };

    match serde_json::from_str::<ProjectsFile>(&data) {
        Ok(file) => {
            Ok(ProjectsLoad::new(file.projects, ProjectsLoadStatus::Loaded))
        },
        Err(err) => Ok(ProjectsLoad::new(
            Vec::new(),
            ProjectsLoadStatus::Invalid(format!("{err}")),
        )),
    }
}

pub(crate) fn save_projects(
    path: &Path,
    projects: &[Project],
) -> Result<(), StorageError> {
    let file = ProjectsFile {
        projects: projects.to_vec(),
    };
    let payload = serde_json::to_string_pretty(&file)?;
    json_file::write_atomic(path, payload.as_bytes())?;

    Ok(())
}

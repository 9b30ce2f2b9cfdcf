use super::project::Project;

/// Actions dispatched to the store by app-level routing.
#[derive(Debug, Clone)]
pub(crate) enum StoreAction {
    /// Replace the project list with a freshly loaded one.
    ProjectsLoaded(Vec<Project>),
    SelectProject { project_id: String },
    /// Leave every project unselected, e.g. on the home route.
    ClearSelection,
    StartCreatingNewProject,
    CancelCreatingNewProject,
    /// Append a newly created project and select it.
    AddProject(Project),
    DismissSidebarIntro,
}

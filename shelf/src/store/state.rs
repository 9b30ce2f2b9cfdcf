use super::onboarding::OnboardingStatus;
use super::project::Project;

/// Internal store data mutated only by the store reducer.
#[derive(Debug, Default)]
pub(super) struct StoreState {
    projects: Vec<Project>,
    selected_project_id: Option<String>,
    onboarding_status: OnboardingStatus,
    creating_project: bool,
}

impl StoreState {
    pub(super) fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub(super) fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }

    pub(super) fn contains(&self, id: &str) -> bool {
        self.project(id).is_some()
    }

    pub(super) fn selected_project_id(&self) -> Option<&str> {
        self.selected_project_id.as_deref()
    }

    pub(super) fn onboarding_status(&self) -> OnboardingStatus {
        self.onboarding_status
    }

    pub(super) fn is_creating_project(&self) -> bool {
        self.creating_project
    }

    pub(super) fn set_projects(&mut self, projects: Vec<Project>) {
        self.projects = projects;
    }

    pub(super) fn push_project(&mut self, project: Project) {
        self.projects.push(project);
    }

    pub(super) fn set_selected_project_id(&mut self, id: Option<String>) {
        self.selected_project_id = id;
    }

    pub(super) fn set_onboarding_status(&mut self, status: OnboardingStatus) {
        self.onboarding_status = status;
    }

    pub(super) fn set_creating_project(&mut self, creating: bool) {
        self.creating_project = creating;
    }
}

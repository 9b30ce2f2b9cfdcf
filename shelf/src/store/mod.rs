mod action;
mod errors;
mod onboarding;
mod project;
mod reducer;
mod state;
pub(crate) mod storage;

pub(crate) use action::StoreAction;
pub(crate) use errors::StoreError;
pub(crate) use onboarding::OnboardingStatus;
pub(crate) use project::Project;
use state::StoreState;

/// Application-wide state. Widgets never hold a reference to the store;
/// the app hands them read-only snapshots of what they need.
pub(crate) struct Store {
    state: StoreState,
}

impl Store {
    /// Create a store seeded with previously saved projects.
    pub(crate) fn new(projects: Vec<Project>) -> Self {
        let mut state = StoreState::default();
        reducer::load_projects(&mut state, projects);
        Self { state }
    }

    /// Apply an action, leaving state untouched when it is rejected.
    pub(crate) fn reduce(
        &mut self,
        action: StoreAction,
    ) -> Result<(), StoreError> {
        reducer::reduce(&mut self.state, action)
    }

    /// Projects in display order.
    pub(crate) fn projects(&self) -> &[Project] {
        self.state.projects()
    }

    pub(crate) fn selected_project_id(&self) -> Option<&str> {
        self.state.selected_project_id()
    }

    /// Return the currently selected project, if any.
    pub(crate) fn selected_project(&self) -> Option<&Project> {
        let id = self.state.selected_project_id()?;
        self.state.project(id)
    }

    pub(crate) fn onboarding_status(&self) -> OnboardingStatus {
        self.state.onboarding_status()
    }

    /// Return whether the sidebar should be on screen.
    pub(crate) fn is_sidebar_visible(&self) -> bool {
        self.state.onboarding_status().shows_sidebar()
    }

    /// Return whether the create-project form is open.
    pub(crate) fn is_creating_project(&self) -> bool {
        self.state.is_creating_project()
    }
}

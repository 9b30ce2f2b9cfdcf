use std::collections::HashSet;

use super::action::StoreAction;
use super::errors::StoreError;
use super::onboarding::OnboardingStatus;
use super::project::Project;
use super::state::StoreState;

/// Reduce a store action into state updates.
pub(super) fn reduce(
    state: &mut StoreState,
    action: StoreAction,
) -> Result<(), StoreError> {
    match action {
        StoreAction::ProjectsLoaded(projects) => {
            load_projects(state, projects);
            Ok(())
        },
        StoreAction::SelectProject { project_id } => {
            if !state.contains(&project_id) {
                return Err(StoreError::UnknownProject { id: project_id });
            }
            state.set_selected_project_id(Some(project_id));
            Ok(())
        },
        StoreAction::ClearSelection => {
            state.set_selected_project_id(None);
            Ok(())
        },
        StoreAction::StartCreatingNewProject => {
            state.set_creating_project(true);
            if state.onboarding_status() == OnboardingStatus::BrandNew {
                state.set_onboarding_status(
                    OnboardingStatus::CreatingFirstProject,
                );
            }
            Ok(())
        },
        StoreAction::CancelCreatingNewProject => {
            state.set_creating_project(false);
            if state.onboarding_status()
                == OnboardingStatus::CreatingFirstProject
            {
                state.set_onboarding_status(OnboardingStatus::BrandNew);
            }
            Ok(())
        },
        StoreAction::AddProject(project) => add_project(state, project),
        StoreAction::DismissSidebarIntro => {
            if state.onboarding_status() == OnboardingStatus::IntroducingSidebar
            {
                state.set_onboarding_status(OnboardingStatus::Done);
            }
            Ok(())
        },
    }
}

/// Replace the project list, keeping a valid selection when possible.
/// Entries repeating an earlier id are dropped.
pub(super) fn load_projects(
    state: &mut StoreState,
    mut projects: Vec<Project>,
) {
    let mut seen = HashSet::new();
    projects.retain(|project| {
        let is_new = seen.insert(project.id.clone());
        if !is_new {
            log::warn!("skipping duplicate project id `{}`", project.id);
        }
        is_new
    });

    let keep_selection = state
        .selected_project_id()
        .is_some_and(|id| projects.iter().any(|project| project.id == id));
    let first_id = projects.first().map(|project| project.id.clone());
    let has_projects = first_id.is_some();

    state.set_projects(projects);
    if !keep_selection {
        state.set_selected_project_id(first_id);
    }

    if has_projects && state.onboarding_status() == OnboardingStatus::BrandNew
    {
        state.set_onboarding_status(OnboardingStatus::Done);
    }
}

fn add_project(
    state: &mut StoreState,
    project: Project,
) -> Result<(), StoreError> {
    if state.contains(&project.id) {
        return Err(StoreError::DuplicateProject { id: project.id });
    }

    let id = project.id.clone();
    state.push_project(project);
    state.set_selected_project_id(Some(id));
    state.set_creating_project(false);

    if state.onboarding_status() == OnboardingStatus::CreatingFirstProject {
        state.set_onboarding_status(OnboardingStatus::IntroducingSidebar);
    }

    Ok(())
}

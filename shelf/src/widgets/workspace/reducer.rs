use iced::Task;

use super::event::{WorkspaceEffect, WorkspaceEvent, WorkspaceIntent};
use super::state::WorkspaceState;
use crate::store::{OnboardingStatus, Project};

const EMPTY_NAME_MESSAGE: &str = "Give the project a name first.";

/// Read-only context for workspace reduction and rendering.
#[derive(Debug, Clone, Copy)]
pub(crate) struct WorkspaceCtx<'a> {
    pub(crate) selected_project: Option<&'a Project>,
    pub(crate) is_creating_project: bool,
    pub(crate) onboarding_status: OnboardingStatus,
    pub(crate) can_go_back: bool,
}

/// Reduce a workspace intent into state updates and effect events.
pub(crate) fn reduce(
    state: &mut WorkspaceState,
    event: WorkspaceIntent,
) -> Task<WorkspaceEvent> {
    match event {
        WorkspaceIntent::NameChanged(name) => {
            state.set_draft_name(name);
            Task::none()
        },
        WorkspaceIntent::CreatePressed => match submit(state) {
            Some(effect) => Task::done(WorkspaceEvent::Effect(effect)),
            None => Task::none(),
        },
        WorkspaceIntent::CancelPressed => {
            state.reset();
            Task::done(WorkspaceEvent::Effect(
                WorkspaceEffect::CancelCreating,
            ))
        },
        WorkspaceIntent::StartCreatingPressed => {
            state.reset();
            Task::done(WorkspaceEvent::Effect(
                WorkspaceEffect::StartCreating,
            ))
        },
        WorkspaceIntent::BackPressed => {
            Task::done(WorkspaceEvent::Effect(
                WorkspaceEffect::NavigateBack,
            ))
        },
        WorkspaceIntent::ProjectCreated => {
            state.reset();
            Task::none()
        },
        WorkspaceIntent::CreateFailed { message } => {
            state.set_error(message);
            Task::none()
        },
    }
}

fn submit(state: &mut WorkspaceState) -> Option<WorkspaceEffect> {
    let name = state.draft_name().trim();
    if name.is_empty() {
        state.set_error(String::from(EMPTY_NAME_MESSAGE));
        return None;
    }

    Some(WorkspaceEffect::CreateProject {
        name: name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::{EMPTY_NAME_MESSAGE, WorkspaceCtx, reduce, submit};
    use crate::store::{OnboardingStatus, Project};
    use crate::widgets::workspace::state::WorkspaceState;
    use crate::widgets::workspace::{
        WorkspaceEffect, WorkspaceIntent, WorkspaceViewModel, WorkspaceWidget,
    };

    #[test]
    fn given_blank_draft_when_submitted_then_error_is_set() {
        let mut state = WorkspaceState::default();
        state.set_draft_name(String::from("   "));

        assert_eq!(submit(&mut state), None);
        assert_eq!(state.error(), Some(EMPTY_NAME_MESSAGE));
    }

    #[test]
    fn given_named_draft_when_submitted_then_trimmed_name_is_created() {
        let mut state = WorkspaceState::default();
        state.set_draft_name(String::from("  Hello World "));

        assert_eq!(
            submit(&mut state),
            Some(WorkspaceEffect::CreateProject {
                name: String::from("Hello World"),
            })
        );
        assert_eq!(state.error(), None);
    }

    #[test]
    fn given_error_when_name_changes_then_error_is_cleared() {
        let mut state = WorkspaceState::default();
        let _ = reduce(
            &mut state,
            WorkspaceIntent::CreateFailed {
                message: String::from("taken"),
            },
        );

        let _ = reduce(&mut state, WorkspaceIntent::NameChanged("N".into()));

        assert_eq!(state.error(), None);
        assert_eq!(state.draft_name(), "N");
    }

    #[test]
    fn given_draft_when_project_created_then_form_is_reset() {
        let mut state = WorkspaceState::default();
        state.set_draft_name(String::from("Notes"));

        let _ = reduce(&mut state, WorkspaceIntent::ProjectCreated);

        assert_eq!(state.draft_name(), "");
    }

    #[test]
    fn given_creating_flag_when_building_vm_then_form_is_shown() {
        let widget = WorkspaceWidget::new();
        let ctx = WorkspaceCtx {
            selected_project: None,
            is_creating_project: true,
            onboarding_status: OnboardingStatus::CreatingFirstProject,
            can_go_back: false,
        };

        assert_eq!(
            widget.vm(&ctx),
            WorkspaceViewModel::CreateProject {
                draft_name: "",
                error: None,
                is_first_project: true,
            }
        );
    }

    #[test]
    fn given_selected_project_when_building_vm_then_summary_is_shown() {
        let widget = WorkspaceWidget::new();
        let project = Project {
            id: String::from("notes"),
            name: String::from("Notes"),
            icon: None,
        };
        let ctx = WorkspaceCtx {
            selected_project: Some(&project),
            is_creating_project: false,
            onboarding_status: OnboardingStatus::Done,
            can_go_back: true,
        };

        assert_eq!(
            widget.vm(&ctx),
            WorkspaceViewModel::Project {
                name: "Notes",
                url: String::from("/project/notes"),
                can_go_back: true,
            }
        );
    }

    #[test]
    fn given_nothing_selected_when_building_vm_then_welcome_is_shown() {
        let widget = WorkspaceWidget::new();
        let ctx = WorkspaceCtx {
            selected_project: None,
            is_creating_project: false,
            onboarding_status: OnboardingStatus::BrandNew,
            can_go_back: false,
        };

        assert_eq!(widget.vm(&ctx), WorkspaceViewModel::Welcome);
    }
}

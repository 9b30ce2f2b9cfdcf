mod event;
mod model;
mod reducer;
mod state;
pub(crate) mod view;

pub(crate) use event::{WorkspaceEffect, WorkspaceEvent, WorkspaceIntent};
use iced::Task;
pub(crate) use model::WorkspaceViewModel;
pub(crate) use reducer::WorkspaceCtx;
use state::WorkspaceState;

use crate::routing::build_url_for_project_id;
use crate::store::OnboardingStatus;

/// Content pane to the right of the sidebar.
pub(crate) struct WorkspaceWidget {
    state: WorkspaceState,
}

impl WorkspaceWidget {
    pub(crate) fn new() -> Self {
        Self {
            state: WorkspaceState::default(),
        }
    }

    /// Reduce an intent event into state updates and effect events.
    pub(crate) fn reduce(
        &mut self,
        event: WorkspaceIntent,
    ) -> Task<WorkspaceEvent> {
        reducer::reduce(&mut self.state, event)
    }

    /// Build a read-only view model for the presentation layer.
    pub(crate) fn vm<'a>(
        &'a self,
        ctx: &WorkspaceCtx<'a>,
    ) -> WorkspaceViewModel<'a> {
        if ctx.is_creating_project {
            return WorkspaceViewModel::CreateProject {
                draft_name: self.state.draft_name(),
                error: self.state.error(),
                is_first_project: ctx.onboarding_status
                    == OnboardingStatus::CreatingFirstProject,
            };
        }

        match ctx.selected_project {
            Some(project) => WorkspaceViewModel::Project {
                name: &project.name,
                url: build_url_for_project_id(&project.id),
                can_go_back: ctx.can_go_back,
            },
            None => WorkspaceViewModel::Welcome,
        }
    }
}

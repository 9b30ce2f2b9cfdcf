use iced::Task;

use crate::app::{App, AppEvent};
use crate::routing::Location;
use crate::store::{Store, StoreAction};
use crate::widgets::workspace::{
    WorkspaceCtx, WorkspaceEffect, WorkspaceEvent, WorkspaceIntent,
};

/// Build the read-only workspace context from app state.
pub(crate) fn workspace_ctx<'a>(
    store: &'a Store,
    location: &Location,
) -> WorkspaceCtx<'a> {
    WorkspaceCtx {
        selected_project: store.selected_project(),
        is_creating_project: store.is_creating_project(),
        onboarding_status: store.onboarding_status(),
        can_go_back: location.can_go_back(),
    }
}

/// Route a workspace event through widget reduction or app orchestration.
pub(crate) fn route(app: &mut App, event: WorkspaceEvent) -> Task<AppEvent> {
    match event {
        WorkspaceEvent::Intent(event) => route_intent(app, event),
        WorkspaceEvent::Effect(effect) => route_effect(effect),
    }
}

pub(crate) fn route_intent(
    app: &mut App,
    event: WorkspaceIntent,
) -> Task<AppEvent> {
    app.widgets.workspace.reduce(event).map(AppEvent::Workspace)
}

fn route_effect(event: WorkspaceEffect) -> Task<AppEvent> {
    use WorkspaceEffect as E;

    match event {
        E::CreateProject { name } => {
            Task::done(AppEvent::CreateProject { name })
        },
        E::CancelCreating => {
            Task::done(AppEvent::Store(StoreAction::CancelCreatingNewProject))
        },
        E::StartCreating => {
            Task::done(AppEvent::Store(StoreAction::StartCreatingNewProject))
        },
        E::NavigateBack => Task::done(AppEvent::NavigateBack),
    }
}

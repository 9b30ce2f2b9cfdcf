use std::time::Instant;

use iced::Task;

use crate::app::{App, AppEvent};
use crate::config::ShelfConfig;
use crate::store::{Store, StoreAction};
use crate::widgets::sidebar::{
    SidebarCtx, SidebarEffect, SidebarEvent, SidebarIntent,
};

/// Build the read-only sidebar context from app state.
pub(crate) fn sidebar_ctx<'a>(
    store: &'a Store,
    config: &ShelfConfig,
) -> SidebarCtx<'a> {
    SidebarCtx {
        projects: store.projects(),
        selected_project_id: store.selected_project_id(),
        onboarding_status: store.onboarding_status(),
        is_visible: store.is_sidebar_visible(),
        animations_enabled: config.animations_enabled,
    }
}

/// Route a sidebar event through widget reduction or app orchestration.
pub(crate) fn route(app: &mut App, event: SidebarEvent) -> Task<AppEvent> {
    match event {
        SidebarEvent::Intent(event) => route_intent(app, event),
        SidebarEvent::Effect(effect) => route_effect(effect),
    }
}

/// Hand the sidebar the current store snapshot.
pub(crate) fn sync(app: &mut App) -> Task<AppEvent> {
    route_intent(app, SidebarIntent::Sync { at: Instant::now() })
}

fn route_intent(app: &mut App, event: SidebarIntent) -> Task<AppEvent> {
    let ctx = sidebar_ctx(&app.store, &app.config);
    let before = app.widgets.sidebar.intro_step();
    let task = app.widgets.sidebar.reduce(event, &ctx).map(AppEvent::Sidebar);

    let after = app.widgets.sidebar.intro_step();
    if before != after {
        log::debug!("sidebar intro moved from {before:?} to {after:?}");
    }
    task
}

fn route_effect(event: SidebarEffect) -> Task<AppEvent> {
    use SidebarEffect as E;

    match event {
        E::Navigate { url } => Task::done(AppEvent::Navigate { url }),
        E::StartCreatingNewProject => {
            Task::done(AppEvent::Store(StoreAction::StartCreatingNewProject))
        },
        E::DismissSidebarIntro => {
            Task::done(AppEvent::Store(StoreAction::DismissSidebarIntro))
        },
    }
}

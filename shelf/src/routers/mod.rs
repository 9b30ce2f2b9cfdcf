use iced::Task;

use crate::app::{App, AppEvent};

pub(crate) mod navigation;
pub(crate) mod project;
pub(crate) mod sidebar;
pub(crate) mod store;
pub(crate) mod workspace;

pub(crate) fn route(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    match event {
        AppEvent::IcedReady => navigation::open_initial_project(app),
        // Sidebar widget
        AppEvent::Sidebar(event) => sidebar::route(app, event),
        // Workspace widget
        AppEvent::Workspace(event) => workspace::route(app, event),
        // Store and navigation
        AppEvent::Store(action) => store::route(app, action),
        AppEvent::Navigate { url } => navigation::navigate(app, url),
        AppEvent::NavigateBack => navigation::back(app),
        AppEvent::CreateProject { name } => project::create(app, name),
    }
}

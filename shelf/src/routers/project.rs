use iced::Task;

use super::{sidebar, store, workspace};
use crate::app::{App, AppEvent};
use crate::routing::build_url_for_project_id;
use crate::store::{Project, StoreAction, storage};
use crate::widgets::workspace::WorkspaceIntent;

/// Create a project from the form, select it, and save the project list.
pub(crate) fn create(app: &mut App, name: String) -> Task<AppEvent> {
    let project = match Project::from_name(&name) {
        Ok(project) => project,
        Err(err) => return reject(app, err.to_string()),
    };

    let url = build_url_for_project_id(&project.id);
    if let Err(err) = store::apply(app, StoreAction::AddProject(project)) {
        log::warn!("project was not created: {err}");
        return reject(app, err.to_string());
    }

    persist(app);
    log::info!("created project at {url}");

    Task::batch([
        workspace::route_intent(app, WorkspaceIntent::ProjectCreated),
        sidebar::sync(app),
        Task::done(AppEvent::Navigate { url }),
    ])
}

fn reject(app: &mut App, message: String) -> Task<AppEvent> {
    workspace::route_intent(app, WorkspaceIntent::CreateFailed { message })
}

fn persist(app: &App) {
    if let Err(err) =
        storage::save_projects(app.projects_path(), app.store.projects())
    {
        log::warn!("failed to save projects: {err}");
    }
}

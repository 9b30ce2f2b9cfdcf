use iced::Task;

use super::store;
use crate::app::{App, AppEvent};
use crate::routing::build_url_for_project_id;
use crate::store::StoreAction;

/// Show the sidebar and open the project selected at startup.
pub(crate) fn open_initial_project(app: &mut App) -> Task<AppEvent> {
    let sync = super::sidebar::sync(app);
    let Some(project_id) = app.store.selected_project_id() else {
        return sync;
    };

    let url = build_url_for_project_id(project_id);
    Task::batch([sync, Task::done(AppEvent::Navigate { url })])
}

/// Move to `url` and select the project it addresses.
pub(crate) fn navigate(app: &mut App, url: String) -> Task<AppEvent> {
    if !app.location.push(url) {
        return Task::none();
    }

    log::debug!("navigated to {}", app.location.path());
    select_current_project(app)
}

/// Return to the previous location.
pub(crate) fn back(app: &mut App) -> Task<AppEvent> {
    match app.location.back() {
        Some(path) => log::debug!("navigated back to {path}"),
        None => return Task::none(),
    }

    select_current_project(app)
}

fn select_current_project(app: &mut App) -> Task<AppEvent> {
    let project_id = app.location.project_id();
    if app.store.selected_project_id() == project_id {
        return Task::none();
    }

    let action = match project_id {
        Some(project_id) => StoreAction::SelectProject {
            project_id: project_id.to_string(),
        },
        None => StoreAction::ClearSelection,
    };
    store::route(app, action)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use super::{back, navigate, open_initial_project};
    use crate::app::App;
    use crate::config::ShelfConfig;
    use crate::routers::sidebar::sidebar_ctx;
    use crate::routers::workspace::workspace_ctx;
    use crate::routing::build_url_for_project_id;
    use crate::shared::json_file::test_temp_dir;
    use crate::store::{Project, Store};
    use crate::widgets::workspace::WorkspaceViewModel;

    fn app_with_projects(label: &str) -> (App, PathBuf) {
        let root = test_temp_dir(label);
        let projects = ["Alpha", "Beta"]
            .into_iter()
            .map(|name| Project::from_name(name).expect("valid name"))
            .collect();
        let mut app = App::with_store(
            ShelfConfig::default(),
            Store::new(projects),
            root.join("projects.json"),
        );
        let _ = open_initial_project(&mut app);
        (app, root)
    }

    #[test]
    fn given_project_url_when_navigated_then_project_is_selected() {
        let (mut app, root) = app_with_projects("nav_select");
        assert_eq!(app.store.selected_project_id(), Some("alpha"));

        let _ = navigate(&mut app, build_url_for_project_id("beta"));

        assert_eq!(app.location.path(), "/project/beta");
        assert_eq!(app.store.selected_project_id(), Some("beta"));
        assert_eq!(app.title(), "Beta - Shelf");

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_unknown_project_url_when_navigated_then_selection_is_kept() {
        let (mut app, root) = app_with_projects("nav_unknown");

        let _ = navigate(&mut app, build_url_for_project_id("ghost"));

        assert_eq!(app.location.path(), "/project/ghost");
        assert_eq!(app.store.selected_project_id(), Some("alpha"));

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_project_history_when_going_back_then_previous_project_returns() {
        let (mut app, root) = app_with_projects("nav_back");
        let _ = navigate(&mut app, build_url_for_project_id("alpha"));
        let _ = navigate(&mut app, build_url_for_project_id("beta"));

        let _ = back(&mut app);

        assert_eq!(app.location.path(), "/project/alpha");
        assert_eq!(app.store.selected_project_id(), Some("alpha"));

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_back_to_home_route_when_navigated_then_selection_is_cleared() {
        let (mut app, root) = app_with_projects("nav_home");
        let _ = navigate(&mut app, build_url_for_project_id("alpha"));

        let _ = back(&mut app);

        assert_eq!(app.location.path(), "/");
        assert_eq!(app.store.selected_project_id(), None);
        assert_eq!(app.title(), "Shelf");
        let ctx = workspace_ctx(&app.store, &app.location);
        assert_eq!(app.widgets.workspace.vm(&ctx), WorkspaceViewModel::Welcome);
        let sidebar =
            app.widgets.sidebar.vm(&sidebar_ctx(&app.store, &app.config));
        assert!(sidebar.projects.iter().all(|link| !link.is_selected));

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }
}

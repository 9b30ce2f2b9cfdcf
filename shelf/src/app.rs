#[path = "subscription.rs"]
mod subscription;
#[path = "update.rs"]
mod update;
#[path = "view.rs"]
pub(crate) mod view;

use std::path::{Path, PathBuf};

use iced::{Element, Subscription, Task, Theme};

use crate::config::ShelfConfig;
use crate::routing::Location;
use crate::store::storage::{self, ProjectsLoadStatus};
use crate::store::{Project, Store, StoreAction};
use crate::theme::app_theme;
use crate::widgets::Widgets;
use crate::widgets::sidebar::{SidebarEvent, SidebarWidget};
use crate::widgets::workspace::{WorkspaceEvent, WorkspaceWidget};

pub(crate) const MIN_WINDOW_WIDTH: f32 = 640.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 420.0;

const APP_TITLE: &str = "Shelf";

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    IcedReady,
    // Sidebar widget
    Sidebar(SidebarEvent),
    // Workspace widget
    Workspace(WorkspaceEvent),
    // Store and navigation
    Store(StoreAction),
    Navigate { url: String },
    NavigateBack,
    CreateProject { name: String },
}

pub(crate) struct App {
    pub(crate) config: ShelfConfig,
    pub(crate) store: Store,
    pub(crate) location: Location,
    pub(crate) widgets: Widgets,
    projects_path: PathBuf,
}

impl App {
    pub(crate) fn new() -> (Self, Task<AppEvent>) {
        let config = ShelfConfig::load();
        let projects_path = storage::projects_path();
        let projects = load_saved_projects(&projects_path);

        let app =
            App::with_store(config, Store::new(Vec::new()), projects_path);

        let boot =
            Task::done(AppEvent::Store(StoreAction::ProjectsLoaded(projects)))
                .chain(Task::done(AppEvent::IcedReady));

        (app, boot)
    }

    /// Build an app around an existing store, saving projects to
    /// `projects_path`.
    pub(crate) fn with_store(
        config: ShelfConfig,
        store: Store,
        projects_path: PathBuf,
    ) -> Self {
        App {
            config,
            store,
            location: Location::default(),
            widgets: Widgets {
                sidebar: SidebarWidget::new(),
                workspace: WorkspaceWidget::new(),
            },
            projects_path,
        }
    }

    /// File the project list is saved to.
    pub(crate) fn projects_path(&self) -> &Path {
        &self.projects_path
    }

    /// Window title, naming the selected project when there is one.
    pub(crate) fn title(&self) -> String {
        match self.store.selected_project() {
            Some(project) => format!("{} - {APP_TITLE}", project.name),
            None => String::from(APP_TITLE),
        }
    }

    pub(crate) fn theme(&self) -> Theme {
        app_theme()
    }

    /// Return active subscriptions.
    pub(crate) fn subscription(&self) -> Subscription<AppEvent> {
        subscription::subscription(self)
    }

    /// Handle an incoming event.
    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        update::update(self, event)
    }

    /// Render the root view.
    pub(crate) fn view(&self) -> Element<'_, AppEvent, Theme, iced::Renderer> {
        view::view(self)
    }
}

fn load_saved_projects(path: &Path) -> Vec<Project> {
    match storage::load_projects(path) {
        Ok(load) => {
            let (projects, status) = load.into_parts();
            match status {
                ProjectsLoadStatus::Loaded => {
                    log::info!("loaded {} projects", projects.len());
                },
                ProjectsLoadStatus::Missing => {
                    log::info!("no projects file yet, starting fresh");
                },
                ProjectsLoadStatus::Invalid(reason) => {
                    log::warn!("projects file is invalid: {reason}");
                },
            }
            projects
        },
        Err(err) => {
            log::warn!("failed to read projects file: {err}");
            Vec::new()
        },
    }
}

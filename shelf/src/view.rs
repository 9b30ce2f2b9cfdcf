use iced::widget::{Stack, row};
use iced::{Element, Length, Theme};

use super::{App, AppEvent};
use crate::components::primitive::spacer::{self, SpacerProps};
use crate::routers::sidebar::sidebar_ctx;
use crate::routers::workspace::workspace_ctx;
use crate::widgets::sidebar::{self, SIDEBAR_WIDTH, SidebarEvent};
use crate::widgets::workspace::{self, WorkspaceEvent};

/// Render the root application view.
pub(crate) fn view(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let sidebar_vm =
        app.widgets.sidebar.vm(&sidebar_ctx(&app.store, &app.config));
    let workspace_vm = app
        .widgets
        .workspace
        .vm(&workspace_ctx(&app.store, &app.location));

    let mut content_row = row![].width(Length::Fill).height(Length::Fill);
    if sidebar_vm.reserves_space {
        content_row =
            content_row.push(spacer::view(SpacerProps::column(SIDEBAR_WIDTH)));
    }
    content_row = content_row.push(
        workspace::view::view(workspace::view::WorkspaceViewProps {
            vm: workspace_vm,
        })
        .map(|event| AppEvent::Workspace(WorkspaceEvent::Intent(event))),
    );

    let overlay =
        sidebar::view::view(sidebar::view::SidebarViewProps { vm: sidebar_vm })
            .map(|event| AppEvent::Sidebar(SidebarEvent::Intent(event)));

    let layers: Vec<Element<'_, AppEvent, Theme, iced::Renderer>> =
        vec![content_row.into(), overlay];

    Stack::with_children(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

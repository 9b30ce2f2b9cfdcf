pub(crate) mod create_project_form;
pub(crate) mod project_summary;
pub(crate) mod welcome;

use iced::widget::container;
use iced::{Element, Length, Theme, alignment};

use super::event::WorkspaceIntent;
use super::model::WorkspaceViewModel;
use crate::theme::colors;

const PANE_PADDING: f32 = 32.0;

/// Props for the workspace pane.
#[derive(Debug, Clone)]
pub(crate) struct WorkspaceViewProps<'a> {
    pub(crate) vm: WorkspaceViewModel<'a>,
}

/// Render the content pane for the current view model.
pub(crate) fn view(
    props: WorkspaceViewProps<'_>,
) -> Element<'_, WorkspaceIntent, Theme, iced::Renderer> {
    let content = match props.vm {
        WorkspaceViewModel::CreateProject {
            draft_name,
            error,
            is_first_project,
        } => create_project_form::view(
            create_project_form::CreateProjectFormProps {
                draft_name,
                error,
                is_first_project,
            },
        ),
        WorkspaceViewModel::Project {
            name,
            url,
            can_go_back,
        } => project_summary::view(project_summary::ProjectSummaryProps {
            name,
            url,
            can_go_back,
        }),
        WorkspaceViewModel::Welcome => welcome::view(welcome::WelcomeProps {
            title: "Welcome to Shelf",
            body: "Projects you create show up in a sidebar on the left.",
        }),
    };

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(PANE_PADDING)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(|_| container::Style {
            background: Some(colors::GRAY_100.into()),
            ..Default::default()
        })
        .into()
}

use iced::widget::{button, column, text};
use iced::{Border, Element, Theme, alignment};

use crate::theme::colors;
use crate::widgets::workspace::event::WorkspaceIntent;

/// Props for the first-run welcome screen.
#[derive(Debug, Clone, Copy)]
pub(crate) struct WelcomeProps<'a> {
    pub(crate) title: &'a str,
    pub(crate) body: &'a str,
}

/// Render the welcome screen with its call to action.
pub(crate) fn view(
    props: WelcomeProps<'_>,
) -> Element<'_, WorkspaceIntent, Theme, iced::Renderer> {
    let create = button(
        text("Create your first project")
            .size(15.0)
            .color(colors::WHITE),
    )
    .on_press(WorkspaceIntent::StartCreatingPressed)
    .padding([10, 18])
    .style(|_, _| button::Style {
        background: Some(colors::BLUE_500.into()),
        border: Border {
            radius: 6.0.into(),
            ..Default::default()
        },
        ..Default::default()
    });

    column![
        text(props.title).size(28.0).color(colors::GRAY_900),
        text(props.body).size(15.0).color(colors::GRAY_700),
        create,
    ]
    .spacing(16.0)
    .align_x(alignment::Horizontal::Center)
    .into()
}

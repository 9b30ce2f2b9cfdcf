use iced::widget::{button, column, text};
use iced::{Border, Element, Theme};

use crate::theme::colors;
use crate::widgets::workspace::event::WorkspaceIntent;

/// Props for the selected project summary.
#[derive(Debug, Clone)]
pub(crate) struct ProjectSummaryProps<'a> {
    pub(crate) name: &'a str,
    pub(crate) url: String,
    pub(crate) can_go_back: bool,
}

pub(crate) fn view(
    props: ProjectSummaryProps<'_>,
) -> Element<'_, WorkspaceIntent, Theme, iced::Renderer> {
    let mut content = column![
        text(props.name).size(28.0).color(colors::GRAY_900),
        text(props.url).size(14.0).color(colors::GRAY_700),
    ]
    .spacing(8.0);

    if props.can_go_back {
        content = content.push(
            button(text("Back").size(14.0).color(colors::BLUE_700))
                .on_press(WorkspaceIntent::BackPressed)
                .padding([4, 0])
                .style(|_, _| button::Style {
                    background: None,
                    border: Border::default(),
                    ..Default::default()
                }),
        );
    }

    content.into()
}

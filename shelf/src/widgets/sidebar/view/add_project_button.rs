use iced::widget::{button, container, text};
use iced::{Border, Color, Element, Length, Theme, alignment};

use crate::components::primitive::spacer::{self, SpacerProps};
use crate::theme::colors;
use crate::widgets::sidebar::event::SidebarIntent;

const GLYPH_SCALE: f32 = 0.6;
const BORDER_WIDTH: f32 = 2.0;
const CORNER_RADIUS: f32 = 10.0;

/// Props for the add-project control.
#[derive(Debug, Clone, Copy)]
pub(crate) struct AddProjectButtonProps {
    pub(crate) size: f32,
    /// Hidden controls keep their slot so the column does not jump.
    pub(crate) is_visible: bool,
}

/// Render the control that starts creating a new project.
pub(crate) fn view<'a>(
    props: AddProjectButtonProps,
) -> Element<'a, SidebarIntent, Theme, iced::Renderer> {
    if !props.is_visible {
        return spacer::view(SpacerProps::square(props.size));
    }

    let glyph = container(
        text("+")
            .size(props.size * GLYPH_SCALE)
            .color(colors::WHITE),
    )
    .width(Length::Fixed(props.size))
    .height(Length::Fixed(props.size))
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center);

    button(glyph)
        .on_press(SidebarIntent::AddProjectPressed)
        .padding(0)
        .style(|_, status| {
            let background = match status {
                button::Status::Hovered | button::Status::Pressed => {
                    Some(Color { a: 0.15, ..colors::WHITE }.into())
                },
                _ => None,
            };

            button::Style {
                background,
                border: Border {
                    color: Color { a: 0.6, ..colors::WHITE },
                    width: BORDER_WIDTH,
                    radius: CORNER_RADIUS.into(),
                },
                ..Default::default()
            }
        })
        .into()
}

use iced::widget::{button, column, container, row, text};
use iced::{Border, Element, Length, Shadow, Theme, Vector, alignment};

use crate::theme::colors;
use crate::widgets::sidebar::event::SidebarIntent;

const BLURB_WIDTH: f32 = 260.0;
const BLURB_PADDING: f32 = 16.0;
const BLURB_SPACING: f32 = 8.0;
const TITLE_SIZE: f32 = 16.0;
const BODY_SIZE: f32 = 13.0;

/// Props for the onboarding blurb.
#[derive(Debug, Clone, Copy)]
pub(crate) struct IntroductionBlurbProps<'a> {
    pub(crate) title: &'a str,
    pub(crate) body: &'a str,
}

/// Render the card explaining the sidebar to a new user.
pub(crate) fn view(
    props: IntroductionBlurbProps<'_>,
) -> Element<'_, SidebarIntent, Theme, iced::Renderer> {
    let dismiss = button(text("Got it").size(BODY_SIZE).color(colors::WHITE))
        .on_press(SidebarIntent::DismissIntroPressed)
        .padding([6, 14])
        .style(|_, _| button::Style {
            background: Some(colors::BLUE_500.into()),
            border: Border {
                radius: 4.0.into(),
                ..Default::default()
            },
            ..Default::default()
        });

    let content = column![
        text(props.title).size(TITLE_SIZE).color(colors::GRAY_900),
        text(props.body).size(BODY_SIZE).color(colors::GRAY_700),
        row![dismiss]
            .width(Length::Fill)
            .align_y(alignment::Vertical::Center),
    ]
    .spacing(BLURB_SPACING);

    container(content)
        .width(Length::Fixed(BLURB_WIDTH))
        .padding(BLURB_PADDING)
        .style(|_| container::Style {
            background: Some(colors::WHITE.into()),
            border: Border {
                color: colors::GRAY_400,
                width: 1.0,
                radius: 8.0.into(),
            },
            shadow: Shadow {
                color: colors::GRAY_900.scale_alpha(0.25),
                offset: Vector::new(0.0, 2.0),
                blur_radius: 8.0,
            },
            ..Default::default()
        })
        .into()
}

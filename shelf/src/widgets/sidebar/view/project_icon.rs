use iced::widget::image::{Handle, Image};
use iced::widget::{button, container, text, tooltip};
use iced::{Border, Color, Element, Length, Theme, alignment};

use crate::theme::{colors, monogram_color};
use crate::widgets::sidebar::event::SidebarIntent;
use crate::widgets::sidebar::model::SidebarProjectLink;

const RING_WIDTH: f32 = 3.0;
const RING_GAP: f32 = 2.0;
const ICON_RADIUS: f32 = 10.0;
const MONOGRAM_SCALE: f32 = 0.45;
const TOOLTIP_GAP: f32 = 10.0;
const TOOLTIP_PADDING: f32 = 6.0;

/// Props for a single project icon.
#[derive(Debug, Clone)]
pub(crate) struct ProjectIconProps<'a> {
    pub(crate) link: SidebarProjectLink<'a>,
    pub(crate) size: f32,
}

/// Render a project icon linking to the project page.
pub(crate) fn view(
    props: ProjectIconProps<'_>,
) -> Element<'_, SidebarIntent, Theme, iced::Renderer> {
    let ProjectIconProps { link, size } = props;
    let inner = size - 2.0 * (RING_WIDTH + RING_GAP);

    let face: Element<'_, SidebarIntent, Theme, iced::Renderer> =
        match link.icon {
            Some(path) => Image::new(Handle::from_path(path))
                .width(Length::Fixed(inner))
                .height(Length::Fixed(inner))
                .into(),
            None => monogram(link.id, link.name, inner),
        };

    let ring_color = if link.is_selected {
        colors::WHITE
    } else {
        Color::TRANSPARENT
    };

    let ringed = container(face)
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(move |_| container::Style {
            border: Border {
                color: ring_color,
                width: RING_WIDTH,
                radius: (ICON_RADIUS + RING_WIDTH + RING_GAP).into(),
            },
            ..Default::default()
        });

    let link_button = button(ringed)
        .on_press(SidebarIntent::LinkPressed { url: link.url })
        .padding(0)
        .style(|_, _| button::Style {
            background: None,
            border: Border::default(),
            ..Default::default()
        });

    let label = container(text(link.name).size(13.0).color(colors::WHITE))
        .padding(TOOLTIP_PADDING)
        .style(|_| container::Style {
            background: Some(colors::GRAY_900.into()),
            border: Border {
                radius: 4.0.into(),
                ..Default::default()
            },
            ..Default::default()
        });

    tooltip(link_button, label, tooltip::Position::Right)
        .gap(TOOLTIP_GAP)
        .into()
}

fn monogram<'a>(
    id: &str,
    name: &'a str,
    size: f32,
) -> Element<'a, SidebarIntent, Theme, iced::Renderer> {
    let initial: String = name
        .chars()
        .find(|ch| !ch.is_whitespace())
        .map(|ch| ch.to_uppercase().collect())
        .unwrap_or_default();
    let background = monogram_color(id);

    container(text(initial).size(size * MONOGRAM_SCALE).color(colors::WHITE))
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(move |_| container::Style {
            background: Some(background.into()),
            border: Border {
                radius: ICON_RADIUS.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

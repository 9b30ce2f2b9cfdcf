pub(crate) mod add_project_button;
pub(crate) mod introduction_blurb;
pub(crate) mod project_icon;

use iced::widget::{Stack, column, container, pin};
use iced::{
    Background, Degrees, Element, Gradient, Length, Padding, Theme,
    alignment, gradient,
};

use super::event::SidebarIntent;
use super::model::{
    SIDEBAR_ICON_SIZE, SIDEBAR_OVERFLOW, SIDEBAR_WIDTH, SidebarViewModel,
};
use crate::components::primitive::spacer::{self, SpacerProps};
use crate::theme::colors;

const PANEL_TOP_PADDING: f32 = 40.0;
const PROJECT_SPACING: f32 = 18.0;
const BACKGROUND_ANGLE: f32 = 85.0;
const BLURB_GAP: f32 = 16.0;

/// Props for the sidebar overlay.
#[derive(Debug, Clone)]
pub(crate) struct SidebarViewProps<'a> {
    pub(crate) vm: SidebarViewModel<'a>,
}

/// Render the sliding panel and, during onboarding, the intro blurb.
///
/// The layer fills the window; the reserved column beside the workspace is
/// rendered by the app layout from [`SidebarViewModel::reserves_space`].
pub(crate) fn view(
    props: SidebarViewProps<'_>,
) -> Element<'_, SidebarIntent, Theme, iced::Renderer> {
    let vm = props.vm;
    let panel_width = SIDEBAR_WIDTH + SIDEBAR_OVERFLOW;
    let panel_x = panel_width * vm.sidebar_offset / 100.0 - SIDEBAR_OVERFLOW;

    let mut projects = column![].width(Length::Fixed(SIDEBAR_WIDTH));
    for link in vm.projects {
        projects = projects
            .push(project_icon::view(project_icon::ProjectIconProps {
                link,
                size: SIDEBAR_ICON_SIZE,
            }))
            .push(spacer::view(SpacerProps::vertical(PROJECT_SPACING)));
    }
    projects = projects.push(add_project_button::view(
        add_project_button::AddProjectButtonProps {
            size: SIDEBAR_ICON_SIZE,
            is_visible: vm.is_add_project_visible,
        },
    ));

    let projects = container(projects.align_x(alignment::Horizontal::Center))
        .width(Length::Fixed(SIDEBAR_WIDTH));

    let panel = container(
        pin(projects)
            .x(SIDEBAR_OVERFLOW)
            .y(PANEL_TOP_PADDING + vm.projects_offset),
    )
    .width(Length::Fixed(panel_width))
    .height(Length::Fill)
    .clip(true)
    .style(|_| container::Style {
        background: Some(Background::Gradient(Gradient::Linear(
            gradient::Linear::new(Degrees(BACKGROUND_ANGLE))
                .add_stop(0.0, colors::BLUE_900)
                .add_stop(1.0, colors::BLUE_700),
        ))),
        ..Default::default()
    });

    let mut layers: Vec<Element<'_, SidebarIntent, Theme, iced::Renderer>> =
        vec![pin(panel).x(panel_x).into()];

    if vm.is_blurb_visible {
        let blurb = introduction_blurb::view(
            introduction_blurb::IntroductionBlurbProps {
                title: "Your projects live here",
                body: "Jump between projects from the sidebar, or add \
                       another one with the + button.",
            },
        );
        layers.push(
            container(blurb)
                .padding(Padding {
                    top: PANEL_TOP_PADDING,
                    right: 0.0,
                    bottom: 0.0,
                    left: (panel_x + panel_width + BLURB_GAP).max(0.0),
                })
                .into(),
        );
    }

    Stack::with_children(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

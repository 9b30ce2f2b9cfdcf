use iced::widget::{button, column, row, text, text_input};
use iced::{Border, Element, Length, Theme};

use crate::theme::colors;
use crate::widgets::workspace::event::WorkspaceIntent;

const FORM_WIDTH: f32 = 360.0;
const FORM_SPACING: f32 = 12.0;
const INPUT_PADDING: f32 = 8.0;
const INPUT_FONT_SIZE: f32 = 14.0;
const TITLE_SIZE: f32 = 22.0;

/// Props for the create-project form.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CreateProjectFormProps<'a> {
    pub(crate) draft_name: &'a str,
    pub(crate) error: Option<&'a str>,
    pub(crate) is_first_project: bool,
}

/// Render the name input with its submit and cancel buttons.
pub(crate) fn view(
    props: CreateProjectFormProps<'_>,
) -> Element<'_, WorkspaceIntent, Theme, iced::Renderer> {
    let title = if props.is_first_project {
        "Create your first project"
    } else {
        "Create a new project"
    };

    let input = text_input("Project name", props.draft_name)
        .on_input(WorkspaceIntent::NameChanged)
        .on_submit(WorkspaceIntent::CreatePressed)
        .padding(INPUT_PADDING)
        .size(INPUT_FONT_SIZE)
        .width(Length::Fill);

    let actions = row![
        action_button("Create project", true, WorkspaceIntent::CreatePressed),
        action_button("Cancel", false, WorkspaceIntent::CancelPressed),
    ]
    .spacing(FORM_SPACING);

    let mut content = column![
        text(title).size(TITLE_SIZE).color(colors::GRAY_900),
        input,
    ]
    .spacing(FORM_SPACING)
    .width(Length::Fixed(FORM_WIDTH));

    if let Some(error) = props.error {
        content = content
            .push(text(error).size(INPUT_FONT_SIZE).color(colors::RED_500));
    }

    content.push(actions).into()
}

fn action_button<'a>(
    label: &'a str,
    is_primary: bool,
    on_press: WorkspaceIntent,
) -> Element<'a, WorkspaceIntent, Theme, iced::Renderer> {
    let (background, foreground) = if is_primary {
        (colors::BLUE_500, colors::WHITE)
    } else {
        (colors::WHITE, colors::GRAY_700)
    };

    button(text(label).size(INPUT_FONT_SIZE).color(foreground))
        .on_press(on_press)
        .padding([6, 14])
        .style(move |_, _| button::Style {
            background: Some(background.into()),
            border: Border {
                color: colors::GRAY_400,
                width: if is_primary { 0.0 } else { 1.0 },
                radius: 4.0.into(),
            },
            ..Default::default()
        })
        .into()
}

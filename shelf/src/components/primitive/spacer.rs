use iced::widget::Space;
use iced::{Element, Length, Theme};

/// Props for an empty layout slot.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SpacerProps {
    pub(crate) width: Length,
    pub(crate) height: Length,
}

impl SpacerProps {
    /// Gap between items of a column.
    pub(crate) fn vertical(height: f32) -> Self {
        Self {
            width: Length::Shrink,
            height: Length::Fixed(height),
        }
    }

    /// Full-height column of a fixed width.
    pub(crate) fn column(width: f32) -> Self {
        Self {
            width: Length::Fixed(width),
            height: Length::Fill,
        }
    }

    pub(crate) fn square(size: f32) -> Self {
        Self {
            width: Length::Fixed(size),
            height: Length::Fixed(size),
        }
    }
}

/// Render an empty element occupying the requested space.
pub(crate) fn view<'a, Message: 'a>(
    props: SpacerProps,
) -> Element<'a, Message, Theme, iced::Renderer> {
    Space::new().width(props.width).height(props.height).into()
}

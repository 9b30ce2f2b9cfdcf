use iced::{Color, Theme, color};

/// Shelf colour palette.
pub(crate) mod colors {
    use super::{Color, color};

    pub(crate) const BLUE_900: Color = color!(0x0d47a1);
    pub(crate) const BLUE_700: Color = color!(0x1976d2);
    pub(crate) const BLUE_500: Color = color!(0x2196f3);
    pub(crate) const WHITE: Color = Color::WHITE;
    pub(crate) const GRAY_100: Color = color!(0xf5f5f5);
    pub(crate) const GRAY_400: Color = color!(0xbdbdbd);
    pub(crate) const GRAY_700: Color = color!(0x616161);
    pub(crate) const GRAY_900: Color = color!(0x212121);
    pub(crate) const RED_500: Color = color!(0xf44336);

    /// Backgrounds for monogram icons, picked per project id.
    pub(crate) const MONOGRAM: [Color; 6] = [
        color!(0xe91e63),
        color!(0x9c27b0),
        color!(0x3f51b5),
        color!(0x009688),
        color!(0xff9800),
        color!(0x795548),
    ];
}

/// Return the iced theme used by the whole application.
pub(crate) fn app_theme() -> Theme {
    Theme::Light
}

/// Stable monogram colour for a project id.
pub(crate) fn monogram_color(project_id: &str) -> Color {
    let hash = project_id.bytes().fold(0usize, |acc, byte| {
        acc.wrapping_mul(31).wrapping_add(usize::from(byte))
    });
    colors::MONOGRAM[hash % colors::MONOGRAM.len()]
}

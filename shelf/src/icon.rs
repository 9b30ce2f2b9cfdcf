use iced::window;

use crate::theme::colors;

const ICON_SIZE: u32 = 64;
const SHELF_TOP: u32 = 40;
const SHELF_BOTTOM: u32 = 46;
const SHELF_MARGIN: u32 = 10;

/// Window icon: a white shelf on the sidebar gradient.
pub(crate) fn window_icon() -> Option<window::Icon> {
    window::icon::from_rgba(icon_rgba(), ICON_SIZE, ICON_SIZE)
        .map_err(|err| log::warn!("window icon rejected: {err}"))
        .ok()
}

fn icon_rgba() -> Vec<u8> {
    let mut pixels = Vec::with_capacity((ICON_SIZE * ICON_SIZE * 4) as usize);

    for y in 0..ICON_SIZE {
        for x in 0..ICON_SIZE {
            let is_shelf = (SHELF_TOP..SHELF_BOTTOM).contains(&y)
                && (SHELF_MARGIN..ICON_SIZE - SHELF_MARGIN).contains(&x);
            let color = if is_shelf {
                colors::WHITE
            } else {
                let t = x as f32 / (ICON_SIZE - 1) as f32;
                mix(colors::BLUE_900, colors::BLUE_700, t)
            };
            pixels.extend_from_slice(&color.into_rgba8());
        }
    }

    pixels
}

fn mix(from: iced::Color, to: iced::Color, t: f32) -> iced::Color {
    iced::Color::from_rgb(
        from.r + (to.r - from.r) * t,
        from.g + (to.g - from.g) * t,
        from.b + (to.b - from.b) * t,
    )
}

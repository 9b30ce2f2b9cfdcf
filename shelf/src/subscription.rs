use std::time::Duration;

use iced::Subscription;

use crate::app::{App, AppEvent};
use crate::widgets::sidebar::{SIDEBAR_FRAME_MS, SidebarEvent, SidebarIntent};

/// Build the active subscription set from current app state.
pub(super) fn subscription(app: &App) -> Subscription<AppEvent> {
    // Frames only while the sidebar intro or its springs are moving.
    if !app.widgets.sidebar.is_animating() {
        return Subscription::none();
    }

    iced::time::every(Duration::from_millis(SIDEBAR_FRAME_MS)).map(|now| {
        AppEvent::Sidebar(SidebarEvent::Intent(SidebarIntent::Tick(now)))
    })
}

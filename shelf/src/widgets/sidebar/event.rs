use std::time::Instant;

/// Interval of the animation frame subscription while the sidebar moves.
pub(crate) const SIDEBAR_FRAME_MS: u64 = 16;

/// Intent events handled by the sidebar widget.
#[derive(Debug, Clone)]
pub(crate) enum SidebarIntent {
    /// The props passed by the app may have changed.
    Sync { at: Instant },
    /// Animation frame while the intro or a spring is in motion.
    Tick(Instant),
    /// A project link was pressed.
    LinkPressed { url: String },
    AddProjectPressed,
    DismissIntroPressed,
}

/// Effect events produced by the sidebar reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SidebarEffect {
    /// Follow a project link.
    Navigate { url: String },
    StartCreatingNewProject,
    DismissSidebarIntro,
}

/// Sidebar event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum SidebarEvent {
    /// Intent event reduced by the sidebar widget.
    Intent(SidebarIntent),
    /// External effect orchestrated by app-level routing.
    Effect(SidebarEffect),
}

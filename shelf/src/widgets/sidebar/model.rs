/// Width of the visible sidebar panel.
pub(crate) const SIDEBAR_WIDTH: f32 = 70.0;
/// Extra panel width hidden off-screen, covering spring overshoot.
pub(crate) const SIDEBAR_OVERFLOW: f32 = 20.0;
pub(crate) const SIDEBAR_ICON_SIZE: f32 = 45.0;

/// A project entry as the sidebar renders it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SidebarProjectLink<'a> {
    pub(crate) id: &'a str,
    pub(crate) name: &'a str,
    pub(crate) icon: Option<&'a str>,
    /// Route the link navigates to.
    pub(crate) url: String,
    pub(crate) is_selected: bool,
}

/// Read-only view model for the sidebar overlay.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SidebarViewModel<'a> {
    /// Horizontal panel offset in percent of the panel width.
    pub(crate) sidebar_offset: f32,
    /// Vertical offset of the project column in pixels.
    pub(crate) projects_offset: f32,
    pub(crate) projects: Vec<SidebarProjectLink<'a>>,
    pub(crate) is_blurb_visible: bool,
    pub(crate) is_add_project_visible: bool,
    /// Whether the layout keeps a column free for the panel.
    pub(crate) reserves_space: bool,
}

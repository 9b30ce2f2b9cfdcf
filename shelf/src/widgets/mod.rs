pub(crate) mod sidebar;
pub(crate) mod workspace;

pub(crate) struct Widgets {
    pub(crate) sidebar: sidebar::SidebarWidget,
    pub(crate) workspace: workspace::WorkspaceWidget,
}

/// Intent events handled by the workspace widget.
#[derive(Debug, Clone)]
pub(crate) enum WorkspaceIntent {
    NameChanged(String),
    CreatePressed,
    CancelPressed,
    StartCreatingPressed,
    BackPressed,
    /// The store accepted the new project.
    ProjectCreated,
    /// The store rejected the new project.
    CreateFailed { message: String },
}

/// Effect events produced by the workspace reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum WorkspaceEffect {
    CreateProject { name: String },
    CancelCreating,
    StartCreating,
    NavigateBack,
}

/// Workspace event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum WorkspaceEvent {
    Intent(WorkspaceIntent),
    Effect(WorkspaceEffect),
}

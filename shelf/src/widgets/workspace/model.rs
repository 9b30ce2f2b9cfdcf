/// What the content pane currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum WorkspaceViewModel<'a> {
    CreateProject {
        draft_name: &'a str,
        error: Option<&'a str>,
        is_first_project: bool,
    },
    Project {
        name: &'a str,
        url: String,
        can_go_back: bool,
    },
    Welcome,
}

/// Draft of the create-project form.
#[derive(Debug, Default)]
pub(super) struct WorkspaceState {
    draft_name: String,
    error: Option<String>,
}

impl WorkspaceState {
    pub(super) fn draft_name(&self) -> &str {
        &self.draft_name
    }

    pub(super) fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub(super) fn set_draft_name(&mut self, name: String) {
        self.draft_name = name;
        self.error = None;
    }

    pub(super) fn set_error(&mut self, message: String) {
        self.error = Some(message);
    }

    /// Forget the draft and any error.
    pub(super) fn reset(&mut self) {
        self.draft_name.clear();
        self.error = None;
    }
}

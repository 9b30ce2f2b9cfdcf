/// Progress of a new user through the first-run flow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum OnboardingStatus {
    /// No projects and nothing started yet.
    #[default]
    BrandNew,
    /// The create form was opened before any project existed.
    CreatingFirstProject,
    /// The first project exists and the sidebar is being introduced.
    IntroducingSidebar,
    Done,
}

impl OnboardingStatus {
    /// Return whether onboarding is over.
    pub(crate) fn is_finished(self) -> bool {
        self == Self::Done
    }

    /// Return whether the sidebar is part of the layout at this stage.
    pub(crate) fn shows_sidebar(self) -> bool {
        matches!(self, Self::IntroducingSidebar | Self::Done)
    }
}

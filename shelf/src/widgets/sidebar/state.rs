use super::intro::IntroSequence;
use super::motion::SidebarMotion;

/// Internal runtime state for the sidebar intro and its springs.
#[derive(Debug, Default)]
pub(super) struct SidebarState {
    /// Visibility seen on the last sync; `None` until the first one.
    was_visible: Option<bool>,
    intro: IntroSequence,
    motion: SidebarMotion,
}

impl SidebarState {
    pub(super) fn intro(&self) -> &IntroSequence {
        &self.intro
    }

    pub(super) fn intro_mut(&mut self) -> &mut IntroSequence {
        &mut self.intro
    }

    pub(super) fn motion(&self) -> &SidebarMotion {
        &self.motion
    }

    pub(super) fn motion_mut(&mut self) -> &mut SidebarMotion {
        &mut self.motion
    }

    /// Record the latest visibility and return the previous one.
    pub(super) fn replace_visibility(
        &mut self,
        is_visible: bool,
    ) -> Option<bool> {
        self.was_visible.replace(is_visible)
    }

    /// Return whether a frame subscription is needed.
    pub(super) fn is_animating(&self) -> bool {
        self.intro.is_running() || !self.motion.is_at_rest()
    }
}

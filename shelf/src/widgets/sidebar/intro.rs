use std::time::{Duration, Instant};

use shelf_ui_motion::Timeline;

/// Delay between the slide-in and the first project falling in.
const FIRST_PROJECT_DELAY: Duration = Duration::from_millis(125);
/// Delay between the fall-in and the add-project control fading in.
const ADD_PROJECTS_DELAY: Duration = Duration::from_millis(600);

/// Steps of the first-appearance intro, in playback order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum IntroStep {
    SidebarSlideIn,
    FirstProjectFallIn,
    AddProjectsFadeIn,
}

impl IntroStep {
    /// Position of the step in the intro order.
    pub(crate) fn index(self) -> usize {
        match self {
            Self::SidebarSlideIn => 0,
            Self::FirstProjectFallIn => 1,
            Self::AddProjectsFadeIn => 2,
        }
    }
}

fn intro_timeline() -> Timeline<IntroStep> {
    Timeline::starting_with(IntroStep::SidebarSlideIn)
        .then_after(FIRST_PROJECT_DELAY, IntroStep::FirstProjectFallIn)
        .then_after(ADD_PROJECTS_DELAY, IntroStep::AddProjectsFadeIn)
}

/// Progress through the intro. The step only moves forward, and only while
/// a run is active.
#[derive(Debug)]
pub(super) struct IntroSequence {
    timeline: Timeline<IntroStep>,
    step: Option<IntroStep>,
    started_at: Option<Instant>,
}

impl Default for IntroSequence {
    fn default() -> Self {
        Self {
            timeline: intro_timeline(),
            step: None,
            started_at: None,
        }
    }
}

impl IntroSequence {
    pub(super) fn step(&self) -> Option<IntroStep> {
        self.step
    }

    /// Return whether the sequence is at or past `step`.
    pub(super) fn has_reached(&self, step: IntroStep) -> bool {
        self.step.is_some_and(|current| current.index() >= step.index())
    }

    /// Return whether later steps are still scheduled.
    pub(super) fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Restart from the first step.
    pub(super) fn start(&mut self, at: Instant) {
        self.step = Some(self.timeline.first());
        self.started_at = Some(at);
    }

    /// Drop the scheduled steps, keeping the current one.
    pub(super) fn cancel(&mut self) {
        self.started_at = None;
    }

    /// Move to the step the timeline reaches at `now`. Returns whether the
    /// step changed.
    pub(super) fn advance(&mut self, now: Instant) -> bool {
        let Some(started_at) = self.started_at else {
            return false;
        };

        let elapsed = now.saturating_duration_since(started_at);
        let next = self.timeline.step_at(elapsed);
        if self.timeline.is_complete_at(elapsed) {
            self.started_at = None;
        }

        if self.has_reached(next) {
            return false;
        }

        self.step = Some(next);
        true
    }
}

use std::time::Instant;

use shelf_ui_motion::{Spring, SpringConfig};

/// Panel offset while hidden, in percent of the panel width.
pub(super) const HIDDEN_SIDEBAR_OFFSET: f32 = -100.0;
/// Project column offset before it falls in, in pixels.
pub(super) const RAISED_PROJECTS_OFFSET: f32 = -150.0;

const SIDEBAR_SPRING: SpringConfig = SpringConfig::new(200.0, 20.0, 0.75);
const PROJECTS_SPRING: SpringConfig = SpringConfig::NO_WOBBLE;

/// Where both springs should settle for the current props.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct MotionTargets {
    pub(super) sidebar_offset: f32,
    pub(super) projects_offset: f32,
}

impl MotionTargets {
    pub(super) fn new(is_visible: bool, has_fallen_in: bool) -> Self {
        Self {
            sidebar_offset: if is_visible {
                0.0
            } else {
                HIDDEN_SIDEBAR_OFFSET
            },
            projects_offset: if has_fallen_in {
                0.0
            } else {
                RAISED_PROJECTS_OFFSET
            },
        }
    }
}

/// Springs behind the panel slide and the project column fall.
#[derive(Debug)]
pub(super) struct SidebarMotion {
    sidebar: Spring,
    projects: Spring,
    last_tick: Option<Instant>,
}

impl Default for SidebarMotion {
    fn default() -> Self {
        Self {
            sidebar: Spring::new(HIDDEN_SIDEBAR_OFFSET, SIDEBAR_SPRING),
            projects: Spring::new(RAISED_PROJECTS_OFFSET, PROJECTS_SPRING),
            last_tick: None,
        }
    }
}

impl SidebarMotion {
    pub(super) fn sidebar_offset(&self) -> f32 {
        self.sidebar.value()
    }

    pub(super) fn projects_offset(&self) -> f32 {
        self.projects.value()
    }

    pub(super) fn is_at_rest(&self) -> bool {
        self.sidebar.is_at_rest() && self.projects.is_at_rest()
    }

    /// Aim both springs at `targets`. Without `animate` they jump there.
    pub(super) fn retarget(
        &mut self,
        targets: MotionTargets,
        at: Instant,
        animate: bool,
    ) {
        self.sidebar.set_target(targets.sidebar_offset);
        self.projects.set_target(targets.projects_offset);

        if !animate {
            self.settle();
            return;
        }

        if !self.is_at_rest() && self.last_tick.is_none() {
            self.last_tick = Some(at);
        }
    }

    /// Jump both springs to their current targets.
    pub(super) fn settle(&mut self) {
        self.sidebar.snap();
        self.projects.snap();
        self.last_tick = None;
    }

    /// Hold both offsets at their resting position.
    pub(super) fn hold_at_rest(&mut self) {
        self.sidebar.snap_to(0.0);
        self.projects.snap_to(0.0);
        self.last_tick = None;
    }

    /// Integrate both springs up to `now`.
    pub(super) fn tick(&mut self, now: Instant) {
        let Some(last_tick) = self.last_tick else {
            return;
        };

        let dt = now.saturating_duration_since(last_tick);
        let sidebar_moving = self.sidebar.tick(dt);
        let projects_moving = self.projects.tick(dt);

        self.last_tick = if sidebar_moving || projects_moving {
            Some(now)
        } else {
            None
        };
    }
}

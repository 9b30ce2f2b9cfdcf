mod event;
mod intro;
mod model;
mod motion;
mod reducer;
mod state;
pub(crate) mod view;

pub(crate) use event::{
    SIDEBAR_FRAME_MS, SidebarEffect, SidebarEvent, SidebarIntent,
};
use iced::Task;
pub(crate) use intro::IntroStep;
use model::SidebarProjectLink;
pub(crate) use model::{SIDEBAR_WIDTH, SidebarViewModel};
pub(crate) use reducer::SidebarCtx;
use state::SidebarState;

use crate::routing::build_url_for_project_id;

/// Sidebar widget owning the intro sequence and its springs.
pub(crate) struct SidebarWidget {
    state: SidebarState,
}

impl SidebarWidget {
    pub(crate) fn new() -> Self {
        Self {
            state: SidebarState::default(),
        }
    }

    /// Reduce an intent event into state updates and effect events.
    pub(crate) fn reduce(
        &mut self,
        event: SidebarIntent,
        ctx: &SidebarCtx<'_>,
    ) -> Task<SidebarEvent> {
        reducer::reduce(&mut self.state, event, ctx)
    }

    /// Build a read-only view model for the presentation layer.
    pub(crate) fn vm<'a>(&self, ctx: &SidebarCtx<'a>) -> SidebarViewModel<'a> {
        let finished = ctx.onboarding_status.is_finished();
        let intro = self.state.intro();
        let motion = self.state.motion();

        let (sidebar_offset, projects_offset) = if finished {
            (0.0, 0.0)
        } else {
            (motion.sidebar_offset(), motion.projects_offset())
        };

        let projects = ctx
            .projects
            .iter()
            .map(|project| SidebarProjectLink {
                id: &project.id,
                name: &project.name,
                icon: project.icon.as_deref(),
                url: build_url_for_project_id(&project.id),
                is_selected: ctx.selected_project_id
                    == Some(project.id.as_str()),
            })
            .collect();

        SidebarViewModel {
            sidebar_offset,
            projects_offset,
            projects,
            is_blurb_visible: !finished
                && intro.has_reached(IntroStep::FirstProjectFallIn),
            is_add_project_visible: finished
                || intro.has_reached(IntroStep::AddProjectsFadeIn),
            reserves_space: ctx.is_visible,
        }
    }

    /// Current intro step; `None` before the sidebar first appears.
    pub(crate) fn intro_step(&self) -> Option<IntroStep> {
        self.state.intro().step()
    }

    /// Return whether animation frames should be delivered.
    pub(crate) fn is_animating(&self) -> bool {
        self.state.is_animating()
    }
}

use std::time::Instant;

use iced::Task;

use super::event::{SidebarEffect, SidebarEvent, SidebarIntent};
use super::intro::IntroStep;
use super::motion::MotionTargets;
use super::state::SidebarState;
use crate::store::{OnboardingStatus, Project};

/// Read-only context for sidebar reduction.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SidebarCtx<'a> {
    pub(crate) projects: &'a [Project],
    pub(crate) selected_project_id: Option<&'a str>,
    pub(crate) onboarding_status: OnboardingStatus,
    pub(crate) is_visible: bool,
    pub(crate) animations_enabled: bool,
}

/// Reduce a sidebar intent into state updates and effect events.
pub(crate) fn reduce(
    state: &mut SidebarState,
    event: SidebarIntent,
    ctx: &SidebarCtx<'_>,
) -> Task<SidebarEvent> {
    match event {
        SidebarIntent::Sync { at } => {
            sync(state, ctx, at);
            Task::none()
        },
        SidebarIntent::Tick(now) => {
            tick(state, ctx, now);
            Task::none()
        },
        press => match pressed_effect(press) {
            Some(effect) => Task::done(SidebarEvent::Effect(effect)),
            None => Task::none(),
        },
    }
}

fn pressed_effect(event: SidebarIntent) -> Option<SidebarEffect> {
    match event {
        SidebarIntent::LinkPressed { url } => {
            Some(SidebarEffect::Navigate { url })
        },
        SidebarIntent::AddProjectPressed => {
            Some(SidebarEffect::StartCreatingNewProject)
        },
        SidebarIntent::DismissIntroPressed => {
            Some(SidebarEffect::DismissSidebarIntro)
        },
        SidebarIntent::Sync { .. } | SidebarIntent::Tick(_) => None,
    }
}

fn sync(state: &mut SidebarState, ctx: &SidebarCtx<'_>, at: Instant) {
    let previous = state.replace_visibility(ctx.is_visible);

    match previous {
        None => {
            apply_targets(state, ctx, at);
            state.motion_mut().settle();
            return;
        },
        Some(false) if ctx.is_visible => {
            log::debug!("sidebar shown, starting intro");
            state.intro_mut().start(at);
        },
        Some(true) if !ctx.is_visible => {
            log::debug!("sidebar hidden, cancelling intro");
            state.intro_mut().cancel();
        },
        Some(_) => {},
    }

    apply_targets(state, ctx, at);
}

fn tick(state: &mut SidebarState, ctx: &SidebarCtx<'_>, now: Instant) {
    if ctx.is_visible && state.intro_mut().advance(now) {
        log::debug!("sidebar intro step: {:?}", state.intro().step());
    }

    apply_targets(state, ctx, now);
    state.motion_mut().tick(now);
}

fn apply_targets(
    state: &mut SidebarState,
    ctx: &SidebarCtx<'_>,
    at: Instant,
) {
    if ctx.onboarding_status.is_finished() {
        state.motion_mut().hold_at_rest();
        return;
    }

    let targets = MotionTargets::new(
        ctx.is_visible,
        state.intro().has_reached(IntroStep::FirstProjectFallIn),
    );
    state.motion_mut().retarget(targets, at, ctx.animations_enabled);
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::{SidebarCtx, pressed_effect};
    use crate::store::{OnboardingStatus, Project};
    use crate::widgets::sidebar::{
        IntroStep, SidebarEffect, SidebarIntent, SidebarWidget,
    };

    fn project(id: &str, name: &str) -> Project {
        Project {
            id: String::from(id),
            name: String::from(name),
            icon: None,
        }
    }

    fn projects() -> Vec<Project> {
        vec![
            project("hello-world", "Hello World"),
            project("notes", "Notes"),
            project("tasks", "Tasks"),
        ]
    }

    fn ctx(
        projects: &[Project],
        onboarding_status: OnboardingStatus,
        is_visible: bool,
    ) -> SidebarCtx<'_> {
        SidebarCtx {
            projects,
            selected_project_id: None,
            onboarding_status,
            is_visible,
            animations_enabled: true,
        }
    }

    fn mounted_hidden(projects: &[Project]) -> (SidebarWidget, Instant) {
        let mut widget = SidebarWidget::new();
        let start = Instant::now();
        let hidden =
            ctx(projects, OnboardingStatus::CreatingFirstProject, false);
        let _ = widget.reduce(SidebarIntent::Sync { at: start }, &hidden);
        (widget, start)
    }

    fn shown(widget: &mut SidebarWidget, projects: &[Project], at: Instant) {
        let visible = ctx(projects, OnboardingStatus::IntroducingSidebar, true);
        let _ = widget.reduce(SidebarIntent::Sync { at }, &visible);
    }

    #[test]
    fn given_projects_when_building_vm_then_each_gets_a_link_in_order() {
        let projects = projects();
        let widget = SidebarWidget::new();
        let mut ctx = ctx(&projects, OnboardingStatus::Done, true);
        ctx.selected_project_id = Some("notes");

        let vm = widget.vm(&ctx);

        assert_eq!(vm.projects.len(), 3);
        let urls: Vec<&str> =
            vm.projects.iter().map(|link| link.url.as_str()).collect();
        assert_eq!(
            urls,
            vec!["/project/hello-world", "/project/notes", "/project/tasks"]
        );
        let selected: Vec<&str> = vm
            .projects
            .iter()
            .filter(|link| link.is_selected)
            .map(|link| link.id)
            .collect();
        assert_eq!(selected, vec!["notes"]);
    }

    #[test]
    fn given_no_selection_when_building_vm_then_no_link_is_selected() {
        let projects = projects();
        let widget = SidebarWidget::new();

        let vm = widget.vm(&ctx(&projects, OnboardingStatus::Done, true));

        assert!(vm.projects.iter().all(|link| !link.is_selected));
    }

    #[test]
    fn given_finished_onboarding_when_building_vm_then_sidebar_is_at_rest() {
        let projects = projects();
        let widget = SidebarWidget::new();

        let vm = widget.vm(&ctx(&projects, OnboardingStatus::Done, true));

        assert!(vm.is_add_project_visible);
        assert!(!vm.is_blurb_visible);
        assert_eq!(vm.sidebar_offset, 0.0);
        assert_eq!(vm.projects_offset, 0.0);
        assert!(vm.reserves_space);
    }

    #[test]
    fn given_hidden_sidebar_when_building_vm_then_no_space_is_reserved() {
        let projects = projects();
        let widget = SidebarWidget::new();

        let vm = widget.vm(&ctx(&projects, OnboardingStatus::BrandNew, false));

        assert!(!vm.reserves_space);
        assert!(!vm.is_add_project_visible);
        assert!(!vm.is_blurb_visible);
    }

    #[test]
    fn given_first_sync_when_visible_then_intro_does_not_start() {
        let projects = projects();
        let mut widget = SidebarWidget::new();
        let done = ctx(&projects, OnboardingStatus::Done, true);

        let _ = widget
            .reduce(SidebarIntent::Sync { at: Instant::now() }, &done);

        assert_eq!(widget.intro_step(), None);
        assert!(!widget.is_animating());
    }

    #[test]
    fn given_hidden_sidebar_when_shown_then_intro_starts_with_slide_in() {
        let projects = projects();
        let (mut widget, start) = mounted_hidden(&projects);

        shown(&mut widget, &projects, start);

        assert_eq!(widget.intro_step(), Some(IntroStep::SidebarSlideIn));
        assert!(widget.is_animating());
        let vm = widget.vm(&ctx(
            &projects,
            OnboardingStatus::IntroducingSidebar,
            true,
        ));
        assert!(!vm.is_blurb_visible);
        assert!(!vm.is_add_project_visible);
    }

    #[test]
    fn given_running_intro_when_ticked_then_steps_follow_delays() {
        let projects = projects();
        let (mut widget, start) = mounted_hidden(&projects);
        shown(&mut widget, &projects, start);
        let visible =
            ctx(&projects, OnboardingStatus::IntroducingSidebar, true);

        let _ = widget.reduce(
            SidebarIntent::Tick(start + Duration::from_millis(100)),
            &visible,
        );
        assert_eq!(widget.intro_step(), Some(IntroStep::SidebarSlideIn));

        let _ = widget.reduce(
            SidebarIntent::Tick(start + Duration::from_millis(125)),
            &visible,
        );
        assert_eq!(widget.intro_step(), Some(IntroStep::FirstProjectFallIn));
        let vm = widget.vm(&visible);
        assert!(vm.is_blurb_visible);
        assert!(!vm.is_add_project_visible);

        let _ = widget.reduce(
            SidebarIntent::Tick(start + Duration::from_millis(725)),
            &visible,
        );
        assert_eq!(widget.intro_step(), Some(IntroStep::AddProjectsFadeIn));
        let vm = widget.vm(&visible);
        assert!(vm.is_blurb_visible);
        assert!(vm.is_add_project_visible);
    }

    #[test]
    fn given_intro_mid_fall_in_when_dismissed_then_sidebar_settles_finished()
    {
        let projects = projects();
        let (mut widget, start) = mounted_hidden(&projects);
        shown(&mut widget, &projects, start);
        let visible =
            ctx(&projects, OnboardingStatus::IntroducingSidebar, true);
        let _ = widget.reduce(
            SidebarIntent::Tick(start + Duration::from_millis(200)),
            &visible,
        );
        assert_eq!(widget.intro_step(), Some(IntroStep::FirstProjectFallIn));
        assert!(widget.vm(&visible).projects_offset < 0.0);

        let done = ctx(&projects, OnboardingStatus::Done, true);
        let _ = widget.reduce(
            SidebarIntent::Sync {
                at: start + Duration::from_millis(210),
            },
            &done,
        );

        let vm = widget.vm(&done);
        assert!(!vm.is_blurb_visible);
        assert!(vm.is_add_project_visible);
        assert_eq!(vm.sidebar_offset, 0.0);
        assert_eq!(vm.projects_offset, 0.0);
        assert_eq!(widget.intro_step(), Some(IntroStep::FirstProjectFallIn));

        let _ = widget.reduce(
            SidebarIntent::Tick(start + Duration::from_millis(230)),
            &done,
        );
        let vm = widget.vm(&done);
        assert_eq!(vm.sidebar_offset, 0.0);
        assert_eq!(vm.projects_offset, 0.0);
    }

    #[test]
    fn given_intro_when_sidebar_hidden_then_steps_stop_advancing() {
        let projects = projects();
        let (mut widget, start) = mounted_hidden(&projects);
        shown(&mut widget, &projects, start);
        let hidden =
            ctx(&projects, OnboardingStatus::CreatingFirstProject, false);

        let _ = widget.reduce(
            SidebarIntent::Sync {
                at: start + Duration::from_millis(50),
            },
            &hidden,
        );
        let _ = widget.reduce(
            SidebarIntent::Tick(start + Duration::from_secs(2)),
            &hidden,
        );

        assert_eq!(widget.intro_step(), Some(IntroStep::SidebarSlideIn));
    }

    #[test]
    fn given_hidden_then_shown_again_when_synced_then_intro_restarts() {
        let projects = projects();
        let (mut widget, start) = mounted_hidden(&projects);
        let visible =
            ctx(&projects, OnboardingStatus::IntroducingSidebar, true);
        let hidden =
            ctx(&projects, OnboardingStatus::CreatingFirstProject, false);
        shown(&mut widget, &projects, start);
        let _ = widget.reduce(
            SidebarIntent::Tick(start + Duration::from_millis(200)),
            &visible,
        );
        let _ = widget.reduce(
            SidebarIntent::Sync {
                at: start + Duration::from_millis(300),
            },
            &hidden,
        );

        let again = start + Duration::from_millis(400);
        let _ = widget.reduce(SidebarIntent::Sync { at: again }, &visible);

        assert_eq!(widget.intro_step(), Some(IntroStep::SidebarSlideIn));
        let _ = widget.reduce(
            SidebarIntent::Tick(again + Duration::from_millis(125)),
            &visible,
        );
        assert_eq!(widget.intro_step(), Some(IntroStep::FirstProjectFallIn));
    }

    #[test]
    fn given_intro_when_frames_arrive_then_panel_slides_toward_rest() {
        let projects = projects();
        let (mut widget, start) = mounted_hidden(&projects);
        let visible =
            ctx(&projects, OnboardingStatus::IntroducingSidebar, true);
        assert_eq!(widget.vm(&visible).sidebar_offset, -100.0);
        assert_eq!(widget.vm(&visible).projects_offset, -150.0);
        shown(&mut widget, &projects, start);

        let _ = widget.reduce(
            SidebarIntent::Tick(start + Duration::from_millis(50)),
            &visible,
        );
        let offset = widget.vm(&visible).sidebar_offset;
        assert!(offset > -100.0 && offset < 0.0);

        let mut now = start;
        for _ in 0..600 {
            now += Duration::from_millis(17);
            let _ = widget.reduce(SidebarIntent::Tick(now), &visible);
        }

        let vm = widget.vm(&visible);
        assert_eq!(vm.sidebar_offset, 0.0);
        assert_eq!(vm.projects_offset, 0.0);
        assert!(!widget.is_animating());
    }

    #[test]
    fn given_disabled_animations_when_shown_then_offsets_jump_to_targets() {
        let projects = projects();
        let (mut widget, start) = mounted_hidden(&projects);
        let mut visible =
            ctx(&projects, OnboardingStatus::IntroducingSidebar, true);
        visible.animations_enabled = false;

        let _ = widget.reduce(SidebarIntent::Sync { at: start }, &visible);

        let vm = widget.vm(&visible);
        assert_eq!(vm.sidebar_offset, 0.0);
        assert_eq!(vm.projects_offset, -150.0);
    }

    #[test]
    fn given_press_intents_when_mapped_then_matching_effects_are_emitted() {
        assert_eq!(
            pressed_effect(SidebarIntent::LinkPressed {
                url: String::from("/project/notes"),
            }),
            Some(SidebarEffect::Navigate {
                url: String::from("/project/notes"),
            })
        );
        assert_eq!(
            pressed_effect(SidebarIntent::AddProjectPressed),
            Some(SidebarEffect::StartCreatingNewProject)
        );
        assert_eq!(
            pressed_effect(SidebarIntent::DismissIntroPressed),
            Some(SidebarEffect::DismissSidebarIntro)
        );
        assert_eq!(pressed_effect(SidebarIntent::Tick(Instant::now())), None);
    }
}

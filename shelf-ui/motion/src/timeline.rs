use std::time::Duration;

/// Declarative description of an ordered, forward-only step sequence.
///
/// The first step is active from the start; every following step becomes
/// active once its delay after the previous step has elapsed. The timeline
/// itself holds no clock, so callers evaluate it against whatever elapsed
/// time their own runtime reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeline<S> {
    /// Steps paired with their offset from the start of the timeline.
    steps: Vec<(Duration, S)>,
}

impl<S: Copy> Timeline<S> {
    /// Start a timeline whose first step is active immediately.
    pub fn starting_with(step: S) -> Self {
        Self {
            steps: vec![(Duration::ZERO, step)],
        }
    }

    /// Append `step`, activated `delay` after the previously appended one.
    pub fn then_after(mut self, delay: Duration, step: S) -> Self {
        let offset = self.duration() + delay;
        self.steps.push((offset, step));
        self
    }

    /// Step active right after the timeline starts.
    pub fn first(&self) -> S {
        self.steps[0].1
    }

    /// Offset of the final step from the start.
    pub fn duration(&self) -> Duration {
        self.steps[self.steps.len() - 1].0
    }

    fn index_at(&self, elapsed: Duration) -> usize {
        self.steps
            .iter()
            .rposition(|(offset, _)| *offset <= elapsed)
            .unwrap_or(0)
    }

    /// Step active after `elapsed`.
    pub fn step_at(&self, elapsed: Duration) -> S {
        self.steps[self.index_at(elapsed)].1
    }

    /// Return whether the final step is active after `elapsed`.
    pub fn is_complete_at(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration()
    }
}

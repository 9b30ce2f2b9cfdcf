use std::time::Duration;

/// Fixed integration step (60 Hz).
const FRAME: Duration = Duration::from_nanos(16_666_667);
const FRAME_SECONDS: f32 = 1.0 / 60.0;
/// Upper bound of integration steps consumed by a single tick. Anything
/// beyond it is dropped so a stalled event loop does not make springs jump.
const MAX_FRAMES_PER_TICK: u32 = 10;

/// Physical parameters of a [`Spring`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    /// Force applied per unit of distance from the target.
    pub stiffness: f32,
    /// Force applied against the current velocity.
    pub damping: f32,
    /// Speed and distance under which the spring snaps to rest.
    pub precision: f32,
}

impl SpringConfig {
    /// Critically damped preset that settles without overshooting.
    pub const NO_WOBBLE: Self = Self::new(170.0, 26.0, 0.01);

    pub const fn new(stiffness: f32, damping: f32, precision: f32) -> Self {
        Self {
            stiffness,
            damping,
            precision,
        }
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::NO_WOBBLE
    }
}

/// A value animated toward a target by a unit-mass damped spring.
///
/// The spring is integrated with semi-implicit Euler steps of a fixed
/// duration; partial frames carry over to the next [`Spring::tick`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    value: f32,
    velocity: f32,
    target: f32,
    config: SpringConfig,
    pending: Duration,
}

impl Spring {
    /// Create a spring resting at `value`.
    pub fn new(value: f32, config: SpringConfig) -> Self {
        Self {
            value,
            velocity: 0.0,
            target: value,
            config,
            pending: Duration::ZERO,
        }
    }

    /// Current interpolated value.
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Value the spring is moving toward.
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Return whether the spring sits on its target without velocity.
    pub fn is_at_rest(&self) -> bool {
        self.velocity == 0.0 && self.value == self.target
    }

    /// Retarget the spring, keeping its current value and velocity.
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Jump to the current target and stop.
    pub fn snap(&mut self) {
        self.value = self.target;
        self.velocity = 0.0;
        self.pending = Duration::ZERO;
    }

    /// Retarget and jump to `value` in one step.
    pub fn snap_to(&mut self, value: f32) {
        self.target = value;
        self.snap();
    }

    /// Advance the simulation by `dt` and return whether it is still moving.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if self.is_at_rest() {
            self.pending = Duration::ZERO;
            return false;
        }

        self.pending += dt;
        let mut frames = 0;
        while self.pending >= FRAME && frames < MAX_FRAMES_PER_TICK {
            self.pending -= FRAME;
            frames += 1;
            self.step(FRAME_SECONDS);
            if self.is_at_rest() {
                self.pending = Duration::ZERO;
                return false;
            }
        }

        if self.pending >= FRAME {
            self.pending = Duration::ZERO;
        }

        true
    }

    fn step(&mut self, seconds: f32) {
        let spring_force = -self.config.stiffness * (self.value - self.target);
        let damper_force = -self.config.damping * self.velocity;
        let velocity = self.velocity + (spring_force + damper_force) * seconds;
        let value = self.value + velocity * seconds;

        if velocity.abs() < self.config.precision
            && (value - self.target).abs() < self.config.precision
        {
            self.value = self.target;
            self.velocity = 0.0;
        } else {
            self.value = value;
            self.velocity = velocity;
        }
    }
}

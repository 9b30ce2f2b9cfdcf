//! Motion helpers for Shelf widgets.
//!
//! The crate is UI-agnostic and never reads the clock on its own:
//! - [`Spring`] moves a single value toward a target with damped spring
//!   physics, advanced by [`Spring::tick`];
//! - [`Timeline`] describes an ordered sequence of steps separated by delays
//!   and answers which step is active after a given elapsed time.
//!
//! # Quick Example
//!
//! ```
//! use std::time::Duration;
//!
//! use shelf_ui_motion::{Spring, SpringConfig, Timeline};
//!
//! #[derive(Debug, Clone, Copy, PartialEq)]
//! enum Phase {
//!     Enter,
//!     Settle,
//! }
//!
//! let timeline = Timeline::starting_with(Phase::Enter)
//!     .then_after(Duration::from_millis(100), Phase::Settle);
//! assert_eq!(timeline.step_at(Duration::from_millis(40)), Phase::Enter);
//! assert_eq!(timeline.step_at(Duration::from_millis(100)), Phase::Settle);
//!
//! let mut spring = Spring::new(-100.0, SpringConfig::NO_WOBBLE);
//! spring.set_target(0.0);
//! for _ in 0..600 {
//!     spring.tick(Duration::from_millis(16));
//! }
//! assert!(spring.is_at_rest());
//! assert_eq!(spring.value(), 0.0);
//! ```

mod spring;
mod timeline;

pub use spring::{Spring, SpringConfig};
pub use timeline::Timeline;

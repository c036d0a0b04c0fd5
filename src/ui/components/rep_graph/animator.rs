//! Selection animation
//!
//! A single scalar (the marker's x position) is eased from where it is to
//! the x position of the newly selected day. Every callout visual is derived
//! from this one value, so the animator only has to track a single number.
//!
//! The animator is frame driven: the host calls [`ProgressAnimator::tick`]
//! once per frame with the current time. A new target arriving mid-flight
//! restarts the tween from the in-flight value, so the marker never jumps.

use embassy_time::{Duration, Instant};

use super::bezier::Easing;
use super::constants::SELECTION_ANIMATION;

/// Animation state of the progress value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationState {
    /// Resting at a position
    Idle { position: f32 },
    /// Easing from `from` to `to`, started at `started_at`
    Transitioning {
        from: f32,
        to: f32,
        started_at: Instant,
    },
}

/// Eased, retargetable progress value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressAnimator {
    state: AnimationState,
    duration: Duration,
    easing: Easing,
}

impl ProgressAnimator {
    /// Create an idle animator resting at `position`
    pub fn new(position: f32) -> Self {
        Self {
            state: AnimationState::Idle { position },
            duration: SELECTION_ANIMATION,
            easing: Easing::default(),
        }
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.state, AnimationState::Transitioning { .. })
    }

    /// Position the animation will come to rest at
    pub fn target(&self) -> f32 {
        match self.state {
            AnimationState::Idle { position } => position,
            AnimationState::Transitioning { to, .. } => to,
        }
    }

    /// Value of the progress at `now`, without changing state
    pub fn position_at(&self, now: Instant) -> f32 {
        match self.state {
            AnimationState::Idle { position } => position,
            AnimationState::Transitioning {
                from,
                to,
                started_at,
            } => {
                let fraction = self.elapsed_fraction(started_at, now);
                from + (to - from) * self.easing.apply(fraction)
            }
        }
    }

    /// Start easing towards `target` from wherever the value is at `now`
    ///
    /// Returns `false` (and leaves any in-flight animation untouched) when
    /// `target` is already the destination.
    pub fn animate_to(&mut self, target: f32, now: Instant) -> bool {
        if self.target() == target {
            return false;
        }

        let from = self.position_at(now);
        self.state = if self.duration.as_ticks() == 0 || from == target {
            AnimationState::Idle { position: target }
        } else {
            AnimationState::Transitioning {
                from,
                to: target,
                started_at: now,
            }
        };
        true
    }

    /// Jump straight to `position`, cancelling any animation
    pub fn snap_to(&mut self, position: f32) {
        self.state = AnimationState::Idle { position };
    }

    /// Advance to `now`, settling into `Idle` once the duration has elapsed
    ///
    /// Returns the current progress value.
    pub fn tick(&mut self, now: Instant) -> f32 {
        if let AnimationState::Transitioning { to, started_at, .. } = self.state
            && self.elapsed_fraction(started_at, now) >= 1.0
        {
            self.state = AnimationState::Idle { position: to };
        }
        self.position_at(now)
    }

    fn elapsed_fraction(&self, started_at: Instant, now: Instant) -> f32 {
        let total = self.duration.as_micros();
        if total == 0 {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(started_at).as_micros();
        (elapsed as f32 / total as f32).clamp(0.0, 1.0)
    }
}

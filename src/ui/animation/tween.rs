//! Integer value tween driven by frame ticks
//!
//! The tween does not own a timer. The application forwards frame instants
//! (from `iced::window::frames()`) to [`ProgressTween::tick`] while
//! [`ProgressTween::is_running`] is true. Timing and easing are handled by an
//! [`Animated`] fraction running from 0 to 1; the tween maps that fraction
//! onto its integer range.

use std::time::{Duration, Instant};

use iced_anim::Animated;

use crate::features::interpolator::Interpolator;

/// Lifecycle of a tween
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TweenState {
    /// Created but not started
    Idle,
    Running,
    /// Superseded or torn down before completion
    Cancelled,
}

/// Animates an integer from `from` to `to` over `duration`
#[derive(Debug, Clone)]
pub struct ProgressTween {
    from: i32,
    to: i32,
    interpolator: Interpolator,
    fraction: Animated<f32>,
    /// Instant passed to `start`, and the point on the transition's own clock
    /// it corresponds to
    clock: Option<(Instant, Instant)>,
    state: TweenState,
    value: i32,
}

impl ProgressTween {
    pub fn new(from: i32, to: i32, duration: Duration, interpolator: Interpolator) -> Self {
        Self {
            from,
            to,
            interpolator,
            fraction: Animated::transition(0.0, interpolator.easing(duration)),
            clock: None,
            state: TweenState::Idle,
            value: from,
        }
    }

    /// Start the tween at `now`
    pub fn start(&mut self, now: Instant) {
        if self.clock.is_some() || self.state != TweenState::Idle {
            return;
        }
        // The transition stamps its own clock in `set_target`; an anchor taken
        // first is never later, so ticking it in adds no progress.
        let anchor = Instant::now();
        self.fraction.set_target(1.0);
        if !self.fraction.duration().is_zero() {
            self.fraction.tick(anchor);
        }
        self.clock = Some((now, anchor));
        self.state = TweenState::Running;
        tracing::debug!(
            "Tween started: {} -> {} over {:?} ({})",
            self.from,
            self.to,
            self.fraction.duration(),
            self.interpolator.id()
        );
    }

    /// Cancel the tween. Calling this more than once has no further effect.
    pub fn cancel(&mut self) {
        if self.state == TweenState::Running {
            tracing::debug!("Tween cancelled at {}", self.value);
            self.state = TweenState::Cancelled;
        }
    }

    /// Advance to `now` and return the current value.
    ///
    /// Finishes (back to `Idle`) once the full duration has elapsed, at which
    /// point the value is the curve's end point: `to` for every curve except
    /// `cycle`, which comes back to `from`.
    pub fn tick(&mut self, now: Instant) -> i32 {
        let Some((started_at, anchor)) = self.clock else {
            return self.value;
        };
        if self.state != TweenState::Running {
            return self.value;
        }

        if self.fraction.duration().is_zero() {
            self.fraction.settle();
        } else {
            self.fraction
                .tick(anchor + now.saturating_duration_since(started_at));
        }

        if self.fraction.is_animating() {
            self.value = self.evaluate(*self.fraction.value());
        } else {
            self.value = self.evaluate(self.interpolator.end_fraction());
            self.state = TweenState::Idle;
        }
        self.value
    }

    pub fn state(&self) -> TweenState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == TweenState::Running
    }

    /// `from + f * (to - from)`, truncated toward zero.
    ///
    /// Evaluated in f64 so a range spanning the whole of i32 cannot overflow;
    /// the cast saturates at the i32 bounds.
    fn evaluate(&self, fraction: f32) -> i32 {
        let from = f64::from(self.from);
        let to = f64::from(self.to);
        (from + f64::from(fraction) * (to - from)) as i32
    }
}

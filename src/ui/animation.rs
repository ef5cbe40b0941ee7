//! Animation support for the progress ring
//!
//! Animations are tick-driven: the application subscribes to window frames
//! while something is animating and forwards each frame instant.

mod tween;

pub use tween::{ProgressTween, TweenState};

//! UI module for the progress ring demo
//! Dark mode aesthetic with neon pink accents
//!
//! # Architecture
//!
//! The UI is organized into layers:
//!
//! - **Animation** (`animation`): Value tweens driven by frame ticks
//! - **Primitives** (`primitives`): Low-level Widget trait implementations
//! - **Widgets** (`widgets`): Composable UI patterns without business logic

pub mod animation;
pub mod primitives;
pub mod theme;
pub mod widgets;

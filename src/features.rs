//! Feature modules - logic separated from UI
//!
//! Each feature module contains the core logic for a specific functionality.
//! Features should not depend on UI components directly.

pub mod density;
pub mod interpolator;
pub mod palette;
pub mod settings;
pub mod snapshot;
pub mod style;

pub use density::Density;
pub use interpolator::{Interpolator, InterpolatorId};
pub use palette::Palette;
pub use settings::Settings;
pub use snapshot::RingSnapshot;
pub use style::RingStyle;

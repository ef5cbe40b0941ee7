//! The progress ring: state, setters, animation and the render algorithm

use std::time::{Duration, Instant};

use iced::widget::canvas;
use iced::{Color, Point, Size};

use super::state::{Cap, RingPaints, RingState, TextType, circle_bounds};
use super::surface::RingSurface;
use crate::features::palette::{self, Palette};
use crate::features::snapshot::{self, RingSnapshot};
use crate::features::style::{RingStyle, resolve_color};
use crate::features::{Density, Interpolator, InterpolatorId};
use crate::i18n::Locale;
use crate::ui::animation::{ProgressTween, TweenState};

/// A circular progress indicator
///
/// All mutation goes through the setters, which keep the cached paints in
/// sync and request a redraw. The ring is drawn onto any [`RingSurface`].
pub struct RingProgress {
    state: RingState,
    paints: RingPaints,
    interpolator: Interpolator,
    density: Density,
    locale: Locale,

    animation: Option<ProgressTween>,

    cache: canvas::Cache,
    generation: u64,
}

impl Default for RingProgress {
    fn default() -> Self {
        Self::new(Density::default())
    }
}

impl RingProgress {
    /// Create a ring with default properties
    pub fn new(density: Density) -> Self {
        Self::with_state(RingState::default(), density)
    }

    fn with_state(state: RingState, density: Density) -> Self {
        let paints = RingPaints::from_state(&state);
        let interpolator = state.progress_interpolator.resolve();
        Self {
            state,
            paints,
            interpolator,
            density,
            locale: Locale::default(),
            animation: None,
            cache: canvas::Cache::new(),
            generation: 0,
        }
    }

    /// Create a ring from a style declaration
    ///
    /// Missing keys keep their defaults, widths are DP and the text size is SP.
    pub fn from_style(style: &RingStyle, palette: &Palette, density: Density) -> Self {
        let defaults = RingState::default();
        let color = |key: &str, value: &Option<String>, fallback: Color| {
            resolve_color(key, value.as_deref(), palette).unwrap_or(fallback)
        };

        let mut state = RingState {
            total_value: style.total_value.unwrap_or(defaults.total_value),
            total_color: color("total_color", &style.total_color, defaults.total_color),
            total_width: style
                .total_width
                .map(|dp| density.dp_to_px(dp))
                .unwrap_or(defaults.total_width),

            progress_value: style.progress_value.unwrap_or(defaults.progress_value),
            progress_color: color(
                "progress_color",
                &style.progress_color,
                defaults.progress_color,
            ),
            progress_width: style
                .progress_width
                .map(|dp| density.dp_to_px(dp))
                .unwrap_or(defaults.progress_width),
            progress_round_cap: style
                .progress_round_cap
                .unwrap_or(defaults.progress_round_cap),
            progress_interpolator: style.interpolator(),

            progress_text_enabled: style
                .progress_text_enabled
                .unwrap_or(defaults.progress_text_enabled),
            progress_text_type: style
                .progress_text_type
                .map(TextType::from_raw)
                .unwrap_or(defaults.progress_text_type),
            progress_text_size: style
                .progress_text_size
                .map(|sp| density.sp_to_px(sp))
                .unwrap_or(defaults.progress_text_size),
            progress_text_color: color(
                "progress_text_color",
                &style.progress_text_color,
                defaults.progress_text_color,
            ),

            fill_color: color("fill_color", &style.fill_color, defaults.fill_color),
            start_angle: style.start_angle.unwrap_or(defaults.start_angle),
            animate: style.animate.unwrap_or(defaults.animate),
            animate_duration: style.animate_duration.unwrap_or(defaults.animate_duration),
        };
        state.progress_value = state.valid_progress(state.progress_value);

        Self::with_state(state, density)
    }

    /// Use `locale` to format the percent label
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    // ------------------------------------------------------------------
    // Host hooks
    // ------------------------------------------------------------------

    /// Square size for a layout pass: the height always follows the width
    pub fn measure(&self, max_width: f32) -> Size {
        Size::new(max_width, max_width)
    }

    /// Cancel any in-flight animation before the ring goes away
    pub fn on_detached(&mut self) {
        self.cancel_animation();
    }

    pub fn set_locale(&mut self, locale: Locale) {
        if self.locale.language != locale.language {
            self.locale = locale;
            self.invalidate();
        }
    }

    fn setup_paints(&mut self) {
        self.paints = RingPaints::from_state(&self.state);
    }

    /// Request a redraw
    fn invalidate(&mut self) {
        self.cache.clear();
        self.generation = self.generation.wrapping_add(1);
    }

    // ------------------------------------------------------------------
    // Setters
    // ------------------------------------------------------------------

    /// Set the total. Progress above the new total is lowered to it.
    pub fn set_total(&mut self, total: i32) {
        self.state.total_value = total;
        if total < self.state.progress_value {
            self.state.progress_value = total;
        }
        self.invalidate();
    }

    /// Set the progress, animating if the ring's animate flag is on
    pub fn set_progress(&mut self, progress: i32) {
        self.set_progress_with(progress, self.state.animate);
    }

    /// Set the progress, animating from the current value when `animate`
    pub fn set_progress_with(&mut self, progress: i32, animate: bool) {
        if animate {
            self.animate_to(progress, Instant::now());
        } else {
            self.state.progress_value = self.state.valid_progress(progress);
            self.invalidate();
        }
    }

    pub(crate) fn animate_to(&mut self, progress: i32, now: Instant) {
        let target = self.state.valid_progress(progress);
        self.cancel_animation();

        let mut tween = ProgressTween::new(
            self.state.progress_value,
            target,
            Duration::from_millis(self.state.animate_duration),
            self.interpolator,
        );
        tween.start(now);
        self.animation = Some(tween);
    }

    pub fn set_total_color(&mut self, color: Color) {
        self.state.total_color = color;
        self.paints.total.color = color;
        self.invalidate();
    }

    pub fn set_progress_color(&mut self, color: Color) {
        self.state.progress_color = color;
        self.paints.progress.color = color;
        self.invalidate();
    }

    pub fn set_progress_text_color(&mut self, color: Color) {
        self.state.progress_text_color = color;
        self.paints.text.color = color;
        self.invalidate();
    }

    pub fn set_fill_color(&mut self, color: Color) {
        self.state.fill_color = color;
        self.paints.fill = color;
        self.invalidate();
    }

    pub fn set_total_color_res(&mut self, palette: &Palette, name: &str) {
        if let Some(color) = resolve_named(palette, name) {
            self.set_total_color(color);
        }
    }

    pub fn set_progress_color_res(&mut self, palette: &Palette, name: &str) {
        if let Some(color) = resolve_named(palette, name) {
            self.set_progress_color(color);
        }
    }

    pub fn set_progress_text_color_res(&mut self, palette: &Palette, name: &str) {
        if let Some(color) = resolve_named(palette, name) {
            self.set_progress_text_color(color);
        }
    }

    pub fn set_fill_color_res(&mut self, palette: &Palette, name: &str) {
        if let Some(color) = resolve_named(palette, name) {
            self.set_fill_color(color);
        }
    }

    /// Set the total ring width in DP
    pub fn set_total_width(&mut self, width_dp: f32) {
        if !is_finite_input("total width", width_dp) {
            return;
        }
        self.state.total_width = self.density.dp_to_px(width_dp);
        self.paints.total.width = self.state.total_width;
        self.invalidate();
    }

    /// Set the progress arc width in DP
    pub fn set_progress_width(&mut self, width_dp: f32) {
        if !is_finite_input("progress width", width_dp) {
            return;
        }
        self.state.progress_width = self.density.dp_to_px(width_dp);
        self.paints.progress.width = self.state.progress_width;
        self.invalidate();
    }

    pub fn set_progress_round_cap(&mut self, round_cap: bool) {
        self.state.progress_round_cap = round_cap;
        self.paints.progress.cap = if round_cap { Cap::Round } else { Cap::Butt };
        self.invalidate();
    }

    pub fn set_progress_text_enabled(&mut self, enabled: bool) {
        self.state.progress_text_enabled = enabled;
        self.invalidate();
    }

    /// Set the label type from its code. Unknown codes select the progress type.
    pub fn set_progress_text_type(&mut self, text_type: i32) {
        self.state.progress_text_type = TextType::from_raw(text_type);
        self.invalidate();
    }

    /// Set the label size in SP
    pub fn set_progress_text_size(&mut self, size_sp: f32) {
        if !is_finite_input("text size", size_sp) {
            return;
        }
        self.state.progress_text_size = self.density.sp_to_px(size_sp);
        self.paints.text.size = self.state.progress_text_size;
        self.invalidate();
    }

    /// Takes effect on the next animated progress change
    pub fn set_progress_interpolator(&mut self, id: InterpolatorId) {
        self.state.progress_interpolator = id;
        self.interpolator = id.resolve();
    }

    /// Set the angle the arc starts at, in degrees (270 is the top).
    /// NaN and infinite angles are ignored.
    pub fn set_start_angle(&mut self, angle: f32) {
        if !is_finite_input("start angle", angle) {
            return;
        }
        self.state.start_angle = angle;
        self.invalidate();
    }

    pub fn set_animate(&mut self, animate: bool) {
        self.state.animate = animate;
    }

    /// Set the animation duration in milliseconds
    pub fn set_animate_duration(&mut self, duration_ms: u64) {
        self.state.animate_duration = duration_ms;
    }

    // ------------------------------------------------------------------
    // Getters
    // ------------------------------------------------------------------

    pub fn total(&self) -> i32 {
        self.state.total_value
    }

    pub fn progress(&self) -> i32 {
        self.state.progress_value
    }

    pub fn state(&self) -> &RingState {
        &self.state
    }

    pub fn paints(&self) -> &RingPaints {
        &self.paints
    }

    pub fn interpolator(&self) -> Interpolator {
        self.interpolator
    }

    /// Incremented on every redraw request
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub(crate) fn cache(&self) -> &canvas::Cache {
        &self.cache
    }

    // ------------------------------------------------------------------
    // Animation
    // ------------------------------------------------------------------

    pub fn is_animating(&self) -> bool {
        self.animation.as_ref().is_some_and(ProgressTween::is_running)
    }

    /// State of the most recent animation
    pub fn animation_state(&self) -> TweenState {
        self.animation
            .as_ref()
            .map(ProgressTween::state)
            .unwrap_or(TweenState::Idle)
    }

    /// Advance the running animation to `now`. Returns true while it is still
    /// running.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(tween) = self.animation.as_mut() else {
            return false;
        };
        if !tween.is_running() {
            return false;
        }

        let value = tween.tick(now);
        let running = tween.is_running();
        // Overshooting curves leave [0, total] for a while
        self.state.progress_value = self.state.valid_progress(value);
        if !running {
            self.animation = None;
        }
        self.invalidate();
        running
    }

    fn cancel_animation(&mut self) {
        if let Some(tween) = self.animation.as_mut() {
            tween.cancel();
        }
    }

    // ------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------

    /// Radius of the fill disc for a ring of `size`, if the fill is visible
    pub fn fill_radius(&self, size: Size) -> Option<f32> {
        if !palette::is_visible(self.state.fill_color) {
            return None;
        }
        let (total, progress) = (self.state.total_width, self.state.progress_width);
        let padding = if total >= progress {
            total
        } else {
            progress / 2.0 + total / 2.0
        };
        // The extra pixel closes the antialiasing gap under the ring
        Some(size.width / 2.0 - padding + 1.0)
    }

    /// Label text, if the label is enabled
    pub fn label(&self) -> Option<String> {
        if !self.state.progress_text_enabled {
            return None;
        }
        Some(match self.state.progress_text_type {
            TextType::Progress => self.state.progress_value.to_string(),
            TextType::Percent => {
                let total = self.state.total_value;
                let ratio = if total == 0 {
                    0.0
                } else {
                    f64::from(self.state.progress_value) / f64::from(total)
                };
                self.locale.percent(ratio)
            }
        })
    }

    /// Sweep of the progress arc in degrees, or `None` when no arc is drawn.
    ///
    /// An arc needs a positive total and `0 < progress <= total`.
    pub fn progress_sweep(&self) -> Option<f32> {
        let (total, progress) = (self.state.total_value, self.state.progress_value);
        if total <= 0 || progress <= 0 || progress > total {
            return None;
        }
        if progress == total {
            Some(360.0)
        } else {
            Some((360.0 / total as f32) * progress as f32)
        }
    }

    /// Draw the ring at `size` onto `surface`
    pub fn draw(&self, surface: &mut impl RingSurface, size: Size) {
        let center = Point::new(size.width / 2.0, size.height / 2.0);
        let bounds = circle_bounds(size, self.state.total_width, self.state.progress_width);

        if let Some(radius) = self.fill_radius(size) {
            surface.fill_circle(center, radius, self.paints.fill);
        }

        if let Some(label) = self.label() {
            surface.draw_label(&label, center, &self.paints.text);
        }

        surface.stroke_oval(bounds, &self.paints.total);

        if let Some(sweep) = self.progress_sweep() {
            surface.stroke_arc(bounds, self.state.start_angle, sweep, &self.paints.progress);
        }
    }

    // ------------------------------------------------------------------
    // Save / restore
    // ------------------------------------------------------------------

    /// Capture every property, nesting the host's own state
    pub fn save_state(&self, host_state: Option<serde_json::Value>) -> RingSnapshot {
        let s = &self.state;
        RingSnapshot {
            total_value: s.total_value,
            total_color: snapshot::store_color(s.total_color),
            total_width: s.total_width,
            progress_value: s.progress_value,
            progress_color: snapshot::store_color(s.progress_color),
            progress_width: s.progress_width,
            progress_round_cap: s.progress_round_cap,
            progress_interpolator: s.progress_interpolator,
            progress_text_enabled: s.progress_text_enabled,
            progress_text_type: s.progress_text_type.as_raw(),
            progress_text_size: s.progress_text_size,
            progress_text_color: snapshot::store_color(s.progress_text_color),
            fill_color: snapshot::store_color(s.fill_color),
            start_angle: s.start_angle,
            animate: s.animate,
            animate_duration: s.animate_duration,
            host_state,
        }
    }

    /// Apply a snapshot verbatim and hand back the host's nested state
    pub fn restore_state(&mut self, snapshot: RingSnapshot) -> Option<serde_json::Value> {
        self.cancel_animation();
        self.animation = None;

        self.state = RingState {
            total_value: snapshot.total_value,
            total_color: snapshot::load_color(snapshot.total_color),
            total_width: snapshot.total_width,
            progress_value: snapshot.progress_value,
            progress_color: snapshot::load_color(snapshot.progress_color),
            progress_width: snapshot.progress_width,
            progress_round_cap: snapshot.progress_round_cap,
            progress_interpolator: snapshot.progress_interpolator,
            progress_text_enabled: snapshot.progress_text_enabled,
            progress_text_type: TextType::from_raw(snapshot.progress_text_type),
            progress_text_size: snapshot.progress_text_size,
            progress_text_color: snapshot::load_color(snapshot.progress_text_color),
            fill_color: snapshot::load_color(snapshot.fill_color),
            start_angle: snapshot.start_angle,
            animate: snapshot.animate,
            animate_duration: snapshot.animate_duration,
        };

        self.interpolator = self.state.progress_interpolator.resolve();
        self.setup_paints();
        self.invalidate();

        snapshot.host_state
    }
}

fn is_finite_input(what: &str, value: f32) -> bool {
    if !value.is_finite() {
        tracing::warn!("Ignoring non-finite {}: {}", what, value);
    }
    value.is_finite()
}

fn resolve_named(palette: &Palette, name: &str) -> Option<Color> {
    let color = palette.resolve(name);
    if color.is_none() {
        tracing::warn!("Unknown colour resource: {}", name);
    }
    color
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;
    use crate::ui::primitives::progress_ring::surface::{DrawOp, RecordingSurface};

    const SIZE: Size = Size {
        width: 200.0,
        height: 200.0,
    };

    fn drawn(ring: &RingProgress) -> RecordingSurface {
        let mut surface = RecordingSurface::default();
        ring.draw(&mut surface, SIZE);
        surface
    }

    fn sweep_of(surface: &RecordingSurface) -> Option<(f32, f32)> {
        surface.arcs().first().map(|op| match op {
            DrawOp::Arc {
                start_angle,
                sweep_angle,
                ..
            } => (*start_angle, *sweep_angle),
            _ => unreachable!(),
        })
    }

    #[test]
    fn test_defaults() {
        let ring = RingProgress::default();
        assert_eq!(ring.total(), 100);
        assert_eq!(ring.progress(), 0);
        assert_eq!(ring.state().start_angle, 270.0);
        assert_eq!(ring.state().total_width, 16.0);
        assert_eq!(ring.state().animate_duration, 300);
        assert_eq!(ring.interpolator().id(), InterpolatorId::Linear);
    }

    #[test]
    fn test_set_progress_clamps() {
        let mut ring = RingProgress::default();
        for (input, expected) in [(-10, 0), (0, 0), (42, 42), (100, 100), (101, 100), (i32::MAX, 100)] {
            ring.set_progress_with(input, false);
            assert_eq!(ring.progress(), expected, "input {}", input);
        }
    }

    #[test]
    fn test_lowering_total_lowers_progress() {
        let mut ring = RingProgress::default();
        ring.set_progress_with(80, false);

        ring.set_total(90);
        assert_eq!(ring.progress(), 80);

        ring.set_total(30);
        assert_eq!(ring.progress(), 30);
        assert_eq!(ring.total(), 30);
    }

    #[test]
    fn test_setters_request_redraw() {
        let mut ring = RingProgress::default();
        let before = ring.generation();
        ring.set_fill_color(Color::WHITE);
        ring.set_start_angle(0.0);
        ring.set_progress_text_enabled(true);
        assert_eq!(ring.generation(), before + 3);
    }

    #[test]
    fn test_non_visual_setters_do_not_redraw() {
        let mut ring = RingProgress::default();
        let before = ring.generation();
        ring.set_progress_interpolator(InterpolatorId::Bounce);
        ring.set_animate(true);
        ring.set_animate_duration(1000);
        assert_eq!(ring.generation(), before);
        assert_eq!(ring.interpolator().id(), InterpolatorId::Bounce);
    }

    #[test]
    fn test_unknown_text_type_resets_to_progress() {
        let mut ring = RingProgress::default();
        ring.set_progress_text_type(1);
        assert_eq!(ring.state().progress_text_type, TextType::Percent);
        ring.set_progress_text_type(5);
        assert_eq!(ring.state().progress_text_type, TextType::Progress);
        ring.set_progress_text_type(-1);
        assert_eq!(ring.state().progress_text_type, TextType::Progress);
    }

    #[test]
    fn test_width_setters_convert_and_move_ring_bounds() {
        let mut ring = RingProgress::new(Density::new(2.0, 1.0));
        ring.set_total_width(4.0);
        ring.set_progress_width(10.0);

        assert_eq!(ring.state().total_width, 8.0);
        assert_eq!(ring.paints().progress.width, 20.0);

        let oval = drawn(&ring).ops.into_iter().find_map(|op| match op {
            DrawOp::Oval { bounds, .. } => Some(bounds),
            _ => None,
        });
        let oval = oval.unwrap();
        assert_eq!(oval.x, 10.0);
        assert_eq!(oval.width, 180.0);
    }

    #[test]
    fn test_non_finite_sizes_are_ignored() {
        let mut ring = RingProgress::default();
        let before = ring.generation();
        ring.set_total_width(f32::NAN);
        ring.set_progress_width(f32::INFINITY);
        ring.set_progress_text_size(f32::NEG_INFINITY);

        assert_eq!(ring.state().total_width, 16.0);
        assert_eq!(ring.state().progress_width, 16.0);
        assert!(ring.state().progress_text_size.is_finite());
        assert_eq!(ring.generation(), before);
    }

    #[test]
    fn test_nan_start_angle_is_ignored_and_snapshot_survives() {
        let mut ring = RingProgress::default();
        ring.set_start_angle(90.0);
        let before = ring.generation();

        ring.set_start_angle(f32::NAN);
        ring.set_start_angle(f32::INFINITY);
        assert_eq!(ring.state().start_angle, 90.0);
        assert_eq!(ring.generation(), before);

        let json = ring.save_state(None).to_json().unwrap();
        let snapshot: RingSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.start_angle, 90.0);
    }

    #[test]
    fn test_text_size_uses_font_scale() {
        let mut ring = RingProgress::new(Density::new(2.0, 1.5));
        ring.set_progress_text_size(10.0);
        assert_eq!(ring.paints().text.size, 30.0);
    }

    #[test]
    fn test_measure_is_square() {
        let ring = RingProgress::default();
        assert_eq!(ring.measure(320.0), Size::new(320.0, 320.0));
    }

    #[test]
    fn test_half_progress_sweeps_half_circle() {
        let mut ring = RingProgress::default();
        ring.set_progress_with(50, false);
        let (start, sweep) = sweep_of(&drawn(&ring)).unwrap();
        assert_eq!(start, 270.0);
        assert!((sweep - 180.0).abs() < 1e-3);
    }

    #[test]
    fn test_full_progress_sweeps_exactly_360() {
        for total in [3, 7, 100, 333, 1000] {
            let mut ring = RingProgress::default();
            ring.set_total(total);
            ring.set_progress_with(total, false);
            let (_, sweep) = sweep_of(&drawn(&ring)).unwrap();
            assert_eq!(sweep, 360.0, "total {}", total);
        }
    }

    #[test]
    fn test_zero_total_draws_ring_without_arc() {
        let mut ring = RingProgress::default();
        ring.set_progress_with(50, false);
        ring.set_total(0);

        let surface = drawn(&ring);
        assert!(surface.arcs().is_empty());
        assert!(
            surface
                .ops
                .iter()
                .any(|op| matches!(op, DrawOp::Oval { .. }))
        );
    }

    #[test]
    fn test_negative_total_draws_no_arc() {
        let mut ring = RingProgress::default();
        ring.set_progress_with(50, false);
        ring.set_total(-5);
        assert_eq!(ring.progress(), -5);
        assert_eq!(ring.progress_sweep(), None);
        assert!(drawn(&ring).arcs().is_empty());

        ring.set_total(-100);
        assert!(drawn(&ring).arcs().is_empty());
    }

    #[test]
    fn test_zero_progress_draws_no_arc() {
        let ring = RingProgress::default();
        assert!(drawn(&ring).arcs().is_empty());
    }

    #[test]
    fn test_draw_order() {
        let mut ring = RingProgress::default();
        ring.set_fill_color(Color::WHITE);
        ring.set_progress_text_enabled(true);
        ring.set_progress_with(10, false);

        let kinds: Vec<&str> = drawn(&ring)
            .ops
            .iter()
            .map(|op| match op {
                DrawOp::FillCircle { .. } => "fill",
                DrawOp::Text { .. } => "text",
                DrawOp::Oval { .. } => "oval",
                DrawOp::Arc { .. } => "arc",
            })
            .collect();
        assert_eq!(kinds, ["fill", "text", "oval", "arc"]);
    }

    #[test]
    fn test_transparent_fill_is_skipped() {
        let ring = RingProgress::default();
        assert!(
            !drawn(&ring)
                .ops
                .iter()
                .any(|op| matches!(op, DrawOp::FillCircle { .. }))
        );
    }

    #[test]
    fn test_fill_radius_stays_inside_ring() {
        let widths = [2.0, 3.0, 8.0, 16.0, 25.0, 40.0];
        for total in widths {
            for progress in widths {
                let mut ring = RingProgress::default();
                ring.set_fill_color(Color::WHITE);
                ring.set_total_width(total);
                ring.set_progress_width(progress);

                let radius = ring.fill_radius(SIZE).unwrap();
                let limit = SIZE.width / 2.0 - total.min(progress) / 2.0;
                assert!(
                    radius <= limit,
                    "total {} progress {}: {} > {}",
                    total,
                    progress,
                    radius,
                    limit
                );
            }
        }
    }

    #[test]
    fn test_fill_radius_formula() {
        let mut ring = RingProgress::default();
        ring.set_fill_color(Color::WHITE);
        ring.set_total_width(20.0);
        ring.set_progress_width(10.0);
        assert_eq!(ring.fill_radius(SIZE), Some(100.0 - 20.0 + 1.0));

        ring.set_total_width(10.0);
        ring.set_progress_width(20.0);
        assert_eq!(ring.fill_radius(SIZE), Some(100.0 - 15.0 + 1.0));
    }

    #[test]
    fn test_labels() {
        let mut ring = RingProgress::default().with_locale(Locale::new(Language::English));
        assert_eq!(ring.label(), None);

        ring.set_progress_text_enabled(true);
        ring.set_progress_with(42, false);
        assert_eq!(ring.label().as_deref(), Some("42"));

        ring.set_progress_text_type(TextType::PERCENT);
        ring.set_total(200);
        assert_eq!(ring.label().as_deref(), Some("21%"));

        ring.set_total(0);
        assert_eq!(ring.label().as_deref(), Some("0%"));
    }

    #[test]
    fn test_label_is_centred() {
        let mut ring = RingProgress::default();
        ring.set_progress_text_enabled(true);
        let surface = drawn(&ring);
        let center = surface.ops.iter().find_map(|op| match op {
            DrawOp::Text { center, .. } => Some(*center),
            _ => None,
        });
        assert_eq!(center, Some(Point::new(100.0, 100.0)));
    }

    #[test]
    fn test_animation_reaches_target() {
        let mut ring = RingProgress::default();
        let start = Instant::now();
        ring.animate_to(80, start);

        assert!(ring.is_animating());
        assert_eq!(ring.animation_state(), TweenState::Running);
        assert_eq!(ring.progress(), 0);

        assert!(ring.tick(start + Duration::from_millis(150)));
        assert_eq!(ring.progress(), 40);

        assert!(!ring.tick(start + Duration::from_millis(300)));
        assert_eq!(ring.progress(), 80);
        assert!(!ring.is_animating());
        assert_eq!(ring.animation_state(), TweenState::Idle);
    }

    #[test]
    fn test_animation_across_extreme_restored_range() {
        let mut ring = RingProgress::default();
        let mut snapshot = ring.save_state(None);
        snapshot.total_value = 2_000_000_000;
        snapshot.progress_value = -2_000_000_000;
        ring.restore_state(snapshot);

        let start = Instant::now();
        ring.animate_to(2_000_000_000, start);
        assert!(ring.tick(start + Duration::from_millis(150)));
        assert_eq!(ring.progress(), 0);

        assert!(!ring.tick(start + Duration::from_millis(300)));
        assert_eq!(ring.progress(), 2_000_000_000);
    }

    #[test]
    fn test_cycle_animation_returns_to_start() {
        let mut ring = RingProgress::default();
        ring.set_progress_with(30, false);
        ring.set_progress_interpolator(InterpolatorId::Cycle);

        let start = Instant::now();
        ring.animate_to(60, start);
        ring.tick(start + Duration::from_millis(75));
        assert_eq!(ring.progress(), 60);

        assert!(!ring.tick(start + Duration::from_millis(300)));
        assert_eq!(ring.progress(), 30);
    }

    #[test]
    fn test_new_animation_supersedes_running_one() {
        let mut ring = RingProgress::default();
        let start = Instant::now();
        ring.animate_to(100, start);
        ring.tick(start + Duration::from_millis(150));
        assert_eq!(ring.progress(), 50);

        ring.animate_to(0, start + Duration::from_millis(150));
        ring.tick(start + Duration::from_millis(300));
        assert_eq!(ring.progress(), 25);

        ring.tick(start + Duration::from_millis(1000));
        assert_eq!(ring.progress(), 0);
    }

    #[test]
    fn test_overshoot_ticks_are_clamped() {
        let mut ring = RingProgress::default();
        ring.set_progress_interpolator(InterpolatorId::Overshoot);
        ring.set_animate_duration(1000);

        let start = Instant::now();
        ring.animate_to(100, start);
        for ms in (0..1000).step_by(10) {
            ring.tick(start + Duration::from_millis(ms));
            assert!(
                (0..=100).contains(&ring.progress()),
                "tick {}ms gave {}",
                ms,
                ring.progress()
            );
        }
    }

    #[test]
    fn test_anticipate_ticks_are_clamped() {
        let mut ring = RingProgress::default();
        ring.set_progress_interpolator(InterpolatorId::Anticipate);
        let start = Instant::now();
        ring.animate_to(100, start);
        ring.tick(start + Duration::from_millis(60));
        assert_eq!(ring.progress(), 0);
    }

    #[test]
    fn test_animation_target_is_clamped() {
        let mut ring = RingProgress::default();
        let start = Instant::now();
        ring.animate_to(1000, start);
        ring.tick(start + Duration::from_secs(1));
        assert_eq!(ring.progress(), 100);
    }

    #[test]
    fn test_detach_cancels_animation() {
        let mut ring = RingProgress::default();
        let start = Instant::now();
        ring.animate_to(100, start);

        ring.on_detached();
        ring.on_detached();
        assert_eq!(ring.animation_state(), TweenState::Cancelled);
        assert!(!ring.tick(start + Duration::from_secs(1)));
        assert_eq!(ring.progress(), 0);
    }

    #[test]
    fn test_set_progress_uses_animate_default() {
        let mut ring = RingProgress::default();
        ring.set_animate(true);
        ring.set_animate_duration(60_000);
        ring.set_progress(50);
        assert!(ring.is_animating());

        ring.on_detached();
        ring.set_animate(false);
        ring.set_progress(20);
        assert!(!ring.is_animating());
        assert_eq!(ring.progress(), 20);
    }

    #[test]
    fn test_immediate_set_leaves_running_animation() {
        let mut ring = RingProgress::default();
        let start = Instant::now();
        ring.animate_to(100, start);

        ring.set_progress_with(20, false);
        assert_eq!(ring.progress(), 20);
        assert!(ring.is_animating());

        ring.tick(start + Duration::from_secs(1));
        assert_eq!(ring.progress(), 100);
    }

    #[test]
    fn test_colour_resources() {
        let palette = Palette::material();
        let mut ring = RingProgress::default();
        ring.set_progress_color_res(&palette, "teal");
        assert_eq!(ring.state().progress_color, palette.resolve("teal").unwrap());
        assert_eq!(ring.paints().progress.color, palette.resolve("teal").unwrap());

        let before = ring.generation();
        ring.set_fill_color_res(&palette, "no_such_colour");
        assert_eq!(ring.generation(), before);
        assert_eq!(ring.state().fill_color, Color::TRANSPARENT);
    }

    #[test]
    fn test_from_style() {
        let style = RingStyle {
            total_value: Some(50),
            progress_value: Some(80),
            total_width: Some(4.0),
            progress_text_size: Some(10.0),
            progress_text_type: Some(9),
            progress_color: Some("#00ff00".to_string()),
            progress_interpolator: Some("decelerate".to_string()),
            ..Default::default()
        };
        let ring = RingProgress::from_style(&style, &Palette::material(), Density::new(2.0, 1.0));

        assert_eq!(ring.total(), 50);
        assert_eq!(ring.progress(), 50);
        assert_eq!(ring.state().total_width, 8.0);
        assert_eq!(ring.state().progress_width, 16.0);
        assert_eq!(ring.state().progress_text_size, 20.0);
        assert_eq!(ring.state().progress_text_type, TextType::Progress);
        assert_eq!(ring.paints().progress.color, Color::from_rgb8(0, 255, 0));
        assert_eq!(ring.interpolator().id(), InterpolatorId::Decelerate);
    }

    #[test]
    fn test_save_restore_round_trip() {
        let mut ring = RingProgress::new(Density::new(1.5, 1.25));
        ring.set_total(250);
        ring.set_progress_with(123, false);
        ring.set_total_color(Color::from_rgba(0.1, 0.2, 0.3, 0.4));
        ring.set_progress_color(Color::from_rgb(0.9, 0.1, 0.5));
        ring.set_progress_text_color(Color::WHITE);
        ring.set_fill_color(Color::from_rgba(0.3, 0.3, 0.3, 0.7));
        ring.set_total_width(7.3);
        ring.set_progress_width(11.1);
        ring.set_progress_round_cap(true);
        ring.set_progress_text_enabled(true);
        ring.set_progress_text_type(TextType::PERCENT);
        ring.set_progress_text_size(13.7);
        ring.set_progress_interpolator(InterpolatorId::AnticipateOvershoot);
        ring.set_start_angle(33.3);
        ring.set_animate(true);
        ring.set_animate_duration(2000);

        let host = serde_json::json!({ "panel": "animation" });
        let json = ring.save_state(Some(host.clone())).to_json().unwrap();

        let mut restored = RingProgress::default();
        let snapshot: RingSnapshot = serde_json::from_str(&json).unwrap();
        let returned_host = restored.restore_state(snapshot);

        assert_eq!(returned_host, Some(host));
        assert_eq!(restored.state(), ring.state());
        assert_eq!(restored.paints(), ring.paints());
        assert_eq!(restored.interpolator(), ring.interpolator());
        assert_eq!(
            restored.state().total_width.to_bits(),
            ring.state().total_width.to_bits()
        );
        assert_eq!(
            restored.state().start_angle.to_bits(),
            ring.state().start_angle.to_bits()
        );
    }

    #[test]
    fn test_restore_cancels_running_animation() {
        let mut ring = RingProgress::default();
        let snapshot = ring.save_state(None);
        let start = Instant::now();
        ring.animate_to(100, start);

        ring.restore_state(snapshot);
        assert!(!ring.is_animating());
        ring.tick(start + Duration::from_secs(1));
        assert_eq!(ring.progress(), 0);
    }
}

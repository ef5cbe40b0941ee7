//! Drawing surface for the ring
//!
//! The ring only needs four primitives. [`RingSurface`] is implemented for
//! iced's canvas [`Frame`]; tests record calls instead.

use iced::alignment::{Horizontal, Vertical};
use iced::widget::canvas::{Frame, LineCap, Path, Stroke, Text, path};
use iced::{Color, Pixels, Point, Radians, Rectangle};

use super::state::{Cap, StrokePaint, TextPaint};

/// 2D primitives the ring draws with. Angles are degrees, 0 at 3 o'clock,
/// growing clockwise.
pub trait RingSurface {
    fn fill_circle(&mut self, center: Point, radius: f32, color: Color);

    /// Draw `content` centred on `center`, both horizontally and vertically
    fn draw_label(&mut self, content: &str, center: Point, paint: &TextPaint);

    fn stroke_oval(&mut self, bounds: Rectangle, paint: &StrokePaint);

    fn stroke_arc(&mut self, bounds: Rectangle, start_angle: f32, sweep_angle: f32, paint: &StrokePaint);
}

fn stroke_for(paint: &StrokePaint) -> Stroke<'static> {
    Stroke::default()
        .with_width(paint.width)
        .with_color(paint.color)
        .with_line_cap(match paint.cap {
            Cap::Butt => LineCap::Butt,
            Cap::Round => LineCap::Round,
        })
}

/// Bounds are always square, so the inscribed oval is a circle
fn inscribed_circle(bounds: Rectangle) -> (Point, f32) {
    (bounds.center(), bounds.width.min(bounds.height) / 2.0)
}

impl RingSurface for Frame {
    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        if radius <= 0.0 {
            return;
        }
        self.fill(&Path::circle(center, radius), color);
    }

    fn draw_label(&mut self, content: &str, center: Point, paint: &TextPaint) {
        if paint.size <= 0.0 {
            return;
        }
        self.fill_text(Text {
            content: content.to_string(),
            position: center,
            color: paint.color,
            size: Pixels(paint.size),
            align_x: Horizontal::Center.into(),
            align_y: Vertical::Center,
            ..Text::default()
        });
    }

    fn stroke_oval(&mut self, bounds: Rectangle, paint: &StrokePaint) {
        let (center, radius) = inscribed_circle(bounds);
        if radius <= 0.0 {
            return;
        }
        self.stroke(&Path::circle(center, radius), stroke_for(paint));
    }

    fn stroke_arc(&mut self, bounds: Rectangle, start_angle: f32, sweep_angle: f32, paint: &StrokePaint) {
        let (center, radius) = inscribed_circle(bounds);
        if radius <= 0.0 {
            return;
        }
        let start = start_angle.to_radians();
        let end = (start_angle + sweep_angle).to_radians();
        let arc = Path::new(|builder| {
            builder.arc(path::Arc {
                center,
                radius,
                start_angle: Radians(start),
                end_angle: Radians(end),
            });
        });
        self.stroke(&arc, stroke_for(paint));
    }
}

/// A primitive call captured by [`RecordingSurface`]
#[cfg(test)]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    FillCircle {
        center: Point,
        radius: f32,
        color: Color,
    },
    Text {
        content: String,
        center: Point,
    },
    Oval {
        bounds: Rectangle,
        paint: StrokePaint,
    },
    Arc {
        bounds: Rectangle,
        start_angle: f32,
        sweep_angle: f32,
        paint: StrokePaint,
    },
}

#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub ops: Vec<DrawOp>,
}

#[cfg(test)]
impl RecordingSurface {
    pub fn arcs(&self) -> Vec<&DrawOp> {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Arc { .. }))
            .collect()
    }
}

#[cfg(test)]
impl RingSurface for RecordingSurface {
    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.ops.push(DrawOp::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn draw_label(&mut self, content: &str, center: Point, _paint: &TextPaint) {
        self.ops.push(DrawOp::Text {
            content: content.to_string(),
            center,
        });
    }

    fn stroke_oval(&mut self, bounds: Rectangle, paint: &StrokePaint) {
        self.ops.push(DrawOp::Oval {
            bounds,
            paint: *paint,
        });
    }

    fn stroke_arc(&mut self, bounds: Rectangle, start_angle: f32, sweep_angle: f32, paint: &StrokePaint) {
        self.ops.push(DrawOp::Arc {
            bounds,
            start_angle,
            sweep_angle,
            paint: *paint,
        });
    }
}

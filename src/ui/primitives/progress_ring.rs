//! Circular progress ring primitive
//!
//! A customizable circular progress indicator drawn with iced's Canvas.
//!
//! # Design
//!
//! - [`RingProgress`] owns the ring's state and knows how to draw itself onto
//!   any [`RingSurface`].
//! - [`RingCanvas`] adapts a borrowed ring to `canvas::Program`, caching the
//!   geometry until the ring requests a redraw or the size changes.
//! - [`RingView`] is the widget placed in a view tree. It forces a square
//!   layout: the height always equals the available width.
//!
//! This is a primitive component: it uses generic Message types and does not
//! depend on application-specific types.

mod model;
mod state;
mod surface;

use iced::advanced::layout::{self, Layout};
use iced::advanced::renderer;
use iced::advanced::widget::{self, Widget};
use iced::widget::Canvas;
use iced::widget::canvas::{Geometry, Program};
use iced::{Element, Length, Rectangle, Renderer, Size, Theme, mouse};

pub use model::RingProgress;
pub use state::{RingPaints, RingState, TextType};
pub use surface::RingSurface;

/// Width used when the parent offers unbounded width
const FALLBACK_SIZE: f32 = 240.0;

/// `canvas::Program` over a borrowed ring
#[derive(Clone, Copy)]
pub struct RingCanvas<'a> {
    ring: &'a RingProgress,
}

impl<'a> RingCanvas<'a> {
    pub fn new(ring: &'a RingProgress) -> Self {
        Self { ring }
    }
}

impl<Message> Program<Message> for RingCanvas<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        // Regenerated when the ring clears the cache or the bounds change size
        let geometry = self.ring.cache().draw(renderer, bounds.size(), |frame| {
            self.ring.draw(frame, bounds.size());
        });
        vec![geometry]
    }
}

/// Square widget hosting a ring canvas
pub struct RingView<'a> {
    ring: &'a RingProgress,
    max_size: Option<f32>,
}

impl<'a> RingView<'a> {
    pub fn new(ring: &'a RingProgress) -> Self {
        Self {
            ring,
            max_size: None,
        }
    }

    /// Cap the side length of the square
    pub fn max_size(mut self, max_size: f32) -> Self {
        self.max_size = Some(max_size);
        self
    }

    fn side(&self, limits: &layout::Limits) -> f32 {
        let width = limits.max().width;
        let width = if width.is_finite() { width } else { FALLBACK_SIZE };
        match self.max_size {
            Some(max) => width.min(max),
            None => width,
        }
    }

    fn build_content<Message: 'a>(&self, side: f32) -> Element<'a, Message> {
        Canvas::new(RingCanvas::new(self.ring))
            .width(side)
            .height(side)
            .into()
    }
}

impl<'a, Message: 'a> Widget<Message, Theme, Renderer> for RingView<'a> {
    fn size(&self) -> Size<Length> {
        Size::new(Length::Fill, Length::Shrink)
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        // The height limit is ignored so the ring is never elliptical
        let square = self.ring.measure(self.side(limits));

        let mut content: Element<'a, Message> = self.build_content(square.width);
        let child_limits = layout::Limits::new(Size::ZERO, square);
        let child_node = content
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, &child_limits);

        layout::Node::with_children(square, vec![child_node])
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        let side = layout.bounds().width;
        let content: Element<'a, Message> = self.build_content(side);

        if let Some(child_layout) = layout.children().next() {
            content.as_widget().draw(
                &tree.children[0],
                renderer,
                theme,
                style,
                child_layout,
                cursor,
                viewport,
            );
        }
    }

    fn children(&self) -> Vec<widget::Tree> {
        let content: Element<'a, Message> = self.build_content(FALLBACK_SIZE);
        vec![widget::Tree::new(&content)]
    }

    fn diff(&self, tree: &mut widget::Tree) {
        let content: Element<'a, Message> = self.build_content(FALLBACK_SIZE);
        tree.diff_children(&[content]);
    }
}

impl<'a, Message: 'a> From<RingView<'a>> for Element<'a, Message> {
    fn from(widget: RingView<'a>) -> Self {
        Element::new(widget)
    }
}

/// Create a square ring element
pub fn view_progress_ring<'a, Message: 'a>(
    ring: &'a RingProgress,
    max_size: f32,
) -> Element<'a, Message> {
    RingView::new(ring).max_size(max_size).into()
}

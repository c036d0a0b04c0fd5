// src/ui/components/boundary.rs
//! Error boundary for fallible widgets
//!
//! Widgets whose rendering can fail implement [`Renderable`]. Wrapping one in
//! an [`ErrorBoundary`] turns it into an ordinary infallible [`Drawable`]: the
//! first failed render is logged, the boundary trips, and from then on a small
//! "Error" placeholder is drawn in its place until [`ErrorBoundary::reset`].

use core::cell::Cell;

use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};
use log::{error, info};
use thiserror_no_std::Error;

use crate::ui::components::rep_graph::GraphError;
use crate::ui::core::{Drawable, TouchEvent, TouchPoint, TouchResult, Touchable};
use crate::ui::styling::{COLOR_BACKGROUND, FontProvider, LIGHT_GRAY};

/// Errors raised while rendering a widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RenderError {
    /// The draw target rejected a primitive
    #[error("draw target rejected a primitive")]
    Target,

    /// The graph could not be laid out or driven
    #[error("graph error: {0}")]
    Graph(GraphError),
}

impl From<GraphError> for RenderError {
    fn from(err: GraphError) -> Self {
        RenderError::Graph(err)
    }
}

/// A widget whose rendering can fail
pub trait Renderable {
    /// Render the widget, reporting why if it could not be drawn
    fn render<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), RenderError>;

    fn bounds(&self) -> Rectangle;

    fn is_dirty(&self) -> bool;

    fn mark_clean(&mut self);

    fn mark_dirty(&mut self);
}

/// Render `child`, drawing `fallback` instead if it fails
///
/// Returns the render error that triggered the fallback, if any. Only a
/// failure of the fallback itself is propagated.
pub fn render_or_fallback<D, R, F>(
    display: &mut D,
    child: &R,
    fallback: F,
) -> Result<Option<RenderError>, D::Error>
where
    D: DrawTarget<Color = Rgb565>,
    R: Renderable + ?Sized,
    F: FnOnce(&mut D) -> Result<(), D::Error>,
{
    match child.render(display) {
        Ok(()) => Ok(None),
        Err(err) => {
            error!("Render failed, showing fallback: {}", err);
            fallback(display)?;
            Ok(Some(err))
        }
    }
}

/// Minimal placeholder drawn by a tripped boundary
#[derive(Debug, Clone, Copy)]
pub struct ErrorFallback {
    pub message: &'static str,
    pub font: &'static MonoFont<'static>,
    pub background: Rgb565,
    pub foreground: Rgb565,
}

impl ErrorFallback {
    pub fn new<F: FontProvider + ?Sized>(fonts: &F) -> Self {
        Self {
            message: "Error",
            font: fonts.regular(),
            background: COLOR_BACKGROUND,
            foreground: LIGHT_GRAY,
        }
    }

    /// Clear `bounds` and center the message in it
    pub fn draw<D: DrawTarget<Color = Rgb565>>(
        &self,
        bounds: Rectangle,
        display: &mut D,
    ) -> Result<(), D::Error> {
        bounds
            .into_styled(PrimitiveStyle::with_fill(self.background))
            .draw(display)?;

        let text_style = TextStyleBuilder::new()
            .alignment(Alignment::Center)
            .baseline(Baseline::Middle)
            .build();
        Text::with_text_style(
            self.message,
            bounds.center(),
            MonoTextStyle::new(self.font, self.foreground),
            text_style,
        )
        .draw(display)?;

        Ok(())
    }
}

/// Latching error boundary around a [`Renderable`] child
pub struct ErrorBoundary<T> {
    child: T,
    fallback: ErrorFallback,
    tripped: Cell<Option<RenderError>>,
}

impl<T: Renderable> ErrorBoundary<T> {
    pub fn new(child: T, fallback: ErrorFallback) -> Self {
        Self {
            child,
            fallback,
            tripped: Cell::new(None),
        }
    }

    pub fn child(&self) -> &T {
        &self.child
    }

    pub fn child_mut(&mut self) -> &mut T {
        &mut self.child
    }

    /// The error that tripped the boundary, if it has tripped
    pub fn error(&self) -> Option<RenderError> {
        self.tripped.get()
    }

    pub fn is_tripped(&self) -> bool {
        self.tripped.get().is_some()
    }

    /// Clear the latch so the child is rendered again on the next draw
    pub fn reset(&mut self) {
        if self.tripped.take().is_some() {
            info!("Error boundary reset");
            self.child.mark_dirty();
        }
    }
}

impl<T: Renderable> Drawable for ErrorBoundary<T> {
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        let bounds = self.child.bounds();
        if self.is_tripped() {
            return self.fallback.draw(bounds, display);
        }

        if let Some(err) =
            render_or_fallback(display, &self.child, |d| self.fallback.draw(bounds, d))?
        {
            self.tripped.set(Some(err));
        }
        Ok(())
    }

    fn bounds(&self) -> Rectangle {
        self.child.bounds()
    }

    fn is_dirty(&self) -> bool {
        self.child.is_dirty()
    }

    fn mark_clean(&mut self) {
        self.child.mark_clean();
    }

    fn mark_dirty(&mut self) {
        self.child.mark_dirty();
    }
}

impl<T: Renderable + Touchable> Touchable for ErrorBoundary<T> {
    fn contains_point(&self, point: TouchPoint) -> bool {
        self.child.contains_point(point)
    }

    fn handle_touch(&mut self, event: TouchEvent) -> TouchResult {
        if self.is_tripped() {
            return TouchResult::NotHandled;
        }
        self.child.handle_touch(event)
    }
}

// src/pages/page.rs
//! Core page abstraction for the UI page system.
//!
//! [`Page`] defines the lifecycle, rendering, and interaction contract for a
//! screen. Implementors handle their own layout, touch input, dirty tracking,
//! and drawing; the host loop drives them once per frame.

use crate::ui::core::{Action, PageEvent, TouchEvent};
use embassy_time::Instant;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

extern crate alloc;
use alloc::boxed::Box;

/// Trait that all UI pages must implement.
///
/// The host calls these methods in a well-defined order each frame:
///
/// 1. **`on_activate`**: once, when the page is first shown.
/// 2. **`on_event`**: zero or more times per frame for incoming events.
/// 3. **`handle_touch`**: when a touch event targets this page.
/// 4. **`update`**: once per frame to advance animations.
/// 5. **`draw_page`**: when `is_dirty()` is true, followed by `mark_clean`.
pub trait Page {
    /// Human-readable title (may appear in headers or debug logs).
    fn title(&self) -> &str;

    /// Called once when this page becomes the active page.
    fn on_activate(&mut self) {}

    /// Process a touch event and optionally return the resulting [`Action`].
    fn handle_touch(&mut self, event: TouchEvent) -> Option<Action>;

    /// Advance per-frame state to `now`.
    fn update(&mut self, now: Instant);

    /// Handle an incoming [`PageEvent`].
    ///
    /// Returns `true` if the event was consumed and the page needs a redraw.
    fn on_event(&mut self, _event: &PageEvent) -> bool {
        false
    }

    /// Render the dirty parts of the page to the given display target.
    fn draw_page<D: DrawTarget<Color = Rgb565>>(&mut self, display: &mut D)
    -> Result<(), D::Error>;

    /// Bounding rectangle of this page (typically the full screen).
    fn bounds(&self) -> Rectangle;

    /// Whether the page needs redrawing.
    fn is_dirty(&self) -> bool;

    /// Clear the dirty flag after a successful draw.
    fn mark_clean(&mut self);

    /// Force the page to be redrawn on the next frame.
    fn mark_dirty(&mut self);
}

/// Allows a `Box<T>` to be used anywhere a `Page` is expected.
impl<T: Page> Page for Box<T> {
    fn title(&self) -> &str {
        (**self).title()
    }

    fn on_activate(&mut self) {
        (**self).on_activate()
    }

    fn handle_touch(&mut self, event: TouchEvent) -> Option<Action> {
        (**self).handle_touch(event)
    }

    fn update(&mut self, now: Instant) {
        (**self).update(now)
    }

    fn on_event(&mut self, event: &PageEvent) -> bool {
        (**self).on_event(event)
    }

    fn draw_page<D: DrawTarget<Color = Rgb565>>(
        &mut self,
        display: &mut D,
    ) -> Result<(), D::Error> {
        (**self).draw_page(display)
    }

    fn bounds(&self) -> Rectangle {
        (**self).bounds()
    }

    fn is_dirty(&self) -> bool {
        (**self).is_dirty()
    }

    fn mark_clean(&mut self) {
        (**self).mark_clean()
    }

    fn mark_dirty(&mut self) {
        (**self).mark_dirty()
    }
}

// src/ui/components/text.rs
//! Single line text label

use crate::ui::core::Drawable;
use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::{Alignment, Baseline, Text as EgText, TextStyleBuilder};

/// Maximum number of bytes a label can hold
pub const TEXT_CAPACITY: usize = 64;

/// Text component for displaying a single line of text
///
/// The text is left aligned and vertically centered in its bounds. Content longer than
/// [`TEXT_CAPACITY`] bytes is truncated at a character boundary.
///
/// # Examples
/// ```ignore
/// let greeting = TextComponent::new(
///     Rectangle::new(Point::new(16, 16), Size::new(288, 32)),
///     "Hi, Sam!",
///     fonts.emphasized(),
/// )
/// .with_color(WHITE);
/// ```
pub struct TextComponent {
    bounds: Rectangle,
    text: heapless::String<TEXT_CAPACITY>,
    font: &'static MonoFont<'static>,
    color: Rgb565,
    dirty: bool,
}

impl TextComponent {
    pub fn new(bounds: Rectangle, text: &str, font: &'static MonoFont<'static>) -> Self {
        Self {
            bounds,
            text: truncated(text),
            font,
            color: Rgb565::WHITE,
            dirty: true,
        }
    }

    pub fn with_color(mut self, color: Rgb565) -> Self {
        self.color = color;
        self
    }

    /// Update the displayed text.
    ///
    /// Automatically marks the component as dirty if the text changed.
    pub fn set_text(&mut self, text: &str) {
        let new_text = truncated(text);
        if self.text != new_text {
            self.text = new_text;
            self.dirty = true;
        }
    }

    /// Get the current text content.
    pub fn text(&self) -> &str {
        &self.text
    }

    fn text_position(&self) -> Point {
        Point::new(self.bounds.top_left.x, self.bounds.center().y)
    }
}

fn truncated(text: &str) -> heapless::String<TEXT_CAPACITY> {
    let mut out = heapless::String::new();
    for ch in text.chars() {
        if out.push(ch).is_err() {
            break;
        }
    }
    out
}

impl Drawable for TextComponent {
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        let text_style = TextStyleBuilder::new()
            .alignment(Alignment::Left)
            .baseline(Baseline::Middle)
            .build();

        EgText::with_text_style(
            &self.text,
            self.text_position(),
            MonoTextStyle::new(self.font, self.color),
            text_style,
        )
        .draw(display)?;

        Ok(())
    }

    fn bounds(&self) -> Rectangle {
        self.bounds
    }

    fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn mark_clean(&mut self) {
        self.dirty = false;
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::mono_font::ascii::FONT_6X10;

    fn label(text: &str) -> TextComponent {
        TextComponent::new(
            Rectangle::new(Point::new(10, 10), Size::new(100, 20)),
            text,
            &FONT_6X10,
        )
    }

    #[test]
    fn test_set_text_marks_dirty_only_on_change() {
        let mut text = label("Hi, Sam!");
        text.mark_clean();

        text.set_text("Hi, Sam!");
        assert!(!text.is_dirty());

        text.set_text("Hi, Alex!");
        assert!(text.is_dirty());
        assert_eq!(text.text(), "Hi, Alex!");
    }

    #[test]
    fn test_long_text_is_truncated() {
        let long = "x".repeat(TEXT_CAPACITY + 10);
        let text = label(&long);
        assert_eq!(text.text().len(), TEXT_CAPACITY);
    }

    #[test]
    fn test_text_anchors_left_and_middle() {
        let text = label("a");
        assert_eq!(text.text_position(), Point::new(10, 19));
    }
}

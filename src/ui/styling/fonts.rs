//! Font selection
//!
//! Pages ask a [`FontProvider`] for a regular or an emphasized face rather
//! than naming embedded-graphics fonts directly, so a board with a custom
//! font table only has to swap the provider.

use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::mono_font::ascii::{FONT_9X15, FONT_9X15_BOLD};

/// Supplies the regular and emphasized faces used for labels
pub trait FontProvider {
    fn regular(&self) -> &'static MonoFont<'static>;

    fn emphasized(&self) -> &'static MonoFont<'static>;
}

/// Built-in 9x15 ASCII fonts, the closest match to 16px UI text
#[derive(Debug, Clone, Copy, Default)]
pub struct MonoFonts;

impl FontProvider for MonoFonts {
    fn regular(&self) -> &'static MonoFont<'static> {
        &FONT_9X15
    }

    fn emphasized(&self) -> &'static MonoFont<'static> {
        &FONT_9X15_BOLD
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::prelude::Size;

    #[test]
    fn test_mono_fonts_share_cell_size() {
        let fonts = MonoFonts;
        assert_eq!(fonts.regular().character_size, Size::new(9, 15));
        assert_eq!(fonts.emphasized().character_size, Size::new(9, 15));
    }
}

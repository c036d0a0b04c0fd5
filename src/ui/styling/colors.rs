//! Color definitions for the rep tracker UI
//!
//! All colors are RGB565, the native format of the target displays.
//!
//! # RGB565 Format
//! - Red: 5 bits (0-31)
//! - Green: 6 bits (0-63)
//! - Blue: 5 bits (0-31)
//!
//! To convert from 8-bit RGB: R>>3, G>>2, B>>3

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

// ============================================================================
// Base Colors
// ============================================================================

/// Screen background - deep violet (#30293D)
pub const COLOR_BACKGROUND: Rgb565 = Rgb565::new(48 >> 3, 41 >> 2, 61 >> 3);

/// Callout accent - pale yellow (#F6F3BA)
pub const COLOR_ACCENT: Rgb565 = Rgb565::new(246 >> 3, 243 >> 2, 186 >> 3);

/// Area fill under the rep curve - cyan (#0AE1EF)
pub const COLOR_AREA_FILL: Rgb565 = Rgb565::new(10 >> 3, 225 >> 2, 239 >> 3);

// ============================================================================
// Text Colors
// ============================================================================

/// Pure white - maximum brightness in RGB565
pub const WHITE: Rgb565 = Rgb565::new(31, 63, 31);

/// Light gray - for inactive day labels (#D3D3D3)
pub const LIGHT_GRAY: Rgb565 = Rgb565::new(211 >> 3, 211 >> 2, 211 >> 3);

/// Near-black text drawn on top of the accent color
pub const COLOR_ON_ACCENT: Rgb565 = Rgb565::new(0, 0, 0);

// ============================================================================
// Rep Graph Palette
// ============================================================================

/// Colors used by the rep graph widget
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphPalette {
    /// Background the area gradient fades into
    pub background: Rgb565,
    /// Curve stroke and day markers
    pub line: Rgb565,
    /// Area gradient color
    pub area: Rgb565,
    /// Callout box, arrow, connector and marker ring
    pub accent: Rgb565,
    /// Value text inside the callout
    pub on_accent: Rgb565,
    /// Active day label
    pub label_active: Rgb565,
    /// Inactive day labels
    pub label_inactive: Rgb565,
}

impl Default for GraphPalette {
    fn default() -> Self {
        Self {
            background: COLOR_BACKGROUND,
            line: WHITE,
            area: COLOR_AREA_FILL,
            accent: COLOR_ACCENT,
            on_accent: COLOR_ON_ACCENT,
            label_active: WHITE,
            label_inactive: LIGHT_GRAY,
        }
    }
}

/// Blend `color` over `background` with the given opacity (0.0 - 1.0)
pub fn blend(background: Rgb565, color: Rgb565, opacity: f32) -> Rgb565 {
    lerp_color(background, color, opacity)
}

fn lerp_color(start: Rgb565, end: Rgb565, t: f32) -> Rgb565 {
    let t = t.clamp(0.0, 1.0);
    let (r0, g0, b0) = rgb565_to_rgb888(start);
    let (r1, g1, b1) = rgb565_to_rgb888(end);

    let r = r0 as f32 + (r1 as f32 - r0 as f32) * t;
    let g = g0 as f32 + (g1 as f32 - g0 as f32) * t;
    let b = b0 as f32 + (b1 as f32 - b0 as f32) * t;

    rgb888_to_rgb565(r as u8, g as u8, b as u8)
}

fn rgb565_to_rgb888(color: Rgb565) -> (u8, u8, u8) {
    let raw = color.into_storage();
    let r5 = ((raw >> 11) & 0x1f) as u8;
    let g6 = ((raw >> 5) & 0x3f) as u8;
    let b5 = (raw & 0x1f) as u8;

    let r8 = (r5 << 3) | (r5 >> 2);
    let g8 = (g6 << 2) | (g6 >> 4);
    let b8 = (b5 << 3) | (b5 >> 2);

    (r8, g8, b8)
}

fn rgb888_to_rgb565(r8: u8, g8: u8, b8: u8) -> Rgb565 {
    Rgb565::new(r8 >> 3, g8 >> 2, b8 >> 3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_endpoints() {
        assert_eq!(blend(COLOR_BACKGROUND, COLOR_AREA_FILL, 0.0), COLOR_BACKGROUND);
        assert_eq!(blend(COLOR_BACKGROUND, COLOR_AREA_FILL, 1.0), COLOR_AREA_FILL);
    }

    #[test]
    fn test_blend_clamps_opacity() {
        assert_eq!(blend(COLOR_BACKGROUND, WHITE, 2.5), WHITE);
        assert_eq!(blend(COLOR_BACKGROUND, WHITE, -1.0), COLOR_BACKGROUND);
    }
}

//! Styling system for UI elements
//!
//! - [`colors`] - Color constants, the graph palette and color blending
//! - [`fonts`] - Regular/emphasized font selection

// Module declarations
pub mod colors;
pub mod fonts;

// Re-export commonly used items for convenience
pub use colors::{
    COLOR_ACCENT, COLOR_AREA_FILL, COLOR_BACKGROUND, COLOR_ON_ACCENT, GraphPalette, LIGHT_GRAY,
    WHITE, blend,
};
pub use fonts::{FontProvider, MonoFonts};

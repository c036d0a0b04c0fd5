// src/ui/mod.rs
//! Rep tracker UI
//!
//! This module provides:
//! - Core traits for drawable and touchable elements
//! - The interactive rep graph and the error boundary that fences it
//! - Colors, palette and font selection
//! - Event types for page updates

pub mod components;
pub mod core;
pub mod styling;

// Re-export commonly used items
pub use components::{ErrorBoundary, RenderError, Renderable, RepGraph, TextComponent};
pub use core::{
    Action, Drawable, PageEvent, TouchEvent, TouchPoint, TouchResult, Touchable,
};
pub use styling::{FontProvider, GraphPalette, MonoFonts};

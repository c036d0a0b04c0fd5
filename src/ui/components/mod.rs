// src/ui/components/mod.rs
//! UI components library

pub mod boundary;
pub mod rep_graph;
pub mod text;

pub use boundary::{ErrorBoundary, ErrorFallback, RenderError, Renderable, render_or_fallback};
pub use rep_graph::{GraphError, GraphResult, RepGraph};
pub use text::TextComponent;

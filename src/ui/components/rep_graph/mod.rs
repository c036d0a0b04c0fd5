//! Interactive weekly rep graph
//!
//! Plots seven days of rep counts as a smooth bump curve over a gradient
//! filled area, with a row of weekday labels underneath. Tapping a day
//! selects it and a floating callout (value label, arrow, marker and
//! connector bar) glides to the selected point.
//!
//! ## Module Structure
//!
//! - `layout`: widget dimensions split into plot area and label row
//! - `scale`: linear maps from day index and rep count to pixels
//! - `bezier`: cubic Bézier solver used for the curve and the easing
//! - `path`: bump curve and area paths, with SVG path data export
//! - `touch`: per-day touch buckets
//! - `animator`: eased, retargetable selection animation
//! - `callout`: callout geometry derived from the animated position
//! - `render`: embedded-graphics drawing of each layer
//! - `component`: the [`RepGraph`] widget tying everything together

mod animator;
mod bezier;
mod callout;
mod component;
mod constants;
mod layout;
mod path;
mod render;
mod scale;
mod touch;

use thiserror_no_std::Error;

pub use animator::{AnimationState, ProgressAnimator};
pub use bezier::{CubicBezier, Easing};
pub use callout::{CalloutGeometry, CalloutVisuals, ConnectorBar, LabelBox, Marker, derive_visuals};
pub use component::{ChartGeometry, RepGraph};
pub use constants::SELECTION_ANIMATION;
pub use layout::GraphLayout;
pub use path::{AreaPath, BumpSegment, CurvePath, PlotPoint};
pub use scale::{LinearScale, ScaleMapping};
pub use touch::{TouchBucket, TouchBuckets};

/// Errors raised while laying out or driving the rep graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("widget of {width}x{height}px leaves no room for the plot")]
    DegenerateLayout { width: u32, height: u32 },

    #[error("day index {index} is out of range")]
    InvalidDayIndex { index: usize },
}

pub type GraphResult<T> = Result<T, GraphError>;

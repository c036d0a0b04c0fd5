//! Constants for rep graph layout, rendering and animation
//!
//! All magic numbers are defined here with descriptive names and units.

use embassy_time::Duration;

/// Font size the day labels are laid out for, in pixels
pub const DAY_FONT_SIZE_PX: u32 = 16;

/// Height of the day label row below the plot area in pixels
pub const DAY_LABEL_HEIGHT_PX: u32 = DAY_FONT_SIZE_PX + 8;

/// Minimum width reserved for each day label column in pixels
pub const MIN_DAY_LABEL_WIDTH_PX: u32 = 40;

/// Headroom above the largest rep count, as a fraction of that count
pub const Y_HEADROOM_FACTOR: f32 = 0.2;

/// Y domain upper bound used when every day has zero reps
pub const MIN_Y_DOMAIN: f32 = 1.0;

/// Number of line segments per bump segment when rasterising the curve
pub const CURVE_SUBDIVISIONS: usize = 12;

/// Curve stroke width in pixels
pub const CURVE_LINE_WIDTH_PX: u32 = 2;

/// Radius of the static per-day markers in pixels
pub const DAY_MARKER_RADIUS_PX: u32 = 5;

/// Area gradient opacity at the top of the filled area
pub const AREA_FILL_TOP_OPACITY: f32 = 0.2;

/// Area gradient opacity at the baseline
pub const AREA_FILL_BOTTOM_OPACITY: f32 = 0.0;

/// Number of color bands used to approximate the area gradient
pub const AREA_FILL_BANDS: u8 = 8;

/// Height of the floating value label in pixels
pub const LABEL_HEIGHT_PX: f32 = 29.0;

/// Gap between the bottom of the value label and the selected point
pub const LABEL_GAP_PX: f32 = 15.0;

/// Corner radius of the value label in pixels
pub const LABEL_CORNER_RADIUS_PX: u32 = 6;

/// Width (and height) of the pointer arrow under the label in pixels
pub const ARROW_WIDTH_PX: f32 = 6.0;

/// Distance between the selected point and the top of the connector bar
pub const CONNECTOR_OFFSET_PX: f32 = 10.0;

/// Connector bar width in pixels
pub const CONNECTOR_WIDTH_PX: f32 = 1.0;

/// Radius of the animated selection marker in pixels
pub const MARKER_RADIUS_PX: f32 = 6.0;

/// Stroke width of the selection marker ring in pixels
pub const MARKER_STROKE_PX: u32 = 4;

/// Duration of the selection animation
pub const SELECTION_ANIMATION: Duration = Duration::from_millis(500);

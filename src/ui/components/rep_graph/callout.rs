//! Floating value callout geometry
//!
//! Everything the callout draws (label box, pointer arrow, value text,
//! marker ring and connector bar) is a pure function of the animated
//! progress value and the curve, computed by [`derive_visuals`] each frame.

use super::constants::{
    ARROW_WIDTH_PX, CONNECTOR_OFFSET_PX, CONNECTOR_WIDTH_PX, LABEL_CORNER_RADIUS_PX, LABEL_GAP_PX,
    LABEL_HEIGHT_PX, MARKER_RADIUS_PX,
};
use super::path::{CurvePath, PlotPoint};

/// Fixed callout dimensions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalloutGeometry {
    /// Label box width (depends on the configured label size)
    pub label_width: f32,
    /// Label box height
    pub label_height: f32,
    /// Gap between the label box and the point on the curve
    pub label_gap: f32,
    /// Pointer arrow width and height
    pub arrow_width: f32,
    /// Offset from the point to the top of the connector bar
    pub connector_offset: f32,
    /// Marker ring radius
    pub marker_radius: f32,
}

impl CalloutGeometry {
    pub fn new(label_width: f32) -> Self {
        Self {
            label_width,
            label_height: LABEL_HEIGHT_PX,
            label_gap: LABEL_GAP_PX,
            arrow_width: ARROW_WIDTH_PX,
            connector_offset: CONNECTOR_OFFSET_PX,
            marker_radius: MARKER_RADIUS_PX,
        }
    }
}

/// Rounded label box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelBox {
    pub top_left: PlotPoint,
    pub width: f32,
    pub height: f32,
    pub corner_radius: u32,
}

/// Vertical bar from just below the point down past the baseline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConnectorBar {
    pub x: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

/// Ring marking the selected point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub center: PlotPoint,
    pub radius: f32,
}

/// Positions of every callout element for one progress value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalloutVisuals {
    /// Point on the curve under the progress value
    pub anchor: PlotPoint,
    pub label: LabelBox,
    /// Center of the value text
    pub text_anchor: PlotPoint,
    /// Downward pointing arrow: left corner, tip, right corner
    pub arrow: [PlotPoint; 3],
    pub connector: ConnectorBar,
    pub marker: Marker,
}

/// Derive the callout layout for marker position `progress`
///
/// The anchor height is read off the curve; outside the curve's extent it
/// falls back to `baseline`.
pub fn derive_visuals(
    progress: f32,
    curve: &CurvePath,
    baseline: f32,
    geometry: &CalloutGeometry,
) -> CalloutVisuals {
    let x = progress;
    let y = curve.y_for_x(x).unwrap_or(baseline);

    let label_bottom = y - geometry.label_gap;
    let label_top = label_bottom - geometry.label_height;
    let half_arrow = geometry.arrow_width / 2.0;

    CalloutVisuals {
        anchor: PlotPoint::new(x, y),
        label: LabelBox {
            top_left: PlotPoint::new(x - geometry.label_width / 2.0, label_top),
            width: geometry.label_width,
            height: geometry.label_height,
            corner_radius: LABEL_CORNER_RADIUS_PX,
        },
        text_anchor: PlotPoint::new(x, label_top + geometry.label_height / 2.0),
        arrow: [
            PlotPoint::new(x - half_arrow, label_bottom),
            PlotPoint::new(x, label_bottom + geometry.arrow_width),
            PlotPoint::new(x + half_arrow, label_bottom),
        ],
        connector: ConnectorBar {
            x: x - CONNECTOR_WIDTH_PX / 2.0,
            top: y + geometry.connector_offset,
            width: CONNECTOR_WIDTH_PX,
            height: (baseline - y).max(0.0),
        },
        marker: Marker {
            center: PlotPoint::new(x, y),
            radius: geometry.marker_radius,
        },
    }
}

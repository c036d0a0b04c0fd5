//! Pixel layout of the rep graph
//!
//! Splits the widget into the plot area and the day label row, and derives
//! the horizontal extent of the plotted points. All values are in
//! chart-local pixels, origin at the widget's top-left corner.

use crate::config::RepGraphConfig;

use super::constants::{DAY_LABEL_HEIGHT_PX, MIN_DAY_LABEL_WIDTH_PX};
use super::{GraphError, GraphResult};

/// Resolved layout for one configuration and bounds width
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphLayout {
    /// Overall widget width
    pub width: f32,
    /// Overall widget height
    pub height: f32,
    /// Padding on each side of the plot
    pub horizontal_padding: f32,
    /// Width of the floating value label
    pub label_width: f32,
    /// Width reserved for each day label column
    pub day_label_width: f32,
    /// Height of the day label row
    pub day_label_height: f32,
    /// Horizontal distance between the first and last day
    pub graph_width: f32,
    /// Height of the plot area (baseline position)
    pub graph_height: f32,
}

impl GraphLayout {
    /// Resolve a configuration against the widget's bounds width
    ///
    /// Fails if the plot area would have no positive width or height.
    pub fn new(config: &RepGraphConfig, bounds_width: u32) -> GraphResult<Self> {
        let width = config.resolved_width(bounds_width);
        let label_width = config.label_size.width_px();
        let day_label_width = label_width.max(MIN_DAY_LABEL_WIDTH_PX);

        let graph_width =
            width as i64 - day_label_width as i64 - 2 * config.horizontal_padding as i64;
        let graph_height = config.height as i64 - DAY_LABEL_HEIGHT_PX as i64;

        if graph_width <= 0 || graph_height <= 0 {
            return Err(GraphError::DegenerateLayout {
                width,
                height: config.height,
            });
        }

        Ok(Self {
            width: width as f32,
            height: config.height as f32,
            horizontal_padding: config.horizontal_padding as f32,
            label_width: label_width as f32,
            day_label_width: day_label_width as f32,
            day_label_height: DAY_LABEL_HEIGHT_PX as f32,
            graph_width: graph_width as f32,
            graph_height: graph_height as f32,
        })
    }

    /// X position of the first (oldest) day
    pub fn x_start(&self) -> f32 {
        self.horizontal_padding + self.day_label_width / 2.0
    }

    /// X position of the last day (today)
    pub fn x_end(&self) -> f32 {
        self.x_start() + self.graph_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LabelSize;

    #[test]
    fn test_default_layout() {
        let layout = GraphLayout::new(&RepGraphConfig::default(), 360).unwrap();

        assert_eq!(layout.width, 360.0);
        assert_eq!(layout.height, 300.0);
        assert_eq!(layout.day_label_width, 60.0);
        assert_eq!(layout.graph_width, 360.0 - 60.0 - 32.0);
        assert_eq!(layout.graph_height, 276.0);
        assert_eq!(layout.x_start(), 46.0);
        assert_eq!(layout.x_end(), 46.0 + 268.0);
    }

    #[test]
    fn test_small_label_keeps_minimum_column() {
        let config = RepGraphConfig::default().with_label_size(LabelSize::Small);
        let layout = GraphLayout::new(&config, 320).unwrap();
        assert_eq!(layout.day_label_width, 40.0);
        assert_eq!(layout.label_width, 40.0);
    }

    #[test]
    fn test_too_narrow_is_degenerate() {
        let result = GraphLayout::new(&RepGraphConfig::default(), 80);
        assert!(matches!(
            result,
            Err(GraphError::DegenerateLayout { width: 80, .. })
        ));

        let short = RepGraphConfig::default().with_height(DAY_LABEL_HEIGHT_PX);
        assert!(GraphLayout::new(&short, 320).is_err());
    }
}

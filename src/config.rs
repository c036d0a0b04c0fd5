//! Rep graph configuration
//!
//! Mirrors the knobs the home screen exposes for the graph: an optional
//! width override, the overall height, horizontal padding and the size of
//! the floating value label. The configuration round-trips through postcard
//! so it can be persisted next to the rep history.

extern crate alloc;
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};
use thiserror_no_std::Error;

/// Default overall graph height in pixels (plot area plus day labels)
pub const DEFAULT_GRAPH_HEIGHT_PX: u32 = 300;

/// Default horizontal padding on each side of the graph in pixels
pub const DEFAULT_HORIZONTAL_PADDING_PX: u32 = 16;

/// Size preset for the floating value label
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelSize {
    Small,
    Medium,
    #[default]
    Large,
}

impl LabelSize {
    /// Label box width in pixels
    pub const fn width_px(self) -> u32 {
        match self {
            LabelSize::Small => 40,
            LabelSize::Medium => 50,
            LabelSize::Large => 60,
        }
    }
}

/// Errors from encoding or decoding a stored configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration could not be serialized
    #[error("Failed to encode graph config: {0}")]
    Encode(postcard::Error),

    /// Stored bytes are not a valid configuration
    #[error("Failed to decode graph config: {0}")]
    Decode(postcard::Error),
}

/// Display options for the rep graph
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepGraphConfig {
    /// Overall width in pixels; `None` uses the widget bounds
    pub width: Option<u32>,
    /// Overall height in pixels, including the day label row
    pub height: u32,
    /// Padding on the left and right of the plot
    pub horizontal_padding: u32,
    /// Floating value label size
    pub label_size: LabelSize,
}

impl Default for RepGraphConfig {
    fn default() -> Self {
        Self {
            width: None,
            height: DEFAULT_GRAPH_HEIGHT_PX,
            horizontal_padding: DEFAULT_HORIZONTAL_PADDING_PX,
            label_size: LabelSize::default(),
        }
    }
}

impl RepGraphConfig {
    /// Override the width instead of filling the widget bounds
    pub fn with_width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }

    pub fn with_horizontal_padding(mut self, padding: u32) -> Self {
        self.horizontal_padding = padding;
        self
    }

    pub fn with_label_size(mut self, label_size: LabelSize) -> Self {
        self.label_size = label_size;
        self
    }

    /// Width actually used for layout, given the widget's bounds width
    pub fn resolved_width(&self, bounds_width: u32) -> u32 {
        self.width.unwrap_or(bounds_width)
    }

    /// Serialize to a compact postcard blob
    pub fn to_bytes(&self) -> Result<Vec<u8>, ConfigError> {
        postcard::to_allocvec(self).map_err(ConfigError::Encode)
    }

    /// Deserialize from a postcard blob produced by [`Self::to_bytes`]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        postcard::from_bytes(bytes).map_err(ConfigError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_home_screen() {
        let config = RepGraphConfig::default();
        assert_eq!(config.width, None);
        assert_eq!(config.height, 300);
        assert_eq!(config.horizontal_padding, 16);
        assert_eq!(config.label_size, LabelSize::Large);
        assert_eq!(config.resolved_width(320), 320);
        assert_eq!(config.with_width(200).resolved_width(320), 200);
    }

    #[test]
    fn test_label_widths() {
        assert_eq!(LabelSize::Small.width_px(), 40);
        assert_eq!(LabelSize::Medium.width_px(), 50);
        assert_eq!(LabelSize::Large.width_px(), 60);
    }

    #[test]
    fn test_persisted_config_restores() {
        let config = RepGraphConfig::default()
            .with_width(240)
            .with_label_size(LabelSize::Small);

        let bytes = config.to_bytes().unwrap();
        assert_eq!(RepGraphConfig::from_bytes(&bytes).unwrap(), config);
    }

    #[test]
    fn test_truncated_config_is_rejected() {
        let bytes = RepGraphConfig::default().to_bytes().unwrap();
        let result = RepGraphConfig::from_bytes(&bytes[..1]);
        assert!(matches!(result, Err(ConfigError::Decode(_))));
    }
}

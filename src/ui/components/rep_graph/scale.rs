//! Scale mapping between data space and screen space
//!
//! Day indices map linearly onto the horizontal extent of the plot and rep
//! counts map onto the plot height with the y axis inverted (screen Y grows
//! downward, larger counts sit higher).

use super::constants::{MIN_Y_DOMAIN, Y_HEADROOM_FACTOR};
use super::layout::GraphLayout;

/// Linear map from a domain interval to a range interval
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f32, f32),
    range: (f32, f32),
}

impl LinearScale {
    pub const fn new(domain: (f32, f32), range: (f32, f32)) -> Self {
        Self { domain, range }
    }

    /// Map a domain value into the range
    ///
    /// A collapsed domain maps every value to the middle of the range.
    pub fn map(&self, value: f32) -> f32 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;

        let t = if span == 0.0 || !span.is_finite() {
            0.5
        } else {
            (value - d0) / span
        };

        r0 + (r1 - r0) * t
    }

    pub fn domain(&self) -> (f32, f32) {
        self.domain
    }
}

/// The pair of scales used to place the rep series on screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleMapping {
    x: LinearScale,
    y: LinearScale,
}

impl ScaleMapping {
    /// Build scales for `point_count` days whose largest value is `max_value`
    ///
    /// The y domain leaves 20% headroom above the largest value. A week with
    /// no reps at all falls back to a minimal domain so the curve sits on the
    /// baseline instead of dividing by zero.
    pub fn new(layout: &GraphLayout, point_count: usize, max_value: u32) -> Self {
        let last_index = point_count.saturating_sub(1) as f32;
        let x = LinearScale::new((0.0, last_index), (layout.x_start(), layout.x_end()));

        let max_value = max_value as f32;
        let y_max = max_value + max_value * Y_HEADROOM_FACTOR;
        let y_max = if y_max > 0.0 && y_max.is_finite() {
            y_max
        } else {
            MIN_Y_DOMAIN
        };
        let y = LinearScale::new((0.0, y_max), (layout.graph_height, 0.0));

        Self { x, y }
    }

    /// Screen x of a day index
    pub fn x_for_index(&self, index: usize) -> f32 {
        self.x.map(index as f32)
    }

    /// Screen y of a rep count
    pub fn y_for_value(&self, value: f32) -> f32 {
        self.y.map(value)
    }

    /// Screen y of zero reps
    pub fn baseline(&self) -> f32 {
        self.y_for_value(0.0)
    }

    /// Upper bound of the y domain
    pub fn y_max(&self) -> f32 {
        self.y.domain().1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RepGraphConfig;
    use crate::reps::{DAYS_PER_WEEK, DailyReps};

    fn layout() -> GraphLayout {
        // 304px tall overall leaves a 280px plot area
        let config = RepGraphConfig::default().with_height(304);
        GraphLayout::new(&config, 360).unwrap()
    }

    #[test]
    fn test_sample_week_scales() {
        let reps = DailyReps::new([8, 10, 0, 11, 15, 10, 3]);
        let scales = ScaleMapping::new(&layout(), DAYS_PER_WEEK, reps.max());

        assert_eq!(scales.y_max(), 18.0);
        assert_eq!(scales.y_for_value(0.0), 280.0);
        assert_eq!(scales.baseline(), 280.0);

        // 15 of 18 sits in the top fifth of the plot
        let top = scales.y_for_value(15.0);
        assert!(top > 0.0 && top < 56.0, "y(15) = {top}");
    }

    #[test]
    fn test_y_is_non_increasing() {
        let scales = ScaleMapping::new(&layout(), DAYS_PER_WEEK, 42);
        let mut previous = scales.y_for_value(0.0);
        for value in 1..=42 {
            let y = scales.y_for_value(value as f32);
            assert!(y <= previous);
            previous = y;
        }
    }

    #[test]
    fn test_x_is_strictly_increasing() {
        let layout = layout();
        let scales = ScaleMapping::new(&layout, DAYS_PER_WEEK, 10);

        assert_eq!(scales.x_for_index(0), layout.x_start());
        assert_eq!(scales.x_for_index(DAYS_PER_WEEK - 1), layout.x_end());
        for i in 1..DAYS_PER_WEEK {
            assert!(scales.x_for_index(i) > scales.x_for_index(i - 1));
        }
    }

    #[test]
    fn test_empty_week_uses_minimum_domain() {
        let scales = ScaleMapping::new(&layout(), DAYS_PER_WEEK, 0);

        assert_eq!(scales.y_max(), MIN_Y_DOMAIN);
        assert_eq!(scales.y_for_value(0.0), 280.0);
        assert!(scales.y_for_value(0.0).is_finite());
    }

    #[test]
    fn test_single_point_maps_to_middle() {
        let layout = layout();
        let scales = ScaleMapping::new(&layout, 1, 5);
        let middle = (layout.x_start() + layout.x_end()) / 2.0;
        assert_eq!(scales.x_for_index(0), middle);
    }
}

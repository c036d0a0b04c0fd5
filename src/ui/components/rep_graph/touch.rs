//! Touch buckets for selecting a day column
//!
//! Every day owns a column of the spacing's width centred on its x position.
//! Neighbouring columns meet halfway between the two days, so the buckets
//! partition the plotted span without gaps; taps in the margins left of the
//! first column or right of the last select nothing.

use heapless::Vec;

use crate::reps::DAYS_PER_WEEK;

/// Closed pixel interval assigned to one day
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchBucket {
    /// Day index this bucket selects
    pub index: usize,
    /// Left edge (inclusive)
    pub start: f32,
    /// Right edge (inclusive)
    pub end: f32,
}

impl TouchBucket {
    pub fn contains(&self, x: f32) -> bool {
        self.start <= x && x <= self.end
    }
}

/// Ordered set of touch buckets covering the plotted days
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TouchBuckets {
    buckets: Vec<TouchBucket, DAYS_PER_WEEK>,
}

impl TouchBuckets {
    /// Build one `column_width` wide bucket centred on each of the ordered
    /// day `positions`
    ///
    /// Interior edges sit at the midpoint between neighbours. Positions
    /// beyond [`DAYS_PER_WEEK`] are ignored.
    pub fn from_positions(positions: &[f32], column_width: f32) -> Self {
        let mut buckets = Vec::new();
        let count = positions.len().min(DAYS_PER_WEEK);
        let half = column_width / 2.0;

        for index in 0..count {
            let start = if index == 0 {
                positions[index] - half
            } else {
                (positions[index - 1] + positions[index]) / 2.0
            };
            let end = if index + 1 == count {
                positions[index] + half
            } else {
                (positions[index] + positions[index + 1]) / 2.0
            };

            // Capacity matches `count`, push cannot fail
            let _ = buckets.push(TouchBucket { index, start, end });
        }

        Self { buckets }
    }

    /// Day index under chart-local `x`, if any
    ///
    /// Buckets are checked in index order, so a tap exactly on a shared
    /// boundary selects the lower index.
    pub fn hit(&self, x: f32) -> Option<usize> {
        self.buckets
            .iter()
            .find(|bucket| bucket.contains(x))
            .map(|bucket| bucket.index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TouchBucket> {
        self.buckets.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const POSITIONS: [f32; DAYS_PER_WEEK] = [46.0, 90.0, 134.0, 178.0, 222.0, 266.0, 310.0];
    const SPACING: f32 = 44.0;

    fn buckets() -> TouchBuckets {
        TouchBuckets::from_positions(&POSITIONS, SPACING)
    }

    #[test]
    fn test_buckets_are_centered_and_contiguous() {
        let buckets = buckets();
        let all: heapless::Vec<&TouchBucket, DAYS_PER_WEEK> = buckets.iter().collect();

        assert_eq!(all.len(), DAYS_PER_WEEK);
        assert_eq!(all[0].start, 24.0);
        assert_eq!(all[DAYS_PER_WEEK - 1].end, 332.0);
        for (bucket, x) in all.iter().zip(POSITIONS.iter()) {
            assert_eq!(bucket.end - bucket.start, SPACING);
            assert_eq!((bucket.start + bucket.end) / 2.0, *x);
        }
        for pair in all.windows(2) {
            assert_eq!(pair[0].end, pair[1].start, "gap or overlap between buckets");
        }
    }

    #[test]
    fn test_every_x_in_span_matches_one_day() {
        let buckets = buckets();
        for x in 24..=332 {
            let x = x as f32;
            assert!(buckets.hit(x).is_some(), "x = {x} inside the span must hit");
            let matching = buckets.iter().filter(|b| b.contains(x)).count();
            // Shared boundaries touch two closed intervals; the lower wins
            assert!(matching == 1 || (matching == 2 && buckets.iter().any(|b| b.end == x)));
        }
    }

    #[test]
    fn test_tap_on_day_position_selects_it() {
        let buckets = buckets();
        for (index, x) in POSITIONS.iter().enumerate() {
            assert_eq!(buckets.hit(*x), Some(index));
        }
    }

    #[test]
    fn test_boundary_resolves_to_lower_index() {
        let buckets = buckets();
        assert_eq!(buckets.hit(68.0), Some(0));
        assert_eq!(buckets.hit(68.01), Some(1));
        assert_eq!(buckets.hit(288.0), Some(5));
    }

    #[test]
    fn test_margins_miss() {
        let buckets = buckets();
        assert_eq!(buckets.hit(0.0), None);
        assert_eq!(buckets.hit(23.9), None);
        assert_eq!(buckets.hit(332.1), None);
        assert_eq!(buckets.hit(360.0), None);
        assert_eq!(TouchBuckets::default().hit(10.0), None);
    }

    #[test]
    fn test_single_day_gets_one_column() {
        let buckets = TouchBuckets::from_positions(&[50.0], 40.0);
        assert_eq!(buckets.iter().count(), 1);
        assert_eq!(buckets.hit(30.0), Some(0));
        assert_eq!(buckets.hit(70.0), Some(0));
        assert_eq!(buckets.hit(29.0), None);
    }
}

//! Daily rep history and weekday labelling
//!
//! The graph always shows one week: seven rep counts, oldest first, with the
//! last entry belonging to today. Day labels are rotated so that the final
//! label is today's weekday.

use serde::{Deserialize, Serialize};

/// Number of days shown on the rep graph
pub const DAYS_PER_WEEK: usize = 7;

/// Index of today's entry in a [`DailyReps`] series
pub const TODAY_INDEX: usize = DAYS_PER_WEEK - 1;

/// Short weekday names, Sunday first
const WEEKDAY_NAMES: [&str; DAYS_PER_WEEK] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Rep counts for the last seven days
///
/// Index 0 is the oldest day, index [`TODAY_INDEX`] is today.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DailyReps([u32; DAYS_PER_WEEK]);

impl DailyReps {
    /// Seed week used by the app before any workouts are recorded
    pub const SAMPLE: Self = Self([8, 10, 0, 11, 15, 10, 3]);

    /// Create a rep history from seven counts, oldest first
    pub const fn new(counts: [u32; DAYS_PER_WEEK]) -> Self {
        Self(counts)
    }

    /// All seven counts, oldest first
    pub fn counts(&self) -> &[u32; DAYS_PER_WEEK] {
        &self.0
    }

    /// Count for a given day index
    pub fn get(&self, index: usize) -> Option<u32> {
        self.0.get(index).copied()
    }

    /// Today's count
    pub fn today(&self) -> u32 {
        self.0[TODAY_INDEX]
    }

    /// Largest count in the week (0 for an empty week)
    pub fn max(&self) -> u32 {
        self.0.iter().copied().max().unwrap_or(0)
    }

    /// Add reps to today's count, saturating at `u32::MAX`
    pub fn record_today(&mut self, reps: u32) {
        self.0[TODAY_INDEX] = self.0[TODAY_INDEX].saturating_add(reps);
    }

    /// Shift the week by one day: drop the oldest count and start a new,
    /// empty today.
    pub fn roll_over(&mut self) {
        self.0.rotate_left(1);
        self.0[TODAY_INDEX] = 0;
    }
}

impl From<[u32; DAYS_PER_WEEK]> for DailyReps {
    fn from(counts: [u32; DAYS_PER_WEEK]) -> Self {
        Self(counts)
    }
}

/// Day of the week, numbered from Sunday
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weekday {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl Weekday {
    const ALL: [Weekday; DAYS_PER_WEEK] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Weekday for an index, wrapping modulo 7
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % DAYS_PER_WEEK]
    }

    /// Zero-based index, Sunday = 0
    pub fn index(self) -> usize {
        self as usize
    }

    /// Three letter name used on the graph's x axis
    pub fn short_name(self) -> &'static str {
        WEEKDAY_NAMES[self.index()]
    }

    /// The following weekday
    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }
}

/// Source of the current weekday
///
/// Abstracted so that pages can be driven by an RTC, a network clock or a
/// fixed value in tests.
pub trait WeekdayProvider {
    fn today(&self) -> Weekday;
}

impl WeekdayProvider for Weekday {
    fn today(&self) -> Weekday {
        *self
    }
}

/// Axis labels for the seven graph columns, ending on today
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayLabels {
    labels: [&'static str; DAYS_PER_WEEK],
}

impl DayLabels {
    /// Build labels so that the last column is `today`
    pub fn ending_on(today: Weekday) -> Self {
        let first = today.next().index();
        let labels = core::array::from_fn(|i| WEEKDAY_NAMES[(first + i) % DAYS_PER_WEEK]);
        Self { labels }
    }

    /// Build labels from a weekday provider
    pub fn from_provider<P: WeekdayProvider + ?Sized>(provider: &P) -> Self {
        Self::ending_on(provider.today())
    }

    /// Label for a column
    pub fn get(&self, index: usize) -> Option<&'static str> {
        self.labels.get(index).copied()
    }

    /// Iterate labels, oldest column first
    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.labels.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_end_on_today() {
        let labels = DayLabels::ending_on(Weekday::Wednesday);
        let collected: heapless::Vec<&str, DAYS_PER_WEEK> = labels.iter().collect();

        assert_eq!(
            collected.as_slice(),
            &["Thu", "Fri", "Sat", "Sun", "Mon", "Tue", "Wed"]
        );
    }

    #[test]
    fn test_labels_saturday_is_unrotated() {
        let labels = DayLabels::ending_on(Weekday::Saturday);
        assert_eq!(labels.get(0), Some("Sun"));
        assert_eq!(labels.get(TODAY_INDEX), Some("Sat"));
        assert_eq!(labels.get(DAYS_PER_WEEK), None);
    }

    #[test]
    fn test_weekday_from_index_wraps() {
        assert_eq!(Weekday::from_index(0), Weekday::Sunday);
        assert_eq!(Weekday::from_index(6), Weekday::Saturday);
        assert_eq!(Weekday::from_index(7), Weekday::Sunday);
        assert_eq!(Weekday::from_index(usize::MAX), Weekday::from_index(usize::MAX % 7));
    }

    #[test]
    fn test_daily_reps_max_and_today() {
        let reps = DailyReps::SAMPLE;
        assert_eq!(reps.max(), 15);
        assert_eq!(reps.today(), 3);
        assert_eq!(DailyReps::default().max(), 0);
    }

    #[test]
    fn test_record_and_roll_over() {
        let mut reps = DailyReps::SAMPLE;
        reps.record_today(12);
        assert_eq!(reps.today(), 15);

        reps.roll_over();
        assert_eq!(reps.counts(), &[10, 0, 11, 15, 10, 15, 0]);
    }
}

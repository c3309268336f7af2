use chrono::{DateTime, Datelike, Duration, TimeZone, Timelike};
use derive_builder::Builder;

use crate::field;

/// Hard cap on the number of candidate minutes a single scan may test,
/// roughly one year of minutes. Exhausting the cap ends the scan without an
/// error; a schedule that never fires simply yields fewer results.
pub const SCAN_LIMIT: u32 = 525_960;

/// Options for a next-run scan.
///
/// Build one with [`ScanOptions::builder`]:
///
/// ```rust
/// use crontell::ScanOptions;
///
/// let options = ScanOptions::builder().count(10).build();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Builder)]
#[builder(default, build_fn(skip), pattern = "owned")]
pub struct ScanOptions {
    /// Number of matching instants to collect.
    pub count: usize,
    /// Whether the scan may yield the starting minute itself. When false,
    /// the scan begins at the minute after the start time.
    pub inclusive: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            count: 5,
            inclusive: false,
        }
    }
}

impl ScanOptions {
    /// Construct a builder for custom scans.
    ///
    /// Equivalent to [`ScanOptionsBuilder::default`].
    pub fn builder() -> ScanOptionsBuilder {
        ScanOptionsBuilder::default()
    }
}

impl ScanOptionsBuilder {
    pub fn build(self) -> ScanOptions {
        let ScanOptionsBuilder { count, inclusive } = self;
        let defaults = ScanOptions::default();
        ScanOptions {
            count: count.unwrap_or(defaults.count),
            inclusive: inclusive.unwrap_or(defaults.inclusive),
        }
    }
}

// Evaluates one instant against the five fields. AND semantics throughout:
// day-of-month and day-of-week must both match, with no POSIX OR convention.
pub(crate) fn instant_matches<Tz: TimeZone>(fields: &[&str; 5], time: &DateTime<Tz>) -> bool {
    field::value_matches(time.minute(), fields[0])
        && field::value_matches(time.hour(), fields[1])
        && field::value_matches(time.day(), fields[2])
        && field::value_matches(time.month(), fields[3])
        && field::value_matches(time.weekday().num_days_from_sunday(), fields[4])
}

/// A lazy, bounded iterator over the upcoming instants matching a cron
/// expression.
///
/// Yields whole-minute `DateTime<Tz>` values in chronological order,
/// advancing one minute per candidate. The iterator tests at most
/// [`SCAN_LIMIT`] candidates over its whole lifetime, shared across all
/// yielded items, so it always terminates.
#[derive(Debug, Clone)]
pub struct Upcoming<Tz>
where
    Tz: TimeZone,
{
    fields: [String; 5],
    current_time: DateTime<Tz>,
    budget: u32,
}

impl<Tz> Upcoming<Tz>
where
    Tz: TimeZone,
{
    // Callers validate the expression and position `start_time` on a whole
    // minute before constructing.
    pub(crate) fn new(fields: [String; 5], start_time: DateTime<Tz>) -> Self {
        Upcoming {
            fields,
            current_time: start_time,
            budget: SCAN_LIMIT,
        }
    }
}

impl<Tz> Iterator for Upcoming<Tz>
where
    Tz: TimeZone,
{
    type Item = DateTime<Tz>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.budget > 0 {
            self.budget -= 1;
            let candidate = self.current_time.clone();
            self.current_time = candidate.clone().checked_add_signed(Duration::minutes(1))?;

            let fields: [&str; 5] = std::array::from_fn(|i| self.fields[i].as_str());
            if instant_matches(&fields, &candidate) {
                return Some(candidate);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    fn fields(expression: &str) -> [String; 5] {
        let parts: Vec<String> = expression.split_whitespace().map(str::to_string).collect();
        parts.try_into().expect("5-field test expression")
    }

    #[test]
    fn test_every_minute_steps_by_one() {
        let start = Local.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
        let runs: Vec<_> = Upcoming::new(fields("* * * * *"), start).take(3).collect();

        assert_eq!(runs.len(), 3);
        assert_eq!(runs[0], start);
        assert_eq!(runs[1], start + Duration::minutes(1));
        assert_eq!(runs[2], start + Duration::minutes(2));
    }

    #[test]
    fn test_specific_time_of_day() {
        let start = Local.with_ymd_and_hms(2023, 1, 1, 13, 0, 0).unwrap();
        let runs: Vec<_> = Upcoming::new(fields("0 12 * * *"), start).take(2).collect();

        assert_eq!(runs[0], Local.with_ymd_and_hms(2023, 1, 2, 12, 0, 0).unwrap());
        assert_eq!(runs[1], Local.with_ymd_and_hms(2023, 1, 3, 12, 0, 0).unwrap());
    }

    #[test]
    fn test_budget_is_shared_across_yields() {
        let start = Local.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
        let mut iter = Upcoming::new(fields("* * * * *"), start);

        for _ in 0..10 {
            assert!(iter.next().is_some());
        }
        assert_eq!(iter.budget, SCAN_LIMIT - 10);
    }

    #[test]
    fn test_never_matching_day_exhausts_budget() {
        // February 31st does not exist; the scan runs out of budget and
        // ends without an error.
        let start = Local.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
        let mut iter = Upcoming::new(fields("0 0 31 2 *"), start);

        assert_eq!(iter.next(), None);
        assert_eq!(iter.budget, 0);
    }

    #[test]
    fn test_scan_options_defaults() {
        let options = ScanOptions::default();
        assert_eq!(options.count, 5);
        assert!(!options.inclusive);
    }

    #[test]
    fn test_scan_options_builder() {
        let options = ScanOptions::builder().count(20).inclusive(true).build();
        assert_eq!(options.count, 20);
        assert!(options.inclusive);

        let defaulted = ScanOptions::builder().build();
        assert_eq!(defaulted, ScanOptions::default());
    }
}

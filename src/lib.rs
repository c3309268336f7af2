//! # Crontell
//!
//! Crontell is a lightweight Rust library for reasoning about standard 5-field cron expressions:
//! validating them, explaining them in plain English, and computing the instants at which they
//! will next fire.
//!
//! ## Features
//! - Validates cron expressions field by field, reporting the first offending token.
//! - Explains cron expressions as a human-readable sentence, with month and weekday names.
//! - Computes upcoming run times through a bounded minute-by-minute forward scan.
//! - Compatible with the `chrono` library for dealing with date and time in Rust.
//!
//! ## Example
//!
//! ```rust
//! use crontell::Cron;
//!
//! let cron = Cron::new("0 9 * * 1-5");
//!
//! assert!(cron.validate().valid);
//! assert_eq!(
//!     cron.describe().unwrap(),
//!     "at minute 0, at hour 9, every day of month, every month, on Monday through Friday"
//! );
//! ```
//!
//! To find the next occurrences, use [`Cron::next_runs`] for ISO-8601 strings starting from the
//! current local time, or [`Cron::iter_after`] for a lazy iterator from any start time.
//!
//! ## Expression format
//!
//! ```text
//! // ┌────────────── minute (0 - 59)
//! // │ ┌──────────── hour (0 - 23)
//! // │ │ ┌────────── day of month (1 - 31)
//! // │ │ │ ┌──────── month (1 - 12)
//! // │ │ │ │ ┌────── day of week (0 - 7, 0 and 7 are both Sunday)
//! // │ │ │ │ │
//! // * * * * *
//! ```
//!
//! | Field        | Allowed values | Allowed special characters |
//! | ------------ | -------------- | -------------------------- |
//! | Minute       | 0-59           | * , - /                    |
//! | Hour         | 0-23           | * , - /                    |
//! | Day of Month | 1-31           | * , - /                    |
//! | Month        | 1-12           | * , - /                    |
//! | Day of Week  | 0-7            | * , - /                    |
//!
//! Extended syntax (`L`, `W`, `#`, named months or weekdays, a seconds field) is not supported.
//! Day-of-month and day-of-week combine with AND: both must match for an instant to fire.
//! An expression is never pre-compiled; each operation re-reads the field text, so a `Cron`
//! value is just the expression string with behavior attached.

pub mod describe;
mod errors;
mod field;
mod iterator;

pub use errors::CronError;
pub use iterator::{ScanOptions, ScanOptionsBuilder, Upcoming, SCAN_LIMIT};

use std::str::FromStr;

use chrono::{DateTime, Duration, Local, SecondsFormat, TimeZone, Timelike, Utc};

use describe::{English, Language};

// Field names and inclusive bounds, in expression order.
const FIELD_BOUNDS: [(&str, u32, u32); 5] = [
    ("minute", 0, 59),
    ("hour", 0, 23),
    ("day of month", 1, 31),
    ("month", 1, 12),
    ("day of week", 0, 7),
];

/// The outcome of validating a cron expression.
///
/// Validation never fails with an error value; problems are reported as data.
/// When `valid` is false, `error` holds a message describing the first
/// problem found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    pub valid: bool,
    pub error: Option<String>,
}

impl Validation {
    fn ok() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }

    fn fail(error: String) -> Self {
        Self {
            valid: false,
            error: Some(error),
        }
    }
}

/// A standard 5-field cron expression and the operations over it.
///
/// Construction is infallible and cheap: the expression text is stored as-is
/// and interpreted anew by each operation. [`Cron::validate`] reports
/// problems as data; [`Cron::describe`] and [`Cron::next_runs`] fail with a
/// [`CronError`] on malformed or invalid input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cron {
    expression: String,
}

impl Cron {
    /// Creates a new `Cron` from an expression string.
    pub fn new(expression: &str) -> Self {
        Self {
            expression: expression.to_string(),
        }
    }

    /// Returns the original expression text.
    pub fn as_str(&self) -> &str {
        &self.expression
    }

    // Splits the expression into its five fields, enforcing the shape for
    // the operations that fail on malformed input.
    fn fields(&self) -> Result<[&str; 5], CronError> {
        let parts: Vec<&str> = self.expression.split_whitespace().collect();
        parts.try_into().map_err(|_| CronError::MalformedExpression)
    }

    /// Validates the expression, reporting the result as data.
    ///
    /// The field count is checked first; then each field is checked against
    /// its bounds in expression order, stopping at the first failure. The
    /// result never depends on the clock and repeated calls are identical.
    ///
    /// # Examples
    ///
    /// ```
    /// use crontell::Cron;
    ///
    /// assert!(Cron::new("0 9 * * 1-5").validate().valid);
    ///
    /// let result = Cron::new("60 9 * * *").validate();
    /// assert!(!result.valid);
    /// assert_eq!(
    ///     result.error.as_deref(),
    ///     Some("Invalid minute: \"60\" is not between 0 and 59")
    /// );
    /// ```
    pub fn validate(&self) -> Validation {
        let parts: Vec<&str> = self.expression.split_whitespace().collect();
        if parts.len() != 5 {
            return Validation::fail(format!("Expected 5 fields, got {}", parts.len()));
        }

        for (part, (name, min, max)) in parts.iter().zip(FIELD_BOUNDS) {
            if let Some(error) = field::check_field(part, min, max, name) {
                return Validation::fail(error);
            }
        }

        Validation::ok()
    }

    /// Explains the expression as a human-readable English sentence.
    ///
    /// One phrase is produced per field and the phrases are joined with
    /// `", "`.
    ///
    /// # Errors
    ///
    /// Returns [`CronError::MalformedExpression`] when the expression does
    /// not split into exactly five fields. Out-of-range or malformed tokens
    /// inside a field are not an error here; they pass through as raw text.
    ///
    /// # Examples
    ///
    /// ```
    /// use crontell::Cron;
    ///
    /// let description = Cron::new("*/15 9-17 * * 1-5").describe().unwrap();
    /// assert_eq!(
    ///     description,
    ///     "every 15 minutes, hour 9 through 17, every day of month, every month, \
    ///      on Monday through Friday"
    /// );
    /// ```
    pub fn describe(&self) -> Result<String, CronError> {
        self.describe_with_language(&English)
    }

    /// Explains the expression using the given [`Language`] for phrasing and
    /// calendar names.
    pub fn describe_with_language<L: Language>(&self, lang: &L) -> Result<String, CronError> {
        let fields = self.fields()?;
        Ok(describe::describe(&fields, lang))
    }

    /// Evaluates if a given `DateTime` matches this expression.
    ///
    /// All five fields are checked independently against the instant's local
    /// calendar components and combined with AND; seconds are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`CronError::MalformedExpression`] when the expression does
    /// not split into exactly five fields.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{Local, TimeZone};
    /// use crontell::Cron;
    ///
    /// let cron = Cron::new("30 9 * * *");
    /// let time = Local.with_ymd_and_hms(2023, 6, 15, 9, 30, 0).unwrap();
    ///
    /// assert!(cron.is_time_matching(&time).unwrap());
    /// ```
    pub fn is_time_matching<Tz: TimeZone>(&self, time: &DateTime<Tz>) -> Result<bool, CronError> {
        let fields = self.fields()?;
        Ok(iterator::instant_matches(&fields, time))
    }

    /// Creates an [`Upcoming`] iterator over matching instants, starting
    /// after the specified time.
    ///
    /// The start time is truncated to its whole minute and the scan begins
    /// at the following minute, so the start minute itself is never yielded.
    ///
    /// # Errors
    ///
    /// Returns [`CronError::InvalidExpression`] carrying the validator's
    /// message when the expression fails validation.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{Local, TimeZone};
    /// use crontell::Cron;
    ///
    /// let cron = Cron::new("0 12 * * *");
    /// let start = Local.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
    ///
    /// for time in cron.iter_after(start).unwrap().take(5) {
    ///     println!("{}", time);
    /// }
    /// ```
    pub fn iter_after<Tz: TimeZone>(&self, start: DateTime<Tz>) -> Result<Upcoming<Tz>, CronError> {
        let cursor = minute_floor(start)
            .checked_add_signed(Duration::minutes(1))
            .expect("Invalid date encountered when adding one minute");
        Ok(Upcoming::new(self.validated_fields()?, cursor))
    }

    /// Creates an [`Upcoming`] iterator over matching instants, starting
    /// from the specified time.
    ///
    /// Unlike [`Cron::iter_after`], the start time's own minute is yielded
    /// if it matches.
    pub fn iter_from<Tz: TimeZone>(&self, start: DateTime<Tz>) -> Result<Upcoming<Tz>, CronError> {
        Ok(Upcoming::new(self.validated_fields()?, minute_floor(start)))
    }

    /// Computes the next `count` run times from the current local time,
    /// rendered as ISO-8601 UTC strings.
    ///
    /// The scan starts at the minute after the current one and tests at most
    /// [`SCAN_LIMIT`] candidate minutes in total, so a schedule that fires
    /// rarely, or never, returns fewer than `count` results without an
    /// error. `count` is taken at face value; callers wanting a bound on it
    /// must clamp before calling.
    ///
    /// # Errors
    ///
    /// Returns [`CronError::InvalidExpression`] carrying the validator's
    /// message when the expression fails validation. Validity is checked
    /// before any scanning begins.
    ///
    /// # Examples
    ///
    /// ```
    /// use crontell::Cron;
    ///
    /// let runs = Cron::new("* * * * *").next_runs(3).unwrap();
    /// assert_eq!(runs.len(), 3);
    /// ```
    pub fn next_runs(&self, count: usize) -> Result<Vec<String>, CronError> {
        self.next_runs_from(Local::now(), ScanOptions::builder().count(count).build())
    }

    /// Computes upcoming run times from the current local time with the
    /// given [`ScanOptions`].
    pub fn next_runs_with(&self, options: ScanOptions) -> Result<Vec<String>, CronError> {
        self.next_runs_from(Local::now(), options)
    }

    /// Computes upcoming run times from an explicit start time with the
    /// given [`ScanOptions`], rendered as ISO-8601 UTC strings.
    pub fn next_runs_from<Tz: TimeZone>(
        &self,
        start: DateTime<Tz>,
        options: ScanOptions,
    ) -> Result<Vec<String>, CronError> {
        let upcoming = if options.inclusive {
            self.iter_from(start)?
        } else {
            self.iter_after(start)?
        };

        Ok(upcoming
            .take(options.count)
            .map(|time| {
                time.with_timezone(&Utc)
                    .to_rfc3339_opts(SecondsFormat::Secs, true)
            })
            .collect())
    }

    // Runs validation and hands out owned fields for a scan; the scheduler
    // paths fail fast here before any time arithmetic happens.
    fn validated_fields(&self) -> Result<[String; 5], CronError> {
        let validation = self.validate();
        if !validation.valid {
            return Err(CronError::InvalidExpression(
                validation.error.unwrap_or_default(),
            ));
        }
        let parts: Vec<String> = self
            .expression
            .split_whitespace()
            .map(str::to_string)
            .collect();
        parts.try_into().map_err(|_| CronError::MalformedExpression)
    }
}

// Truncates an instant to the start of its minute.
fn minute_floor<Tz: TimeZone>(time: DateTime<Tz>) -> DateTime<Tz> {
    time.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .expect("Zeroing sub-minute components always yields a valid time")
}

// Enables creating a Cron instance from a string slice. Construction cannot
// fail; problems surface when an operation runs.
impl FromStr for Cron {
    type Err = CronError;

    fn from_str(expression: &str) -> Result<Cron, CronError> {
        Ok(Cron::new(expression))
    }
}

impl std::fmt::Display for Cron {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.expression)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Cron {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.expression)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Cron {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let expression = String::deserialize(deserializer)?;
        Ok(Cron { expression })
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Validation {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let len = if self.error.is_some() { 2 } else { 1 };
        let mut state = serializer.serialize_struct("Validation", len)?;
        state.serialize_field("valid", &self.valid)?;
        if let Some(error) = &self.error {
            state.serialize_field("error", error)?;
        }
        state.end()
    }
}

/// Represents errors that can occur while explaining cron expressions or
/// computing their upcoming run times.
///
/// `CronError` is used throughout the `crontell` crate to indicate various types of failures
/// and is exported for consuming programs to use.
///
/// Validation is deliberately not represented here: [`Cron::validate`][crate::Cron::validate]
/// reports problems as data through [`Validation`][crate::Validation] and never fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CronError {
    /// The expression does not have the required 5-field shape.
    ///
    /// This error occurs when an expression handed to [`Cron::describe`][crate::Cron::describe]
    /// splits into anything other than five whitespace-separated fields.
    MalformedExpression,

    /// The expression failed validation before a run scan could start.
    ///
    /// Raised by [`Cron::next_runs`][crate::Cron::next_runs] and
    /// [`Cron::iter_after`][crate::Cron::iter_after]; carries the validator's
    /// message verbatim, such as `Expected 5 fields, got 2` or
    /// `Invalid minute: "60" is not between 0 and 59`.
    InvalidExpression(String),
}

impl std::fmt::Display for CronError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            CronError::MalformedExpression => write!(
                f,
                "Invalid cron expression: expected 5 fields (minute hour day-of-month month day-of-week)"
            ),
            CronError::InvalidExpression(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for CronError {}

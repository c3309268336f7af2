//! Human-readable explanation of cron expressions.
//!
//! Each of the five fields is rendered as one phrase and the phrases are
//! joined with `", "`. The phrase templates and calendar names come from a
//! [`Language`] implementation, so translations only need to supply words.
//!
//! The three describers are intentionally asymmetric: minute, hour and
//! day-of-month share a full lexical describer (wildcard, step, list, range,
//! literal), while month and day-of-week use bespoke, simpler phrasing.

pub mod lang;
pub use lang::english::English;
pub use lang::swedish::Swedish;

use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};

/// English display names for months, January through December in iteration
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, IntoStaticStr)]
#[repr(u8)]
pub(crate) enum MonthName {
    January = 1,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

/// English display names for weekdays, indexed 0 (Sunday) through 6
/// (Saturday). A day-of-week value of 7 is never name-substituted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, IntoStaticStr)]
#[repr(u8)]
pub(crate) enum DayName {
    Sunday = 0,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

pub(crate) fn english_month_names() -> [&'static str; 12] {
    let mut names = [""; 12];
    for (i, month) in MonthName::iter().enumerate().take(12) {
        names[i] = month.into();
    }
    names
}

pub(crate) fn english_day_names() -> [&'static str; 7] {
    let mut names = [""; 7];
    for (i, day) in DayName::iter().enumerate().take(7) {
        names[i] = day.into();
    }
    names
}

/// This defines the contract for providing localized strings.
pub trait Language {
    fn every_field(&self, name: &str) -> String;
    fn every_step(&self, step: &str, name: &str) -> String;
    fn field_list(&self, name: &str, raw: &str) -> String;
    fn field_range(&self, name: &str, start: &str, end: &str) -> String;
    fn at_value(&self, name: &str, value: &str) -> String;

    fn every_month(&self) -> &'static str;
    fn in_month(&self, month: &str) -> String;
    fn month_fallback(&self, raw: &str) -> String;

    fn every_day_of_week(&self) -> &'static str;
    fn on_days(&self, days: &str) -> String;
    fn day_range(&self, start: &str, end: &str) -> String;
    fn day_of_week_fallback(&self, raw: &str) -> String;

    fn minute_name(&self) -> &'static str;
    fn hour_name(&self) -> &'static str;
    fn day_of_month_name(&self) -> &'static str;

    fn day_of_week_names(&self) -> [&'static str; 7];
    fn month_names(&self) -> [&'static str; 12];
}

/// Generates a human-readable description from the five field strings.
pub(crate) fn describe<L: Language>(fields: &[&str; 5], lang: &L) -> String {
    let [minute, hour, dom, month, dow] = *fields;

    let segments = [
        describe_field(minute, lang.minute_name(), lang),
        describe_field(hour, lang.hour_name(), lang),
        describe_field(dom, lang.day_of_month_name(), lang),
        describe_month(month, lang),
        describe_dow(dow, lang),
    ];

    segments
        .iter()
        .filter(|s| !s.is_empty())
        .cloned()
        .collect::<Vec<_>>()
        .join(", ")
}

// Generic describer for minute, hour and day-of-month. The slash check runs
// before the comma check, so a field like "1,2/5" reads as a pure step.
fn describe_field<L: Language>(value: &str, name: &str, lang: &L) -> String {
    if value == "*" {
        return lang.every_field(name);
    }
    if value.contains('/') {
        let step = value.split('/').nth(1).unwrap_or("");
        return lang.every_step(step, name);
    }
    if value.contains(',') {
        return lang.field_list(name, value);
    }
    if value.contains('-') {
        let mut pieces = value.split('-');
        let start = pieces.next().unwrap_or("");
        let end = pieces.next().unwrap_or("");
        return lang.field_range(name, start, end);
    }
    lang.at_value(name, value)
}

// Months only get wildcard and single-literal phrasing; lists, ranges and
// steps fall through to the raw text.
fn describe_month<L: Language>(value: &str, lang: &L) -> String {
    if value == "*" {
        return lang.every_month().to_string();
    }
    if let Ok(num) = value.parse::<usize>() {
        if (1..=12).contains(&num) {
            return lang.in_month(lang.month_names()[num - 1]);
        }
    }
    lang.month_fallback(value)
}

// Day-of-week substitutes names for tokens parsing to 0-6; 7 stays raw.
// No step handling here, and the range check runs before the list check.
fn describe_dow<L: Language>(value: &str, lang: &L) -> String {
    if value == "*" {
        return lang.every_day_of_week().to_string();
    }

    let names = lang.day_of_week_names();
    let name_or_raw = |token: &str| -> String {
        match token.parse::<usize>() {
            Ok(n) if n <= 6 => names[n].to_string(),
            _ => token.to_string(),
        }
    };

    if value.contains('-') {
        let mut pieces = value.split('-');
        let start = pieces.next().unwrap_or("");
        let end = pieces.next().unwrap_or("");
        return lang.day_range(&name_or_raw(start), &name_or_raw(end));
    }
    if value.contains(',') {
        let days = value
            .split(',')
            .map(|d| name_or_raw(d))
            .collect::<Vec<_>>()
            .join(", ");
        return lang.on_days(&days);
    }
    if let Ok(n) = value.parse::<usize>() {
        if n <= 6 {
            return lang.on_days(names[n]);
        }
    }
    lang.day_of_week_fallback(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn explain(expression: &str) -> String {
        let fields: Vec<&str> = expression.split_whitespace().collect();
        let fields: [&str; 5] = fields.try_into().expect("5-field test expression");
        describe(&fields, &English)
    }

    #[test]
    fn test_every_minute() {
        assert_eq!(
            explain("* * * * *"),
            "every minute, every hour, every day of month, every month, every day of the week"
        );
    }

    #[test]
    fn test_weekday_mornings() {
        assert_eq!(
            explain("0 9 * * 1-5"),
            "at minute 0, at hour 9, every day of month, every month, on Monday through Friday"
        );
    }

    #[test]
    fn test_step_fields() {
        let desc = explain("*/15 */2 * * *");
        assert!(desc.contains("every 15 minutes"));
        assert!(desc.contains("every 2 hours"));
    }

    #[test]
    fn test_list_and_range_fields() {
        let desc = explain("1,30 9-17 * * *");
        assert!(desc.contains("minute 1,30"));
        assert!(desc.contains("hour 9 through 17"));
    }

    #[test]
    fn test_slash_takes_precedence_over_comma() {
        // "1,2/5" is described as a step, not a list.
        let desc = explain("1,2/5 * * * *");
        assert!(desc.contains("every 5 minutes"));
        assert!(!desc.contains("minute 1,2"));
    }

    #[test]
    fn test_month_names() {
        assert!(explain("0 0 1 1 *").contains("in January"));
        assert!(explain("0 0 1 12 *").contains("in December"));
        // No decomposition for month lists; the raw text passes through.
        assert!(explain("0 0 1 1,7 *").contains("month 1,7"));
        assert!(explain("0 0 1 13 *").contains("month 13"));
    }

    #[test]
    fn test_day_of_week_names() {
        assert!(explain("0 0 * * 0").contains("on Sunday"));
        assert!(explain("0 0 * * 6").contains("on Saturday"));
        assert!(explain("0 0 * * 1,3,5").contains("on Monday, Wednesday, Friday"));
    }

    #[test]
    fn test_day_of_week_seven_stays_raw() {
        // Only 0-6 map to names; 7 falls through to the raw token.
        assert!(explain("0 0 * * 7").contains("day of week 7"));
    }

    #[test]
    fn test_day_of_week_range_mixed_tokens() {
        // Bounds outside 0-6 are left as raw tokens inside the range phrase.
        assert!(explain("0 0 * * 5-9").contains("on Friday through 9"));
    }

    #[test]
    fn test_swedish_translation() {
        let fields = ["0", "9", "*", "*", "1-5"];
        let desc = describe(&fields, &Swedish);
        assert!(desc.contains("vid minut 0"));
        assert!(desc.contains("måndag till fredag"));
    }

    #[test]
    fn test_name_tables_agree_with_enums() {
        assert_eq!(english_month_names()[0], "January");
        assert_eq!(english_month_names()[11], "December");
        assert_eq!(english_day_names()[0], "Sunday");
        assert_eq!(english_day_names()[6], "Saturday");
    }
}

use crate::describe::{english_day_names, english_month_names, Language};

#[derive(Debug, Default, Clone, Copy)]
pub struct English;

impl Language for English {
    fn every_field(&self, name: &str) -> String { format!("every {name}") }
    fn every_step(&self, step: &str, name: &str) -> String { format!("every {step} {name}s") }
    fn field_list(&self, name: &str, raw: &str) -> String { format!("{name} {raw}") }
    fn field_range(&self, name: &str, start: &str, end: &str) -> String { format!("{name} {start} through {end}") }
    fn at_value(&self, name: &str, value: &str) -> String { format!("at {name} {value}") }

    fn every_month(&self) -> &'static str { "every month" }
    fn in_month(&self, month: &str) -> String { format!("in {month}") }
    fn month_fallback(&self, raw: &str) -> String { format!("month {raw}") }

    fn every_day_of_week(&self) -> &'static str { "every day of the week" }
    fn on_days(&self, days: &str) -> String { format!("on {days}") }
    fn day_range(&self, start: &str, end: &str) -> String { format!("on {start} through {end}") }
    fn day_of_week_fallback(&self, raw: &str) -> String { format!("day of week {raw}") }

    fn minute_name(&self) -> &'static str { "minute" }
    fn hour_name(&self) -> &'static str { "hour" }
    fn day_of_month_name(&self) -> &'static str { "day of month" }

    fn day_of_week_names(&self) -> [&'static str; 7] { english_day_names() }
    fn month_names(&self) -> [&'static str; 12] { english_month_names() }
}

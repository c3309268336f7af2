use crate::describe::Language;

#[derive(Debug, Default, Clone, Copy)]
pub struct Swedish;

impl Language for Swedish {
    fn every_field(&self, name: &str) -> String { format!("varje {name}") }
    fn every_step(&self, step: &str, name: &str) -> String { format!("var {step}:e {name}") }
    fn field_list(&self, name: &str, raw: &str) -> String { format!("{name} {raw}") }
    fn field_range(&self, name: &str, start: &str, end: &str) -> String { format!("{name} {start} till {end}") }
    fn at_value(&self, name: &str, value: &str) -> String { format!("vid {name} {value}") }

    fn every_month(&self) -> &'static str { "varje månad" }
    fn in_month(&self, month: &str) -> String { format!("i {month}") }
    fn month_fallback(&self, raw: &str) -> String { format!("månad {raw}") }

    fn every_day_of_week(&self) -> &'static str { "varje veckodag" }
    fn on_days(&self, days: &str) -> String { format!("på {days}") }
    fn day_range(&self, start: &str, end: &str) -> String { format!("på {start} till {end}") }
    fn day_of_week_fallback(&self, raw: &str) -> String { format!("veckodag {raw}") }

    fn minute_name(&self) -> &'static str { "minut" }
    fn hour_name(&self) -> &'static str { "timme" }
    fn day_of_month_name(&self) -> &'static str { "dag i månaden" }

    fn day_of_week_names(&self) -> [&'static str; 7] { ["söndag", "måndag", "tisdag", "onsdag", "torsdag", "fredag", "lördag"] }
    fn month_names(&self) -> [&'static str; 12] { ["januari", "februari", "mars", "april", "maj", "juni", "juli", "augusti", "september", "oktober", "november", "december"] }
}

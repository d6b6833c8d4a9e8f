use crate::{CalendarDate, DateBounds, DateFormat, DateRules};

pub fn date(year: u16, month: u8, day: u8) -> CalendarDate {
    CalendarDate::from_ymd(year, month, day).unwrap()
}

pub fn iso_format() -> DateFormat {
    "y-m-d".parse().unwrap()
}

/// Rules over 2024 with March 2nd disabled.
pub fn rules_2024() -> DateRules {
    DateRules::new(
        iso_format(),
        DateBounds::new(date(2024, 1, 1), date(2024, 12, 31)).unwrap(),
        vec![date(2024, 3, 2)],
    )
}

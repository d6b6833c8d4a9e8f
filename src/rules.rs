use crate::{CalendarDate, DateBounds, DateFormat};

/// True iff both values fall on the same calendar day. Time-of-day is
/// discarded by the `CalendarDate` conversion.
pub fn date_equals(a: impl Into<CalendarDate>, b: impl Into<CalendarDate>) -> bool {
    a.into() == b.into()
}

/// Validity rules shared by navigation, selection and the grid.
///
/// Fixed at construction: the text pattern, the inclusive range and the
/// disabled dates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRules {
    format:   DateFormat,
    bounds:   DateBounds,
    disabled: Vec<CalendarDate>,
}

impl DateRules {
    pub const fn new(format: DateFormat, bounds: DateBounds, disabled: Vec<CalendarDate>) -> Self {
        Self {
            format,
            bounds,
            disabled,
        }
    }

    pub const fn format_pattern(&self) -> &DateFormat {
        &self.format
    }

    pub const fn bounds(&self) -> &DateBounds {
        &self.bounds
    }

    pub fn disabled(&self) -> &[CalendarDate] {
        &self.disabled
    }

    /// Linear scan; the list is expected to hold tens of entries at most.
    pub fn is_disabled(&self, date: &CalendarDate) -> bool {
        self.disabled.iter().any(|d| d == date)
    }

    /// In range and not disabled.
    pub fn is_valid(&self, date: &CalendarDate) -> bool {
        self.bounds.contains(date) && !self.is_disabled(date)
    }

    pub fn format(&self, date: &CalendarDate) -> String {
        self.format.format(date)
    }

    pub fn parse(&self, text: &str) -> Option<CalendarDate> {
        self.format.parse(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, rules_2024};
    use chrono::NaiveDate;

    #[test]
    fn test_date_equals_is_reflexive() {
        let d = date(2024, 3, 5);
        assert!(date_equals(d, d));
        assert!(!date_equals(d, date(2024, 3, 6)));
    }

    #[test]
    fn test_date_equals_ignores_time_of_day() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let midnight = day.and_hms_opt(0, 0, 0).unwrap();
        let late = day.and_hms_opt(22, 15, 0).unwrap();
        assert!(date_equals(midnight, late));
        assert!(date_equals(late, date(2024, 3, 5)));
        assert!(!date_equals(late, date(2024, 3, 4)));
    }

    #[test]
    fn test_is_disabled() {
        let rules = rules_2024();
        assert!(rules.is_disabled(&date(2024, 3, 2)));
        assert!(!rules.is_disabled(&date(2024, 3, 3)));
        assert_eq!(rules.disabled(), &[date(2024, 3, 2)]);
    }

    #[test]
    fn test_is_valid() {
        struct TestCase {
            date:     CalendarDate,
            expected: bool,
            reason:   &'static str,
        }

        let rules = rules_2024();
        let cases = [
            TestCase {
                date:     date(2024, 3, 1),
                expected: true,
                reason:   "in range",
            },
            TestCase {
                date:     date(2024, 1, 1),
                expected: true,
                reason:   "min is inclusive",
            },
            TestCase {
                date:     date(2024, 12, 31),
                expected: true,
                reason:   "max is inclusive",
            },
            TestCase {
                date:     date(2024, 3, 2),
                expected: false,
                reason:   "disabled",
            },
            TestCase {
                date:     date(2023, 12, 31),
                expected: false,
                reason:   "before min",
            },
            TestCase {
                date:     date(2025, 1, 1),
                expected: false,
                reason:   "after max",
            },
        ];

        for case in &cases {
            assert_eq!(rules.is_valid(&case.date), case.expected, "{}", case.reason);
        }
    }

    #[test]
    fn test_format_and_parse_delegate_to_pattern() {
        let rules = rules_2024();
        assert_eq!(rules.format(&date(2024, 3, 5)), "2024-03-05");
        assert_eq!(rules.parse("2024-03-05"), Some(date(2024, 3, 5)));
        assert_eq!(rules.parse("2024-13-40"), None);
        assert_eq!(rules.format_pattern().to_string(), "y-m-d");
    }
}

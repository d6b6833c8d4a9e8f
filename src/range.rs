use crate::{CalendarDate, DEFAULT_MAX_DATE, DEFAULT_MIN_DATE, prelude::*};

/// Inclusive range of selectable dates.
/// The minimum must be less than or equal to the maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{min}/{max}")]
pub struct DateBounds {
    min: CalendarDate,
    max: CalendarDate,
}

/// Error type for date range operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Minimum date is after maximum date.
    #[error("Invalid date range: min ({min}) is after max ({max})")]
    InvalidRange { min: CalendarDate, max: CalendarDate },
}

impl DateBounds {
    /// Creates new bounds with validation.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if min > max.
    pub fn new(min: CalendarDate, max: CalendarDate) -> Result<Self, RangeError> {
        if min > max {
            return Err(RangeError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub const fn min(&self) -> CalendarDate {
        self.min
    }

    pub const fn max(&self) -> CalendarDate {
        self.max
    }

    /// Checks if `date` lies within `[min, max]`
    pub fn contains(&self, date: &CalendarDate) -> bool {
        self.min <= *date && *date <= self.max
    }
}

impl Default for DateBounds {
    /// Spans `1970-01-01..=4000-01-01`, wide enough to be unbounded in practice.
    fn default() -> Self {
        let (min_y, min_m, min_d) = DEFAULT_MIN_DATE;
        let (max_y, max_m, max_d) = DEFAULT_MAX_DATE;
        match (
            CalendarDate::from_ymd(min_y, min_m, min_d),
            CalendarDate::from_ymd(max_y, max_m, max_d),
        ) {
            (Ok(min), Ok(max)) => Self { min, max },
            _ => unreachable!("default bounds are valid calendar dates"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;

    #[test]
    fn test_new_range_cases() {
        struct TestCase {
            min:            CalendarDate,
            max:            CalendarDate,
            should_succeed: bool,
            description:    &'static str,
        }

        let cases = [
            TestCase {
                min:            date(2024, 1, 1),
                max:            date(2024, 12, 31),
                should_succeed: true,
                description:    "valid range (min < max)",
            },
            TestCase {
                min:            date(2024, 12, 31),
                max:            date(2024, 1, 1),
                should_succeed: false,
                description:    "invalid range (min > max)",
            },
            TestCase {
                min:            date(2024, 6, 1),
                max:            date(2024, 6, 1),
                should_succeed: true,
                description:    "single day (min == max)",
            },
        ];

        for case in &cases {
            let range = DateBounds::new(case.min, case.max);
            assert_eq!(range.is_ok(), case.should_succeed, "{}", case.description);
        }
    }

    #[test]
    fn test_contains_is_inclusive() {
        let bounds = DateBounds::new(date(2024, 1, 1), date(2024, 12, 31)).unwrap();
        assert!(bounds.contains(&date(2024, 1, 1)));
        assert!(bounds.contains(&date(2024, 6, 15)));
        assert!(bounds.contains(&date(2024, 12, 31)));
        assert!(!bounds.contains(&date(2023, 12, 31)));
        assert!(!bounds.contains(&date(2025, 1, 1)));
    }

    #[test]
    fn test_default_bounds() {
        let bounds = DateBounds::default();
        assert_eq!(bounds.min(), date(1970, 1, 1));
        assert_eq!(bounds.max(), date(4000, 1, 1));
        assert!(bounds.contains(&date(2024, 3, 1)));
    }

    #[test]
    fn test_display() {
        let bounds = DateBounds::new(date(2024, 1, 1), date(2024, 12, 31)).unwrap();
        assert_eq!(bounds.to_string(), "2024-01-01/2024-12-31");
        assert_eq!(
            RangeError::InvalidRange {
                min: date(2024, 12, 31),
                max: date(2024, 1, 1),
            }
            .to_string(),
            "Invalid date range: min (2024-12-31) is after max (2024-01-01)"
        );
    }
}

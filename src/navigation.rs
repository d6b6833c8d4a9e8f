use chrono::{Days, Months, NaiveDate};

use crate::{CalendarDate, DateRules};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Backward,
    Forward,
}

/// Base offset applied to the cursor before disabled dates are skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    Day,
    Week,
    Month,
    Year,
}

impl Step {
    /// Applies the step to `from`. Month and year steps clamp to the last day
    /// of the target month. `None` on overflow of the date type.
    fn apply(self, from: NaiveDate, direction: Direction) -> Option<NaiveDate> {
        match (self, direction) {
            (Self::Day, dir) => shift_days(from, 1, dir),
            (Self::Week, dir) => shift_days(from, 7, dir),
            (Self::Month, Direction::Forward) => from.checked_add_months(Months::new(1)),
            (Self::Month, Direction::Backward) => from.checked_sub_months(Months::new(1)),
            (Self::Year, Direction::Forward) => from.checked_add_months(Months::new(12)),
            (Self::Year, Direction::Backward) => from.checked_sub_months(Months::new(12)),
        }
    }
}

fn shift_days(from: NaiveDate, days: u64, direction: Direction) -> Option<NaiveDate> {
    match direction {
        Direction::Forward => from.checked_add_days(Days::new(days)),
        Direction::Backward => from.checked_sub_days(Days::new(days)),
    }
}

/// Computes where the cursor lands after one `step` in `direction`.
///
/// Disabled candidates are skipped one day at a time in the same direction.
/// Crossing the bound ahead (`max` going forward, `min` going backward) is a
/// hard stop and yields `None`: the caller keeps its cursor unchanged. The
/// bound behind is not checked, so a cursor outside the range can walk back in.
pub fn navigate(
    rules: &DateRules,
    from: CalendarDate,
    step: Step,
    direction: Direction,
) -> Option<CalendarDate> {
    let bounds = rules.bounds();
    let crossed = |candidate: &CalendarDate| match direction {
        Direction::Forward => *candidate > bounds.max(),
        Direction::Backward => *candidate < bounds.min(),
    };

    let mut candidate = CalendarDate::from(step.apply(from.naive(), direction)?);
    if crossed(&candidate) {
        log::debug!("{step:?} {direction:?} from {from} stops at bound {bounds}");
        return None;
    }

    // Every skip moves one day towards the bound ahead, so the loop ends.
    while rules.is_disabled(&candidate) {
        candidate = CalendarDate::from(shift_days(candidate.naive(), 1, direction)?);
        if crossed(&candidate) {
            log::debug!("{step:?} {direction:?} from {from} blocked by disabled dates up to {bounds}");
            return None;
        }
    }

    Some(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, iso_format, rules_2024};
    use crate::DateBounds;

    fn rules_with(disabled: Vec<CalendarDate>) -> DateRules {
        DateRules::new(
            iso_format(),
            DateBounds::new(date(2024, 1, 1), date(2024, 12, 31)).unwrap(),
            disabled,
        )
    }

    #[test]
    fn test_next_day_skips_disabled() {
        let rules = rules_2024();
        assert_eq!(
            navigate(&rules, date(2024, 3, 1), Step::Day, Direction::Forward),
            Some(date(2024, 3, 3))
        );
    }

    #[test]
    fn test_prev_day_skips_disabled_backwards() {
        let rules = rules_2024();
        assert_eq!(
            navigate(&rules, date(2024, 3, 3), Step::Day, Direction::Backward),
            Some(date(2024, 3, 1))
        );
    }

    #[test]
    fn test_next_day_at_max_is_blocked() {
        let rules = rules_2024();
        assert_eq!(
            navigate(&rules, date(2024, 12, 31), Step::Day, Direction::Forward),
            None
        );
    }

    #[test]
    fn test_prev_day_at_min_is_blocked() {
        let rules = rules_2024();
        assert_eq!(
            navigate(&rules, date(2024, 1, 1), Step::Day, Direction::Backward),
            None
        );
    }

    #[test]
    fn test_week_steps() {
        let rules = rules_2024();
        assert_eq!(
            navigate(&rules, date(2024, 3, 1), Step::Week, Direction::Forward),
            Some(date(2024, 3, 8))
        );
        assert_eq!(
            navigate(&rules, date(2024, 3, 1), Step::Week, Direction::Backward),
            Some(date(2024, 2, 23))
        );
        assert_eq!(
            navigate(&rules, date(2024, 12, 28), Step::Week, Direction::Forward),
            None
        );
    }

    #[test]
    fn test_prev_week_skips_backwards_within_range() {
        // 2024-03-02 disabled: a week back from the 9th lands on it and skips to the 1st.
        let rules = rules_2024();
        assert_eq!(
            navigate(&rules, date(2024, 3, 9), Step::Week, Direction::Backward),
            Some(date(2024, 3, 1))
        );

        // Skipping backwards past min is a hard stop.
        let rules = rules_with(vec![date(2024, 1, 1), date(2024, 1, 2)]);
        assert_eq!(
            navigate(&rules, date(2024, 1, 9), Step::Week, Direction::Backward),
            None
        );
    }

    #[test]
    fn test_month_steps_clamp_to_month_end() {
        let rules = rules_2024();
        assert_eq!(
            navigate(&rules, date(2024, 1, 31), Step::Month, Direction::Forward),
            Some(date(2024, 2, 29))
        );
        assert_eq!(
            navigate(&rules, date(2024, 3, 31), Step::Month, Direction::Backward),
            Some(date(2024, 2, 29))
        );
        assert_eq!(
            navigate(&rules, date(2024, 1, 15), Step::Month, Direction::Backward),
            None
        );
    }

    #[test]
    fn test_year_steps() {
        let rules = DateRules::new(iso_format(), DateBounds::default(), vec![]);
        assert_eq!(
            navigate(&rules, date(2024, 2, 29), Step::Year, Direction::Forward),
            Some(date(2025, 2, 28))
        );
        assert_eq!(
            navigate(&rules, date(2024, 6, 1), Step::Year, Direction::Backward),
            Some(date(2023, 6, 1))
        );
        assert_eq!(
            navigate(&rules_2024(), date(2024, 6, 1), Step::Year, Direction::Forward),
            None
        );
    }

    #[test]
    fn test_fully_blocked_by_disabled_dates() {
        let rules = rules_with(vec![date(2024, 12, 30), date(2024, 12, 31)]);
        assert_eq!(
            navigate(&rules, date(2024, 12, 29), Step::Day, Direction::Forward),
            None
        );
    }

    #[test]
    fn test_month_step_skips_forward_from_disabled_target() {
        let rules = rules_with(vec![date(2024, 4, 15), date(2024, 4, 16)]);
        assert_eq!(
            navigate(&rules, date(2024, 3, 15), Step::Month, Direction::Forward),
            Some(date(2024, 4, 17))
        );
    }

    #[test]
    fn test_cursor_outside_range_does_not_move_further_out() {
        let rules = rules_2024();
        assert_eq!(
            navigate(&rules, date(2023, 6, 1), Step::Day, Direction::Backward),
            None
        );
        assert_eq!(
            navigate(&rules, date(2025, 6, 1), Step::Week, Direction::Forward),
            None
        );
    }

    #[test]
    fn test_cursor_outside_range_walks_back_in() {
        struct TestCase {
            from:        CalendarDate,
            step:        Step,
            direction:   Direction,
            expected:    CalendarDate,
            description: &'static str,
        }

        let cases = [
            TestCase {
                from:        date(2026, 10, 16),
                step:        Step::Day,
                direction:   Direction::Backward,
                expected:    date(2026, 10, 15),
                description: "after max, one day back",
            },
            TestCase {
                from:        date(2026, 10, 16),
                step:        Step::Month,
                direction:   Direction::Backward,
                expected:    date(2026, 9, 16),
                description: "after max, one month back",
            },
            TestCase {
                from:        date(2025, 1, 1),
                step:        Step::Day,
                direction:   Direction::Backward,
                expected:    date(2024, 12, 31),
                description: "day after max lands on max",
            },
            TestCase {
                from:        date(2025, 3, 2),
                step:        Step::Year,
                direction:   Direction::Backward,
                expected:    date(2024, 3, 1),
                description: "year back lands on a disabled date and skips further back",
            },
            TestCase {
                from:        date(2023, 6, 1),
                step:        Step::Day,
                direction:   Direction::Forward,
                expected:    date(2023, 6, 2),
                description: "before min, one day forward",
            },
            TestCase {
                from:        date(2023, 12, 31),
                step:        Step::Day,
                direction:   Direction::Forward,
                expected:    date(2024, 1, 1),
                description: "day before min lands on min",
            },
        ];

        let rules = rules_2024();
        for case in &cases {
            assert_eq!(
                navigate(&rules, case.from, case.step, case.direction),
                Some(case.expected),
                "{}",
                case.description
            );
        }
    }

    #[test]
    fn test_result_is_valid_or_none_for_every_step() {
        let rules = rules_with(vec![
            date(2024, 1, 2),
            date(2024, 1, 8),
            date(2024, 2, 1),
            date(2024, 12, 30),
        ]);
        let steps = [Step::Day, Step::Week, Step::Month, Step::Year];
        let directions = [Direction::Forward, Direction::Backward];
        for from in [date(2024, 1, 1), date(2024, 1, 7), date(2024, 12, 23), date(2024, 12, 31)] {
            for step in steps {
                for direction in directions {
                    if let Some(to) = navigate(&rules, from, step, direction) {
                        assert!(rules.is_valid(&to), "{from} {step:?} {direction:?} -> {to}");
                    }
                }
            }
        }
    }
}

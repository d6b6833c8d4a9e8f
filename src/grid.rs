//! Month grid and header handed to a renderer.
//!
//! Everything here is plain data derived from the picker state; painting it
//! is left to whichever front end consumes it.

use chrono::{Datelike, Days};
use serde::Serialize;

use crate::{Action, CalendarDate, DateRules, GRID_CELLS, GRID_COLUMNS, LocaleStrings};

/// One day in the 6×7 grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridCell {
    pub date:     CalendarDate,
    /// Day of month shown in the cell
    pub day:      u32,
    /// Formatted date, the cell's interaction key
    pub key:      String,
    /// Belongs to the cursor's month
    pub in_month: bool,
    /// Not interactive: outside the cursor's month or not a valid date
    pub disabled: bool,
    pub today:    bool,
    /// The single tabbable cell, matching the cursor
    pub focused:  bool,
}

impl GridCell {
    pub const fn tab_index(&self) -> i8 {
        if self.focused { 0 } else { -1 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekdayHeader {
    /// Full name, for assistive technology
    pub abbr:  String,
    /// Two-character column heading
    pub short: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    /// Localized "Month Year"
    pub label:    String,
    /// Monday first
    pub weekdays: Vec<WeekdayHeader>,
    pub cells:    Vec<GridCell>,
}

impl MonthGrid {
    pub fn rows(&self) -> impl Iterator<Item = &[GridCell]> {
        self.cells.chunks(GRID_COLUMNS)
    }

    pub fn focused(&self) -> Option<&GridCell> {
        self.cells.iter().find(|cell| cell.focused)
    }

    pub fn cell(&self, key: &str) -> Option<&GridCell> {
        self.cells.iter().find(|cell| cell.key == key)
    }
}

/// A header button moving the cursor by a month or a year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavControl {
    pub action: Action,
    /// Accessible label
    pub label:  String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Header {
    pub dialog_label: String,
    pub open_label:   String,
    /// Element id the grid is labelled by
    pub label_id:     String,
    pub label:        String,
    /// Previous year, previous month, next month, next year
    pub controls:     [NavControl; 4],
}

impl Header {
    pub fn new(picker_id: &str, locale: &LocaleStrings, cursor: &CalendarDate) -> Self {
        let control = |action, label: &String| NavControl {
            action,
            label: label.clone(),
        };
        Self {
            dialog_label: locale.choose_date.clone(),
            open_label:   locale.open_picker.clone(),
            label_id:     format!("{picker_id}_label"),
            label:        locale.month_year(cursor),
            controls:     [
                control(Action::PrevYear, &locale.prev_year),
                control(Action::PrevMonth, &locale.prev_month),
                control(Action::NextMonth, &locale.next_month),
                control(Action::NextYear, &locale.next_year),
            ],
        }
    }
}

/// Lays out the cursor's month as 42 consecutive days starting on the
/// Monday on or before the 1st.
pub fn compute_month_grid(
    rules: &DateRules,
    locale: &LocaleStrings,
    cursor: CalendarDate,
    today: CalendarDate,
) -> MonthGrid {
    let first = cursor.naive() - Days::new(u64::from(cursor.naive().day0()));
    let start = first
        .checked_sub_days(Days::new(u64::from(first.weekday().num_days_from_monday())))
        .unwrap_or(first);

    let cells = start
        .iter_days()
        .take(GRID_CELLS)
        .map(CalendarDate::from)
        .map(|date| {
            let in_month = date.same_month(&cursor);
            GridCell {
                date,
                day: date.day(),
                key: rules.format(&date),
                in_month,
                disabled: !(in_month && rules.is_valid(&date)),
                today: date == today,
                focused: date == cursor,
            }
        })
        .collect();

    let weekdays = locale
        .days
        .iter()
        .map(|name| WeekdayHeader {
            abbr:  name.clone(),
            short: name.chars().take(2).collect(),
        })
        .collect();

    MonthGrid {
        label: locale.month_year(&cursor),
        weekdays,
        cells,
    }
}

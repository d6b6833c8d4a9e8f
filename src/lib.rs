//! Headless engine for an accessible date picker.
//!
//! A [`DatePicker`] augments a plain text field with a popup month grid. The
//! crate owns validation against a [`DateBounds`] range and a disabled-date
//! list, parsing and formatting through a [`DateFormat`] pattern, keyboard
//! navigation of the cursor, the selection-commit protocol that keeps the bound
//! field in sync, and the [`MonthGrid`] a renderer paints.

mod action;
mod config;
mod consts;
mod format;
mod grid;
mod locale;
mod navigation;
mod picker;
mod prelude;
mod range;
mod registry;
mod rules;
mod types;

#[cfg(test)]
mod test_utils;

pub use action::{Action, Key};
pub use config::{ConfigError, PickerConfig};
pub use consts::*;
pub use format::{DateFormat, FormatError, Token};
pub use grid::{GridCell, Header, MonthGrid, NavControl, WeekdayHeader, compute_month_grid};
pub use locale::{BuiltinLocales, LocaleResolver, LocaleStrings, resolve_or_default};
pub use navigation::{Direction, Step, navigate};
pub use picker::{DatePicker, PickerEvent};
pub use range::{DateBounds, RangeError};
pub use registry::{PickerRegistry, init};
pub use rules::{DateRules, date_equals};
pub use types::{Day, Month, Year};

use crate::prelude::*;
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use std::fmt;
use std::str::FromStr;

/// A calendar day in the implicit local timezone, with no time-of-day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, From, Into)]
pub struct CalendarDate(NaiveDate);

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be {}-{})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl CalendarDate {
    /// Builds a date from already validated components.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if the components do not name a real day.
    pub fn new(year: Year, month: Month, day: Day) -> Result<Self, ParseError> {
        NaiveDate::from_ymd_opt(
            i32::from(year.get()),
            u32::from(month.get()),
            u32::from(day.get()),
        )
        .map(Self)
        .ok_or(ParseError::InvalidDay {
            year: year.get(),
            month: month.get(),
            day: day.get(),
        })
    }

    /// Validates raw components and builds a date.
    ///
    /// # Errors
    /// Returns the `ParseError` of the first component that is out of range.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Self::new(year, month, day)
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// 1-based month
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn weekday(&self) -> chrono::Weekday {
        self.0.weekday()
    }

    pub const fn naive(&self) -> NaiveDate {
        self.0
    }

    /// Same year and month as `other`, ignoring the day.
    pub fn same_month(&self, other: &Self) -> bool {
        self.year() == other.year() && self.month() == other.month()
    }
}

impl From<NaiveDateTime> for CalendarDate {
    fn from(value: NaiveDateTime) -> Self {
        Self(value.date())
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}{sep}{:02}{sep}{:02}",
            self.year(),
            self.month(),
            self.day(),
            sep = DATE_SEPARATOR
        )
    }
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    /// Parses the ISO `YYYY-MM-DD` form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(trimmed.to_owned()));
        };

        let year = Year::parse(year)?;
        let month = Month::parse(month)?;
        let day = Day::parse(day, year, month)?;
        Self::new(year, month, day)
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// The current calendar day in the local timezone.
pub fn today() -> CalendarDate {
    CalendarDate(chrono::Local::now().date_naive())
}

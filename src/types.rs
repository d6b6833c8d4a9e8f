use crate::ParseError;
use crate::consts::{MAX_MONTH, MAX_YEAR, MIN_YEAR};
use chrono::NaiveDate;
use std::fmt;
use std::num::{NonZeroU8, NonZeroU16};

/// A year typed into a date field, guaranteed to be in `MIN_YEAR..=MAX_YEAR` (1..=9999).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's within `MIN_YEAR..=MAX_YEAR`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the value is out of range.
    pub fn new(value: u16) -> Result<Self, ParseError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&value) {
            return Err(ParseError::InvalidYear(value));
        }
        NonZeroU16::new(value)
            .map(Self)
            .ok_or(ParseError::InvalidYear(value))
    }

    /// Parses a run of digits captured from a date field.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidFormat` if the text is not a `u16`,
    /// or `ParseError::InvalidYear` if it is out of range.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let value = text
            .parse::<u16>()
            .map_err(|_| ParseError::InvalidFormat(text.to_owned()))?;
        Self::new(value)
    }

    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

/// A month number guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        let non_zero = NonZeroU8::new(value).ok_or(ParseError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(ParseError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// # Errors
    /// Returns `ParseError::InvalidFormat` if the text is not a `u8`,
    /// or `ParseError::InvalidMonth` if it is out of range.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let value = text
            .parse::<u8>()
            .map_err(|_| ParseError::InvalidFormat(text.to_owned()))?;
        Self::new(value)
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

/// A day of month guaranteed to exist in a given year and month
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating it against the length of `month` in `year`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if the value is 0 or past the end of the month.
    pub fn new(value: u8, year: Year, month: Month) -> Result<Self, ParseError> {
        NaiveDate::from_ymd_opt(
            i32::from(year.get()),
            u32::from(month.get()),
            u32::from(value),
        )
        .and(NonZeroU8::new(value))
        .map(Self)
        .ok_or(ParseError::InvalidDay {
            year: year.get(),
            month: month.get(),
            day: value,
        })
    }

    /// # Errors
    /// Returns `ParseError::InvalidFormat` if the text is not a `u8`,
    /// or `ParseError::InvalidDay` if the day does not exist.
    pub fn parse(text: &str, year: Year, month: Month) -> Result<Self, ParseError> {
        let value = text
            .parse::<u8>()
            .map_err(|_| ParseError::InvalidFormat(text.to_owned()))?;
        Self::new(value, year, month)
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

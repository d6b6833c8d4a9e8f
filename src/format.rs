use std::fmt;
use std::str::FromStr;

use regex::{Captures, Regex};

use crate::{CalendarDate, Day, Month, ParseError, Year};

/// One of the three components a format pattern places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    Day,
    Month,
    Year,
}

impl Token {
    const fn from_char(c: char) -> Option<Self> {
        match c {
            'd' => Some(Self::Day),
            'm' => Some(Self::Month),
            'y' => Some(Self::Year),
            _ => None,
        }
    }

    const fn as_char(self) -> char {
        match self {
            Self::Day => 'd',
            Self::Month => 'm',
            Self::Year => 'y',
        }
    }
}

/// Error type for malformed format patterns.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("Format pattern must be three tokens and two separators, got '{0}'")]
    WrongShape(String),

    #[error("Unknown format token '{0}' (expected d, m or y)")]
    UnknownToken(char),

    #[error("Format token '{0}' appears more than once")]
    DuplicateToken(char),

    #[error("Format separators differ: '{first}' and '{second}'")]
    MismatchedSeparator { first: char, second: char },

    #[error("Format separator '{0}' must not be alphanumeric")]
    InvalidSeparator(char),

    #[error("Could not build date pattern: {0}")]
    Pattern(String),
}

/// A `d`/`m`/`y` template such as `y-m-d` or `d/m/y`.
///
/// The pattern drives both rendering and parsing, so text produced by
/// [`DateFormat::format`] always parses back to the same date.
#[derive(Debug, Clone)]
pub struct DateFormat {
    order:     [Token; 3],
    separator: char,
    matcher:   Regex,
}

impl DateFormat {
    pub const fn order(&self) -> [Token; 3] {
        self.order
    }

    pub const fn separator(&self) -> char {
        self.separator
    }

    /// Renders `date` with day and month zero-padded to two digits and the
    /// year to four, in the pattern's own token order.
    pub fn format(&self, date: &CalendarDate) -> String {
        let sep = self.separator.to_string();
        self.order
            .iter()
            .map(|token| match token {
                Token::Day => format!("{:02}", date.day()),
                Token::Month => format!("{:02}", date.month()),
                Token::Year => format!("{:04}", date.year()),
            })
            .collect::<Vec<_>>()
            .join(&sep)
    }

    /// Parses `text` against the pattern.
    ///
    /// # Errors
    /// Returns `ParseError::EmptyInput` for blank text, `ParseError::InvalidFormat`
    /// when the text does not have the pattern's shape, or the component error
    /// when it names an impossible calendar date.
    pub fn parse_strict(&self, text: &str) -> Result<CalendarDate, ParseError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let captures = self
            .matcher
            .captures(trimmed)
            .ok_or_else(|| ParseError::InvalidFormat(trimmed.to_owned()))?;

        let group = |token: Token| {
            self.component(&captures, token)
                .ok_or_else(|| ParseError::InvalidFormat(trimmed.to_owned()))
        };

        let year = Year::parse(group(Token::Year)?)?;
        let month = Month::parse(group(Token::Month)?)?;
        let day = Day::parse(group(Token::Day)?, year, month)?;
        CalendarDate::new(year, month, day)
    }

    fn component<'t>(&self, captures: &Captures<'t>, token: Token) -> Option<&'t str> {
        let index = self.order.iter().position(|t| *t == token)?;
        captures.get(index + 1).map(|m| m.as_str())
    }

    /// Parses `text`, returning `None` for anything that is not a real date in
    /// this pattern.
    pub fn parse(&self, text: &str) -> Option<CalendarDate> {
        self.parse_strict(text).ok()
    }
}

impl FromStr for DateFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        let [a, first, b, second, c] = chars.as_slice() else {
            return Err(FormatError::WrongShape(s.to_owned()));
        };

        if first != second {
            return Err(FormatError::MismatchedSeparator {
                first:  *first,
                second: *second,
            });
        }
        if first.is_alphanumeric() {
            return Err(FormatError::InvalidSeparator(*first));
        }

        let mut order = [Token::Year; 3];
        for (slot, ch) in order.iter_mut().zip([*a, *b, *c]) {
            *slot = Token::from_char(ch).ok_or(FormatError::UnknownToken(ch))?;
        }
        if order[0] == order[1] || order[0] == order[2] {
            return Err(FormatError::DuplicateToken(order[0].as_char()));
        }
        if order[1] == order[2] {
            return Err(FormatError::DuplicateToken(order[1].as_char()));
        }

        let sep = regex::escape(&first.to_string());
        let matcher = Regex::new(&format!("^([0-9]+){sep}([0-9]+){sep}([0-9]+)$"))
            .map_err(|e| FormatError::Pattern(e.to_string()))?;

        Ok(Self {
            order,
            separator: *first,
            matcher,
        })
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.order.map(Token::as_char);
        write!(f, "{a}{sep}{b}{sep}{c}", sep = self.separator)
    }
}

impl PartialEq for DateFormat {
    fn eq(&self, other: &Self) -> bool {
        self.order == other.order && self.separator == other.separator
    }
}

impl Eq for DateFormat {}

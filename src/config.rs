use serde::Deserialize;

use crate::{
    ATTR_CURRENT, ATTR_DISABLED_DATES, ATTR_FORMAT, ATTR_LOCALE, ATTR_MAX_DATE, ATTR_MIN_DATE,
    ATTR_NAME, ATTR_VALUE, CalendarDate, DEFAULT_FORMAT, DateBounds, DateFormat, DateRules,
    FormatError, LIST_SEPARATOR, ParseError, RangeError,
};

/// Declarative attributes read from the host text field.
///
/// Every field is optional; dates are written in the field's own format
/// pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PickerConfig {
    pub name:           Option<String>,
    /// Text already in the field
    pub value:          String,
    pub locale:         Option<String>,
    pub format:         Option<String>,
    /// Comma separated
    pub disabled_dates: Option<String>,
    pub min_date:       Option<String>,
    pub max_date:       Option<String>,
    /// Initial cursor
    pub current:        Option<String>,
}

/// Error type for invalid picker configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("Invalid {attribute} '{value}': {source}")]
    InvalidDate {
        attribute: &'static str,
        value:     String,
        source:    ParseError,
    },

    #[error(transparent)]
    Range(#[from] RangeError),
}

impl PickerConfig {
    /// Collects the recognised attributes of a host field; unknown ones are ignored.
    pub fn from_attributes<'a, I>(attributes: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut config = Self::default();
        for (key, value) in attributes {
            let value = value.to_owned();
            match key {
                ATTR_NAME => config.name = Some(value),
                ATTR_VALUE => config.value = value,
                ATTR_LOCALE => config.locale = Some(value),
                ATTR_FORMAT => config.format = Some(value),
                ATTR_DISABLED_DATES => config.disabled_dates = Some(value),
                ATTR_MIN_DATE => config.min_date = Some(value),
                ATTR_MAX_DATE => config.max_date = Some(value),
                ATTR_CURRENT => config.current = Some(value),
                other => log::trace!("Ignoring attribute '{other}'"),
            }
        }
        config
    }

    /// # Errors
    /// Returns `ConfigError::Format` if the pattern is malformed.
    pub fn date_format(&self) -> Result<DateFormat, ConfigError> {
        Ok(self.format.as_deref().unwrap_or(DEFAULT_FORMAT).parse()?)
    }

    /// Builds the validity rules: pattern, bounds and disabled dates.
    ///
    /// # Errors
    /// Returns `ConfigError` for a malformed pattern, an unparseable date
    /// attribute, or a minimum after the maximum.
    pub fn rules(&self) -> Result<DateRules, ConfigError> {
        let format = self.date_format()?;
        let defaults = DateBounds::default();

        let min = parse_attribute(&format, ATTR_MIN_DATE, self.min_date.as_deref())?
            .unwrap_or_else(|| defaults.min());
        let max = parse_attribute(&format, ATTR_MAX_DATE, self.max_date.as_deref())?
            .unwrap_or_else(|| defaults.max());
        let bounds = DateBounds::new(min, max)?;

        let disabled = self
            .disabled_dates
            .as_deref()
            .unwrap_or_default()
            .split(LIST_SEPARATOR)
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(|entry| parse_date(&format, ATTR_DISABLED_DATES, entry))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(DateRules::new(format, bounds, disabled))
    }

    /// The configured initial cursor, if any.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidDate` if the attribute does not parse.
    pub fn current_date(&self, format: &DateFormat) -> Result<Option<CalendarDate>, ConfigError> {
        parse_attribute(format, ATTR_CURRENT, self.current.as_deref())
    }
}

fn parse_attribute(
    format: &DateFormat,
    attribute: &'static str,
    value: Option<&str>,
) -> Result<Option<CalendarDate>, ConfigError> {
    value
        .map(|text| parse_date(format, attribute, text))
        .transpose()
}

fn parse_date(
    format: &DateFormat,
    attribute: &'static str,
    text: &str,
) -> Result<CalendarDate, ConfigError> {
    format
        .parse_strict(text)
        .map_err(|source| ConfigError::InvalidDate {
            attribute,
            value: text.to_owned(),
            source,
        })
}

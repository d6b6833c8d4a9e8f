use serde::{Deserialize, Serialize};

use crate::{CalendarDate, DEFAULT_LOCALE};

/// Labels and names for one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct LocaleStrings {
    pub open_picker: String,
    pub choose_date: String,
    pub prev_year:   String,
    pub prev_month:  String,
    pub next_month:  String,
    pub next_year:   String,
    /// Weekday names, Monday first
    pub days:        [String; 7],
    /// Month names, January first
    pub months:      [String; 12],
}

impl LocaleStrings {
    /// The "Month Year" heading for the month containing `date`.
    pub fn month_year(&self, date: &CalendarDate) -> String {
        let month = self
            .months
            .get(date.month() as usize - 1)
            .map_or("", String::as_str);
        format!("{month} {}", date.year())
    }

    fn from_parts(labels: [&str; 6], days: [&str; 7], months: [&str; 12]) -> Self {
        let [open_picker, choose_date, prev_year, prev_month, next_month, next_year] =
            labels.map(str::to_owned);
        Self {
            open_picker,
            choose_date,
            prev_year,
            prev_month,
            next_month,
            next_year,
            days: days.map(str::to_owned),
            months: months.map(str::to_owned),
        }
    }

    pub fn english() -> Self {
        Self::from_parts(
            [
                "open picker",
                "choose date",
                "previous year",
                "previous month",
                "next month",
                "next year",
            ],
            [
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
                "Sunday",
            ],
            [
                "January",
                "February",
                "March",
                "April",
                "May",
                "June",
                "July",
                "August",
                "September",
                "October",
                "November",
                "December",
            ],
        )
    }

    pub fn italian() -> Self {
        Self::from_parts(
            [
                "aprire il calendario",
                "scegliere una data",
                "anno precedente",
                "mese precedente",
                "mese successivo",
                "anno successivo",
            ],
            [
                "Lunedì",
                "Martedì",
                "Mercoledì",
                "Giovedì",
                "Venerdì",
                "Sabato",
                "Domenica",
            ],
            [
                "gennaio",
                "febbraio",
                "marzo",
                "aprile",
                "maggio",
                "giugno",
                "luglio",
                "agosto",
                "settembre",
                "ottobre",
                "novembre",
                "dicembre",
            ],
        )
    }
}

/// Looks up the strings for a locale tag.
pub trait LocaleResolver {
    fn resolve(&self, tag: &str) -> Option<LocaleStrings>;
}

impl<F> LocaleResolver for F
where
    F: Fn(&str) -> Option<LocaleStrings>,
{
    fn resolve(&self, tag: &str) -> Option<LocaleStrings> {
        self(tag)
    }
}

/// The tables shipped with the crate: `en` and `it`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinLocales;

impl LocaleResolver for BuiltinLocales {
    fn resolve(&self, tag: &str) -> Option<LocaleStrings> {
        match tag {
            "en" => Some(LocaleStrings::english()),
            "it" => Some(LocaleStrings::italian()),
            _ => None,
        }
    }
}

/// Resolves `tag`, falling back to the built-in default locale.
pub fn resolve_or_default<R: LocaleResolver + ?Sized>(resolver: &R, tag: &str) -> LocaleStrings {
    resolver.resolve(tag).unwrap_or_else(|| {
        log::warn!("Unknown locale '{tag}', falling back to '{DEFAULT_LOCALE}'");
        BuiltinLocales
            .resolve(DEFAULT_LOCALE)
            .unwrap_or_else(LocaleStrings::english)
    })
}

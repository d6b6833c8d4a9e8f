use std::collections::BTreeMap;

use crate::{CalendarDate, ConfigError, DatePicker, LocaleResolver, PickerConfig};

/// Live pickers keyed by name.
#[derive(Debug, Default)]
pub struct PickerRegistry {
    pickers: BTreeMap<String, DatePicker>,
}

impl PickerRegistry {
    /// Adds a picker, replacing any earlier one with the same name.
    pub fn insert(&mut self, picker: DatePicker) -> Option<DatePicker> {
        let replaced = self.pickers.insert(picker.name().to_owned(), picker);
        if let Some(old) = &replaced {
            log::warn!("Date picker '{}' replaced an earlier instance", old.name());
        }
        replaced
    }

    pub fn get(&self, name: &str) -> Option<&DatePicker> {
        self.pickers.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut DatePicker> {
        self.pickers.get_mut(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.pickers.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DatePicker> {
        self.pickers.values()
    }

    pub fn len(&self) -> usize {
        self.pickers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pickers.is_empty()
    }
}

/// Builds, mounts and registers a picker for each host field.
///
/// Fields without a name are registered as `picker-<index>`.
///
/// # Errors
/// Returns the first `ConfigError`; no registry is produced in that case.
pub fn init<I, R>(configs: I, resolver: &R, today: CalendarDate) -> Result<PickerRegistry, ConfigError>
where
    I: IntoIterator<Item = PickerConfig>,
    R: LocaleResolver + ?Sized,
{
    let mut registry = PickerRegistry::default();
    for (index, mut config) in configs.into_iter().enumerate() {
        if config.name.is_none() {
            config.name = Some(format!("picker-{index}"));
        }
        let mut picker = DatePicker::with_today(&config, resolver, today)?;
        picker.mount();
        registry.insert(picker);
    }
    log::info!("Registered {} date picker(s)", registry.len());
    Ok(registry)
}

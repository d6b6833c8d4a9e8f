use serde::Serialize;

use crate::{
    Action, CalendarDate, ConfigError, DEFAULT_LOCALE, DEFAULT_NAME, DateRules, Direction, Header,
    ID_PREFIX, Key, LocaleResolver, LocaleStrings, MonthGrid, PickerConfig, Step,
    compute_month_grid, navigate, resolve_or_default, today,
};

/// Notifications for code outside the picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum PickerEvent {
    /// The picker finished mounting
    Created { name: String },
    /// A value was committed to the bound field
    Changed { name: String, value: String },
}

/// Date picker bound to one text field.
///
/// Holds the cursor (the keyboard-navigable date), the committed selection,
/// the bound field's text and the month grid derived from them. Every
/// operation runs to completion and leaves the grid in sync with the cursor.
#[derive(Debug)]
pub struct DatePicker {
    name:        String,
    id:          String,
    locale_tag:  String,
    locale:      LocaleStrings,
    rules:       DateRules,
    cursor:      CalendarDate,
    selected:    Option<CalendarDate>,
    field_value: String,
    /// Last committed text, restored when an edit is rejected
    prev_value:  String,
    today:       CalendarDate,
    open:        bool,
    mounted:     bool,
    grid:        MonthGrid,
    events:      Vec<PickerEvent>,
}

impl DatePicker {
    /// Builds a picker from the host field's attributes, using the local date
    /// as today.
    ///
    /// # Errors
    /// Returns `ConfigError` if the configuration is malformed.
    pub fn new<R>(config: &PickerConfig, resolver: &R) -> Result<Self, ConfigError>
    where
        R: LocaleResolver + ?Sized,
    {
        Self::with_today(config, resolver, today())
    }

    /// # Errors
    /// Returns `ConfigError` if the configuration is malformed.
    pub fn with_today<R>(
        config: &PickerConfig,
        resolver: &R,
        today: CalendarDate,
    ) -> Result<Self, ConfigError>
    where
        R: LocaleResolver + ?Sized,
    {
        let rules = config.rules()?;
        let cursor = config
            .current_date(rules.format_pattern())?
            .unwrap_or(today);

        let locale_tag = config
            .locale
            .clone()
            .unwrap_or_else(|| DEFAULT_LOCALE.to_owned());
        let locale = resolve_or_default(resolver, &locale_tag);

        let name = config
            .name
            .clone()
            .unwrap_or_else(|| DEFAULT_NAME.to_owned());
        let grid = compute_month_grid(&rules, &locale, cursor, today);

        Ok(Self {
            id: format!("{ID_PREFIX}{name}"),
            name,
            locale_tag,
            locale,
            rules,
            cursor,
            selected: None,
            field_value: config.value.clone(),
            prev_value: config.value.clone(),
            today,
            open: false,
            mounted: false,
            grid,
            events: Vec::new(),
        })
    }

    /// Finishes setup and announces the picker. Only the first call queues
    /// `PickerEvent::Created`.
    pub fn mount(&mut self) {
        if self.mounted {
            log::trace!("Date picker '{}' already mounted", self.name);
            return;
        }
        self.mounted = true;
        self.refresh();
        log::info!("Mounted date picker '{}' at {}", self.name, self.cursor);
        self.events.push(PickerEvent::Created {
            name: self.name.clone(),
        });
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn locale_tag(&self) -> &str {
        &self.locale_tag
    }

    pub const fn locale(&self) -> &LocaleStrings {
        &self.locale
    }

    pub const fn rules(&self) -> &DateRules {
        &self.rules
    }

    pub const fn cursor(&self) -> CalendarDate {
        self.cursor
    }

    pub const fn selected(&self) -> Option<CalendarDate> {
        self.selected
    }

    /// Current text of the bound field.
    pub fn value(&self) -> &str {
        &self.field_value
    }

    pub const fn today(&self) -> CalendarDate {
        self.today
    }

    pub const fn is_open(&self) -> bool {
        self.open
    }

    pub const fn grid(&self) -> &MonthGrid {
        &self.grid
    }

    pub fn header(&self) -> Header {
        Header::new(&self.id, &self.locale, &self.cursor)
    }

    pub fn events(&self) -> &[PickerEvent] {
        &self.events
    }

    /// Hands queued notifications to the host.
    pub fn drain_events(&mut self) -> Vec<PickerEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn set_today(&mut self, today: CalendarDate) {
        self.today = today;
        self.refresh();
    }

    fn refresh(&mut self) {
        self.grid = compute_month_grid(&self.rules, &self.locale, self.cursor, self.today);
    }

    /// Moves the cursor without touching the selection or the field.
    pub fn set_date(&mut self, date: CalendarDate) {
        self.cursor = date;
        self.refresh();
    }

    /// Commits `text` as the field value, the selection and the cursor.
    /// Surrounding whitespace is dropped from the stored text.
    ///
    /// Text that does not parse leaves everything unchanged and returns `None`.
    pub fn select_date(&mut self, text: &str) -> Option<CalendarDate> {
        let Some(date) = self.rules.parse(text) else {
            log::debug!("'{}' ignored unparseable selection '{text}'", self.name);
            return None;
        };
        self.commit(date, text.trim());
        Some(date)
    }

    fn commit(&mut self, date: CalendarDate, text: &str) {
        text.clone_into(&mut self.field_value);
        text.clone_into(&mut self.prev_value);
        self.selected = Some(date);
        self.set_date(date);

        log::info!("'{}' selected {date}", self.name);
        self.events.push(PickerEvent::Changed {
            name:  self.name.clone(),
            value: text.to_owned(),
        });
    }

    /// Replaces the field text as the user types, before the field's change
    /// event fires.
    pub fn set_field_text(&mut self, text: &str) {
        text.clone_into(&mut self.field_value);
    }

    /// Reconciles a direct edit of the bound field.
    ///
    /// Text that fails to parse or lies outside the bounds is reverted to the
    /// last committed value (or left empty when cleared) with no notification.
    /// Disabled dates are accepted here, unlike keyboard and pointer selection.
    pub fn on_field_change(&mut self) -> bool {
        let value = self.field_value.clone();
        let accepted = self
            .rules
            .parse(&value)
            .filter(|date| self.rules.bounds().contains(date));

        match accepted {
            Some(date) => {
                self.commit(date, value.trim());
                true
            },
            None => {
                log::debug!("'{}' rejected field value '{value}'", self.name);
                self.field_value = if value.trim().is_empty() {
                    String::new()
                } else {
                    self.prev_value.clone()
                };
                false
            },
        }
    }

    /// Moves the cursor one `step`; returns whether it moved.
    pub fn navigate(&mut self, step: Step, direction: Direction) -> bool {
        match navigate(&self.rules, self.cursor, step, direction) {
            Some(date) => {
                self.set_date(date);
                true
            },
            None => false,
        }
    }

    pub fn prev_day(&mut self) -> bool {
        self.navigate(Step::Day, Direction::Backward)
    }

    pub fn next_day(&mut self) -> bool {
        self.navigate(Step::Day, Direction::Forward)
    }

    pub fn prev_week(&mut self) -> bool {
        self.navigate(Step::Week, Direction::Backward)
    }

    pub fn next_week(&mut self) -> bool {
        self.navigate(Step::Week, Direction::Forward)
    }

    pub fn prev_month(&mut self) -> bool {
        self.navigate(Step::Month, Direction::Backward)
    }

    pub fn next_month(&mut self) -> bool {
        self.navigate(Step::Month, Direction::Forward)
    }

    pub fn prev_year(&mut self) -> bool {
        self.navigate(Step::Year, Direction::Backward)
    }

    pub fn next_year(&mut self) -> bool {
        self.navigate(Step::Year, Direction::Forward)
    }

    /// Performs `action`; returns whether the picker state changed.
    pub fn apply(&mut self, action: Action) -> bool {
        if let Some((step, direction)) = action.movement() {
            return self.navigate(step, direction);
        }
        match action {
            Action::Commit => self.commit_cursor(),
            Action::Close => {
                let was_open = self.open;
                self.close();
                was_open
            },
            _ => false,
        }
    }

    /// Keyboard input while the popup has focus.
    pub fn handle_key(&mut self, key: Key, shift: bool) -> bool {
        Action::from_key(key, shift).is_some_and(|action| self.apply(action))
    }

    fn commit_cursor(&mut self) -> bool {
        if !self.rules.is_valid(&self.cursor) {
            log::debug!("'{}' cannot commit invalid cursor {}", self.name, self.cursor);
            return false;
        }
        let text = self.rules.format(&self.cursor);
        self.select_date(&text).is_some()
    }

    /// Pointer activation of the cell with interaction key `key`. Disabled
    /// cells are ignored.
    pub fn click(&mut self, key: &str) -> bool {
        let interactive = self.grid.cell(key).is_some_and(|cell| !cell.disabled);
        if !interactive {
            log::trace!("'{}' ignored click on '{key}'", self.name);
            return false;
        }
        self.select_date(key).is_some()
    }

    /// Shows the popup. Returns the interaction key of the cell to focus.
    pub fn open(&mut self) -> String {
        self.open = true;
        self.rules.format(&self.cursor)
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// A pointer press anywhere on the page; outside the popup closes it.
    pub fn on_pointer_down(&mut self, inside_popup: bool) {
        if !inside_popup {
            self.close();
        }
    }

    /// The window lost focus; closes unless focus is still within the popup.
    pub fn on_focus_lost(&mut self, focus_within: bool) {
        if !focus_within {
            self.close();
        }
    }
}

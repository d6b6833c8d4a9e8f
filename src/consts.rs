/// Minimum year accepted from text input (inclusive)
pub const MIN_YEAR: u16 = 1;

/// Maximum year accepted from text input (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// ISO date component separator, used by `Display`/`FromStr` of `CalendarDate`
pub const DATE_SEPARATOR: char = '-';
/// Separator between entries of the disabled-dates attribute
pub const LIST_SEPARATOR: char = ',';

/// Format pattern used when the host field does not declare one
pub const DEFAULT_FORMAT: &str = "y-m-d";
/// Locale tag used when the host field does not declare one
pub const DEFAULT_LOCALE: &str = "en";
/// Name used when neither the host field nor the registry provides one
pub const DEFAULT_NAME: &str = "datepicker";
/// Prefix of every picker element id
pub const ID_PREFIX: &str = "jdatepicker-";

/// Earliest selectable date when no minimum is configured (year, month, day)
pub const DEFAULT_MIN_DATE: (u16, u8, u8) = (1970, 1, 1);
/// Latest selectable date when no maximum is configured (year, month, day)
pub const DEFAULT_MAX_DATE: (u16, u8, u8) = (4000, 1, 1);

/// Rows in a month grid
pub const GRID_ROWS: usize = 6;
/// Columns in a month grid, one per weekday
pub const GRID_COLUMNS: usize = 7;
/// Cells in a month grid
pub const GRID_CELLS: usize = GRID_ROWS * GRID_COLUMNS;

/// Host field attribute names
pub const ATTR_NAME: &str = "name";
pub const ATTR_VALUE: &str = "value";
pub const ATTR_LOCALE: &str = "data-locale";
pub const ATTR_FORMAT: &str = "data-format";
pub const ATTR_DISABLED_DATES: &str = "data-disableddates";
pub const ATTR_MIN_DATE: &str = "data-mindate";
pub const ATTR_MAX_DATE: &str = "data-maxdate";
pub const ATTR_CURRENT: &str = "data-current";

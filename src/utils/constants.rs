/// Calendar month names, January first
pub const MONTH_NAMES: [&str; 12] = [
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
];

/// Days per month using the non-leap table; February is always 28
pub const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

pub const MONTHS_PER_YEAR: usize = 12;

/// Input column names
pub const DATE_COLUMN: &str = "date";
pub const MAX_TEMPERATURE_COLUMN: &str = "max_temperature";
pub const MIN_TEMPERATURE_COLUMN: &str = "min_temperature";
pub const REQUIRED_COLUMNS: [&str; 3] = [DATE_COLUMN, MAX_TEMPERATURE_COLUMN, MIN_TEMPERATURE_COLUMN];

/// Year range defaults
pub const DEFAULT_START_YEAR: i32 = 1997;
pub const LEVEL2_START_YEAR: i32 = 2008;
pub const DEFAULT_END_YEAR: i32 = 2017;

/// Environment variable prefix for configuration overrides
pub const CONFIG_ENV_PREFIX: &str = "TEMPERATURE_GRID";

/// Default input file name
pub const DEFAULT_INPUT_FILE: &str = "temperature_daily.csv";

/// I/O defaults
pub const DEFAULT_BUFFER_SIZE: usize = 8192 * 16; // 128KB

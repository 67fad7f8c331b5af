/// Default data files
pub const DEFAULT_HOURLY_PATH: &str = "data/hour_cleaned_df.csv";
pub const DEFAULT_DAILY_PATH: &str = "data/day_cleaned_df.csv";
pub const DEFAULT_CONFIG_FILE: &str = "dashboard.toml";
pub const DEFAULT_OUTPUT_DIR: &str = "dashboard-output";

/// Environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "BIKESHARE";

/// Physical ranges of the normalized hourly fields
pub const TEMP_MIN_C: f64 = -8.0;
pub const TEMP_MAX_C: f64 = 39.0;
pub const ATEMP_MIN_C: f64 = -16.0;
pub const ATEMP_MAX_C: f64 = 50.0;
pub const HUM_MIN_PCT: f64 = 0.0;
pub const HUM_MAX_PCT: f64 = 100.0;

/// Accepted date formats for the `dteday` column
pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Presentation defaults
pub const DEFAULT_TOP_HOURS: usize = 5;
pub const DEFAULT_CHART_WIDTH: u32 = 1000;
pub const DEFAULT_CHART_HEIGHT: u32 = 500;
pub const PRIMARY_COLOR: &str = "#08519C";

/// Reversed blues palette, darkest first
pub const BLUES_R: [&str; 5] = ["#08519C", "#3182BD", "#6BAED6", "#9ECAE1", "#C6DBEF"];

/// Chart file names
pub const SEASONAL_CHART_FILE: &str = "seasonal_rentals.svg";
pub const DAILY_CHART_FILE: &str = "daily_rentals.svg";
pub const TIME_OF_DAY_CHART_FILE: &str = "time_of_day_rentals.svg";
pub const TOP_HOURS_CHART_FILE: &str = "top_rental_hours.svg";

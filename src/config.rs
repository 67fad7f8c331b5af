use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use validator::Validate;

use crate::error::Result;
use crate::utils::constants::{
    DEFAULT_CHART_HEIGHT, DEFAULT_CHART_WIDTH, DEFAULT_CONFIG_FILE, DEFAULT_DAILY_PATH,
    DEFAULT_HOURLY_PATH, DEFAULT_OUTPUT_DIR, DEFAULT_TOP_HOURS, ENV_PREFIX,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSources {
    pub hourly_path: PathBuf,
    pub daily_path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct OutputSettings {
    pub dir: PathBuf,

    #[validate(range(min = 200, max = 4000))]
    pub chart_width: u32,

    #[validate(range(min = 200, max = 4000))]
    pub chart_height: u32,

    pub charts: bool,
}

/// Settings layered as: defaults, config file, `BIKESHARE__*` environment
/// variables, then command-line overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct DashboardConfig {
    pub data: DataSources,

    #[validate(nested)]
    pub output: OutputSettings,

    #[validate(range(min = 1, max = 24))]
    pub top_hours: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data: DataSources {
                hourly_path: PathBuf::from(DEFAULT_HOURLY_PATH),
                daily_path: PathBuf::from(DEFAULT_DAILY_PATH),
            },
            output: OutputSettings {
                dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
                chart_width: DEFAULT_CHART_WIDTH,
                chart_height: DEFAULT_CHART_HEIGHT,
                charts: true,
            },
            top_hours: DEFAULT_TOP_HOURS,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub hourly_path: Option<PathBuf>,
    pub daily_path: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub top_hours: Option<usize>,
    pub no_charts: bool,
}

impl DashboardConfig {
    /// Load configuration. An explicit `path` must exist; otherwise
    /// `dashboard.toml` in the working directory is used when present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let defaults = DashboardConfig::default();

        let mut builder = Config::builder()
            .set_default(
                "data.hourly_path",
                defaults.data.hourly_path.to_string_lossy().to_string(),
            )?
            .set_default(
                "data.daily_path",
                defaults.data.daily_path.to_string_lossy().to_string(),
            )?
            .set_default("output.dir", defaults.output.dir.to_string_lossy().to_string())?
            .set_default("output.chart_width", i64::from(defaults.output.chart_width))?
            .set_default("output.chart_height", i64::from(defaults.output.chart_height))?
            .set_default("output.charts", defaults.output.charts)?
            .set_default("top_hours", defaults.top_hours as i64)?;

        builder = match path {
            Some(p) => builder.add_source(File::from(p).required(true)),
            None => builder.add_source(File::with_name(DEFAULT_CONFIG_FILE).required(false)),
        };

        let settings: DashboardConfig = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        tracing::debug!(?settings, "Loaded configuration");
        Ok(settings)
    }

    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Result<Self> {
        if let Some(path) = overrides.hourly_path {
            self.data.hourly_path = path;
        }
        if let Some(path) = overrides.daily_path {
            self.data.daily_path = path;
        }
        if let Some(dir) = overrides.output_dir {
            self.output.dir = dir;
        }
        if let Some(n) = overrides.top_hours {
            self.top_hours = n;
        }
        if overrides.no_charts {
            self.output.charts = false;
        }

        self.validate()?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DashboardError;
    use std::io::Write;

    #[test]
    fn test_default_is_valid() {
        let config = DashboardConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.top_hours, 5);
        assert!(config.output.charts);
    }

    const ENV_TOP_HOURS: &str = "BIKESHARE__TOP_HOURS";
    const ENV_HOURLY_PATH: &str = "BIKESHARE__DATA__HOURLY_PATH";

    fn clear_env() {
        std::env::remove_var(ENV_TOP_HOURS);
        std::env::remove_var(ENV_HOURLY_PATH);
    }

    // The environment is process-wide, so every layer is checked in one test.
    #[test]
    fn test_layer_precedence() -> Result<()> {
        clear_env();

        let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
        writeln!(
            file,
            r#"
top_hours = 3

[data]
hourly_path = "fixtures/hour.csv"
daily_path = "fixtures/day.csv"

[output]
chart_width = 800
"#
        )?;

        let from_file = DashboardConfig::load(Some(file.path()))?;
        assert_eq!(from_file.top_hours, 3);
        assert_eq!(from_file.data.hourly_path, PathBuf::from("fixtures/hour.csv"));
        assert_eq!(from_file.output.chart_width, 800);
        assert_eq!(from_file.output.chart_height, DEFAULT_CHART_HEIGHT);

        std::env::set_var(ENV_TOP_HOURS, "7");
        std::env::set_var(ENV_HOURLY_PATH, "/env/hour.csv");
        let from_env = DashboardConfig::load(Some(file.path()));
        clear_env();
        let from_env = from_env?;

        assert_eq!(from_env.top_hours, 7);
        assert_eq!(from_env.data.hourly_path, PathBuf::from("/env/hour.csv"));
        assert_eq!(from_env.data.daily_path, PathBuf::from("fixtures/day.csv"));

        let from_cli = from_env.with_overrides(ConfigOverrides {
            hourly_path: Some(PathBuf::from("cli/hour.csv")),
            top_hours: Some(2),
            ..Default::default()
        })?;
        assert_eq!(from_cli.top_hours, 2);
        assert_eq!(from_cli.data.hourly_path, PathBuf::from("cli/hour.csv"));
        Ok(())
    }

    #[test]
    fn test_missing_explicit_file_fails() {
        let result = DashboardConfig::load(Some(Path::new("/nonexistent/dashboard.toml")));
        assert!(matches!(result, Err(DashboardError::Config(_))));
    }

    #[test]
    fn test_overrides_are_validated() {
        let config = DashboardConfig::default()
            .with_overrides(ConfigOverrides {
                hourly_path: Some(PathBuf::from("h.csv")),
                no_charts: true,
                ..Default::default()
            })
            .unwrap();
        assert_eq!(config.data.hourly_path, PathBuf::from("h.csv"));
        assert!(!config.output.charts);

        let invalid = DashboardConfig::default().with_overrides(ConfigOverrides {
            top_hours: Some(0),
            ..Default::default()
        });
        assert!(matches!(invalid, Err(DashboardError::Validation(_))));
    }
}

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::ConfigOverrides;

#[derive(Parser)]
#[command(name = "bikeshare-dashboard")]
#[command(about = "Bike rental dashboard: seasonal, daily and hourly rental views for a date range")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Log file path")]
    pub log_file: Option<PathBuf>,

    #[arg(
        short,
        long,
        global = true,
        help = "Configuration file [default: dashboard.toml if present]"
    )]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Args, Debug, Clone, Default)]
pub struct DataArgs {
    #[arg(long, help = "Hourly rentals CSV")]
    pub hourly: Option<PathBuf>,

    #[arg(long, help = "Daily rentals CSV")]
    pub daily: Option<PathBuf>,
}

impl DataArgs {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            hourly_path: self.hourly.clone(),
            daily_path: self.daily.clone(),
            ..Default::default()
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the dashboard for a date range
    Render {
        #[command(flatten)]
        data: DataArgs,

        #[arg(short, long, help = "First day of the range (YYYY-MM-DD) [default: dataset start]")]
        start: Option<NaiveDate>,

        #[arg(short, long, help = "Last day of the range (YYYY-MM-DD) [default: dataset end]")]
        end: Option<NaiveDate>,

        #[arg(short, long, help = "Directory for SVG charts")]
        output_dir: Option<PathBuf>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        #[arg(long, help = "Number of busiest hours to show")]
        top_hours: Option<usize>,

        #[arg(long, help = "Skip writing SVG charts")]
        no_charts: bool,
    },

    /// Show dataset statistics and the integrity report
    Info {
        #[command(flatten)]
        data: DataArgs,
    },

    /// Read "START END" ranges from stdin and re-render after each one
    Interactive {
        #[command(flatten)]
        data: DataArgs,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

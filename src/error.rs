use chrono::NaiveDate;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DashboardError>;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Date parsing error: {0}")]
    DateParse(#[from] chrono::ParseError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to load {}: {reason}", path.display())]
    DataLoad { path: PathBuf, reason: String },

    #[error("Dataset contains no daily records")]
    EmptyDataset,

    #[error("No records between {start} and {end}")]
    EmptySelection { start: NaiveDate, end: NaiveDate },

    #[error("Date range {start}..={end} is outside the dataset span {min}..={max}")]
    Range {
        start: NaiveDate,
        end: NaiveDate,
        min: NaiveDate,
        max: NaiveDate,
    },

    #[error("Invalid data format: {0}")]
    InvalidFormat(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Chart rendering error: {0}")]
    Chart(String),
}

impl From<config::ConfigError> for DashboardError {
    fn from(err: config::ConfigError) -> Self {
        DashboardError::Config(err.to_string())
    }
}

impl<E> From<plotters::drawing::DrawingAreaErrorKind<E>> for DashboardError
where
    E: std::error::Error + Send + Sync,
{
    fn from(err: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        DashboardError::Chart(err.to_string())
    }
}

impl DashboardError {
    pub fn data_load(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        DashboardError::DataLoad {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Selection errors are shown to the user but never end the session.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            DashboardError::EmptySelection { .. } | DashboardError::Range { .. }
        )
    }
}

use crate::error::Result;
use crate::models::Dataset;
use crate::processors::{IntegrityChecker, IntegrityReport, Normalizer};
use crate::readers::{DailyReader, HourlyReader};
use crate::utils::progress::ProgressReporter;
use std::path::Path;

/// Loads both tables and runs the one-time cleaning steps: integrity check
/// on the raw values, denormalization, and sorting of the daily table.
pub struct DatasetLoader {
    hourly_reader: HourlyReader,
    daily_reader: DailyReader,
    normalizer: Normalizer,
    checker: IntegrityChecker,
}

pub struct LoadedDataset {
    pub dataset: Dataset,
    pub integrity: IntegrityReport,
}

impl DatasetLoader {
    pub fn new() -> Self {
        Self {
            hourly_reader: HourlyReader::new(),
            daily_reader: DailyReader::new(),
            normalizer: Normalizer::new(),
            checker: IntegrityChecker::new(),
        }
    }

    pub fn with_normalizer(mut self, normalizer: Normalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    pub fn load(&self, hourly_path: &Path, daily_path: &Path) -> Result<LoadedDataset> {
        self.load_with_progress(hourly_path, daily_path, None)
    }

    pub fn load_with_progress(
        &self,
        hourly_path: &Path,
        daily_path: &Path,
        progress: Option<&ProgressReporter>,
    ) -> Result<LoadedDataset> {
        if let Some(p) = progress {
            p.set_message(&format!("Reading {}", hourly_path.display()));
        }
        let hourly = self.hourly_reader.read_hourly(hourly_path)?;
        tracing::info!(path = %hourly_path.display(), rows = hourly.len(), "Loaded hourly table");

        if let Some(p) = progress {
            p.set_message(&format!("Reading {}", daily_path.display()));
        }
        let daily = self.daily_reader.read_daily(daily_path)?;
        tracing::info!(path = %daily_path.display(), rows = daily.len(), "Loaded daily table");

        let mut dataset = Dataset::new(hourly, daily);

        let integrity = self.checker.check_raw(&dataset);
        if !integrity.is_clean() {
            tracing::warn!(
                violations = integrity.violations.len(),
                "Dataset violates expected invariants"
            );
        }

        if let Some(p) = progress {
            p.set_message("Normalizing");
        }
        self.normalizer.normalize_hourly(&mut dataset.hourly);
        self.normalizer.sort_daily(&mut dataset.daily);

        Ok(LoadedDataset { dataset, integrity })
    }
}

impl Default for DatasetLoader {
    fn default() -> Self {
        Self::new()
    }
}

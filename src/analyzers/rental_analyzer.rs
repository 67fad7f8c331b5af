use crate::error::Result;
use crate::models::{DailyRecord, Dataset, DateRange, FilteredView, HourlyRecord};
use crate::processors::{rentals_by_season, seasons_by_total, SeasonTotal};
use crate::utils::format::{format_number, format_two_decimals};
use chrono::NaiveDate;
use serde::Serialize;

/// Means of the denormalized hourly fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnvironmentMetrics {
    pub avg_temp: f64,
    pub avg_atemp: f64,
    pub avg_hum: f64,
}

#[derive(Debug)]
pub struct DatasetStatistics {
    pub hourly_records: usize,
    pub daily_records: usize,
    pub date_range: Option<DateRange>,
    pub total_rentals: u64,
    pub busiest_day: Option<(NaiveDate, u64)>,
    pub quietest_day: Option<(NaiveDate, u64)>,
    pub seasons: Vec<SeasonTotal>,
    pub environment: Option<EnvironmentMetrics>,
}

pub struct RentalAnalyzer;

impl RentalAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn total_rentals(&self, daily: &[DailyRecord]) -> u64 {
        daily.iter().map(|r| r.cnt).sum()
    }

    /// Fails with `EmptySelection` when the view has no hourly rows.
    pub fn environment_metrics(&self, view: &FilteredView) -> Result<EnvironmentMetrics> {
        let hourly = view.require_hourly()?;
        Ok(mean_environment(hourly))
    }

    pub fn calculate_statistics(&self, dataset: &Dataset) -> DatasetStatistics {
        let busiest_day = dataset
            .daily
            .iter()
            .max_by_key(|r| r.cnt)
            .map(|r| (r.date, r.cnt));
        let quietest_day = dataset
            .daily
            .iter()
            .min_by_key(|r| r.cnt)
            .map(|r| (r.date, r.cnt));

        let environment = if dataset.hourly.is_empty() {
            None
        } else {
            Some(mean_environment(&dataset.hourly))
        };

        DatasetStatistics {
            hourly_records: dataset.hourly.len(),
            daily_records: dataset.daily.len(),
            date_range: dataset.date_span(),
            total_rentals: self.total_rentals(&dataset.daily),
            busiest_day,
            quietest_day,
            seasons: seasons_by_total(&rentals_by_season(&dataset.daily)),
            environment,
        }
    }
}

impl Default for RentalAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

fn mean_environment(hourly: &[HourlyRecord]) -> EnvironmentMetrics {
    let n = hourly.len() as f64;
    let (temp, atemp, hum) = hourly.iter().fold((0.0, 0.0, 0.0), |(t, a, h), r| {
        (t + r.temp, a + r.atemp, h + r.hum)
    });

    EnvironmentMetrics {
        avg_temp: temp / n,
        avg_atemp: atemp / n,
        avg_hum: hum / n,
    }
}

impl DatasetStatistics {
    pub fn summary(&self) -> String {
        let range = match self.date_range {
            Some(range) => format!("{} ({} days)", range, range.num_days()),
            None => "No records".to_string(),
        };

        let mut out = format!(
            "Dataset: bike rentals\n\
            Date Range: {}\n\
            Records: {} hourly, {} daily\n\
            Total Rentals: {}",
            range,
            self.hourly_records,
            self.daily_records,
            format_number(self.total_rentals)
        );

        if let Some((date, cnt)) = self.busiest_day {
            out.push_str(&format!("\nBusiest Day: {} ({})", date, format_number(cnt)));
        }
        if let Some((date, cnt)) = self.quietest_day {
            out.push_str(&format!("\nQuietest Day: {} ({})", date, format_number(cnt)));
        }

        out
    }

    pub fn detailed_summary(&self) -> String {
        let mut out = self.summary();

        out.push_str("\n\nRentals by Season:");
        for total in &self.seasons {
            out.push_str(&format!(
                "\n- {}: {}",
                total.season,
                format_number(total.total)
            ));
        }

        out.push_str("\n\nEnvironmental Averages:");
        match self.environment {
            Some(env) => out.push_str(&format!(
                "\n- Temperature: {}°C\n- Feels-like: {}°C\n- Humidity: {}%",
                format_two_decimals(env.avg_temp),
                format_two_decimals(env.avg_atemp),
                format_two_decimals(env.avg_hum)
            )),
            None => out.push_str("\n- No hourly measurements"),
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DashboardError;
    use crate::models::Season;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2012, 7, day).unwrap()
    }

    fn dataset() -> Dataset {
        Dataset::new(
            vec![
                HourlyRecord::with_derived_bucket(d(1), 8, Season::Summer, 20.0, 24.0, 50.0, 300),
                HourlyRecord::with_derived_bucket(d(1), 17, Season::Summer, 30.0, 34.0, 70.0, 500),
            ],
            vec![
                DailyRecord::new(d(1), Season::Summer, 6000),
                DailyRecord::new(d(2), Season::Summer, 7200),
                DailyRecord::new(d(3), Season::Summer, 1500),
            ],
        )
    }

    #[test]
    fn test_environment_metrics() {
        let data = dataset();
        let view = FilteredView {
            range: DateRange::new(d(1), d(3)),
            hourly: data.hourly.clone(),
            daily: data.daily.clone(),
        };

        let env = RentalAnalyzer::new().environment_metrics(&view).unwrap();
        assert_eq!(env.avg_temp, 25.0);
        assert_eq!(env.avg_atemp, 29.0);
        assert_eq!(env.avg_hum, 60.0);
    }

    #[test]
    fn test_environment_metrics_empty_selection() {
        let view = FilteredView::empty(DateRange::new(d(3), d(1)));
        let err = RentalAnalyzer::new().environment_metrics(&view).unwrap_err();
        assert!(matches!(err, DashboardError::EmptySelection { .. }));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_statistics_summary() {
        let stats = RentalAnalyzer::new().calculate_statistics(&dataset());

        assert_eq!(stats.total_rentals, 14700);
        assert_eq!(stats.busiest_day, Some((d(2), 7200)));
        assert_eq!(stats.quietest_day, Some((d(3), 1500)));

        let text = stats.detailed_summary();
        assert!(text.contains("Total Rentals: 14.700"));
        assert!(text.contains("- Summer: 14.700"));
        assert!(text.contains("Temperature: 25.00°C"));
    }
}

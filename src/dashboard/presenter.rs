use crate::analyzers::RentalAnalyzer;
use crate::dashboard::view::{
    Bar, BarPanel, DailyPoint, DashboardView, LinePanel, Metric, NO_DATA,
};
use crate::error::DashboardError;
use crate::models::FilteredView;
use crate::processors::{
    rentals_by_hour, rentals_by_season, rentals_by_time_of_day, seasons_by_total, top_hours,
};
use crate::utils::constants::DEFAULT_TOP_HOURS;
use crate::utils::format::{format_number, format_two_decimals};

pub const TITLE: &str = "Bike Rentals Dashboard 🚴";
pub const DESCRIPTION: &str = "This dashboard provides insights into bike rental data, \
including seasonal trends, hourly usage, and environmental factors like temperature and humidity.";

/// Builds the dashboard view for one filtered selection. Every call
/// recomputes all panels from scratch.
pub struct Presenter {
    analyzer: RentalAnalyzer,
    top_hours_limit: usize,
}

impl Presenter {
    pub fn new() -> Self {
        Self {
            analyzer: RentalAnalyzer::new(),
            top_hours_limit: DEFAULT_TOP_HOURS,
        }
    }

    pub fn with_top_hours(top_hours_limit: usize) -> Self {
        Self {
            analyzer: RentalAnalyzer::new(),
            top_hours_limit,
        }
    }

    pub fn top_hours_limit(&self) -> usize {
        self.top_hours_limit
    }

    pub fn present(&self, view: &FilteredView) -> DashboardView {
        let seasonal = self.seasonal_panel(view);
        let total_rentals = Metric::new(
            "Total Rentals",
            format_number(self.analyzer.total_rentals(&view.daily)),
        );
        let daily = self.daily_panel(view);
        let time_of_day = self.time_of_day_panel(view);
        let top_hours = self.top_hours_panel(view);

        let environment_values = match self.analyzer.environment_metrics(view) {
            Ok(metrics) => Some(metrics),
            Err(DashboardError::EmptySelection { start, end }) => {
                tracing::debug!(%start, %end, "No hourly rows selected");
                None
            }
            Err(e) => {
                tracing::warn!("Environmental metrics unavailable: {}", e);
                None
            }
        };

        let fmt = |value: Option<f64>| value.map(format_two_decimals).unwrap_or_else(|| NO_DATA.to_string());
        let environment = vec![
            Metric::new(
                "Average Temperature (°C)",
                fmt(environment_values.map(|m| m.avg_temp)),
            ),
            Metric::new(
                "Average Feeling Temperature (°C)",
                fmt(environment_values.map(|m| m.avg_atemp)),
            ),
            Metric::new(
                "Average Humidity (%)",
                fmt(environment_values.map(|m| m.avg_hum)),
            ),
        ];

        DashboardView {
            title: TITLE.to_string(),
            description: DESCRIPTION.to_string(),
            range: view.range,
            seasonal,
            total_rentals,
            daily,
            time_of_day,
            top_hours,
            environment,
            environment_values,
        }
    }

    fn seasonal_panel(&self, view: &FilteredView) -> BarPanel {
        let bars = seasons_by_total(&rentals_by_season(&view.daily))
            .into_iter()
            .map(|t| Bar {
                label: t.season.to_string(),
                value: t.total,
            })
            .collect();

        BarPanel {
            subheader: "Seasonal Rentals".to_string(),
            title: "Number of Rentals by Season".to_string(),
            x_label: "Season".to_string(),
            y_label: "Total Rentals".to_string(),
            bars,
        }
    }

    fn daily_panel(&self, view: &FilteredView) -> LinePanel {
        let points = view
            .daily
            .iter()
            .map(|r| DailyPoint {
                date: r.date,
                value: r.cnt,
            })
            .collect();

        LinePanel {
            subheader: "Daily Rentals".to_string(),
            title: "Daily Rentals Trend".to_string(),
            x_label: "Date".to_string(),
            y_label: "Total Rentals".to_string(),
            points,
        }
    }

    fn time_of_day_panel(&self, view: &FilteredView) -> BarPanel {
        let bars = rentals_by_time_of_day(&view.hourly)
            .into_iter()
            .map(|t| Bar {
                label: t.time_of_day.to_string(),
                value: t.total,
            })
            .collect();

        BarPanel {
            subheader: "Rentals by Time of Day".to_string(),
            title: "Number of Rentals by Time of Day".to_string(),
            x_label: "Time of Day".to_string(),
            y_label: "Total Rentals".to_string(),
            bars,
        }
    }

    fn top_hours_panel(&self, view: &FilteredView) -> BarPanel {
        let bars = top_hours(&rentals_by_hour(&view.hourly), self.top_hours_limit)
            .into_iter()
            .map(|t| Bar {
                label: t.hour.to_string(),
                value: t.total,
            })
            .collect();

        BarPanel {
            subheader: format!("Top {} Rental Hours", self.top_hours_limit),
            title: format!("Top {} Hours for Rentals", self.top_hours_limit),
            x_label: "Hour".to_string(),
            y_label: "Total Rentals".to_string(),
            bars,
        }
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}

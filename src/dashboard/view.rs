use chrono::NaiveDate;
use serde::Serialize;

use crate::analyzers::EnvironmentMetrics;
use crate::models::DateRange;

pub const NO_DATA: &str = "No data";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bar {
    pub label: String,
    pub value: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarPanel {
    pub subheader: String,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub bars: Vec<Bar>,
}

impl BarPanel {
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn max_value(&self) -> u64 {
        self.bars.iter().map(|b| b.value).max().unwrap_or(0)
    }

    pub fn labels(&self) -> Vec<&str> {
        self.bars.iter().map(|b| b.label.as_str()).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub value: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinePanel {
    pub subheader: String,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<DailyPoint>,
}

impl LinePanel {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn max_value(&self) -> u64 {
        self.points.iter().map(|p| p.value).max().unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metric {
    pub label: String,
    pub value: String,
}

impl Metric {
    pub fn new(label: &str, value: impl Into<String>) -> Self {
        Self {
            label: label.to_string(),
            value: value.into(),
        }
    }
}

/// Everything the dashboard shows for one date range, in display order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub title: String,
    pub description: String,
    pub range: DateRange,
    pub seasonal: BarPanel,
    pub total_rentals: Metric,
    pub daily: LinePanel,
    pub time_of_day: BarPanel,
    pub top_hours: BarPanel,
    pub environment: Vec<Metric>,
    pub environment_values: Option<EnvironmentMetrics>,
}

impl DashboardView {
    pub fn is_empty(&self) -> bool {
        self.seasonal.is_empty()
            && self.daily.is_empty()
            && self.time_of_day.is_empty()
            && self.top_hours.is_empty()
    }
}

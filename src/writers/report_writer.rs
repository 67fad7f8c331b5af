use crate::dashboard::view::{BarPanel, DashboardView, LinePanel, NO_DATA};
use crate::utils::format::format_number;

/// Plain-text rendering of a dashboard view for the terminal.
pub struct ReportWriter {
    bar_width: usize,
}

impl ReportWriter {
    pub fn new() -> Self {
        Self { bar_width: 40 }
    }

    pub fn with_bar_width(bar_width: usize) -> Self {
        Self {
            bar_width: bar_width.max(1),
        }
    }

    pub fn render(&self, view: &DashboardView) -> String {
        let mut out = format!(
            "{}\n{}\n{}\nSelected range: {}\n",
            view.title,
            underline(&view.title, '='),
            view.description,
            view.range
        );

        out.push_str(&self.bar_panel(&view.seasonal));
        out.push_str(&self.line_panel(&view.daily, &view.total_rentals.value));
        out.push_str(&self.bar_panel(&view.time_of_day));
        out.push_str(&self.bar_panel(&view.top_hours));

        out.push_str("\nEnvironmental Factors\n---------------------\n");
        for metric in &view.environment {
            out.push_str(&format!("{}: {}\n", metric.label, metric.value));
        }

        out
    }

    fn bar_panel(&self, panel: &BarPanel) -> String {
        let mut out = format!("\n{}\n{}\n", panel.subheader, underline(&panel.subheader, '-'));

        if panel.is_empty() {
            out.push_str(&format!("{}\n", NO_DATA));
            return out;
        }

        let max = panel.max_value();
        let label_width = panel
            .bars
            .iter()
            .map(|b| b.label.chars().count())
            .max()
            .unwrap_or(0);

        for bar in &panel.bars {
            out.push_str(&format!(
                "{:<width$} | {} {}\n",
                bar.label,
                self.bar(bar.value, max),
                format_number(bar.value),
                width = label_width
            ));
        }

        out
    }

    fn line_panel(&self, panel: &LinePanel, total: &str) -> String {
        let mut out = format!(
            "\n{}\n{}\nTotal Rentals: {}\n",
            panel.subheader,
            underline(&panel.subheader, '-'),
            total
        );

        let (Some(first), Some(last)) = (panel.points.first(), panel.points.last()) else {
            out.push_str(&format!("{}\n", NO_DATA));
            return out;
        };

        out.push_str(&format!(
            "Days: {} ({} to {})\n",
            panel.points.len(),
            first.date,
            last.date
        ));
        if let Some(peak) = panel.points.iter().max_by_key(|p| p.value) {
            out.push_str(&format!(
                "Peak: {} on {}\n",
                format_number(peak.value),
                peak.date
            ));
        }
        out.push_str(&format!("Trend: {}\n", self.sparkline(panel)));

        out
    }

    fn bar(&self, value: u64, max: u64) -> String {
        if max == 0 {
            return String::new();
        }
        let len = ((value as f64 / max as f64) * self.bar_width as f64).round() as usize;
        "#".repeat(len.max(usize::from(value > 0)))
    }

    /// Daily counts squeezed into at most `bar_width` columns.
    fn sparkline(&self, panel: &LinePanel) -> String {
        const LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

        let max = panel.max_value();
        if max == 0 {
            return LEVELS[0].to_string().repeat(panel.points.len().min(self.bar_width));
        }

        let chunk = panel.points.len().div_ceil(self.bar_width);
        panel
            .points
            .chunks(chunk)
            .map(|c| {
                let mean = c.iter().map(|p| p.value).sum::<u64>() as f64 / c.len() as f64;
                let idx = ((mean / max as f64) * (LEVELS.len() - 1) as f64).round() as usize;
                LEVELS[idx.min(LEVELS.len() - 1)]
            })
            .collect()
    }
}

fn underline(text: &str, ch: char) -> String {
    ch.to_string().repeat(text.chars().count())
}

impl Default for ReportWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::Presenter;
    use crate::models::{DailyRecord, DateRange, FilteredView, HourlyRecord, Season};
    use chrono::NaiveDate;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2011, 5, day).unwrap()
    }

    #[test]
    fn test_report_contains_all_sections_in_order() {
        let view = FilteredView {
            range: DateRange::new(d(1), d(2)),
            hourly: vec![
                HourlyRecord::with_derived_bucket(d(1), 8, Season::Spring, 15.0, 16.0, 60.0, 120),
                HourlyRecord::with_derived_bucket(d(1), 17, Season::Spring, 21.0, 22.0, 40.0, 380),
            ],
            daily: vec![
                DailyRecord::new(d(1), Season::Spring, 4200),
                DailyRecord::new(d(2), Season::Spring, 3900),
            ],
        };
        let dashboard = Presenter::new().present(&view);
        let report = ReportWriter::new().render(&dashboard);

        let sections = [
            "Seasonal Rentals",
            "Daily Rentals",
            "Rentals by Time of Day",
            "Top 5 Rental Hours",
            "Environmental Factors",
        ];
        let positions: Vec<usize> = sections
            .iter()
            .map(|s| report.find(s).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));

        assert!(report.contains("Total Rentals: 8.100"));
        assert!(report.contains("Peak: 4.200 on 2011-05-01"));
        assert!(report.contains("Average Temperature (°C): 18.00"));
    }

    #[test]
    fn test_empty_view_reports_no_data() {
        let empty = FilteredView::empty(DateRange::new(d(2), d(1)));
        let report = ReportWriter::new().render(&Presenter::new().present(&empty));

        assert!(report.contains("Total Rentals: 0"));
        assert_eq!(report.matches(NO_DATA).count(), 7);
    }

    #[test]
    fn test_bar_scaling() {
        let writer = ReportWriter::with_bar_width(10);
        assert_eq!(writer.bar(50, 100), "#####");
        assert_eq!(writer.bar(1, 1000), "#");
        assert_eq!(writer.bar(0, 100), "");
    }
}

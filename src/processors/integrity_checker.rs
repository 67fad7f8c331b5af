use crate::models::{Dataset, DateRange, HourlyRecord};
use crate::processors::normalizer::{ATEMP_RANGE, HUM_RANGE, TEMP_RANGE};
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashSet};
use validator::Validate;

#[derive(Debug, Clone, Default)]
pub struct IntegrityReport {
    pub hourly_records: usize,
    pub daily_records: usize,
    pub daily_span: Option<DateRange>,
    pub violations: Vec<Violation>,
}

#[derive(Debug, Clone)]
pub struct Violation {
    pub date: NaiveDate,
    pub violation_type: ViolationType,
    pub details: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ViolationType {
    InvalidHour,
    NotNormalized,
    OutOfPhysicalRange,
    OutsideDailySpan,
    DuplicateDay,
}

impl ViolationType {
    pub fn description(&self) -> &'static str {
        match self {
            ViolationType::InvalidHour => "hour outside 0-23",
            ViolationType::NotNormalized => "normalized field outside [0,1]",
            ViolationType::OutOfPhysicalRange => "value outside physical range",
            ViolationType::OutsideDailySpan => "hourly date outside daily span",
            ViolationType::DuplicateDay => "duplicate daily date",
        }
    }
}

impl IntegrityReport {
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn counts_by_type(&self) -> BTreeMap<ViolationType, usize> {
        let mut counts = BTreeMap::new();
        for violation in &self.violations {
            *counts.entry(violation.violation_type).or_insert(0) += 1;
        }
        counts
    }
}

/// Checks loaded tables against the data-model invariants. Violations are
/// reported, never fatal.
pub struct IntegrityChecker {
    max_details: usize,
}

impl IntegrityChecker {
    pub fn new() -> Self {
        Self { max_details: 10 }
    }

    pub fn with_max_details(max_details: usize) -> Self {
        Self { max_details }
    }

    /// Check freshly loaded tables, before normalization.
    pub fn check_raw(&self, dataset: &Dataset) -> IntegrityReport {
        let mut report = self.base_report(dataset);

        for record in &dataset.hourly {
            if record.validate().is_err() {
                report.violations.push(Violation {
                    date: record.date,
                    violation_type: ViolationType::InvalidHour,
                    details: format!("hour {}", record.hour),
                });
            }

            if !record.has_normalized_fields() {
                report.violations.push(Violation {
                    date: record.date,
                    violation_type: ViolationType::NotNormalized,
                    details: format!(
                        "hour {}: temp={}, atemp={}, hum={}",
                        record.hour, record.temp, record.atemp, record.hum
                    ),
                });
            }
        }

        self.check_spans(dataset, &mut report);
        report
    }

    /// Check the hourly table after denormalization.
    pub fn check_normalized(&self, dataset: &Dataset) -> IntegrityReport {
        let mut report = self.base_report(dataset);

        for record in &dataset.hourly {
            if let Some(details) = physical_range_violation(record) {
                report.violations.push(Violation {
                    date: record.date,
                    violation_type: ViolationType::OutOfPhysicalRange,
                    details,
                });
            }
        }

        report
    }

    pub fn generate_summary(&self, report: &IntegrityReport) -> String {
        let span = report
            .daily_span
            .map(|s| s.to_string())
            .unwrap_or_else(|| "empty".to_string());

        let mut summary = format!(
            "Data Integrity Report\n\
            =====================\n\
            Hourly records: {}\n\
            Daily records: {}\n\
            Daily span: {}\n",
            report.hourly_records, report.daily_records, span
        );

        if report.is_clean() {
            summary.push_str("No violations found\n");
            return summary;
        }

        summary.push_str(&format!("Violations: {}\n", report.violations.len()));
        for (violation_type, count) in report.counts_by_type() {
            summary.push_str(&format!("  - {}: {}\n", violation_type.description(), count));
        }

        summary.push_str("\nFirst violations:\n");
        for violation in report.violations.iter().take(self.max_details) {
            summary.push_str(&format!("  {} {}\n", violation.date, violation.details));
        }

        summary
    }

    fn base_report(&self, dataset: &Dataset) -> IntegrityReport {
        IntegrityReport {
            hourly_records: dataset.hourly.len(),
            daily_records: dataset.daily.len(),
            daily_span: dataset.date_span(),
            violations: Vec::new(),
        }
    }

    fn check_spans(&self, dataset: &Dataset, report: &mut IntegrityReport) {
        let mut seen = HashSet::with_capacity(dataset.daily.len());
        for record in &dataset.daily {
            if !seen.insert(record.date) {
                report.violations.push(Violation {
                    date: record.date,
                    violation_type: ViolationType::DuplicateDay,
                    details: format!("{} appears more than once", record.date),
                });
            }
        }

        let Some(span) = report.daily_span else {
            return;
        };

        // One violation per offending date, not per hour
        let mut reported = HashSet::new();
        for record in &dataset.hourly {
            if !span.contains(record.date) && reported.insert(record.date) {
                report.violations.push(Violation {
                    date: record.date,
                    violation_type: ViolationType::OutsideDailySpan,
                    details: format!("{} not in {}", record.date, span),
                });
            }
        }
    }
}

impl Default for IntegrityChecker {
    fn default() -> Self {
        Self::new()
    }
}

fn physical_range_violation(record: &HourlyRecord) -> Option<String> {
    let checks = [
        ("temp", record.temp, TEMP_RANGE),
        ("atemp", record.atemp, ATEMP_RANGE),
        ("hum", record.hum, HUM_RANGE),
    ];

    let failures: Vec<String> = checks
        .iter()
        .filter(|(_, value, range)| !range.contains(*value))
        .map(|(name, value, range)| format!("{}={:.2} not in [{}, {}]", name, value, range.lo, range.hi))
        .collect();

    if failures.is_empty() {
        None
    } else {
        Some(format!("hour {}: {}", record.hour, failures.join(", ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DailyRecord, Season};

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2011, 1, day).unwrap()
    }

    fn clean_dataset() -> Dataset {
        Dataset::new(
            vec![
                HourlyRecord::with_derived_bucket(d(1), 0, Season::Winter, 0.2, 0.3, 0.8, 16),
                HourlyRecord::with_derived_bucket(d(2), 13, Season::Winter, 0.4, 0.4, 0.6, 40),
            ],
            vec![
                DailyRecord::new(d(1), Season::Winter, 985),
                DailyRecord::new(d(2), Season::Winter, 801),
            ],
        )
    }

    #[test]
    fn test_clean_data_has_no_violations() {
        let checker = IntegrityChecker::new();
        let report = checker.check_raw(&clean_dataset());

        assert!(report.is_clean());
        assert_eq!(report.hourly_records, 2);
        assert!(checker.generate_summary(&report).contains("No violations found"));
    }

    #[test]
    fn test_detects_raw_violations() {
        let mut dataset = clean_dataset();
        dataset.hourly.push(HourlyRecord::with_derived_bucket(
            d(5),
            25,
            Season::Winter,
            1.4,
            0.3,
            0.5,
            3,
        ));
        dataset.daily.push(DailyRecord::new(d(2), Season::Winter, 1));

        let checker = IntegrityChecker::new();
        let report = checker.check_raw(&dataset);
        let counts = report.counts_by_type();

        assert_eq!(counts.get(&ViolationType::InvalidHour), Some(&1));
        assert_eq!(counts.get(&ViolationType::NotNormalized), Some(&1));
        assert_eq!(counts.get(&ViolationType::OutsideDailySpan), Some(&1));
        assert_eq!(counts.get(&ViolationType::DuplicateDay), Some(&1));
        assert!(checker.generate_summary(&report).contains("Violations: 4"));

        let brief = IntegrityChecker::with_max_details(1).generate_summary(&report);
        assert_eq!(brief.lines().filter(|l| l.starts_with("  2011-")).count(), 1);
    }

    #[test]
    fn test_physical_range_after_normalization() {
        let mut dataset = clean_dataset();
        dataset.hourly[0].temp = 12.0;
        dataset.hourly[0].atemp = 14.0;
        dataset.hourly[0].hum = 80.0;
        dataset.hourly[1].temp = 45.0;
        dataset.hourly[1].atemp = 20.0;
        dataset.hourly[1].hum = 60.0;

        let report = IntegrityChecker::new().check_normalized(&dataset);

        assert_eq!(report.violations.len(), 1);
        assert_eq!(report.violations[0].violation_type, ViolationType::OutOfPhysicalRange);
        assert!(report.violations[0].details.contains("temp=45.00"));
    }
}

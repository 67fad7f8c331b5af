use crate::models::{DailyRecord, HourlyRecord};
use crate::utils::constants::{
    ATEMP_MAX_C, ATEMP_MIN_C, HUM_MAX_PCT, HUM_MIN_PCT, TEMP_MAX_C, TEMP_MIN_C,
};

/// Map a [0,1] encoded value back onto its physical range.
pub fn denormalize(value: f64, lo: f64, hi: f64) -> f64 {
    value * (hi - lo) + lo
}

/// Physical range of one hourly column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalRange {
    pub lo: f64,
    pub hi: f64,
}

impl PhysicalRange {
    pub const fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.lo..=self.hi).contains(&value)
    }
}

pub const TEMP_RANGE: PhysicalRange = PhysicalRange::new(TEMP_MIN_C, TEMP_MAX_C);
pub const ATEMP_RANGE: PhysicalRange = PhysicalRange::new(ATEMP_MIN_C, ATEMP_MAX_C);
pub const HUM_RANGE: PhysicalRange = PhysicalRange::new(HUM_MIN_PCT, HUM_MAX_PCT);

/// Converts the hourly temperature, feels-like temperature and humidity
/// columns to °C / % and puts the daily table in date order.
///
/// Each column is first min-max rescaled by its own observed range and only
/// then mapped onto the fixed physical range. For data that already spans
/// [0,1] the first step is the identity; for anything narrower the absolute
/// scale is lost (a column observed over [0.2, 0.8] ends up covering the
/// full physical range). The arithmetic matches the published dashboard
/// numbers, so it is kept as is.
///
/// One deliberate departure: a constant column (observed min equals max)
/// would divide 0 by 0 and come out as NaN under that arithmetic. Here it
/// maps to the lower bound of the physical range instead.
pub struct Normalizer {
    temp: PhysicalRange,
    atemp: PhysicalRange,
    hum: PhysicalRange,
}

impl Normalizer {
    pub fn new() -> Self {
        Self {
            temp: TEMP_RANGE,
            atemp: ATEMP_RANGE,
            hum: HUM_RANGE,
        }
    }

    pub fn with_ranges(temp: PhysicalRange, atemp: PhysicalRange, hum: PhysicalRange) -> Self {
        Self { temp, atemp, hum }
    }

    pub fn normalize_hourly(&self, records: &mut [HourlyRecord]) {
        if records.is_empty() {
            return;
        }

        rescale_column(records, |r| &mut r.temp, self.temp);
        rescale_column(records, |r| &mut r.atemp, self.atemp);
        rescale_column(records, |r| &mut r.hum, self.hum);

        tracing::debug!(rows = records.len(), "Denormalized hourly temperature and humidity");
    }

    /// Stable ascending sort by date.
    pub fn sort_daily(&self, records: &mut [DailyRecord]) {
        records.sort_by_key(|r| r.date);
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

fn rescale_column<F>(records: &mut [HourlyRecord], mut field: F, range: PhysicalRange)
where
    F: FnMut(&mut HourlyRecord) -> &mut f64,
{
    let (min, max) = records
        .iter_mut()
        .map(|r| *field(r))
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    let span = max - min;

    for record in records.iter_mut() {
        let value = field(record);
        // A constant column has no span to divide by; it lands on `lo`.
        let unit = if span > 0.0 { (*value - min) / span } else { 0.0 };
        *value = denormalize(unit, range.lo, range.hi);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Season;
    use chrono::NaiveDate;

    fn hourly(temp: f64, atemp: f64, hum: f64) -> HourlyRecord {
        let date = NaiveDate::from_ymd_opt(2011, 1, 1).unwrap();
        HourlyRecord::with_derived_bucket(date, 12, Season::Winter, temp, atemp, hum, 1)
    }

    #[test]
    fn test_denormalize_literal() {
        assert_eq!(denormalize(0.5, -8.0, 39.0), 15.5);
        assert_eq!(denormalize(0.0, -16.0, 50.0), -16.0);
        assert_eq!(denormalize(1.0, 0.0, 100.0), 100.0);
    }

    #[test]
    fn test_full_span_column_maps_to_physical_range() {
        let mut records = vec![hourly(0.0, 0.0, 0.0), hourly(0.5, 0.5, 0.5), hourly(1.0, 1.0, 1.0)];
        Normalizer::new().normalize_hourly(&mut records);

        assert_eq!(records[0].temp, -8.0);
        assert_eq!(records[1].temp, 15.5);
        assert_eq!(records[2].temp, 39.0);
        assert_eq!(records[1].atemp, 17.0);
        assert_eq!(records[2].hum, 100.0);
        assert!(records.iter().all(|r| TEMP_RANGE.contains(r.temp)
            && ATEMP_RANGE.contains(r.atemp)
            && HUM_RANGE.contains(r.hum)));
    }

    #[test]
    fn test_narrow_column_is_stretched_by_observed_range() {
        let mut records = vec![hourly(0.2, 0.2, 0.2), hourly(0.8, 0.8, 0.8)];
        Normalizer::new().normalize_hourly(&mut records);

        assert_eq!(records[0].temp, -8.0);
        assert_eq!(records[1].temp, 39.0);
        assert_eq!(records[0].hum, 0.0);
        assert_eq!(records[1].hum, 100.0);
    }

    #[test]
    fn test_constant_column_maps_to_lower_bound() {
        let mut records = vec![hourly(0.4, 0.4, 0.4), hourly(0.4, 0.4, 0.4)];
        Normalizer::new().normalize_hourly(&mut records);

        assert!(records.iter().all(|r| r.temp == -8.0 && r.atemp == -16.0 && r.hum == 0.0));
    }

    #[test]
    fn test_custom_ranges() {
        let unit = PhysicalRange::new(0.0, 10.0);
        let mut records = vec![hourly(0.0, 0.0, 0.0), hourly(1.0, 1.0, 1.0)];
        Normalizer::with_ranges(unit, unit, unit).normalize_hourly(&mut records);

        assert_eq!(records[1].temp, 10.0);
        assert_eq!(records[1].hum, 10.0);
    }

    #[test]
    fn test_sort_daily() {
        let d = |day| NaiveDate::from_ymd_opt(2011, 1, day).unwrap();
        let mut daily = vec![
            DailyRecord::new(d(3), Season::Winter, 3),
            DailyRecord::new(d(1), Season::Winter, 1),
            DailyRecord::new(d(2), Season::Winter, 2),
        ];
        Normalizer::new().sort_daily(&mut daily);

        let counts: Vec<u64> = daily.iter().map(|r| r.cnt).collect();
        assert_eq!(counts, vec![1, 2, 3]);
    }
}

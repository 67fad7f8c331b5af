use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{Season, TimeOfDay};

/// One hour of rentals. `temp`, `atemp` and `hum` hold the stored [0,1]
/// encoding until the normalizer has run, physical units afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct HourlyRecord {
    pub date: NaiveDate,

    #[validate(range(min = 0, max = 23))]
    pub hour: u8,

    pub time_of_day: TimeOfDay,
    pub season: Season,
    pub temp: f64,
    pub atemp: f64,
    pub hum: f64,
    pub cnt: u64,
}

impl HourlyRecord {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        date: NaiveDate,
        hour: u8,
        time_of_day: TimeOfDay,
        season: Season,
        temp: f64,
        atemp: f64,
        hum: f64,
        cnt: u64,
    ) -> Self {
        Self {
            date,
            hour,
            time_of_day,
            season,
            temp,
            atemp,
            hum,
            cnt,
        }
    }

    /// Record whose bucket is derived from the hour.
    pub fn with_derived_bucket(
        date: NaiveDate,
        hour: u8,
        season: Season,
        temp: f64,
        atemp: f64,
        hum: f64,
        cnt: u64,
    ) -> Self {
        Self::new(
            date,
            hour,
            TimeOfDay::from_hour(hour),
            season,
            temp,
            atemp,
            hum,
            cnt,
        )
    }

    pub fn has_normalized_fields(&self) -> bool {
        [self.temp, self.atemp, self.hum]
            .iter()
            .all(|v| (0.0..=1.0).contains(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hour_validation() {
        let date = NaiveDate::from_ymd_opt(2011, 1, 1).unwrap();

        let valid = HourlyRecord::with_derived_bucket(date, 8, Season::Winter, 0.24, 0.29, 0.81, 16);
        assert!(valid.validate().is_ok());
        assert_eq!(valid.time_of_day, TimeOfDay::Morning);
        assert!(valid.has_normalized_fields());

        let invalid = HourlyRecord::with_derived_bucket(date, 24, Season::Winter, 0.24, 0.29, 1.2, 16);
        assert!(invalid.validate().is_err());
        assert!(!invalid.has_normalized_fields());
    }
}

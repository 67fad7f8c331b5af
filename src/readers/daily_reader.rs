use crate::error::{DashboardError, Result};
use crate::models::{DailyRecord, Season};
use crate::utils::dates::deserialize_date;
use chrono::NaiveDate;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct DailyRow {
    #[serde(rename = "dteday", deserialize_with = "deserialize_date")]
    date: NaiveDate,
    season: Season,
    cnt: u64,
}

pub struct DailyReader {
    delimiter: u8,
}

impl DailyReader {
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    pub fn with_delimiter(delimiter: u8) -> Self {
        Self { delimiter }
    }

    /// Read the daily table in file order.
    pub fn read_daily(&self, path: &Path) -> Result<Vec<DailyRecord>> {
        let file = std::fs::File::open(path).map_err(|e| DashboardError::data_load(path, e))?;
        self.read_from(file)
            .map_err(|e| DashboardError::data_load(path, e))
    }

    pub fn read_from<R: Read>(&self, input: R) -> Result<Vec<DailyRecord>> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(csv::Trim::All)
            .from_reader(input);

        reader
            .deserialize::<DailyRow>()
            .map(|row| {
                let row = row?;
                Ok(DailyRecord::new(row.date, row.season, row.cnt))
            })
            .collect()
    }
}

impl Default for DailyReader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_daily() {
        let csv = "\
instant,dteday,season,yr,mnth,holiday,weekday,workingday,weathersit,temp,atemp,hum,windspeed,casual,registered,cnt
2,2011-01-02,Winter,0,1,0,0,0,2,0.36,0.35,0.69,0.24,131,670,801
1,2011-01-01,Winter,0,1,0,6,0,2,0.34,0.36,0.8,0.16,331,654,985
";
        let records = DailyReader::new().read_from(csv.as_bytes()).unwrap();

        assert_eq!(records.len(), 2);
        // File order is preserved; sorting is the normalizer's job
        assert_eq!(records[0].date, NaiveDate::from_ymd_opt(2011, 1, 2).unwrap());
        assert_eq!(records[1].cnt, 985);
    }

    #[test]
    fn test_semicolon_delimiter() {
        let csv = "dteday;season;cnt\n2012-06-01;Summer;5000\n";
        let records = DailyReader::with_delimiter(b';')
            .read_from(csv.as_bytes())
            .unwrap();
        assert_eq!(records[0].season, Season::Summer);
    }

    #[test]
    fn test_bad_date_fails() {
        let csv = "dteday,season,cnt\nnot-a-date,Summer,5000\n";
        assert!(DailyReader::new().read_from(csv.as_bytes()).is_err());
    }
}

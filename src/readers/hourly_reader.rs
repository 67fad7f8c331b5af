use crate::error::{DashboardError, Result};
use crate::models::{HourlyRecord, Season, TimeOfDay};
use crate::utils::dates::deserialize_date;
use chrono::NaiveDate;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

/// Columns of `hour_cleaned_df.csv` that the dashboard uses. Other columns
/// are ignored.
#[derive(Debug, Deserialize)]
struct HourlyRow {
    #[serde(rename = "dteday", deserialize_with = "deserialize_date")]
    date: NaiveDate,
    season: Season,
    hr: u8,
    #[serde(rename = "Time", default)]
    time: Option<TimeOfDay>,
    temp: f64,
    atemp: f64,
    hum: f64,
    cnt: u64,
}

impl From<HourlyRow> for HourlyRecord {
    fn from(row: HourlyRow) -> Self {
        let time_of_day = row.time.unwrap_or_else(|| TimeOfDay::from_hour(row.hr));
        HourlyRecord::new(
            row.date,
            row.hr,
            time_of_day,
            row.season,
            row.temp,
            row.atemp,
            row.hum,
            row.cnt,
        )
    }
}

pub struct HourlyReader {
    delimiter: u8,
}

impl HourlyReader {
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    pub fn with_delimiter(delimiter: u8) -> Self {
        Self { delimiter }
    }

    /// Read the hourly table. Any unreadable row fails the whole load.
    pub fn read_hourly(&self, path: &Path) -> Result<Vec<HourlyRecord>> {
        let file = std::fs::File::open(path).map_err(|e| DashboardError::data_load(path, e))?;
        self.read_from(file)
            .map_err(|e| DashboardError::data_load(path, e))
    }

    pub fn read_from<R: Read>(&self, input: R) -> Result<Vec<HourlyRecord>> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(csv::Trim::All)
            .from_reader(input);

        let mut records = Vec::new();
        for row in reader.deserialize::<HourlyRow>() {
            records.push(HourlyRecord::from(row?));
        }

        Ok(records)
    }
}

impl Default for HourlyReader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HOURLY_CSV: &str = "\
instant,dteday,season,yr,mnth,hr,holiday,weekday,workingday,weathersit,temp,atemp,hum,windspeed,casual,registered,cnt,Time
1,2011-01-01,Winter,0,1,0,0,6,0,1,0.24,0.2879,0.81,0.0,3,13,16,Evening
2,2011-01-01,Winter,0,1,9,0,6,0,1,0.32,0.3485,0.76,0.0,8,6,14,Morning
";

    #[test]
    fn test_read_hourly_with_time_column() {
        let reader = HourlyReader::new();
        let records = reader.read_from(HOURLY_CSV.as_bytes()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].date, NaiveDate::from_ymd_opt(2011, 1, 1).unwrap());
        assert_eq!(records[0].season, Season::Winter);
        assert_eq!(records[0].time_of_day, TimeOfDay::Evening);
        assert_eq!(records[1].hour, 9);
        assert_eq!(records[1].cnt, 14);
        assert_eq!(records[1].hum, 0.76);
    }

    #[test]
    fn test_read_hourly_derives_bucket_without_time_column() {
        let csv = "dteday,season,hr,temp,atemp,hum,cnt\n2011-01-01,1,13,0.5,0.5,0.5,40\n";
        let records = HourlyReader::new().read_from(csv.as_bytes()).unwrap();

        assert_eq!(records[0].season, Season::Spring);
        assert_eq!(records[0].time_of_day, TimeOfDay::Day);
    }

    #[test]
    fn test_semicolon_delimiter() {
        let csv = "dteday;season;hr;temp;atemp;hum;cnt\n2012-06-01;Summer;18;0.7;0.6;0.4;512\n";
        let records = HourlyReader::with_delimiter(b';')
            .read_from(csv.as_bytes())
            .unwrap();

        assert_eq!(records[0].hour, 18);
        assert_eq!(records[0].time_of_day, TimeOfDay::Afternoon);
        assert_eq!(records[0].cnt, 512);
    }

    #[test]
    fn test_malformed_row_is_a_load_error() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "dteday,season,hr,temp,atemp,hum,cnt")?;
        writeln!(file, "2011-01-01,Winter,three,0.5,0.5,0.5,40")?;

        let err = HourlyReader::new().read_hourly(file.path()).unwrap_err();
        assert!(matches!(err, DashboardError::DataLoad { .. }));
        Ok(())
    }

    #[test]
    fn test_missing_file_is_a_load_error() {
        let err = HourlyReader::new()
            .read_hourly(Path::new("/nonexistent/hour.csv"))
            .unwrap_err();
        assert!(err.to_string().contains("/nonexistent/hour.csv"));
    }
}

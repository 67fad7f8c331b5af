use chrono::{NaiveDate, NaiveDateTime};

use crate::error::Result;
use crate::utils::constants::{DATETIME_FORMAT, DATE_FORMAT};

/// Parse a `dteday` value. Timestamps are truncated to their date.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    let value = value.trim();
    let date = NaiveDate::parse_from_str(value, DATE_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(value, DATETIME_FORMAT).map(|dt| dt.date()))?;
    Ok(date)
}

/// serde adapter for CSV date columns
pub fn deserialize_date<'de, D>(deserializer: D) -> std::result::Result<NaiveDate, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
    parse_date(&raw).map_err(serde::de::Error::custom)
}

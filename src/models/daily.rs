use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Season;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub season: Season,
    pub cnt: u64,
}

impl DailyRecord {
    pub fn new(date: NaiveDate, season: Season, cnt: u64) -> Self {
        Self { date, season, cnt }
    }
}

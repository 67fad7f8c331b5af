use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::{DailyRecord, HourlyRecord, Season, TimeOfDay};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeasonTotal {
    pub season: Season,
    pub total: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HourTotal {
    pub hour: u8,
    pub total: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeOfDayTotal {
    pub time_of_day: TimeOfDay,
    pub total: u64,
}

/// Sum `count` per distinct `key`, one entry per key present in `rows`, in
/// key order. Keys without rows are absent rather than zero.
pub fn sum_by_key<T, K, FK, FC>(rows: &[T], key: FK, count: FC) -> Vec<(K, u64)>
where
    K: Ord,
    FK: Fn(&T) -> K,
    FC: Fn(&T) -> u64,
{
    let mut totals: BTreeMap<K, u64> = BTreeMap::new();
    for row in rows {
        *totals.entry(key(row)).or_insert(0) += count(row);
    }
    totals.into_iter().collect()
}

pub fn rentals_by_season(records: &[DailyRecord]) -> Vec<SeasonTotal> {
    sum_by_key(records, |r| r.season, |r| r.cnt)
        .into_iter()
        .map(|(season, total)| SeasonTotal { season, total })
        .collect()
}

pub fn rentals_by_hour(records: &[HourlyRecord]) -> Vec<HourTotal> {
    sum_by_key(records, |r| r.hour, |r| r.cnt)
        .into_iter()
        .map(|(hour, total)| HourTotal { hour, total })
        .collect()
}

/// Totals in Morning, Day, Afternoon, Evening order.
pub fn rentals_by_time_of_day(records: &[HourlyRecord]) -> Vec<TimeOfDayTotal> {
    sum_by_key(records, |r| r.time_of_day, |r| r.cnt)
        .into_iter()
        .map(|(time_of_day, total)| TimeOfDayTotal { time_of_day, total })
        .collect()
}

/// The `n` busiest hours, highest total first; ties go to the earlier hour.
pub fn top_hours(totals: &[HourTotal], n: usize) -> Vec<HourTotal> {
    let mut ranked = totals.to_vec();
    ranked.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.hour.cmp(&b.hour)));
    ranked.truncate(n);
    ranked
}

/// Season totals, highest first.
pub fn seasons_by_total(totals: &[SeasonTotal]) -> Vec<SeasonTotal> {
    let mut ranked = totals.to_vec();
    ranked.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.season.cmp(&b.season)));
    ranked
}

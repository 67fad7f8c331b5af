pub mod aggregator;
pub mod integrity_checker;
pub mod normalizer;
pub mod range_filter;

pub use aggregator::{
    rentals_by_hour, rentals_by_season, rentals_by_time_of_day, seasons_by_total, top_hours,
    HourTotal, SeasonTotal, TimeOfDayTotal,
};
pub use integrity_checker::{IntegrityChecker, IntegrityReport, ViolationType};
pub use normalizer::{denormalize, Normalizer, PhysicalRange};
pub use range_filter::RangeFilter;

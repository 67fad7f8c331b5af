pub mod daily;
pub mod dataset;
pub mod hourly;
pub mod season;

pub use daily::DailyRecord;
pub use dataset::{Dataset, DateRange, FilteredView};
pub use hourly::HourlyRecord;
pub use season::{Season, TimeOfDay};

pub mod daily_reader;
pub mod dataset_loader;
pub mod hourly_reader;

pub use daily_reader::DailyReader;
pub use dataset_loader::{DatasetLoader, LoadedDataset};
pub use hourly_reader::HourlyReader;

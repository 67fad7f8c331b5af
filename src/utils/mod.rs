pub mod constants;
pub mod dates;
pub mod format;
pub mod logging;
pub mod progress;

pub use constants::*;
pub use dates::parse_date;
pub use format::{format_number, format_two_decimals};
pub use logging::init_logging;
pub use progress::ProgressReporter;

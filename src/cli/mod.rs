pub mod args;
pub mod commands;
pub mod interactive;

pub use args::{Cli, Commands, DataArgs, OutputFormat};
pub use commands::run;
pub use interactive::run_interactive;

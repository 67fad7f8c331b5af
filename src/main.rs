use anyhow::Context;
use bikeshare_dashboard::cli::{run, Cli};
use bikeshare_dashboard::utils::init_logging;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.log_file.as_deref()).context("Failed to initialize logging")?;

    run(cli)?;
    Ok(())
}

use std::io::{self, Write};

use crate::analyzers::RentalAnalyzer;
use crate::cli::args::{Cli, Commands, OutputFormat};
use crate::cli::interactive::run_interactive;
use crate::config::{ConfigOverrides, DashboardConfig};
use crate::dashboard::{DashboardSession, DashboardView, Presenter};
use crate::error::Result;
use crate::models::DateRange;
use crate::processors::IntegrityChecker;
use crate::readers::{DatasetLoader, LoadedDataset};
use crate::utils::progress::ProgressReporter;
use crate::writers::{ChartWriter, ReportWriter};

pub fn run(cli: Cli) -> Result<()> {
    let config = DashboardConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Render {
            data,
            start,
            end,
            output_dir,
            format,
            top_hours,
            no_charts,
        } => {
            let config = config.with_overrides(ConfigOverrides {
                output_dir,
                top_hours,
                no_charts,
                ..data.overrides()
            })?;

            let loaded = load_dataset(&config, format)?;
            let mut session = open_session(loaded, &config)?;

            let bounds = session.bounds();
            let range = DateRange::new(start.unwrap_or(bounds.start), end.unwrap_or(bounds.end));
            let view = session.set_range(range);

            let stdout = io::stdout();
            write_view(&mut stdout.lock(), view, format)?;

            if config.output.charts {
                let writer =
                    ChartWriter::with_size(config.output.chart_width, config.output.chart_height);
                let written = writer.write_all(view, &config.output.dir)?;
                if format == OutputFormat::Text {
                    println!(
                        "\nWrote {} charts to {}",
                        written.len(),
                        config.output.dir.display()
                    );
                }
            }
        }

        Commands::Info { data } => {
            let config = config.with_overrides(data.overrides())?;
            let loaded = load_dataset(&config, OutputFormat::Text)?;

            let stats = RentalAnalyzer::new().calculate_statistics(&loaded.dataset);
            println!("{}", stats.detailed_summary());

            let checker = IntegrityChecker::new();
            println!("\nRaw data checks:");
            println!("{}", checker.generate_summary(&loaded.integrity));

            let normalized = checker.check_normalized(&loaded.dataset);
            println!("\nAfter denormalization:");
            println!("{}", checker.generate_summary(&normalized));
        }

        Commands::Interactive { data, format } => {
            let config = config.with_overrides(data.overrides())?;
            let loaded = load_dataset(&config, format)?;
            let mut session = open_session(loaded, &config)?;

            let stdout = io::stdout();
            let mut out = stdout.lock();
            write_view(&mut out, session.view(), format)?;

            let stdin = io::stdin();
            let applied = run_interactive(&mut session, stdin.lock(), &mut out, format)?;
            tracing::info!(applied, "Interactive session finished");
        }
    }

    Ok(())
}

/// Print a view in the requested format.
pub fn write_view<W: Write>(out: &mut W, view: &DashboardView, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => write!(out, "{}", ReportWriter::new().render(view))?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(view)?)?,
    }
    out.flush()?;
    Ok(())
}

fn load_dataset(config: &DashboardConfig, format: OutputFormat) -> Result<LoadedDataset> {
    // Keep stderr quiet when stdout is meant for a JSON consumer.
    let progress = ProgressReporter::new_spinner("Loading data...", format == OutputFormat::Json);

    let loaded = DatasetLoader::new().load_with_progress(
        &config.data.hourly_path,
        &config.data.daily_path,
        Some(&progress),
    )?;

    progress.finish_with_message(&format!(
        "Loaded {} hourly and {} daily records",
        loaded.dataset.hourly.len(),
        loaded.dataset.daily.len()
    ));

    Ok(loaded)
}

fn open_session(loaded: LoadedDataset, config: &DashboardConfig) -> Result<DashboardSession> {
    DashboardSession::open(loaded.dataset, Presenter::with_top_hours(config.top_hours))
}

use clap::Parser;

use paintcalc::cli::commands;
use paintcalc::cli::{Cli, Commands};
use paintcalc::io::ExitCode;
use paintcalc::{EstimateOptions, PaintError, Settings, debug_event, log_event, logging};

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    };
    let settings = match loaded {
        Ok(settings) => settings,
        Err(e) => return report_error(&PaintError::from(e)).into(),
    };

    logging::init_with_config(&settings.logging);
    debug_event!("config", "loaded", "version {}", settings.version);

    let code = match cli.resolved_command() {
        Commands::Init { force } => {
            let path = cli.config.clone().unwrap_or_else(Settings::default_config_path);
            commands::init::run_init(&path, force)
        }
        Commands::Config => commands::init::run_config(&settings),
        Commands::Catalog => match settings.catalog() {
            Ok(catalog) => {
                commands::catalog::run(&catalog);
                ExitCode::Success
            }
            Err(e) => report_error(&PaintError::from(e)),
        },
        Commands::Estimate { paint, size } => {
            let options = EstimateOptions {
                clamp_negative_area: settings.estimate.clamp_negative_area,
                paint,
                size,
            };
            let result = settings
                .catalog()
                .map_err(PaintError::from)
                .and_then(|catalog| {
                    log_event!("catalog", "loaded", "{} paints", catalog.len());
                    commands::estimate::run(&catalog, &options)
                });
            match result {
                Ok(()) => ExitCode::Success,
                Err(e) => report_error(&e),
            }
        }
    };

    code.into()
}

fn report_error(error: &PaintError) -> ExitCode {
    eprintln!("\nError: {error}");
    ExitCode::from(error)
}

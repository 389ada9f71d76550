//! CLI argument parsing using clap.
//!
//! Contains the Cli struct and the Commands enum.

use clap::{
    Parser, Subcommand,
    builder::styling::{AnsiColor, Effects, Styles},
};
use std::path::PathBuf;

fn clap_cargo_style() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default())
}

/// Paint and can calculator
#[derive(Parser, Debug)]
#[command(
    name = "paintcalc",
    version = env!("CARGO_PKG_VERSION"),
    about = "Work out how much paint, and which cans, a set of walls needs",
    long_about = "Measure walls and obstructions interactively, pick a paint and a can size, \
                  and get the litres and cans required.",
    styles = clap_cargo_style(),
    after_help = "Examples:\n  paintcalc\n  paintcalc estimate --paint 2 --size auto\n  paintcalc catalog\n  paintcalc --config ./settings.toml estimate"
)]
pub struct Cli {
    /// Path to custom settings.toml file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Defaults to `estimate` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Run an interactive estimate
    #[command(about = "Measure walls and work out the paint and cans needed")]
    Estimate {
        /// Paint to use, by its number in `paintcalc catalog`
        #[arg(short, long, value_name = "NUMBER")]
        paint: Option<usize>,

        /// Can size in litres, or `auto` for the fewest cans
        #[arg(short, long, value_name = "LITRES|auto")]
        size: Option<String>,
    },

    /// List the configured paints
    #[command(about = "Show available paints, coverage and can sizes")]
    Catalog,

    /// Write a default configuration file
    #[command(about = "Set up .paintcalc directory with default configuration")]
    Init {
        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Show current configuration settings
    #[command(about = "Display active settings")]
    Config,
}

impl Cli {
    /// The command to run, treating a bare invocation as `estimate`.
    pub fn resolved_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Estimate {
            paint: None,
            size: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_bare_invocation_estimates() {
        let cli = Cli::parse_from(["paintcalc"]);
        assert_eq!(
            cli.resolved_command(),
            Commands::Estimate {
                paint: None,
                size: None
            }
        );
    }

    #[test]
    fn test_estimate_presets() {
        let cli = Cli::parse_from(["paintcalc", "estimate", "--paint", "2", "--size", "auto"]);
        assert_eq!(
            cli.resolved_command(),
            Commands::Estimate {
                paint: Some(2),
                size: Some("auto".to_string())
            }
        );
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::parse_from(["paintcalc", "catalog", "--config", "custom.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        assert_eq!(cli.resolved_command(), Commands::Catalog);
    }
}

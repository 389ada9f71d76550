//! Init and Config commands: write the stock settings, show the merged ones.

use std::path::Path;

use crate::config::Settings;
use crate::io::ExitCode;

/// Run init command - write the stock catalog to `config_path`.
pub fn run_init(config_path: &Path, force: bool) -> ExitCode {
    match init_settings(config_path, force) {
        Ok(summary) => {
            println!("{summary}");
            ExitCode::Success
        }
        Err(message) => {
            eprintln!("{message}");
            ExitCode::GeneralError
        }
    }
}

/// Write default settings to `config_path` and describe the paints they list.
///
/// Refuses to replace an existing file unless `force` is set.
pub fn init_settings(config_path: &Path, force: bool) -> Result<String, String> {
    if config_path.exists() && !force {
        return Err(format!(
            "{} already holds paintcalc settings.\n\
             Run `paintcalc init --force` to reset it to the stock catalog.",
            config_path.display()
        ));
    }

    let path = Settings::init_config_file(config_path, force)
        .map_err(|e| format!("Could not write {}: {e}", config_path.display()))?;

    let paints: Vec<_> = Settings::default()
        .catalog
        .iter()
        .map(|product| product.name.clone())
        .collect();
    Ok(format!(
        "Wrote default settings to {}\n\
         Stock paints: {}\n\
         Edit the [[catalog]] entries to change coverage or can sizes, then check them with `paintcalc catalog`.",
        path.display(),
        paints.join(", ")
    ))
}

/// Settings as TOML, headed by a comment naming where values come from.
pub fn render_config(settings: &Settings) -> Result<String, toml::ser::Error> {
    let body = toml::to_string_pretty(settings)?;
    Ok(format!(
        "# Active paintcalc settings: defaults, then the settings file, then PAINTCALC_* variables\n\n{body}"
    ))
}

/// Run config command - print the merged settings.
pub fn run_config(settings: &Settings) -> ExitCode {
    match render_config(settings) {
        Ok(rendered) => {
            println!("{rendered}");
            ExitCode::Success
        }
        Err(e) => {
            eprintln!("Could not render settings: {e}");
            ExitCode::GeneralError
        }
    }
}

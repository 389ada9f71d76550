//! Configuration for the paint calculator.
//!
//! Settings are layered:
//! - Built-in defaults (including the stock paint catalog)
//! - TOML configuration file (`.paintcalc/settings.toml`, or `--config <path>`)
//! - Environment variable overrides
//!
//! # Environment Variables
//!
//! Environment variables must be prefixed with `PAINTCALC_` and use double
//! underscores to separate nested levels:
//! - `PAINTCALC_ESTIMATE__CLAMP_NEGATIVE_AREA=true` sets `estimate.clamp_negative_area`
//! - `PAINTCALC_LOGGING__DEFAULT=debug` sets `logging.default`
//!
//! # Catalog
//!
//! ```toml
//! [[catalog]]
//! name = "Foo Green"
//! coverage = 6.0
//! sizes = [0.5, 1.0, 2.5, 5.0]
//! ```
//!
//! A `[[catalog]]` list in the file replaces the built-in catalog entirely.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, PaintProduct, default_products};
use crate::error::CatalogError;

pub const CONFIG_DIR: &str = ".paintcalc";
pub const CONFIG_FILE: &str = "settings.toml";
const ENV_PREFIX: &str = "PAINTCALC_";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Settings {
    /// Version of the configuration schema
    #[serde(default = "default_version")]
    pub version: u32,

    /// Log output settings
    #[serde(default)]
    pub logging: LoggingConfig,

    /// How estimates are calculated
    #[serde(default)]
    pub estimate: EstimateConfig,

    /// Paints offered for selection, in menu order
    #[serde(default = "default_products")]
    pub catalog: Vec<PaintProduct>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LoggingConfig {
    /// Level for everything not listed in `modules`
    #[serde(default = "default_log_level")]
    pub default: String,

    /// Per-module overrides, e.g. `packing = "debug"`
    #[serde(default)]
    pub modules: HashMap<String, String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct EstimateConfig {
    /// Treat obstructions larger than the walls as zero area to paint
    #[serde(default)]
    pub clamp_negative_area: bool,
}

fn default_version() -> u32 {
    1
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: default_version(),
            logging: LoggingConfig::default(),
            estimate: EstimateConfig::default(),
            catalog: default_products(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default: default_log_level(),
            modules: HashMap::new(),
        }
    }
}

impl Settings {
    /// Load configuration from defaults, the workspace settings file, and the environment.
    pub fn load() -> Result<Self, Box<figment::Error>> {
        let config_path = Self::find_workspace_config().unwrap_or_else(Self::default_config_path);
        Self::load_from(config_path)
    }

    /// Load configuration using a specific settings file.
    ///
    /// A missing file is not an error; defaults and environment still apply.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, Box<figment::Error>> {
        Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(Toml::file(path.as_ref()))
            // Double underscore separates nested levels, single underscore stays in field names
            .merge(Env::prefixed(ENV_PREFIX).map(|key| {
                key.as_str().to_lowercase().replace("__", ".").into()
            }))
            .extract()
            .map_err(Box::new)
    }

    /// Find `.paintcalc/settings.toml` from the current directory upward.
    fn find_workspace_config() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;

        current
            .ancestors()
            .map(|ancestor| ancestor.join(CONFIG_DIR))
            .find(|dir| dir.is_dir())
            .map(|dir| dir.join(CONFIG_FILE))
    }

    pub fn default_config_path() -> PathBuf {
        PathBuf::from(CONFIG_DIR).join(CONFIG_FILE)
    }

    /// Validate the configured products into a usable catalog.
    pub fn catalog(&self) -> Result<Catalog, CatalogError> {
        Catalog::new(self.catalog.clone())
    }

    /// Save current configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;

        Ok(())
    }

    /// Write a default settings file at `path`.
    pub fn init_config_file(
        path: impl AsRef<Path>,
        force: bool,
    ) -> Result<PathBuf, Box<dyn std::error::Error>> {
        let path = path.as_ref();
        if !force && path.exists() {
            return Err("Configuration file already exists. Use --force to overwrite".into());
        }

        Settings::default().save(path)?;
        Ok(path.to_path_buf())
    }
}

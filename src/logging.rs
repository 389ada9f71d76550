//! Diagnostic logging.
//!
//! Logs go to stderr so they never interleave with the prompts and results on
//! stdout. Quiet (`warn`) by default, with per-module levels from config.
//!
//! # Configuration
//!
//! ```toml
//! [logging]
//! default = "warn"
//!
//! [logging.modules]
//! packing = "debug"   # show each can size decision
//! ```
//!
//! Module names are relative to the crate, so `packing` means
//! `paintcalc::packing`.
//!
//! # Environment Variable
//!
//! `RUST_LOG` takes precedence over config:
//! ```bash
//! RUST_LOG=debug paintcalc
//! RUST_LOG=paintcalc::area=debug paintcalc estimate
//! ```

use std::sync::Once;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::config::LoggingConfig;

static INIT: Once = Once::new();

/// Compact time format: HH:MM:SS.mmm
struct CompactTime;

impl FormatTime for CompactTime {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%H:%M:%S%.3f"))
    }
}

/// Build the filter directive string for `config`.
///
/// Module overrides are sorted so the result does not depend on map order.
pub fn filter_directives(config: &LoggingConfig) -> String {
    let mut modules: Vec<_> = config.modules.iter().collect();
    modules.sort();

    let mut directives = config.default.clone();
    for (module, level) in modules {
        let target = if module.starts_with(env!("CARGO_CRATE_NAME")) {
            module.clone()
        } else {
            format!("{}::{module}", env!("CARGO_CRATE_NAME"))
        };
        directives.push_str(&format!(",{target}={level}"));
    }
    directives
}

/// Initialize logging with configuration.
///
/// Call once at startup. Safe to call multiple times (only first call takes effect).
pub fn init_with_config(config: &LoggingConfig) {
    INIT.call_once(|| {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new(filter_directives(config))
        };

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_timer(CompactTime)
            .with_level(true)
            .with_filter(filter);

        tracing_subscriber::registry().with(fmt_layer).init();
    });
}

/// Log an event with a short context tag.
///
/// # Examples
/// ```ignore
/// log_event!("catalog", "loaded", "{} products", catalog.len());
/// ```
#[macro_export]
macro_rules! log_event {
    ($context:expr, $event:expr) => {
        tracing::info!("[{}] {}", $context, $event)
    };
    ($context:expr, $event:expr, $($arg:tt)*) => {
        tracing::info!("[{}] {}: {}", $context, $event, format!($($arg)*))
    };
}

/// Debug-only event logging.
///
/// # Examples
/// ```ignore
/// debug_event!("config", "settings", "{}", path.display());
/// ```
#[macro_export]
macro_rules! debug_event {
    ($context:expr, $event:expr) => {
        tracing::debug!("[{}] {}", $context, $event)
    };
    ($context:expr, $event:expr, $($arg:tt)*) => {
        tracing::debug!("[{}] {}: {}", $context, $event, format!($($arg)*))
    };
}

//! Structured logging setup.
//!
//! All output goes to stderr so that resolved configurations written to
//! stdout stay machine-readable.
//!
//! # Example
//!
//! ```no_run
//! use swf_launch::util::logging;
//!
//! logging::init_from_env();
//!
//! tracing::debug!(manifest = "asconfig.json", "resolving");
//! ```

use crate::config::{ENV_LOG_JSON, ENV_LOG_LEVEL};
use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::{filter::Directive, fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INIT: Once = Once::new();

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Minimum level for this crate's events
    pub level: Level,

    /// Emit one JSON object per event
    pub use_json: bool,

    pub include_target: bool,

    /// Include file and line number information
    pub include_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            use_json: false,
            include_target: true,
            include_location: false,
        }
    }
}

impl LoggingConfig {
    pub fn with_level(level: Level) -> Self {
        Self {
            level,
            ..Default::default()
        }
    }

    /// JSON output with source locations, for editor integrations that
    /// collect the launcher's stderr.
    pub fn structured() -> Self {
        Self {
            level: Level::INFO,
            use_json: true,
            include_target: true,
            include_location: true,
        }
    }
}

/// Parse a log level, case-insensitively. Unknown values fall back to INFO
/// with a note on stderr.
pub fn parse_level(level_str: &str) -> Level {
    match level_str.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => {
            eprintln!(
                "Invalid log level '{}', defaulting to INFO. Valid levels: trace, debug, info, warn, error",
                level_str
            );
            Level::INFO
        }
    }
}

/// Install the global subscriber. Only the first call has any effect.
///
/// `RUST_LOG` directives are honored alongside the configured level.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = match format!("swf_launch={}", config.level).parse::<Directive>() {
            Ok(directive) => EnvFilter::from_default_env().add_directive(directive),
            Err(_) => EnvFilter::from_default_env(),
        };

        if config.use_json {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .json()
                        .with_writer(std::io::stderr)
                        .with_target(config.include_target)
                        .with_file(config.include_location)
                        .with_line_number(config.include_location),
                )
                .init();
        } else {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(config.include_target)
                        .with_file(config.include_location)
                        .with_line_number(config.include_location),
                )
                .init();
        }
    });
}

pub fn init_default() {
    init_logging(LoggingConfig::default());
}

/// Whether `SWF_LAUNCH_LOG_JSON` asks for JSON output.
pub fn json_requested() -> bool {
    env::var(ENV_LOG_JSON)
        .ok()
        .and_then(|v| v.trim().to_lowercase().parse::<bool>().ok())
        .unwrap_or(false)
}

/// Initialize from `SWF_LAUNCH_LOG_LEVEL` and `SWF_LAUNCH_LOG_JSON`.
pub fn init_from_env() {
    let level = env::var(ENV_LOG_LEVEL)
        .map(|v| parse_level(&v))
        .unwrap_or(Level::WARN);

    let config = if json_requested() {
        LoggingConfig {
            level,
            ..LoggingConfig::structured()
        }
    } else {
        LoggingConfig::with_level(level)
    };

    init_logging(config);
}

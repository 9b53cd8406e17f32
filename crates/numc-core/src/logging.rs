//! Diagnostics output for numc programs
//!
//! The library itself only emits records through the `log` facade: an `error!`
//! precedes every contract violation, `warn!` flags suspicious parameters. This
//! module installs a subscriber that prints those records, built on
//! `tracing-subscriber` when the `tracing` feature is enabled.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: filter directive (e.g., `RUST_LOG=numc_core=debug`)
//! - `NUMC_LOG_FORMAT`: output format (`json`, `compact` or `pretty`, default: `pretty`)
//!
//! # Example
//!
//! ```
//! use numc_core::logging::{init_logging, LoggingConfig};
//!
//! init_logging(LoggingConfig::default()).unwrap();
//! log::info!("tensor engine ready");
//! ```

use anyhow::Result;

/// Environment variable selecting the output format.
pub const LOG_FORMAT_ENV: &str = "NUMC_LOG_FORMAT";

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Multi-line human-readable output
    Pretty,
    /// One JSON object per record
    Json,
    /// Single line per record
    Compact,
}

impl LogFormat {
    /// Parse from string, defaulting to [`LogFormat::Pretty`]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => LogFormat::Json,
            "compact" => LogFormat::Compact,
            _ => LogFormat::Pretty,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Output format
    pub format: LogFormat,
    /// Filter directive (e.g., "numc_core=info,warn")
    pub filter: String,
    /// Enable ANSI colors
    pub with_ansi: bool,
    /// Show target module paths
    pub with_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        let format = std::env::var(LOG_FORMAT_ENV)
            .map(|s| LogFormat::parse(&s))
            .unwrap_or(LogFormat::Pretty);
        let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string());

        Self {
            format,
            filter,
            with_ansi: true,
            with_target: true,
        }
    }
}

/// Install the global subscriber described by `config`.
///
/// Call once at program start. A second call, or a call after another
/// subscriber was installed, returns an error instead of panicking.
#[cfg(feature = "tracing")]
pub fn init_logging(config: LoggingConfig) -> Result<()> {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_new(&config.filter)?;
    let builder = fmt()
        .with_env_filter(filter)
        .with_ansi(config.with_ansi)
        .with_target(config.with_target);

    let installed = match config.format {
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };
    installed.map_err(|e| anyhow::anyhow!("failed to install log subscriber: {}", e))
}

/// Without the `tracing` feature records go to whatever `log` backend the
/// application installs; nothing to set up here.
#[cfg(not(feature = "tracing"))]
pub fn init_logging(config: LoggingConfig) -> Result<()> {
    log::debug!("logging backend not compiled in, ignoring {:?}", config.format);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parse() {
        assert_eq!(LogFormat::parse("JSON"), LogFormat::Json);
        assert_eq!(LogFormat::parse("compact"), LogFormat::Compact);
        assert_eq!(LogFormat::parse("anything"), LogFormat::Pretty);
    }

    #[test]
    fn test_config_defaults() {
        let cfg = LoggingConfig::default();
        assert!(cfg.with_ansi);
        assert!(cfg.with_target);
        assert!(!cfg.filter.is_empty());
    }
}

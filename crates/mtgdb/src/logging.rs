//! Logging configuration for mtgdb
//!
//! Logging uses the `tracing` framework with an `EnvFilter` (so `RUST_LOG`
//! wins when set) and optional daily-rotated log files. Logs go to stderr
//! by default so they never interleave with result tables on stdout.

use std::path::{Path, PathBuf};

use mtgdb_core::{Error, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log output destination
#[derive(Debug, Clone)]
pub enum LogOutput {
    /// Output to stderr
    Stderr,
    /// Output to a file with daily rotation
    File(PathBuf),
    /// Output to both stderr and file
    Both(PathBuf),
}

/// Log format style
#[derive(Debug, Clone, Copy)]
pub enum LogFormat {
    /// Human-readable multi-line format
    Pretty,
    /// Compact single-line format (default)
    Compact,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Minimum log level filter
    pub level: String,
    /// Output destination
    pub output: LogOutput,
    /// Format style
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            output: LogOutput::Stderr,
            format: LogFormat::Compact,
        }
    }
}

impl LogConfig {
    /// Create config with warn level and stderr output
    pub fn warn() -> Self {
        Self::default()
    }

    /// Create config with info level
    pub fn info() -> Self {
        Self {
            level: "info".to_string(),
            ..Default::default()
        }
    }

    /// Create config with debug level
    pub fn debug() -> Self {
        Self {
            level: "debug".to_string(),
            ..Default::default()
        }
    }

    /// Set log output to file with rotation
    pub fn with_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.output = LogOutput::File(path.into());
        self
    }

    /// Set log output to both stderr and file
    pub fn with_both<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.output = LogOutput::Both(path.into());
        self
    }

    /// Set log format
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Set log level filter
    pub fn with_level<S: Into<String>>(mut self, level: S) -> Self {
        self.level = level.into();
        self
    }

    /// Initialize global logging with this configuration
    ///
    /// Returns a guard that must be kept alive for file logging to work.
    /// When the guard is dropped, the logging worker thread is shut down.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use mtgdb::logging::LogConfig;
    ///
    /// let _guard = LogConfig::info().init()?;
    /// # Ok::<(), mtgdb::Error>(())
    /// ```
    pub fn init(self) -> Result<Option<WorkerGuard>> {
        let env_filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&self.level))
            .map_err(|e| Error::Config(format!("invalid log level {:?}: {}", self.level, e)))?;

        match self.output {
            LogOutput::Stderr => {
                let layer = fmt::layer().with_writer(std::io::stderr);
                let result = match self.format {
                    LogFormat::Pretty => tracing_subscriber::registry()
                        .with(env_filter)
                        .with(layer.pretty())
                        .try_init(),
                    LogFormat::Compact => tracing_subscriber::registry()
                        .with(env_filter)
                        .with(layer.compact())
                        .try_init(),
                };
                result.map_err(|e| Error::Config(e.to_string()))?;
                Ok(None)
            }
            LogOutput::File(path) => {
                let (non_blocking, guard) = tracing_appender::non_blocking(rolling_appender(&path));
                let layer = fmt::layer().with_writer(non_blocking).with_ansi(false);
                let result = match self.format {
                    LogFormat::Pretty => tracing_subscriber::registry()
                        .with(env_filter)
                        .with(layer.pretty())
                        .try_init(),
                    LogFormat::Compact => tracing_subscriber::registry()
                        .with(env_filter)
                        .with(layer.compact())
                        .try_init(),
                };
                result.map_err(|e| Error::Config(e.to_string()))?;
                Ok(Some(guard))
            }
            LogOutput::Both(path) => {
                let (non_blocking, guard) = tracing_appender::non_blocking(rolling_appender(&path));

                // Both outputs share the default format
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(fmt::layer().with_writer(std::io::stderr))
                    .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
                    .try_init()
                    .map_err(|e| Error::Config(e.to_string()))?;
                Ok(Some(guard))
            }
        }
    }
}

fn rolling_appender(path: &Path) -> tracing_appender::rolling::RollingFileAppender {
    tracing_appender::rolling::daily(
        path.parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new(".")),
        path.file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("mtgdb.log"),
    )
}

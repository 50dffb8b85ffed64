//! Tracing/logging initialization.
//!
//! The filter comes from `RUST_LOG` (default `info`) and the output format
//! from `CINEMA_LOG_FORMAT` (`json`, `pretty` or `compact`; default `json`).
//! Unusable values fall back to the defaults and are reported as warnings
//! once the subscriber is installed.

use core::str::FromStr;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

pub const FORMAT_ENV: &str = "CINEMA_LOG_FORMAT";

const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
    Compact,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown log format: {0:?} (expected json, pretty or compact)")]
pub struct UnknownLogFormat(pub String);

impl FromStr for LogFormat {
    type Err = UnknownLogFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            "compact" => Ok(LogFormat::Compact),
            _ => Err(UnknownLogFormat(s.to_string())),
        }
    }
}

/// A configuration value that could not be used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigProblem {
    #[error("{0}; falling back to json")]
    UnknownFormat(#[from] UnknownLogFormat),

    #[error("invalid log filter {filter:?} ({reason}); falling back to info")]
    InvalidFilter { filter: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    pub filter: String,
    pub format: LogFormat,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
        }
    }
}

/// Configuration read from the environment, with whatever had to be replaced
/// by a default.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EnvConfig {
    pub config: TracingConfig,
    pub problems: Vec<ConfigProblem>,
}

impl EnvConfig {
    /// Use `format` regardless of what the environment said.
    pub fn override_format(&mut self, format: LogFormat) {
        self.config.format = format;
        self.problems
            .retain(|p| !matches!(p, ConfigProblem::UnknownFormat(_)));
    }

    /// Install the subscriber, then log every problem as a warning.
    pub fn install(&self) {
        init_with(&self.config);
        for problem in &self.problems {
            ::tracing::warn!("{problem}");
        }
    }
}

impl TracingConfig {
    /// Read `RUST_LOG` and `CINEMA_LOG_FORMAT`.
    pub fn from_env() -> EnvConfig {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`TracingConfig::from_env`] with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> EnvConfig
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut env = EnvConfig::default();

        if let Some(raw) = lookup(EnvFilter::DEFAULT_ENV) {
            match EnvFilter::try_new(&raw) {
                Ok(_) => env.config.filter = raw,
                Err(e) => env.problems.push(ConfigProblem::InvalidFilter {
                    filter: raw,
                    reason: e.to_string(),
                }),
            }
        }

        if let Some(raw) = lookup(FORMAT_ENV) {
            match raw.parse() {
                Ok(format) => env.config.format = format,
                Err(e) => env.problems.push(ConfigProblem::from(e)),
            }
        }

        env
    }
}

/// Initialize tracing/logging for the process from the environment.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    TracingConfig::from_env().install();
}

/// Initialize tracing/logging with an explicit configuration.
///
/// An invalid filter is replaced by `info` and reported as a warning.
pub fn init_with(config: &TracingConfig) {
    let (filter, bad_filter) = match EnvFilter::try_new(&config.filter) {
        Ok(filter) => (filter, None),
        Err(e) => (
            EnvFilter::new(DEFAULT_FILTER),
            Some(ConfigProblem::InvalidFilter {
                filter: config.filter.clone(),
                reason: e.to_string(),
            }),
        ),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    // try_init fails only when a subscriber is already installed.
    let _ = match config.format {
        LogFormat::Json => builder
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };

    if let Some(problem) = bad_filter {
        ::tracing::warn!("{problem}");
    }
}

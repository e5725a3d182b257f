use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::ServerConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "trace"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            other => Err(format!("unknown log level {other:?}")),
        }
    }
}

/// Logging settings derived from the server configuration
#[derive(Debug, Clone)]
pub struct LogSettings {
    pub production: bool,
    pub level: LogLevel,
    pub dir: PathBuf,
}

impl LogSettings {
    pub fn from_config(config: &ServerConfig) -> Self {
        let production = config.is_production();
        let fallback = if production {
            LogLevel::Info
        } else {
            LogLevel::Debug
        };
        let level = config
            .log_level
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or(fallback);

        Self {
            production,
            level,
            dir: config.log_dir.clone(),
        }
    }

    /// Filter used when `RUST_LOG` is not set
    pub fn default_filter(&self) -> String {
        format!("pm_portfolio={},tower_http=debug,axum=debug", self.level)
    }
}

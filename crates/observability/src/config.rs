use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable selecting the log output format.
pub const LOG_FORMAT_ENV: &str = "STOCKROOM_LOG_FORMAT";

/// Environment variable holding `EnvFilter` directives.
pub const LOG_FILTER_ENV: &str = "RUST_LOG";

pub(crate) const DEFAULT_FILTER: &str = "info";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per line.
    #[default]
    Json,
    /// Human-readable, multi-line.
    Pretty,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown log format '{0}' (expected 'json' or 'pretty')")]
pub struct UnknownLogFormat(String);

impl FromStr for LogFormat {
    type Err = UnknownLogFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            _ => Err(UnknownLogFormat(s.to_string())),
        }
    }
}

/// Tracing configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// `EnvFilter` directives, e.g. `info,stockroom_infra=trace`.
    pub filter: String,
    pub format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
        }
    }
}

impl ObservabilityConfig {
    /// Read `RUST_LOG` and `STOCKROOM_LOG_FORMAT`, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup.
    ///
    /// An unrecognized format falls back to JSON. The warning goes to stderr
    /// because no subscriber is installed yet.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let filter = lookup(LOG_FILTER_ENV)
            .filter(|f| !f.trim().is_empty())
            .unwrap_or(defaults.filter);

        let format = match lookup(LOG_FORMAT_ENV) {
            Some(raw) => raw.parse().unwrap_or_else(|err: UnknownLogFormat| {
                eprintln!("{err}; falling back to json");
                defaults.format
            }),
            None => defaults.format,
        };

        Self { filter, format }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_to_info_json() {
        let config = ObservabilityConfig::from_lookup(lookup(&[]));
        assert_eq!(config, ObservabilityConfig::default());
        assert_eq!(config.filter, "info");
        assert_eq!(config.format, LogFormat::Json);
    }

    #[test]
    fn reads_filter_and_format() {
        let config = ObservabilityConfig::from_lookup(lookup(&[
            ("RUST_LOG", "debug,stockroom_infra=trace"),
            ("STOCKROOM_LOG_FORMAT", "Pretty"),
        ]));
        assert_eq!(config.filter, "debug,stockroom_infra=trace");
        assert_eq!(config.format, LogFormat::Pretty);
    }

    #[test]
    fn blank_filter_and_unknown_format_fall_back() {
        let config = ObservabilityConfig::from_lookup(lookup(&[
            ("RUST_LOG", "  "),
            ("STOCKROOM_LOG_FORMAT", "xml"),
        ]));
        assert_eq!(config, ObservabilityConfig::default());
    }

    #[test]
    fn format_round_trips_through_serde() {
        let json = serde_json::to_string(&LogFormat::Pretty).unwrap();
        assert_eq!(json, "\"pretty\"");
    }
}

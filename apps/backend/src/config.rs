//! Environment configuration

use std::path::PathBuf;

use chrono::{Datelike, Utc};
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

/// Server configuration read from the environment
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub riddles_file: PathBuf,
    pub progress_file: Option<PathBuf>,
    pub calendar_year: i32,
}

impl Config {
    /// Load configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = parse_var(&lookup, "PORT")?.unwrap_or(3000);
        let riddles_file = lookup("RIDDLES_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("riddles.json"));
        let progress_file = lookup("PROGRESS_FILE")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);
        let calendar_year = parse_var(&lookup, "CALENDAR_YEAR")?.unwrap_or_else(|| Utc::now().year());

        Ok(Self {
            host,
            port,
            riddles_file,
            progress_file,
            calendar_year,
        })
    }

    /// Socket address string to bind to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<F, T>(lookup: &F, name: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { name, value }),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.riddles_file, PathBuf::from("riddles.json"));
        assert!(config.progress_file.is_none());
        assert_eq!(config.calendar_year, Utc::now().year());
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("RIDDLES_FILE", "/data/riddles.json"),
            ("PROGRESS_FILE", "/data/progress.json"),
            ("CALENDAR_YEAR", "2025"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
        assert_eq!(config.riddles_file, PathBuf::from("/data/riddles.json"));
        assert_eq!(
            config.progress_file,
            Some(PathBuf::from("/data/progress.json"))
        );
        assert_eq!(config.calendar_year, 2025);
    }

    #[test]
    fn test_blank_progress_file_is_memory_only() {
        let config = Config::from_lookup(lookup_from(&[("PROGRESS_FILE", "  ")])).unwrap();
        assert!(config.progress_file.is_none());
    }

    #[test]
    fn test_invalid_port() {
        let result = Config::from_lookup(lookup_from(&[("PORT", "http")]));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { name: "PORT", .. })
        ));
    }

    #[test]
    fn test_invalid_year() {
        let result = Config::from_lookup(lookup_from(&[("CALENDAR_YEAR", "next")]));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue {
                name: "CALENDAR_YEAR",
                ..
            })
        ));
    }
}

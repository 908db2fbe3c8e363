//! Runtime settings read from the environment (`.env` is loaded by `main`).

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};
use validator::Validate;

use crate::core::persistence::logs::log_repository::DEFAULT_MAX_LOG_SIZE;
use crate::domain::log::parser::{
    LogParser, UnknownLevelPolicy, DEFAULT_LINE_BREAK, DEFAULT_MAX_MESSAGE_LENGTH,
};

#[derive(Debug, Clone, Validate)]
pub struct ViewerConfig {
    pub log_dir: PathBuf,
    #[validate(length(min = 1))]
    pub file_pattern: String,
    #[validate(range(min = 1))]
    pub max_message_length: usize,
    #[validate(range(min = 1))]
    pub max_log_size: u64,
    pub line_break: String,
    pub unknown_level: UnknownLevelPolicy,
    #[validate(length(min = 1))]
    pub bind_addr: String,
    pub trace_dir: Option<PathBuf>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("writable/logs"),
            file_pattern: "log-*.log".into(),
            max_message_length: DEFAULT_MAX_MESSAGE_LENGTH,
            max_log_size: DEFAULT_MAX_LOG_SIZE,
            line_break: DEFAULT_LINE_BREAK.into(),
            unknown_level: UnknownLevelPolicy::default(),
            bind_addr: "0.0.0.0:8080".into(),
            trace_dir: None,
        }
    }
}

impl ViewerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(v) = lookup("LOGVIEW_LOG_DIR") {
            cfg.log_dir = PathBuf::from(v);
        }
        if let Some(v) = lookup("LOGVIEW_FILE_PATTERN") {
            cfg.file_pattern = v;
        }
        if let Some(v) = lookup("LOGVIEW_MAX_MESSAGE_LENGTH") {
            cfg.max_message_length = parse_var("LOGVIEW_MAX_MESSAGE_LENGTH", &v)?;
        }
        if let Some(v) = lookup("LOGVIEW_MAX_LOG_SIZE") {
            cfg.max_log_size = parse_var("LOGVIEW_MAX_LOG_SIZE", &v)?;
        }
        if let Some(v) = lookup("LOGVIEW_LINE_BREAK") {
            cfg.line_break = v;
        }
        if let Some(v) = lookup("LOGVIEW_UNKNOWN_LEVEL") {
            cfg.unknown_level = v.parse().map_err(|e: String| anyhow!(e))?;
        }
        if let Some(v) = lookup("LOGVIEW_BIND_ADDR") {
            cfg.bind_addr = v;
        }
        cfg.trace_dir = lookup("LOGVIEW_TRACE_DIR")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        cfg.validate().context("Invalid log viewer configuration")?;
        Ok(cfg)
    }

    pub fn parser(&self) -> LogParser {
        LogParser::new(self.max_message_length, self.line_break.clone(), self.unknown_level)
    }
}

fn parse_var<T>(key: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.trim()
        .parse()
        .with_context(|| format!("{key} must be a number, got {raw:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let cfg = ViewerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg.file_pattern, "log-*.log");
        assert_eq!(cfg.max_message_length, 300);
        assert_eq!(cfg.max_log_size, 52_428_800);
        assert_eq!(cfg.line_break, "<br>");
        assert_eq!(cfg.unknown_level, UnknownLevelPolicy::Reject);
        assert!(cfg.trace_dir.is_none());
    }

    #[test]
    fn overrides_are_read() {
        let cfg = ViewerConfig::from_lookup(lookup(&[
            ("LOGVIEW_LOG_DIR", "/var/log/app"),
            ("LOGVIEW_MAX_MESSAGE_LENGTH", "120"),
            ("LOGVIEW_LINE_BREAK", "\n"),
            ("LOGVIEW_UNKNOWN_LEVEL", "fallback"),
        ]))
        .unwrap();

        assert_eq!(cfg.log_dir, PathBuf::from("/var/log/app"));
        assert_eq!(cfg.parser(), LogParser::new(120, "\n", UnknownLevelPolicy::Fallback));
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(ViewerConfig::from_lookup(lookup(&[("LOGVIEW_MAX_MESSAGE_LENGTH", "0")])).is_err());
        assert!(ViewerConfig::from_lookup(lookup(&[("LOGVIEW_MAX_LOG_SIZE", "big")])).is_err());
        assert!(ViewerConfig::from_lookup(lookup(&[("LOGVIEW_FILE_PATTERN", "")])).is_err());
        assert!(ViewerConfig::from_lookup(lookup(&[("LOGVIEW_UNKNOWN_LEVEL", "ignore")])).is_err());
    }
}

//! Folds raw log lines into structured entries.

pub mod header;

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::log::model::log_entry::LogEntry;
use crate::domain::log::model::log_level::LogLevel;

pub use header::{match_header, HeaderLine};

pub const DEFAULT_MAX_MESSAGE_LENGTH: usize = 300;
pub const DEFAULT_LINE_BREAK: &str = "<br>";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Unknown log level [{level}] in line: {line}")]
    UnknownLevel { level: String, line: String },
}

/// What to do with a header whose level token is not one of the known five.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownLevelPolicy {
    /// Fail the whole parse.
    #[default]
    Reject,
    /// Drop the header along with the continuation lines that follow it.
    Skip,
    /// Keep the entry under `ALL`.
    Fallback,
}

impl FromStr for UnknownLevelPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(UnknownLevelPolicy::Reject),
            "skip" => Ok(UnknownLevelPolicy::Skip),
            "fallback" | "all" => Ok(UnknownLevelPolicy::Fallback),
            other => Err(format!("unsupported unknown-level policy: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogParser {
    max_length: usize,
    separator: String,
    unknown_level: UnknownLevelPolicy,
    single_line: bool,
}

impl Default for LogParser {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_MESSAGE_LENGTH, DEFAULT_LINE_BREAK, UnknownLevelPolicy::default())
    }
}

impl LogParser {
    pub fn new(max_length: usize, separator: impl Into<String>, unknown_level: UnknownLevelPolicy) -> Self {
        Self {
            max_length,
            separator: separator.into(),
            unknown_level,
            single_line: false,
        }
    }

    /// Same policy, but every entry carries its whole message in `content`:
    /// no truncation, continuation lines joined with a space.
    pub fn single_line(&self) -> Self {
        Self {
            max_length: usize::MAX,
            separator: " ".to_string(),
            unknown_level: self.unknown_level,
            single_line: true,
        }
    }

    pub fn parse<I, S>(&self, lines: I) -> Result<Vec<LogEntry>, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries: Vec<LogEntry> = Vec::new();
        // set while continuation lines belong to a skipped header
        let mut skipping = false;

        for line in lines {
            let line = line.as_ref();

            match match_header(line) {
                HeaderLine::Header { level, timestamp, message } => {
                    let level = match (LogLevel::from_code(level), self.unknown_level) {
                        (Some(known), _) => known,
                        (None, UnknownLevelPolicy::Fallback) => LogLevel::All,
                        (None, UnknownLevelPolicy::Skip) => {
                            skipping = true;
                            continue;
                        }
                        (None, UnknownLevelPolicy::Reject) => {
                            return Err(ParseError::UnknownLevel {
                                level: level.to_string(),
                                line: line.to_string(),
                            })
                        }
                    };

                    skipping = false;
                    let (content, overflow) = split_message(message, self.max_length);
                    entries.push(LogEntry::new(level, timestamp, content, overflow));
                }
                HeaderLine::Continuation => {
                    if skipping {
                        continue;
                    }
                    let Some(last) = entries.last_mut() else {
                        continue;
                    };
                    if self.single_line {
                        last.content.push_str(&self.separator);
                        last.content.push_str(line.trim());
                    } else {
                        last.append_overflow(line, &self.separator);
                    }
                }
            }
        }

        Ok(entries)
    }
}

/// Splits at `max` characters; not word-aware.
fn split_message(message: &str, max: usize) -> (String, Option<String>) {
    match message.char_indices().nth(max) {
        Some((at, _)) => (message[..at].to_string(), Some(message[at..].to_string())),
        None => (message.to_string(), None),
    }
}

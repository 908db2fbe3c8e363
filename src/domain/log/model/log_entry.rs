use serde::Serialize;
use serde_with::skip_serializing_none;

use super::log_level::LogLevel;

/// One structured record built from a header line and its continuation lines.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    pub level: LogLevel,
    /// Kept exactly as written in the header; never parsed into a date.
    pub timestamp: String,
    pub content: String,
    /// Truncated tail of the message and/or folded continuation lines.
    pub overflow: Option<String>,
    pub icon: &'static str,
    pub class: &'static str,
}

impl LogEntry {
    pub fn new(level: LogLevel, timestamp: impl Into<String>, content: String, overflow: Option<String>) -> Self {
        let presentation = level.presentation();
        Self {
            level,
            timestamp: timestamp.into(),
            content,
            overflow,
            icon: presentation.icon,
            class: presentation.class,
        }
    }

    /// Folds a continuation line into `overflow`.
    pub fn append_overflow(&mut self, line: &str, separator: &str) {
        match self.overflow.as_mut() {
            Some(extra) if !extra.is_empty() => {
                extra.push_str(separator);
                extra.push_str(line);
            }
            _ => self.overflow = Some(line.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_sets_then_joins() {
        let mut entry = LogEntry::new(LogLevel::Error, "2024-05-01 10:00:02", "failed".into(), None);
        entry.append_overflow("a", "<br>");
        entry.append_overflow("b", "<br>");
        assert_eq!(entry.overflow.as_deref(), Some("a<br>b"));
        assert_eq!(entry.class, "danger");
    }

    #[test]
    fn unset_overflow_is_omitted_from_json() {
        let entry = LogEntry::new(LogLevel::Info, "2024-05-01 10:00:00", "ok".into(), None);
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["level"], "INFO");
        assert!(json.get("overflow").is_none());
    }
}

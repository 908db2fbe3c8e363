use serde::Serialize;

use crate::domain::log::model::log_entry::LogEntry;

/// Everything the viewer page needs for one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogViewModel {
    /// `None` when the selected file is empty, unreadable or too large.
    pub logs: Option<Vec<LogEntry>>,
    pub files: Vec<String>,
    pub current_file: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteOutcome {
    pub target: String,
    pub deleted: usize,
}

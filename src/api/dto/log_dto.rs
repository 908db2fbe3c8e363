//! Log viewer DTOs

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::core::persistence::logs::log_repository::LogFileInfo;
use crate::domain::log::model::log_entry::LogEntry;

/// Query string of the viewer page (`/logs`).
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct LogWidgetQuery {
    /// Base64 name of the file to show.
    pub f: Option<String>,
    /// Base64 name of the file to download.
    pub dl: Option<String>,
    /// Base64 name of the file to delete, or `all`.
    pub del: Option<String>,
    /// JSON command: `list`, `view` or `delete`.
    pub api: Option<String>,
    /// Single-line log style for `api=view`.
    pub sline: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct LogViewQuery {
    pub sline: Option<String>,
}

/// `true`, `1` (any case for `true`) switch a flag on.
pub fn is_truthy(flag: Option<&str>) -> bool {
    matches!(flag, Some(v) if v == "1" || v.eq_ignore_ascii_case("true"))
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct LogFileRef {
    pub file_b64: String,
    pub file_name: String,
}

impl From<LogFileInfo> for LogFileRef {
    fn from(info: LogFileInfo) -> Self {
        Self {
            file_b64: info.file_b64,
            file_name: info.file_name,
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CommandError {
    pub message: String,
    pub code: u16,
}

/// Envelope of the `?api=` command interface.
#[skip_serializing_none]
#[derive(Serialize, Debug, Default)]
pub struct CommandResponse {
    pub status: bool,
    pub log_files: Option<Vec<LogFileRef>>,
    /// `Some(None)` is sent as `null`: the file exists but cannot be displayed.
    pub logs: Option<Option<Vec<LogEntry>>>,
    pub message: Option<String>,
    pub error: Option<CommandError>,
}

impl CommandResponse {
    pub fn failure(message: impl Into<String>, code: u16) -> Self {
        Self {
            status: false,
            error: Some(CommandError {
                message: message.into(),
                code,
            }),
            ..Self::default()
        }
    }
}

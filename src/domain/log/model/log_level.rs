use serde::{Deserialize, Serialize};

/// Severity levels recognised in log header lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogLevel {
    #[serde(rename = "CRITICAL")]
    Critical,
    #[serde(rename = "INFO")]
    Info,
    #[serde(rename = "ERROR")]
    Error,
    #[serde(rename = "DEBUG")]
    Debug,
    #[serde(rename = "ALL")]
    All,
}

/// Display hints for a level: icon identifier and severity class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelPresentation {
    pub icon: &'static str,
    pub class: &'static str,
}

impl LogLevel {
    /// Exact, case-sensitive lookup of a level token.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "CRITICAL" => Some(LogLevel::Critical),
            "INFO" => Some(LogLevel::Info),
            "ERROR" => Some(LogLevel::Error),
            "DEBUG" => Some(LogLevel::Debug),
            "ALL" => Some(LogLevel::All),
            _ => None,
        }
    }

    pub const fn presentation(&self) -> LevelPresentation {
        match self {
            LogLevel::Critical => LevelPresentation {
                icon: "glyphicon glyphicon-error-sign",
                class: "danger",
            },
            LogLevel::Info => LevelPresentation {
                icon: "glyphicon glyphicon-info-sign",
                class: "info",
            },
            LogLevel::Error => LevelPresentation {
                icon: "glyphicon glyphicon-warning-sign",
                class: "danger",
            },
            LogLevel::Debug => LevelPresentation {
                icon: "glyphicon glyphicon-exclamation-sign",
                class: "warning",
            },
            LogLevel::All => LevelPresentation {
                icon: "glyphicon glyphicon-minus",
                class: "muted",
            },
        }
    }
}

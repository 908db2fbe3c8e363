use std::path::PathBuf;

use anyhow::Result;
use tracing::{debug, info};

use crate::core::persistence::logs::log_repository::{LogFileInfo, LogRepository};
use crate::core::util::file_name::decode_file_name;
use crate::domain::log::dto::{DeleteOutcome, LogViewModel};
use crate::domain::log::model::log_entry::LogEntry;
use crate::domain::log::parser::LogParser;
use crate::errors::AppError;

pub const DELETE_ALL: &str = "all";

pub struct LogViewerService<R: LogRepository> {
    repo: R,
    parser: LogParser,
}

impl<R: LogRepository> LogViewerService<R> {
    pub fn new(repo: R, parser: LogParser) -> Self {
        Self { repo, parser }
    }

    pub async fn list_files(&self) -> Result<Vec<LogFileInfo>> {
        self.repo.list_files()
    }

    /// Page data for the viewer. With no file selected the newest one is shown.
    pub async fn view(&self, file_b64: Option<&str>) -> Result<LogViewModel> {
        let files: Vec<String> = self
            .repo
            .list_files()?
            .into_iter()
            .map(|f| f.file_name)
            .collect();

        let current = match file_b64 {
            Some(encoded) => Some(decode_file_name(encoded)?),
            None => files.first().cloned(),
        };

        let logs = match current.as_deref() {
            Some(name) if self.repo.resolve(name).is_some() => self.parse_file(name, &self.parser)?,
            _ => Some(Vec::new()),
        };

        Ok(LogViewModel {
            logs,
            files,
            current_file: current.unwrap_or_default(),
        })
    }

    /// Parsed entries of one file; `None` when the file cannot be displayed.
    pub async fn view_for_api(&self, file_b64: &str, single_line: bool) -> Result<Option<Vec<LogEntry>>> {
        let name = decode_file_name(file_b64)?;
        if self.repo.resolve(&name).is_none() {
            return Err(AppError::NotFound(format!("File [{name}] does not exist")).into());
        }

        if single_line {
            self.parse_file(&name, &self.parser.single_line())
        } else {
            self.parse_file(&name, &self.parser)
        }
    }

    /// Deletes one base64-named file, or every matching file for `"all"`.
    pub async fn delete(&self, target: &str) -> Result<DeleteOutcome> {
        if target == DELETE_ALL {
            if !self.repo.folder_exists() {
                return Err(AppError::NotFound("File does not exist".into()).into());
            }
            let deleted = self.repo.delete_all()?;
            info!(deleted, "Deleted all log files");
            return Ok(DeleteOutcome {
                target: DELETE_ALL.to_string(),
                deleted,
            });
        }

        let name = decode_file_name(target)?;
        if !self.repo.delete(&name)? {
            return Err(AppError::NotFound("File does not exist".into()).into());
        }

        info!(file = %name, "Deleted log file");
        Ok(DeleteOutcome {
            target: name,
            deleted: 1,
        })
    }

    pub async fn download_path(&self, file_b64: &str) -> Result<PathBuf> {
        let name = decode_file_name(file_b64)?;
        self.repo
            .resolve(&name)
            .ok_or_else(|| AppError::NotFound(format!("File [{name}] does not exist")).into())
    }

    fn parse_file(&self, name: &str, parser: &LogParser) -> Result<Option<Vec<LogEntry>>> {
        let Some(lines) = self.repo.read_lines(name)? else {
            debug!(file = %name, "Log file skipped (empty, missing or oversized)");
            return Ok(None);
        };

        let entries = parser.parse(&lines)?;
        debug!(file = %name, lines = lines.len(), entries = entries.len(), "Parsed log file");
        Ok(Some(entries))
    }
}

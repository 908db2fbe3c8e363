use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, warn};

use crate::core::util::file_name::{base_name, encode_file_name};
use crate::core::util::file_pattern::FilePattern;

/// 50 MiB; larger files are never parsed.
pub const DEFAULT_MAX_LOG_SIZE: u64 = 52_428_800;

/// A log file visible to the viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogFileInfo {
    pub file_name: String,
    pub file_b64: String,
    pub size: u64,
    pub modified_at: Option<DateTime<Utc>>,
}

/// File access for the log viewer. Names passed in are reduced to their
/// base name before the folder is touched.
pub trait LogRepository: Send + Sync {
    /// Matching files, newest name first.
    fn list_files(&self) -> Result<Vec<LogFileInfo>>;

    /// `None` when the file is missing, empty or over the size limit.
    fn read_lines(&self, file_name: &str) -> Result<Option<Vec<String>>>;

    fn resolve(&self, file_name: &str) -> Option<PathBuf>;

    /// `false` if there was nothing to delete.
    fn delete(&self, file_name: &str) -> Result<bool>;

    fn delete_all(&self) -> Result<usize>;

    fn folder_exists(&self) -> bool;
}

pub struct LogFsRepository {
    dir: PathBuf,
    pattern: FilePattern,
    max_size: u64,
}

impl LogFsRepository {
    pub fn new(dir: impl Into<PathBuf>, pattern: FilePattern, max_size: u64) -> Self {
        Self {
            dir: dir.into(),
            pattern,
            max_size,
        }
    }

    fn path_of(&self, file_name: &str) -> Option<PathBuf> {
        base_name(file_name).map(|name| self.dir.join(name))
    }

    fn matching_paths(&self) -> Result<Vec<PathBuf>> {
        if !self.dir.is_dir() {
            debug!(dir = %self.dir.display(), "Log folder does not exist");
            return Ok(Vec::new());
        }

        let mut paths = Vec::new();
        let entries = fs::read_dir(&self.dir)
            .with_context(|| format!("Failed to read log folder {}", self.dir.display()))?;

        for entry in entries {
            let entry = entry.context("Failed to read log folder entry")?;
            let path = entry.path();
            let is_match = path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| self.pattern.matches(n));

            if is_match && path.is_file() {
                paths.push(path);
            }
        }

        paths.sort();
        paths.reverse();
        Ok(paths)
    }
}

impl LogRepository for LogFsRepository {
    fn list_files(&self) -> Result<Vec<LogFileInfo>> {
        let mut files = Vec::new();

        for path in self.matching_paths()? {
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            let meta = fs::metadata(&path)
                .with_context(|| format!("Failed to stat {}", path.display()))?;

            files.push(LogFileInfo {
                file_name: name.to_string(),
                file_b64: encode_file_name(name),
                size: meta.len(),
                modified_at: meta.modified().ok().map(DateTime::<Utc>::from),
            });
        }

        Ok(files)
    }

    fn read_lines(&self, file_name: &str) -> Result<Option<Vec<String>>> {
        let Some(path) = self.resolve(file_name) else {
            return Ok(None);
        };

        let size = fs::metadata(&path)
            .with_context(|| format!("Failed to stat {}", path.display()))?
            .len();
        if size == 0 {
            return Ok(None);
        }
        if size > self.max_size {
            warn!(file = %file_name, size, limit = self.max_size, "Log file too large to display");
            return Ok(None);
        }

        let bytes = fs::read(&path).with_context(|| format!("Failed to read {}", path.display()))?;
        let lines = String::from_utf8_lossy(&bytes)
            .lines()
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Some(lines))
    }

    /// Only files matching the log pattern are addressable.
    fn resolve(&self, file_name: &str) -> Option<PathBuf> {
        self.path_of(file_name)
            .filter(|p| p.file_name().and_then(|n| n.to_str()).is_some_and(|n| self.pattern.matches(n)))
            .filter(|p| p.is_file())
    }

    fn delete(&self, file_name: &str) -> Result<bool> {
        let Some(path) = self.resolve(file_name) else {
            return Ok(false);
        };

        fs::remove_file(&path).with_context(|| format!("Failed to delete {}", path.display()))?;
        debug!(file = %path.display(), "Deleted log file");
        Ok(true)
    }

    fn delete_all(&self) -> Result<usize> {
        let paths = self.matching_paths()?;
        for path in &paths {
            fs::remove_file(path).with_context(|| format!("Failed to delete {}", path.display()))?;
        }
        debug!(count = paths.len(), pattern = self.pattern.as_str(), "Deleted all log files");
        Ok(paths.len())
    }

    fn folder_exists(&self) -> bool {
        self.dir.is_dir()
    }
}

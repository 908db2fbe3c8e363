use std::sync::Arc;

use anyhow::Result;

use crate::config::ViewerConfig;
use crate::core::persistence::logs::log_repository::LogFsRepository;
use crate::core::util::file_pattern::FilePattern;
use crate::domain::log::service::log_viewer_service::LogViewerService;

#[derive(Clone)]
pub struct AppState {
    pub log_viewer_service: Arc<LogViewerService<LogFsRepository>>,
}

pub fn build_app_state(config: &ViewerConfig) -> Result<AppState> {
    let pattern = FilePattern::new(&config.file_pattern)?;
    let repo = LogFsRepository::new(config.log_dir.clone(), pattern, config.max_log_size);

    Ok(AppState {
        log_viewer_service: Arc::new(LogViewerService::new(repo, config.parser())),
    })
}

//! `?api=` command interface of the viewer page.

use axum::http::StatusCode;

use crate::api::dto::log_dto::{CommandResponse, LogFileRef};
use crate::core::persistence::logs::log_repository::LogRepository;
use crate::domain::log::service::log_viewer_service::LogViewerService;
use crate::errors::{internal_error, AppError};

pub const CMD_LIST: &str = "list";
pub const CMD_VIEW: &str = "view";
pub const CMD_DELETE: &str = "delete";

pub async fn process_command<R: LogRepository>(
    service: &LogViewerService<R>,
    command: &str,
    file: Option<&str>,
    single_line: bool,
) -> (StatusCode, CommandResponse) {
    let response = match command {
        CMD_LIST => match log_files(service).await {
            Ok(files) => CommandResponse {
                status: true,
                log_files: Some(files),
                ..CommandResponse::default()
            },
            Err(err) => from_app_error(err),
        },
        CMD_VIEW => view(service, file, single_line).await,
        CMD_DELETE => delete(service, file).await,
        other => CommandResponse::failure(format!("Unsupported Query Command [{other}]"), 400),
    };

    let status = if response.status {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };
    (status, response)
}

async fn log_files<R: LogRepository>(service: &LogViewerService<R>) -> Result<Vec<LogFileRef>, AppError> {
    service
        .list_files()
        .await
        .map(|files| files.into_iter().map(LogFileRef::from).collect())
        .map_err(internal_error)
}

async fn view<R: LogRepository>(
    service: &LogViewerService<R>,
    file: Option<&str>,
    single_line: bool,
) -> CommandResponse {
    let log_files = match log_files(service).await {
        Ok(files) => files,
        Err(err) => return from_app_error(err),
    };

    let Some(file) = file.filter(|f| !f.is_empty()) else {
        let supplied = serde_json::to_string(&file).unwrap_or_else(|_| "null".into());
        return CommandResponse {
            log_files: Some(log_files),
            ..CommandResponse::failure(format!("Invalid File Name Supplied: [{supplied}]"), 400)
        };
    };

    match service.view_for_api(file, single_line).await {
        Ok(logs) => CommandResponse {
            status: true,
            log_files: Some(log_files),
            logs: Some(logs),
            ..CommandResponse::default()
        },
        Err(err) => CommandResponse {
            log_files: Some(log_files),
            ..from_app_error(internal_error(err))
        },
    }
}

async fn delete<R: LogRepository>(service: &LogViewerService<R>, file: Option<&str>) -> CommandResponse {
    let Some(file) = file else {
        return CommandResponse::failure("NULL value is not allowed for file param", 400);
    };

    match service.delete(file).await.map_err(internal_error) {
        Ok(outcome) => CommandResponse {
            status: true,
            message: Some(format!("File [{}] deleted", outcome.target)),
            ..CommandResponse::default()
        },
        Err(AppError::NotFound(_)) => CommandResponse::failure("File does not exist", 404),
        Err(err) => from_app_error(err),
    }
}

fn from_app_error(err: AppError) -> CommandResponse {
    CommandResponse::failure(err.to_string(), err.status().as_u16())
}

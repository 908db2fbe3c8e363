//! Log controller: connects the viewer page and REST routes to the viewer service

pub mod command;
pub mod download;

use axum::extract::{OriginalUri, Path, Query, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum::Json;

use crate::api::dto::log_dto::{is_truthy, LogViewQuery, LogWidgetQuery};
use crate::api::dto::ApiResponse;
use crate::api::util::json::to_json;
use crate::app_state::AppState;
use crate::core::persistence::logs::log_repository::LogFileInfo;
use crate::domain::log::dto::DeleteOutcome;
use crate::domain::log::model::log_entry::LogEntry;
use crate::domain::log::service::log_viewer_service::DELETE_ALL;
use crate::errors::{internal_error, AppError};

pub struct LogController;

impl LogController {
    /// Viewer page: `del`, then `dl`, then `api`, then the page data.
    pub async fn show_logs(
        State(state): State<AppState>,
        OriginalUri(uri): OriginalUri,
        Query(query): Query<LogWidgetQuery>,
    ) -> Result<Response, AppError> {
        let service = state.log_viewer_service.as_ref();

        if let Some(target) = query.del.as_deref() {
            // a file that is already gone still returns to the page
            match service.delete(target).await.map_err(internal_error) {
                Ok(_) | Err(AppError::NotFound(_)) => {}
                Err(err) => return Err(err),
            }
            return Ok(Redirect::to(uri.path()).into_response());
        }

        if let Some(file) = query.dl.as_deref() {
            // unknown files fall through to the page
            if let Ok(path) = service.download_path(file).await {
                return download::file_attachment(&path).await;
            }
        }

        if let Some(command) = query.api.as_deref() {
            let (status, body) = command::process_command(
                service,
                command,
                query.f.as_deref(),
                is_truthy(query.sline.as_deref()),
            )
            .await;
            return Ok((status, Json(body)).into_response());
        }

        let file = query.f.as_deref().filter(|f| !f.is_empty());
        Ok(to_json(service.view(file).await)?.into_response())
    }

    pub async fn list_log_files(
        State(state): State<AppState>,
    ) -> Result<Json<ApiResponse<Vec<LogFileInfo>>>, AppError> {
        to_json(state.log_viewer_service.list_files().await)
    }

    /// `file_b64` must be percent-encoded when it contains `/`.
    pub async fn get_log_entries(
        State(state): State<AppState>,
        Path(file_b64): Path<String>,
        Query(query): Query<LogViewQuery>,
    ) -> Result<Json<ApiResponse<Option<Vec<LogEntry>>>>, AppError> {
        let single_line = is_truthy(query.sline.as_deref());
        to_json(state.log_viewer_service.view_for_api(&file_b64, single_line).await)
    }

    pub async fn download_log_file(
        State(state): State<AppState>,
        Path(file_b64): Path<String>,
    ) -> Result<Response, AppError> {
        let path = state
            .log_viewer_service
            .download_path(&file_b64)
            .await
            .map_err(internal_error)?;
        download::file_attachment(&path).await
    }

    pub async fn delete_log_file(
        State(state): State<AppState>,
        Path(file_b64): Path<String>,
    ) -> Result<Json<ApiResponse<DeleteOutcome>>, AppError> {
        to_json(state.log_viewer_service.delete(&file_b64).await)
    }

    pub async fn delete_all_log_files(
        State(state): State<AppState>,
    ) -> Result<Json<ApiResponse<DeleteOutcome>>, AppError> {
        to_json(state.log_viewer_service.delete(DELETE_ALL).await)
    }
}

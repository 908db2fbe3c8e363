//! Log routes (e.g., /api/v1/logs/*)

use axum::{routing::get, Router};

use crate::api::controller::log::LogController;
use crate::app_state::AppState;

pub fn log_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(LogController::list_log_files).delete(LogController::delete_all_log_files),
        )
        .route(
            "/{file_b64}",
            get(LogController::get_log_entries).delete(LogController::delete_log_file),
        )
        .route("/{file_b64}/download", get(LogController::download_log_file))
}

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;

use crate::core::util::file_name::FileNameError;
use crate::domain::log::parser::ParseError;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Internal server error: {0}")]
    InternalServerError(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unprocessable log file: {0}")]
    Unprocessable(String),
}

/// Maps a service error onto the matching variant; unknown errors become 500s.
pub fn internal_error(err: anyhow::Error) -> AppError {
    if let Some(app) = err.downcast_ref::<AppError>() {
        return app.clone();
    }
    if let Some(e) = err.downcast_ref::<FileNameError>() {
        return AppError::BadRequest(e.to_string());
    }
    if let Some(e) = err.downcast_ref::<ParseError>() {
        return AppError::Unprocessable(e.to_string());
    }
    AppError::InternalServerError(format!("{err:#}"))
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = Json(json!({
            "message": self.to_string()
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_errors_keep_their_status() {
        let err = internal_error(anyhow::Error::new(AppError::NotFound("log-x.log".into())));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);

        let err = internal_error(anyhow::Error::new(FileNameError::InvalidUtf8));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);

        let err = internal_error(anyhow::Error::new(ParseError::UnknownLevel {
            level: "WARNING".into(),
            line: "WARNING - 2024-01-01 00:00:00 --> x".into(),
        }));
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn context_wrapped_errors_are_still_recognised() {
        use anyhow::Context;
        let res: anyhow::Result<()> = Err(FileNameError::Empty).context("while decoding");
        assert_eq!(internal_error(res.unwrap_err()).status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn anything_else_is_internal() {
        let err = internal_error(anyhow::anyhow!("disk on fire"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

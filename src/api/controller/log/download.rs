use std::path::Path;

use axum::body::Body;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use tokio_util::io::ReaderStream;

use crate::errors::{internal_error, AppError};

/// Streams a log file as an attachment.
pub async fn file_attachment(path: &Path) -> Result<Response, AppError> {
    let file = tokio::fs::File::open(path)
        .await
        .map_err(|e| internal_error(e.into()))?;
    let len = file
        .metadata()
        .await
        .map_err(|e| internal_error(e.into()))?
        .len();

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    // plain filename must stay a valid ASCII header value
    let ascii_name: String = name
        .chars()
        .filter(|c| (c.is_ascii_graphic() || *c == ' ') && *c != '"' && *c != '\\')
        .collect();
    let disposition = format!(
        "attachment; filename=\"{}\"; filename*=UTF-8''{}",
        ascii_name,
        urlencoding::encode(&name)
    );

    tracing::info!(file = %name, bytes = len, "Serving log file download");

    let headers = [
        (header::CONTENT_TYPE, "application/octet-stream".to_string()),
        (header::CONTENT_DISPOSITION, disposition),
        (header::CONTENT_LENGTH, len.to_string()),
        (header::CACHE_CONTROL, "must-revalidate".to_string()),
        (header::EXPIRES, "0".to_string()),
        (header::PRAGMA, "public".to_string()),
    ];

    Ok((headers, Body::from_stream(ReaderStream::new(file))).into_response())
}

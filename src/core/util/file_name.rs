use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FileNameError {
    #[error("File name is not valid base64: {0}")]
    InvalidBase64(String),

    #[error("File name is not valid UTF-8")]
    InvalidUtf8,

    #[error("File name is empty")]
    Empty,
}

/// Base64 form used in URLs and the JSON API.
pub fn encode_file_name(name: &str) -> String {
    STANDARD.encode(name.as_bytes())
}

/// Decodes a base64 file name and strips any directory components.
///
/// Spaces are read back as `+`, since form decoding of an unescaped query
/// string turns `+` into a space.
pub fn decode_file_name(encoded: &str) -> Result<String, FileNameError> {
    let bytes = STANDARD
        .decode(encoded.trim().replace(' ', "+"))
        .map_err(|e| FileNameError::InvalidBase64(e.to_string()))?;
    let raw = String::from_utf8(bytes).map_err(|_| FileNameError::InvalidUtf8)?;

    base_name(&raw).ok_or(FileNameError::Empty)
}

/// Last path component, or `None` for `..`, `/` and the like.
pub fn base_name(name: &str) -> Option<String> {
    Path::new(name)
        .file_name()
        .and_then(|n| n.to_str())
        .filter(|n| !n.is_empty())
        .map(str::to_string)
}

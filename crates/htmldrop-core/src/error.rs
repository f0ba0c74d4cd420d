//! Error types module
//!
//! This module provides the domain error type used throughout htmldrop.
//! Every request-level failure is represented by an `AppError` variant that
//! self-describes its HTTP status, client-facing message, and log level.
//! The client message is the only thing disclosed to callers; the variant's
//! `Display` form (including any wrapped cause) stays in the server logs.

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for recoverable issues
    Warn,
    /// Error level - for unexpected failures
    Error,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("multipart request contained no 'file' field")]
    MissingFile,

    #[error("file name does not end in .html")]
    InvalidFileType,

    #[error("upload failed: {0}")]
    Upload(String),

    #[error("retrieval failed: {0}")]
    Download(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status code to return for this error.
    pub fn http_status_code(&self) -> u16 {
        match self {
            AppError::MissingFile => 400,
            AppError::InvalidFileType => 400,
            AppError::Upload(_) => 500,
            AppError::Download(_) => 500,
            AppError::NotFound(_) => 404,
            AppError::Internal(_) => 500,
        }
    }

    /// Client-facing message. These strings are part of the API contract;
    /// internal causes are never included.
    pub fn client_message(&self) -> String {
        match self {
            AppError::MissingFile => "No file uploaded.".to_string(),
            AppError::InvalidFileType => {
                "Invalid file type. Only HTML files are accepted.".to_string()
            }
            AppError::Upload(_) => "File upload failed.".to_string(),
            AppError::Download(_) => "File retrieval failed.".to_string(),
            AppError::NotFound(_) => "File not found.".to_string(),
            AppError::Internal(_) => "Internal server error.".to_string(),
        }
    }

    /// Log level for this error.
    pub fn log_level(&self) -> LogLevel {
        match self {
            AppError::MissingFile | AppError::InvalidFileType | AppError::NotFound(_) => {
                LogLevel::Debug
            }
            AppError::Upload(_) | AppError::Download(_) | AppError::Internal(_) => {
                LogLevel::Error
            }
        }
    }

    /// Machine-readable error type name, used in log fields.
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::MissingFile => "MissingFile",
            AppError::InvalidFileType => "InvalidFileType",
            AppError::Upload(_) => "StorageFailure",
            AppError::Download(_) => "RetrievalFailure",
            AppError::NotFound(_) => "NotFound",
            AppError::Internal(_) => "Internal",
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Internal(format!("IO error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_messages_match_api_contract() {
        assert_eq!(AppError::MissingFile.client_message(), "No file uploaded.");
        assert_eq!(
            AppError::InvalidFileType.client_message(),
            "Invalid file type. Only HTML files are accepted."
        );
        assert_eq!(
            AppError::Upload("disk full".to_string()).client_message(),
            "File upload failed."
        );
        assert_eq!(
            AppError::Download("backend unreachable".to_string()).client_message(),
            "File retrieval failed."
        );
    }

    #[test]
    fn status_codes_match_api_contract() {
        assert_eq!(AppError::MissingFile.http_status_code(), 400);
        assert_eq!(AppError::InvalidFileType.http_status_code(), 400);
        assert_eq!(AppError::Upload(String::new()).http_status_code(), 500);
        assert_eq!(
            AppError::NotFound("k".to_string()).http_status_code(),
            404
        );
    }

    #[test]
    fn upload_cause_stays_out_of_client_message() {
        let err = AppError::Upload("bucket unreachable".to_string());
        assert!(err.to_string().contains("bucket unreachable"));
        assert!(!err.client_message().contains("bucket"));
    }

    #[test]
    fn storage_failures_log_at_error_level() {
        assert_eq!(
            AppError::Upload(String::new()).log_level(),
            LogLevel::Error
        );
        assert_eq!(AppError::MissingFile.log_level(), LogLevel::Debug);
    }
}

//! Error types for the drive_folder crate.

use thiserror::Error;

/// Errors that abort a folder listing.
///
/// Failures while prefetching the content of a single text item are not
/// represented here; they only leave that item's `content` unset.
#[derive(Error, Debug)]
pub enum DriveError {
    #[error("Missing API key: set DRIVE_API_KEY or pass --api-key")]
    MissingApiKey,

    #[error("Failed to read API key file: {0}")]
    ApiKeyFileError(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Access denied to folder {folder_id}: make sure the folder is shared by link")]
    AccessDenied { folder_id: String },

    #[error("Folder not found: {folder_id}. Check the folder URL or ID")]
    FolderNotFound { folder_id: String },

    #[error("Drive API error ({status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),
}

/// Result type alias for DriveError.
pub type Result<T> = std::result::Result<T, DriveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_denied_mentions_link_sharing() {
        let err = DriveError::AccessDenied {
            folder_id: "1abcdefghijklmnop".to_string(),
        };
        let display = err.to_string();
        assert!(display.contains("1abcdefghijklmnop"));
        assert!(display.contains("shared by link"));
    }

    #[test]
    fn test_api_error_carries_status() {
        let err = DriveError::ApiError {
            status: 500,
            message: "Backend Error".to_string(),
        };
        assert_eq!(err.to_string(), "Drive API error (500): Backend Error");
    }
}

use thiserror::Error;

use crate::errors::AppError;

/// Domain-specific errors for CLI operations
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Operation cancelled by user")]
    UserCancelled,

    #[error("Validation error: {field}: {message}")]
    Validation { field: String, message: String },

    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Storage operation failed: {message}")]
    Storage { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl CliError {
    /// Create an invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create a validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

impl From<AppError> for CliError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::NotFound(id) => Self::NotFound {
                message: format!("no item with id {id}"),
            },
            AppError::KindMismatch { .. } | AppError::InvalidItem(_) => Self::InvalidInput {
                message: err.to_string(),
            },
            AppError::InvalidImport(_) | AppError::NothingToExport => Self::InvalidInput {
                message: err.to_string(),
            },
            AppError::IO(io) => io.into(),
            AppError::Json(_) => Self::Storage {
                message: err.to_string(),
            },
        }
    }
}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal {
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::Storage {
                message: "File not found".to_string(),
            },
            std::io::ErrorKind::PermissionDenied => Self::Storage {
                message: "Permission denied".to_string(),
            },
            _ => Self::Storage {
                message: err.to_string(),
            },
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidInput {
            message: format!("JSON error: {}", err),
        }
    }
}

impl From<inquire::InquireError> for CliError {
    fn from(err: inquire::InquireError) -> Self {
        match err {
            inquire::InquireError::OperationCanceled
            | inquire::InquireError::OperationInterrupted => Self::UserCancelled,
            other => Self::internal(format!("An error occurred: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_conversion() {
        let err: CliError = AppError::NotFound("x".into()).into();
        assert!(matches!(err, CliError::NotFound { .. }));

        let err: CliError = AppError::NothingToExport.into();
        assert_eq!(err.to_string(), "Invalid input: no data to export");

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: CliError = AppError::IO(io).into();
        assert_eq!(err.to_string(), "Storage operation failed: File not found");
    }
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("API error ({status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Unexpected error: {0}")]
    UnexpectedError(String),

    #[error("Invalid Riot ID format, use Name#TAG: {0}")]
    InvalidRiotId(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Fieldless mirror of [`AppError`] for callers that only branch on the category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    ApiError,
    NetworkError,
    UnexpectedError,
    InvalidRiotId,
    ConfigError,
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::NotFound(_) => ErrorKind::NotFound,
            AppError::ApiError { .. } => ErrorKind::ApiError,
            AppError::NetworkError(_) => ErrorKind::NetworkError,
            AppError::UnexpectedError(_) => ErrorKind::UnexpectedError,
            AppError::InvalidRiotId(_) => ErrorKind::InvalidRiotId,
            AppError::ConfigError(_) => ErrorKind::ConfigError,
        }
    }
}

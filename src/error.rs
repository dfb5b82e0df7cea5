#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    FetchError(String),

    /// Non-success response. Displays as the raw response body.
    #[error("{body}")]
    StatusError { status: u16, body: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("{0}")]
    ParseError(String),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::FetchError(err.to_string())
    }
}

impl From<std::env::VarError> for AppError {
    fn from(err: std::env::VarError) -> Self {
        AppError::ConfigError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

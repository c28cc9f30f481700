use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl AppError {
    /// Maps a non-success HTTP status from the REST gateway to an error variant.
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            401 | 403 => AppError::Auth(message),
            404 => AppError::NotFound(message),
            400 => AppError::BadRequest(message),
            _ => AppError::Database(message),
        }
    }
}

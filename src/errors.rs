use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid contact: {0} is required")]
    InvalidContact(String),

    #[error("I/O error while accessing a file or resource: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed CSV data: {0}")]
    Csv(#[from] csv::Error),

    #[error("Could not encode output as JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0} Not found")]
    NotFound(String),

    #[error("Validation failed: {0}")]
    Validation(String),
}

impl AppError {
    pub fn is_invalid_contact(&self) -> bool {
        matches!(self, AppError::InvalidContact(_))
    }
}

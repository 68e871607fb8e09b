use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid customer id: {0}")]
    InvalidId(String),
    #[error("validation error: {0}")]
    Validation(String),
}

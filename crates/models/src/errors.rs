use thiserror::Error;

/// Failures raised by entity helpers. `Validation` messages are user-facing
/// and localized; `Db` carries the driver detail for logs.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("database error: {0}")]
    Db(String),
}

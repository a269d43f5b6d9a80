#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} not found: {code}")]
    NotFound { entity: &'static str, code: String },

    #[error("Validation failed: {0}")]
    Validation(String),
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfViewError {
    #[error("Contract violation: {0}")]
    ContractViolation(String),

    #[error("Unsupported value for key '{key}': {kind}")]
    UnsupportedValue { key: String, kind: &'static str },

    #[error("Configuration slice not found: '{0}'")]
    SliceNotFound(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ConfViewError>;

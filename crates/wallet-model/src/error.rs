use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid state snapshot: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid chain id: {0:?}")]
    InvalidChainId(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;

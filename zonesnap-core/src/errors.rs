use thiserror::Error;

pub type Result<T> = std::result::Result<T, ZoneSnapError>;

#[derive(Debug, Error)]
pub enum ZoneSnapError {
    #[error("Parsing error: {0}")]
    SerdeParse(#[from] serde_json::error::Error),
    #[error("Invalid layout {layout}: {reason}")]
    InvalidLayout { layout: String, reason: String },
}

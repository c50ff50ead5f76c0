use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid zero padding width: {0} (expected 1..=12)")]
    InvalidZeroPad(usize),
}

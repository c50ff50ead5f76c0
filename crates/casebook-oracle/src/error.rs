use thiserror::Error;

#[derive(Debug, Error)]
pub enum OracleError {
    #[error("oracle invocation failed: {0}")]
    Invocation(String),

    #[error("response is not valid JSON: {source}. Response: {response}")]
    InvalidJson {
        source: serde_json::Error,
        response: String,
    },

    #[error("response is not a JSON object")]
    NotAnObject,

    #[error("response keys mismatch (missing: {missing:?}, unexpected: {unexpected:?})")]
    KeyMismatch {
        missing: Vec<String>,
        unexpected: Vec<String>,
    },

    #[error("response did not conform to expected schema: {0}")]
    SchemaViolation(String),

    #[error("session {session_id} is invalid: {reason}")]
    SessionInvalid { session_id: String, reason: String },

    #[error("failed after {attempts} attempts; last error: {last}")]
    RetriesExhausted {
        attempts: u32,
        last: Box<OracleError>,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    /// A raw field was neither free text nor a structured value of the
    /// expected shape.
    #[error("invalid input type for `{field}`: expected {expected}, found {found}")]
    InvalidInputType {
        field: &'static str,
        expected: &'static str,
        found: String,
    },
}

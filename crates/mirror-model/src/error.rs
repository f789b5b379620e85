use thiserror::Error;

/// Failure to parse or render a JVM type descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DescriptorError {
    #[error("invalid descriptor: {0}")]
    Invalid(String),
    #[error("trailing characters after descriptor: {0}")]
    Trailing(String),
}

/// Failure raised while invoking a resolved member or accessing a field.
///
/// Lookup misses are never represented here; a lookup that finds nothing is
/// an empty result, not an error. These errors surface only once a member
/// handle is exercised, and they propagate to the caller unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvokeError {
    #[error("expected {expected} argument(s), got {got}")]
    ArityMismatch { expected: usize, got: usize },
    #[error("receiver is not an instance of `{expected}`")]
    ReceiverMismatch { expected: String },
    #[error("`{name}` has no body to invoke")]
    MissingBody { name: String },
    #[error("{0}")]
    Thrown(String),
}

impl InvokeError {
    /// Failure raised by the invoked target itself, analogous to an exception
    /// escaping the reflected call.
    pub fn thrown(message: impl Into<String>) -> Self {
        InvokeError::Thrown(message.into())
    }
}

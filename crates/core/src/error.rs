/// Domain-level errors.
///
/// Each variant carries the exact message sent to the client. Existing
/// clients pattern-match on the message text, so these strings are part
/// of the wire contract.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),
}

impl CoreError {
    /// The message text sent as the response body.
    pub fn message(&self) -> &str {
        match self {
            Self::Validation(msg) | Self::NotFound(msg) | Self::Conflict(msg) => msg,
        }
    }
}

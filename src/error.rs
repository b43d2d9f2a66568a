use thiserror::Error;

/// A value that has no JSON representation.
///
/// This is never returned for a path that does not resolve; those calls
/// leave the document unchanged instead.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("non-finite float {0} cannot be encoded as JSON")]
    NonFinite(f64),
    #[error("marshal error: {0}")]
    Marshal(String),
    #[cfg(feature = "serde")]
    #[error("serde_json error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl EncodeError {
    pub fn marshal(msg: impl Into<String>) -> Self {
        EncodeError::Marshal(msg.into())
    }
}

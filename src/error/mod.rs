//! Error handling for resilient decoding.

use std::fmt;

/// Specialized error type for decode and encode operations
#[derive(Debug)]
pub enum DecodeError {
    /// The payload could not be parsed at all
    Syntax(serde_json::Error),
    /// The payload parsed but did not yield a keyed container
    Container(String),
    /// A field's value could not be coerced to its declared type
    Field {
        key: String,
        source: serde_json::Error,
    },
    /// Error serializing a value back out
    Encode(serde_json::Error),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax(e) => write!(f, "Syntax error: {e}"),
            Self::Container(msg) => write!(f, "Container error: {msg}"),
            Self::Field { key, source } => write!(f, "Field error for key '{key}': {source}"),
            Self::Encode(e) => write!(f, "Encode error: {e}"),
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Syntax(e) | Self::Encode(e) => Some(e),
            Self::Field { source, .. } => Some(source),
            Self::Container(_) => None,
        }
    }
}

/// Result type for decode and encode operations
pub type Result<T> = std::result::Result<T, DecodeError>;

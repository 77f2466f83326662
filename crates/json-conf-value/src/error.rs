use thiserror::Error;

/// Errors shared by every json-conf crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Input text is not valid JSON.
    #[error("PARSE: {0}")]
    Parse(#[source] serde_json::Error),
    /// A value could not be converted to or from a typed Rust value.
    #[error("CONVERT: {0}")]
    Convert(#[source] serde_json::Error),
    /// Caller-supplied argument is unusable (empty path, non-object root).
    #[error("INVALID_ARGUMENT: {0}")]
    InvalidArgument(String),
    /// A node has a different shape than the operation requires.
    #[error("TYPE_MISMATCH: {0}")]
    TypeMismatch(String),
}

impl Error {
    pub fn is_parse(&self) -> bool {
        matches!(self, Error::Parse(_))
    }

    pub fn is_convert(&self) -> bool {
        matches!(self, Error::Convert(_))
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }

    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Error::TypeMismatch(_))
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

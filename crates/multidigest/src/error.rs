//! Error types for the facade.

use multidigest_core::CodecError;
use thiserror::Error;

/// Errors that can occur during facade operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MultidigestError {
    /// The envelope or its inputs were rejected by the codec.
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),

    /// Application codes are disabled by configuration.
    #[error("application code {0:#04x} rejected by configuration")]
    ApplicationCodeRejected(u8),

    /// Digest is longer than the configured maximum.
    #[error("digest of {length} bytes exceeds configured maximum of {max}")]
    DigestTooLong { length: usize, max: u8 },
}

impl MultidigestError {
    /// The underlying codec rejection, if this error came from the codec.
    pub fn codec(&self) -> Option<&CodecError> {
        match self {
            Self::Codec(e) => Some(e),
            _ => None,
        }
    }
}

/// Result type for facade operations.
pub type Result<T> = std::result::Result<T, MultidigestError>;

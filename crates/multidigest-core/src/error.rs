//! Error types for the multidigest codec.

use thiserror::Error;

/// Every way an encode, decode, coerce or validate call can reject its input.
///
/// Each variant is a distinct, terminal rejection of a single input. None of
/// them are retryable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("multihash encode requires at least two args: digest, code")]
    MissingArguments,

    #[error("hash function code should be a number or a name")]
    InvalidCodeType,

    #[error("unrecognized hash function named: {0}")]
    UnknownHashName(String),

    #[error("unrecognized function code: {0}")]
    UnrecognizedCode(i64),

    #[error("digest should be a byte sequence")]
    InvalidDigestType,

    #[error("digest length should be equal to specified length: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("digest too long: {0} bytes, supports up to 127")]
    LengthTooLarge(usize),

    #[error("multihash must be a byte sequence")]
    NotAByteSequence,

    #[error("multihash too short: {0} bytes, must be at least 3")]
    TooShort(usize),

    #[error("multihash too long: {0} bytes, must be at most 129")]
    TooLong(usize),

    #[error("multihash unknown function code: {0:#04x}")]
    UnknownFunctionCode(u8),

    #[error("multihash length inconsistent: declared {declared}, found {actual} digest bytes")]
    LengthInconsistent { declared: u8, actual: usize },
}

/// Result type for codec operations.
pub type Result<T> = std::result::Result<T, CodecError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_function_code_display_is_hex() {
        let err = CodecError::UnknownFunctionCode(0x99);
        assert_eq!(err.to_string(), "multihash unknown function code: 0x99");
    }

    #[test]
    fn test_length_mismatch_display() {
        let err = CodecError::LengthMismatch {
            expected: 5,
            actual: 20,
        };
        assert!(err.to_string().contains("expected 5, got 20"));
    }
}

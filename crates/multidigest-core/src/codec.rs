//! Envelope encoding, decoding and validation.
//!
//! Wire format:
//!
//! ```text
//! byte 0       : function code (0-255)
//! byte 1       : digest length L (0-127)
//! bytes 2..2+L : raw digest bytes
//! ```
//!
//! The high bit of the length byte is reserved, which caps digests at 127
//! bytes and envelopes at 129.

use bytes::{BufMut, Bytes, BytesMut};

use crate::error::{CodecError, Result};
use crate::registry;
use crate::types::{DecodedRecord, HashFunctionRef, Multihash};

/// Longest digest an envelope can carry.
pub const MAX_DIGEST_LENGTH: usize = 127;

/// Shortest well-formed envelope.
pub const MIN_ENVELOPE_LENGTH: usize = 3;

/// Longest well-formed envelope.
pub const MAX_ENVELOPE_LENGTH: usize = MAX_DIGEST_LENGTH + 2;

/// Resolve a hash function designator to its numeric code.
pub fn coerce_code(hashfn: &HashFunctionRef) -> Result<u8> {
    match hashfn {
        HashFunctionRef::Name(name) if name.is_empty() => Err(CodecError::MissingArguments),
        HashFunctionRef::Name(name) => registry::name_to_code(name)
            .ok_or_else(|| CodecError::UnknownHashName(name.clone())),
        HashFunctionRef::Code(code) if registry::is_valid_code(*code) => Ok(*code),
        HashFunctionRef::Code(code) => Err(CodecError::UnrecognizedCode((*code).into())),
    }
}

/// Wrap a digest in an envelope.
///
/// `length` is only a self-check: `None` or `Some(0)` means "use the
/// digest's length", anything else must equal it.
pub fn encode(
    digest: &[u8],
    hashfn: impl Into<HashFunctionRef>,
    length: Option<usize>,
) -> Result<Multihash> {
    if digest.is_empty() {
        return Err(CodecError::MissingArguments);
    }

    let code = coerce_code(&hashfn.into())?;

    let length = match length {
        None | Some(0) => digest.len(),
        Some(expected) if expected != digest.len() => {
            return Err(CodecError::LengthMismatch {
                expected,
                actual: digest.len(),
            });
        }
        Some(expected) => expected,
    };

    if length > MAX_DIGEST_LENGTH {
        return Err(CodecError::LengthTooLarge(length));
    }

    let mut buf = BytesMut::with_capacity(length + 2);
    buf.put_u8(code);
    // Bounded by MAX_DIGEST_LENGTH above.
    buf.put_u8(length as u8);
    buf.put_slice(digest);

    Ok(Multihash::from_validated(buf.freeze()))
}

/// Check an envelope's structure.
///
/// Returns the first failed check, in order: too short, too long, unknown
/// function code, inconsistent length. `None` means well-formed.
pub fn validate(envelope: &[u8]) -> Option<CodecError> {
    if envelope.len() < MIN_ENVELOPE_LENGTH {
        return Some(CodecError::TooShort(envelope.len()));
    }

    if envelope.len() > MAX_ENVELOPE_LENGTH {
        return Some(CodecError::TooLong(envelope.len()));
    }

    let code = envelope[0];
    if !registry::is_valid_code(code) {
        return Some(CodecError::UnknownFunctionCode(code));
    }

    let declared = envelope[1];
    let actual = envelope.len() - 2;
    if actual != usize::from(declared) {
        return Some(CodecError::LengthInconsistent { declared, actual });
    }

    None
}

/// Split an envelope into its components, copying the digest.
pub fn decode(envelope: &[u8]) -> Result<DecodedRecord> {
    decode_bytes(Bytes::copy_from_slice(envelope))
}

/// Split an envelope into its components without copying.
///
/// The returned digest is a view into `envelope`'s buffer.
pub fn decode_bytes(envelope: Bytes) -> Result<DecodedRecord> {
    Ok(Multihash::from_bytes(envelope)?.to_record())
}

/// The validated two-byte `[code, length]` prefix of an envelope.
pub fn prefix(envelope: &[u8]) -> Result<[u8; 2]> {
    match validate(envelope) {
        Some(err) => Err(err),
        None => Ok([envelope[0], envelope[1]]),
    }
}

//! Loosely-typed entry points over JSON values.
//!
//! Callers that receive designators and byte sequences as JSON (a name
//! string or a code number, and arrays of integers in `0..=255`) convert
//! through here. Type errors that the typed API rules out at compile time
//! surface as `InvalidCodeType`, `InvalidDigestType` and `NotAByteSequence`.

use serde_json::Value;

use crate::codec;
use crate::error::{CodecError, Result};
use crate::types::{DecodedRecord, HashFunctionRef, Multihash};

/// Resolve a JSON designator (name string or code number).
pub fn coerce_code_value(hashfn: &Value) -> Result<u8> {
    codec::coerce_code(&hash_function_ref(hashfn)?)
}

/// Encode a JSON digest array under a JSON designator.
///
/// A falsy `length` (`None`, `null`, `false`, `0`, `""`) means "use the
/// digest's length". Any other value must be an integer equal to it.
pub fn encode_value(digest: &Value, hashfn: &Value, length: Option<&Value>) -> Result<Multihash> {
    if is_absent(digest) || is_absent(hashfn) {
        return Err(CodecError::MissingArguments);
    }

    let code = coerce_code_value(hashfn)?;
    let digest = byte_sequence(digest).ok_or(CodecError::InvalidDigestType)?;
    let length = length.and_then(length_value);

    codec::encode(&digest, HashFunctionRef::Code(code), length)
}

/// Validate a JSON envelope array.
pub fn validate_value(envelope: &Value) -> Option<CodecError> {
    match byte_sequence(envelope) {
        Some(bytes) => codec::validate(&bytes),
        None => Some(CodecError::NotAByteSequence),
    }
}

/// Decode a JSON envelope array.
pub fn decode_value(envelope: &Value) -> Result<DecodedRecord> {
    let bytes = byte_sequence(envelope).ok_or(CodecError::NotAByteSequence)?;
    codec::decode_bytes(bytes.into())
}

/// Convert a JSON designator into a typed one.
///
/// Any number is accepted here; numbers that are not a registered or
/// application code fail later as `UnrecognizedCode`.
pub fn hash_function_ref(value: &Value) -> Result<HashFunctionRef> {
    match value {
        Value::String(name) => Ok(HashFunctionRef::Name(name.clone())),
        Value::Number(n) => match n.as_i64().map(u8::try_from) {
            Some(Ok(code)) => Ok(HashFunctionRef::Code(code)),
            Some(Err(_)) => Err(CodecError::UnrecognizedCode(n.as_i64().unwrap_or_default())),
            // Fractional or beyond i64.
            None => Err(CodecError::UnrecognizedCode(-1)),
        },
        _ => Err(CodecError::InvalidCodeType),
    }
}

fn is_absent(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        _ => false,
    }
}

fn byte_sequence(value: &Value) -> Option<Vec<u8>> {
    value
        .as_array()?
        .iter()
        .map(|item| item.as_u64().and_then(|b| u8::try_from(b).ok()))
        .collect()
}

/// Interpret a JSON length self-check. `None` means "not provided".
///
/// Values that are not a non-negative integer can never equal a digest
/// length; they map to `usize::MAX` and fail as `LengthMismatch`.
fn length_value(value: &Value) -> Option<usize> {
    let expected = match value {
        Value::Null | Value::Bool(false) => return None,
        Value::String(s) if s.is_empty() => return None,
        Value::Number(n) => match (n.as_u64(), n.as_f64()) {
            (Some(0), _) => return None,
            (Some(n), _) => usize::try_from(n).unwrap_or(usize::MAX),
            (None, Some(f)) if f == 0.0 => return None,
            (None, Some(f)) if f > 0.0 && f.fract() == 0.0 => f as usize,
            _ => usize::MAX,
        },
        _ => usize::MAX,
    };
    Some(expected)
}

//! Single entry point serving both directions.

use multidigest_core::{CodecError, DecodedRecord, HashFunctionRef, Multihash};

/// Outcome of [`multidigest`]: which direction ran, and its result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatched {
    /// `hashfn` was given; the input was treated as a digest.
    Encoded(Multihash),
    /// No `hashfn`; the input was treated as an envelope.
    Decoded(DecodedRecord),
}

impl Dispatched {
    /// The encoded envelope, if this was an encode.
    pub fn encoded(self) -> Option<Multihash> {
        match self {
            Self::Encoded(mh) => Some(mh),
            Self::Decoded(_) => None,
        }
    }

    /// The decoded record, if this was a decode.
    pub fn decoded(self) -> Option<DecodedRecord> {
        match self {
            Self::Decoded(record) => Some(record),
            Self::Encoded(_) => None,
        }
    }
}

/// Encode `input` when `hashfn` is given, otherwise decode it.
///
/// Empty input fails with `MissingArguments`. Everything else is the
/// behavior of [`multidigest_core::encode`] or [`multidigest_core::decode`]
/// unchanged.
pub fn multidigest(
    input: &[u8],
    hashfn: Option<HashFunctionRef>,
    length: Option<usize>,
) -> multidigest_core::Result<Dispatched> {
    if input.is_empty() {
        return Err(CodecError::MissingArguments);
    }

    match hashfn {
        Some(hashfn) => {
            tracing::debug!(hashfn = %hashfn, len = input.len(), "dispatching to encode");
            multidigest_core::encode(input, hashfn, length).map(Dispatched::Encoded)
        }
        None => {
            tracing::debug!(len = input.len(), "dispatching to decode");
            multidigest_core::decode(input).map(Dispatched::Decoded)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use multidigest_testkit::generators::{digest, hash_function_ref};
    use proptest::prelude::*;

    #[test]
    fn test_dispatch_encode() {
        let out = multidigest(&[0xaa; 20], Some("sha1".into()), None).unwrap();
        let mh = out.encoded().unwrap();
        assert_eq!(mh.code(), 0x11);
        assert_eq!(mh.length(), 20);
    }

    #[test]
    fn test_dispatch_decode() {
        let out = multidigest(&[0x12, 2, 0xaa, 0xbb], None, None).unwrap();
        let record = out.decoded().unwrap();
        assert_eq!(record.code, 0x12);
        assert_eq!(record.name, Some("sha2-256"));
        assert_eq!(&record.digest[..], &[0xaa, 0xbb]);
    }

    #[test]
    fn test_dispatch_missing_input() {
        assert_eq!(
            multidigest(&[], Some("sha1".into()), None),
            Err(CodecError::MissingArguments)
        );
        assert_eq!(multidigest(&[], None, None), Err(CodecError::MissingArguments));
    }

    #[test]
    fn test_dispatch_ignores_length_when_decoding() {
        // Length only applies to encode.
        let out = multidigest(&[0x12, 1, 0xaa], None, Some(99)).unwrap();
        assert!(matches!(out, Dispatched::Decoded(_)));
    }

    #[test]
    fn test_dispatch_propagates_errors() {
        assert_eq!(
            multidigest(&[1, 2, 3], Some(HashFunctionRef::Code(0x11)), Some(5)),
            Err(CodecError::LengthMismatch {
                expected: 5,
                actual: 3
            })
        );
        assert_eq!(
            multidigest(&[0x11, 1], None, None),
            Err(CodecError::TooShort(2))
        );
    }

    proptest! {
        #[test]
        fn prop_dispatch_roundtrip(hashfn in hash_function_ref(), digest in digest()) {
            let mh = multidigest(&digest, Some(hashfn), None).unwrap().encoded().unwrap();
            let record = multidigest(mh.as_bytes(), None, None).unwrap().decoded().unwrap();
            prop_assert_eq!(record, mh.to_record());
        }
    }
}

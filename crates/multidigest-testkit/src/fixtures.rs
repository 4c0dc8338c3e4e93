//! Test fixtures and helpers.
//!
//! Real digests for feeding the codec. The codec itself never hashes; these
//! exist so tests tag the same bytes a caller would.

use multidigest_core::{encode, CodecError, Multihash};
use sha2::{Digest, Sha256, Sha512};

/// SHA2-256 of `data`.
pub fn sha2_256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(data).into()
}

/// SHA2-512 of `data`.
pub fn sha2_512(data: &[u8]) -> [u8; 64] {
    let mut out = [0u8; 64];
    out.copy_from_slice(&Sha512::digest(data));
    out
}

/// BLAKE3 of `data`.
pub fn blake3(data: &[u8]) -> [u8; 32] {
    *::blake3::hash(data).as_bytes()
}

/// Hash `data` with SHA2-256 and wrap it.
pub fn sha2_256_multihash(data: &[u8]) -> Result<Multihash, CodecError> {
    encode(&sha2_256(data), "sha2-256", None)
}

/// Hash `data` with SHA2-512 and wrap it.
pub fn sha2_512_multihash(data: &[u8]) -> Result<Multihash, CodecError> {
    encode(&sha2_512(data), "sha2-512", None)
}

/// Hash `data` with BLAKE3 and wrap it under an application code.
///
/// BLAKE3 has no registry entry, which makes it a natural application-code
/// payload.
pub fn blake3_app_multihash(code: u8, data: &[u8]) -> Result<Multihash, CodecError> {
    encode(&blake3(data), code, None)
}

/// A spread of well-formed envelopes over every registered code plus an
/// application code.
pub fn sample_envelopes() -> Vec<Multihash> {
    let mut out: Vec<Multihash> = multidigest_core::registry::entries()
        .iter()
        .filter_map(|entry| {
            let digest = vec![entry.code; usize::from(entry.default_length)];
            encode(&digest, entry.code, None).ok()
        })
        .collect();
    out.extend(blake3_app_multihash(0x01, b"sample").ok());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use multidigest_core::decode;

    #[test]
    fn test_sha2_256_known_digest() {
        assert_eq!(
            hex::encode(sha2_256(b"foo")),
            "2c26b46b68ffc68ff99b453c1d30413413422d706483bfa0f98a5e886266e7ae"
        );
    }

    #[test]
    fn test_sha2_256_multihash() {
        let mh = sha2_256_multihash(b"foo").unwrap();
        assert_eq!(
            mh.to_hex(),
            "12202c26b46b68ffc68ff99b453c1d30413413422d706483bfa0f98a5e886266e7ae"
        );
    }

    #[test]
    fn test_sha2_512_multihash() {
        let mh = sha2_512_multihash(b"foo").unwrap();
        assert_eq!(mh.code(), 0x13);
        assert_eq!(mh.length(), 64);
        assert_eq!(mh.digest(), &sha2_512(b"foo"));
    }

    #[test]
    fn test_blake3_app_multihash() {
        let mh = blake3_app_multihash(0x0e, b"data").unwrap();
        let record = decode(mh.as_bytes()).unwrap();
        assert_eq!(record.code, 0x0e);
        assert_eq!(record.name, None);
        assert_eq!(&record.digest[..], &blake3(b"data"));

        assert_eq!(
            blake3_app_multihash(0x10, b"data"),
            Err(CodecError::UnrecognizedCode(0x10))
        );
    }

    #[test]
    fn test_sample_envelopes() {
        let samples = sample_envelopes();
        assert_eq!(samples.len(), multidigest_core::registry::entries().len() + 1);
        for mh in samples {
            assert!(multidigest_core::validate(mh.as_bytes()).is_none());
        }
    }
}

//! Strong type definitions for the multidigest codec.

use bytes::Bytes;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::codec;
use crate::error::CodecError;
use crate::registry;

/// Designates a hash function either by registry name or by numeric code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HashFunctionRef {
    /// A registry name such as `sha2-256`.
    Name(String),
    /// A function code, registered or application-defined.
    Code(u8),
}

impl From<u8> for HashFunctionRef {
    fn from(code: u8) -> Self {
        Self::Code(code)
    }
}

impl From<&str> for HashFunctionRef {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for HashFunctionRef {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

/// `0x`-prefixed hex and plain decimal that fit in a byte parse as codes;
/// everything else is taken as a name.
impl FromStr for HashFunctionRef {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            Some(hex) if !hex.is_empty() && hex.bytes().all(|b| b.is_ascii_hexdigit()) => {
                u8::from_str_radix(hex, 16).ok()
            }
            Some(_) => None,
            None if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) => s.parse().ok(),
            None => None,
        };
        Ok(match code {
            Some(code) => Self::Code(code),
            None => Self::Name(s.to_string()),
        })
    }
}

impl fmt::Display for HashFunctionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => f.write_str(name),
            Self::Code(code) => write!(f, "{:#04x}", code),
        }
    }
}

/// The components of a decoded envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedRecord {
    /// Function code (envelope byte 0).
    pub code: u8,
    /// Registry name, `None` for application codes.
    pub name: Option<&'static str>,
    /// Declared digest length (envelope byte 1).
    pub length: u8,
    /// Exactly `length` digest bytes.
    pub digest: Bytes,
}

/// A validated envelope: `[code][length][digest]`.
///
/// Only constructible from bytes that pass [`codec::validate`], so the
/// accessors never need to re-check structure.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Multihash(Bytes);

impl Multihash {
    /// Validate and wrap an encoded envelope.
    pub fn from_bytes(bytes: impl Into<Bytes>) -> Result<Self, CodecError> {
        let bytes = bytes.into();
        match codec::validate(&bytes) {
            Some(err) => Err(err),
            None => Ok(Self(bytes)),
        }
    }

    /// Wrap bytes already known to be a valid envelope.
    pub(crate) fn from_validated(bytes: Bytes) -> Self {
        debug_assert!(codec::validate(&bytes).is_none());
        Self(bytes)
    }

    /// Parse from hex string.
    pub fn from_hex(s: &str) -> Result<Self, CodecError> {
        let bytes = hex::decode(s).map_err(|_| CodecError::NotAByteSequence)?;
        Self::from_bytes(bytes)
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    /// The function code.
    pub fn code(&self) -> u8 {
        self.0[0]
    }

    /// The registry name, if the code is registered.
    pub fn name(&self) -> Option<&'static str> {
        registry::code_to_name(self.code())
    }

    /// The declared digest length.
    pub fn length(&self) -> u8 {
        self.0[1]
    }

    /// The raw digest bytes.
    pub fn digest(&self) -> &[u8] {
        &self.0[2..]
    }

    /// The whole envelope.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consume into the underlying buffer.
    pub fn into_bytes(self) -> Bytes {
        self.0
    }

    /// Split into a [`DecodedRecord`] sharing this envelope's buffer.
    pub fn to_record(&self) -> DecodedRecord {
        DecodedRecord {
            code: self.code(),
            name: self.name(),
            length: self.length(),
            digest: self.0.slice(2..),
        }
    }
}

impl fmt::Debug for Multihash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digest = hex::encode(self.digest());
        let short = &digest[..digest.len().min(16)];
        match self.name() {
            Some(name) => write!(f, "Multihash({}:{})", name, short),
            None => write!(f, "Multihash({:#04x}:{})", self.code(), short),
        }
    }
}

impl fmt::Display for Multihash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl AsRef<[u8]> for Multihash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl TryFrom<&[u8]> for Multihash {
    type Error = CodecError;

    fn try_from(slice: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(Bytes::copy_from_slice(slice))
    }
}

impl TryFrom<Vec<u8>> for Multihash {
    type Error = CodecError;

    fn try_from(vec: Vec<u8>) -> Result<Self, Self::Error> {
        Self::from_bytes(vec)
    }
}

impl From<Multihash> for Bytes {
    fn from(mh: Multihash) -> Self {
        mh.0
    }
}

impl Serialize for Multihash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Multihash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sha1_envelope() -> Vec<u8> {
        let mut bytes = vec![0x11, 20];
        bytes.extend_from_slice(&[0xab; 20]);
        bytes
    }

    #[test]
    fn test_hash_function_ref_from_str() {
        assert_eq!("sha1".parse::<HashFunctionRef>(), Ok(HashFunctionRef::Name("sha1".into())));
        assert_eq!("0x12".parse::<HashFunctionRef>(), Ok(HashFunctionRef::Code(0x12)));
        assert_eq!("18".parse::<HashFunctionRef>(), Ok(HashFunctionRef::Code(18)));
        assert_eq!("300".parse::<HashFunctionRef>(), Ok(HashFunctionRef::Name("300".into())));
        assert_eq!("".parse::<HashFunctionRef>(), Ok(HashFunctionRef::Name(String::new())));
    }

    #[test]
    fn test_hash_function_ref_from_str_rejects_signed_hex() {
        for s in ["0x+5", "0x", "0x-1", "0x 5", "+18"] {
            assert_eq!(s.parse::<HashFunctionRef>(), Ok(HashFunctionRef::Name(s.into())));
        }
        assert_eq!("0XfF".parse::<HashFunctionRef>(), Ok(HashFunctionRef::Code(0xff)));
    }

    #[test]
    fn test_hash_function_ref_from_string() {
        let name = String::from("sha1");
        assert_eq!(HashFunctionRef::from(name), HashFunctionRef::Name("sha1".into()));
    }

    #[test]
    fn test_hash_function_ref_display() {
        assert_eq!(HashFunctionRef::Code(0x12).to_string(), "0x12");
        assert_eq!(HashFunctionRef::from("blake2b").to_string(), "blake2b");
    }

    #[test]
    fn test_multihash_accessors() {
        let mh = Multihash::from_bytes(sha1_envelope()).unwrap();
        assert_eq!(mh.code(), 0x11);
        assert_eq!(mh.name(), Some("sha1"));
        assert_eq!(mh.length(), 20);
        assert_eq!(mh.digest(), &[0xab; 20]);
        assert_eq!(mh.as_bytes().len(), 22);
    }

    #[test]
    fn test_multihash_rejects_invalid() {
        let err = Multihash::from_bytes(vec![0x11, 20, 0xab]).unwrap_err();
        assert!(matches!(err, CodecError::LengthInconsistent { .. }));
    }

    #[test]
    fn test_multihash_hex_roundtrip() {
        let mh = Multihash::from_bytes(sha1_envelope()).unwrap();
        let hex = mh.to_hex();
        assert!(hex.starts_with("1114"));
        let recovered = Multihash::from_hex(&hex).unwrap();
        assert_eq!(mh, recovered);
    }

    #[test]
    fn test_multihash_from_bad_hex() {
        assert_eq!(
            Multihash::from_hex("zz"),
            Err(CodecError::NotAByteSequence)
        );
    }

    #[test]
    fn test_multihash_debug() {
        let mh = Multihash::from_bytes(sha1_envelope()).unwrap();
        assert_eq!(format!("{:?}", mh), "Multihash(sha1:abababababababab)");

        let app = Multihash::from_bytes(vec![0x05, 1, 0xff]).unwrap();
        assert_eq!(format!("{:?}", app), "Multihash(0x05:ff)");
    }

    #[test]
    fn test_multihash_conversions() {
        let envelope = sha1_envelope();

        let from_slice = Multihash::try_from(&envelope[..]).unwrap();
        let from_vec = Multihash::try_from(envelope.clone()).unwrap();
        assert_eq!(from_slice, from_vec);
        assert_eq!(from_slice.as_ref(), &envelope[..]);

        assert_eq!(from_slice.into_bytes(), Bytes::from(envelope.clone()));
        assert_eq!(Bytes::from(from_vec), Bytes::from(envelope));
    }

    #[test]
    fn test_multihash_try_from_rejects_invalid() {
        assert_eq!(
            Multihash::try_from(&[0x11u8, 1][..]),
            Err(CodecError::TooShort(2))
        );
        assert_eq!(
            Multihash::try_from(vec![0x99u8, 1, 0]),
            Err(CodecError::UnknownFunctionCode(0x99))
        );
    }

    #[test]
    fn test_to_record_shares_digest() {
        let mh = Multihash::from_bytes(sha1_envelope()).unwrap();
        let record = mh.to_record();
        assert_eq!(record.code, 0x11);
        assert_eq!(record.name, Some("sha1"));
        assert_eq!(record.length, 20);
        assert_eq!(&record.digest[..], mh.digest());
    }
}

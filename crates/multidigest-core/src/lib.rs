//! # Multidigest Core
//!
//! A self-describing envelope for cryptographic digests:
//!
//! ```text
//! [code: 1 byte][length: 1 byte][digest: length bytes]
//! ```
//!
//! This crate never hashes anything. It tags digests computed elsewhere and
//! checks envelopes for well-formedness. No I/O, no shared mutable state.
//!
//! ## Key Types
//!
//! - [`Multihash`] - A validated envelope
//! - [`DecodedRecord`] - The components of a decoded envelope
//! - [`HashFunctionRef`] - A hash function named by string or by code
//! - [`CodecError`] - Every rejection the codec can report
//!
//! ## Function Codes
//!
//! A code is valid if it appears in the [`registry`] or is an application
//! code (`0x01..=0x0f`) reserved for caller-defined use.
//!
//! ```rust
//! use multidigest_core::{decode, encode};
//!
//! let digest = [0xab; 20];
//! let mh = encode(&digest, "sha1", None).unwrap();
//! assert_eq!(&mh.as_bytes()[..2], &[0x11, 20]);
//!
//! let record = decode(mh.as_bytes()).unwrap();
//! assert_eq!(record.name, Some("sha1"));
//! ```

pub mod codec;
pub mod dynamic;
pub mod error;
pub mod registry;
pub mod types;

pub use codec::{
    coerce_code, decode, decode_bytes, encode, prefix, validate, MAX_DIGEST_LENGTH,
    MAX_ENVELOPE_LENGTH, MIN_ENVELOPE_LENGTH,
};
pub use error::{CodecError, Result};
pub use registry::{
    code_to_default_length, code_to_name, is_app_code, is_valid_code, name_to_code,
    RegistryEntry,
};
pub use types::{DecodedRecord, HashFunctionRef, Multihash};

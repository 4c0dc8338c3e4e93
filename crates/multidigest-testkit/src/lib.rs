//! # Multidigest Testkit
//!
//! Testing utilities for the multidigest codec.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Fixed inputs with the exact envelope or rejection they must produce
//! - **Generators**: Proptest strategies for codes, digests and envelopes
//! - **Fixtures**: Real SHA2 and BLAKE3 digests to wrap
//!
//! ## Golden Vectors
//!
//! ```rust
//! use multidigest_testkit::vectors::failing_vectors;
//!
//! assert!(failing_vectors().is_empty());
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use multidigest_testkit::generators::{digest, valid_code};
//!
//! proptest! {
//!     #[test]
//!     fn encode_decode_roundtrip(code in valid_code(), digest in digest()) {
//!         let mh = multidigest_core::encode(&digest, code, None).unwrap();
//!         let record = multidigest_core::decode(mh.as_bytes()).unwrap();
//!         prop_assert_eq!(&record.digest[..], &digest[..]);
//!     }
//! }
//! ```
//!
//! ## Fixtures
//!
//! ```rust
//! use multidigest_testkit::fixtures::sha2_256_multihash;
//!
//! let mh = sha2_256_multihash(b"foo").unwrap();
//! assert_eq!(mh.name(), Some("sha2-256"));
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{blake3_app_multihash, sample_envelopes, sha2_256_multihash, sha2_512_multihash};
pub use generators::{digest, envelope, hash_function_ref, valid_code};
pub use vectors::{encode_vectors, failing_vectors, validate_vectors, EncodeVector, ValidateVector};

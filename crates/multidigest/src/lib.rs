//! # Multidigest
//!
//! Self-describing digests: a raw cryptographic digest prefixed with the
//! code of the function that produced it and its length, so it can be
//! interpreted without outside context.
//!
//! ## Overview
//!
//! - **Encode**: tag a digest with a function name or code
//! - **Decode**: split an envelope into code, name, length and digest
//! - **Validate**: check an envelope without decoding it
//! - **Dispatch**: one call that encodes or decodes depending on arguments
//!
//! The codec never computes digests, and every operation is a pure function
//! over at most 129 bytes.
//!
//! ## Usage
//!
//! ```rust
//! use multidigest::{multidigest, Dispatched, Multidigest, CodecConfig};
//!
//! // Free functions
//! let mh = multidigest::encode(&[0xab; 32], "sha2-256", None).unwrap();
//! assert_eq!(mh.code(), 0x12);
//!
//! // One entry point for both directions
//! match multidigest(mh.as_bytes(), None, None).unwrap() {
//!     Dispatched::Decoded(record) => assert_eq!(record.name, Some("sha2-256")),
//!     Dispatched::Encoded(_) => unreachable!(),
//! }
//!
//! // A codec that refuses application codes
//! let codec = Multidigest::new(CodecConfig::default().with_application_codes(false));
//! assert!(codec.decode(&[0x05, 1, 0x00]).is_err());
//! ```
//!
//! ## Re-exports
//!
//! - `multidigest::core` - The codec primitives, registry and JSON boundary

pub mod codec;
pub mod dispatch;
pub mod error;

pub use multidigest_core as core;

pub use codec::{CodecConfig, Multidigest};
pub use dispatch::{multidigest, Dispatched};
pub use error::{MultidigestError, Result};

pub use multidigest_core::{
    code_to_default_length, code_to_name, coerce_code, decode, decode_bytes, encode,
    is_app_code, is_valid_code, name_to_code, prefix, registry, validate, CodecError,
    DecodedRecord, HashFunctionRef, Multihash,
};

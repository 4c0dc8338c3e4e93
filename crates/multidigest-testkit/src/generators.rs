//! Proptest generators for property-based testing.

use proptest::prelude::*;

use multidigest_core::registry::{self, APP_CODE_MAX, APP_CODE_MIN};
use multidigest_core::{HashFunctionRef, MAX_DIGEST_LENGTH, MAX_ENVELOPE_LENGTH};

/// Generate a registered function code.
pub fn registered_code() -> impl Strategy<Value = u8> {
    let codes: Vec<u8> = registry::entries().iter().map(|e| e.code).collect();
    prop::sample::select(codes)
}

/// Generate an application code.
pub fn app_code() -> impl Strategy<Value = u8> {
    APP_CODE_MIN..=APP_CODE_MAX
}

/// Generate a registered or application code.
pub fn valid_code() -> impl Strategy<Value = u8> {
    prop_oneof![registered_code(), app_code()]
}

/// Generate a code that is neither registered nor an application code.
pub fn unknown_code() -> impl Strategy<Value = u8> {
    any::<u8>().prop_filter("registered or app code", |c| !registry::is_valid_code(*c))
}

/// Generate a registered name.
pub fn registered_name() -> impl Strategy<Value = &'static str> {
    let names: Vec<&'static str> = registry::entries().iter().map(|e| e.name).collect();
    prop::sample::select(names)
}

/// Generate a designator that resolves: a registered name or a valid code.
pub fn hash_function_ref() -> impl Strategy<Value = HashFunctionRef> {
    prop_oneof![
        registered_name().prop_map(HashFunctionRef::from),
        valid_code().prop_map(HashFunctionRef::Code),
    ]
}

/// Generate a digest that fits in an envelope.
pub fn digest() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 1..=MAX_DIGEST_LENGTH)
}

/// Generate a digest too long for an envelope.
pub fn oversized_digest() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), MAX_DIGEST_LENGTH + 1..=255)
}

/// Generate a well-formed envelope.
pub fn envelope() -> impl Strategy<Value = Vec<u8>> {
    (valid_code(), digest()).prop_map(|(code, digest)| {
        let mut bytes = Vec::with_capacity(digest.len() + 2);
        bytes.push(code);
        bytes.push(digest.len() as u8);
        bytes.extend_from_slice(&digest);
        bytes
    })
}

/// Generate arbitrary bytes in the envelope size range.
pub fn envelope_sized_bytes() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 3..=MAX_ENVELOPE_LENGTH)
}

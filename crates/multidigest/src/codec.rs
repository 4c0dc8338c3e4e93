//! A codec instance carrying acceptance policy.
//!
//! The free functions in [`multidigest_core`] accept every registered and
//! application code. [`Multidigest`] layers a [`CodecConfig`] on top so an
//! embedding application can narrow what it accepts, and logs rejections.

use bytes::Bytes;
use multidigest_core::{
    is_app_code, DecodedRecord, HashFunctionRef, Multihash, MAX_DIGEST_LENGTH,
};
use serde::{Deserialize, Serialize};

use crate::dispatch::Dispatched;
use crate::error::{MultidigestError, Result};

/// Configuration for a [`Multidigest`] codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Whether codes `0x01..=0x0f` are accepted.
    pub allow_application_codes: bool,
    /// Longest digest accepted. Clamped to 127.
    pub max_digest_length: u8,
}

impl CodecConfig {
    /// Set the longest accepted digest, clamped to what the format allows.
    pub fn with_max_digest_length(mut self, max: u8) -> Self {
        self.max_digest_length = max.min(MAX_DIGEST_LENGTH as u8);
        self
    }

    /// Set whether application codes are accepted.
    pub fn with_application_codes(mut self, allow: bool) -> Self {
        self.allow_application_codes = allow;
        self
    }

    fn effective_max(&self) -> u8 {
        self.max_digest_length.min(MAX_DIGEST_LENGTH as u8)
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            allow_application_codes: true,
            max_digest_length: MAX_DIGEST_LENGTH as u8,
        }
    }
}

/// The main codec struct.
///
/// With the default configuration every method behaves exactly like the
/// corresponding free function.
#[derive(Debug, Clone, Default)]
pub struct Multidigest {
    config: CodecConfig,
}

impl Multidigest {
    /// Create a codec with the given configuration.
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Wrap a digest in an envelope.
    pub fn encode(
        &self,
        digest: &[u8],
        hashfn: impl Into<HashFunctionRef>,
        length: Option<usize>,
    ) -> Result<Multihash> {
        let mh = multidigest_core::encode(digest, hashfn, length).map_err(|e| {
            tracing::debug!(error = %e, "encode rejected");
            MultidigestError::from(e)
        })?;
        self.check_policy(&mh)?;
        tracing::trace!(code = mh.code(), length = mh.length(), "encoded");
        Ok(mh)
    }

    /// Decode an envelope, copying the digest.
    pub fn decode(&self, envelope: &[u8]) -> Result<DecodedRecord> {
        self.decode_bytes(Bytes::copy_from_slice(envelope))
    }

    /// Decode an envelope without copying the digest.
    pub fn decode_bytes(&self, envelope: Bytes) -> Result<DecodedRecord> {
        let mh = Multihash::from_bytes(envelope).map_err(|e| {
            tracing::debug!(error = %e, "decode rejected");
            MultidigestError::from(e)
        })?;
        self.check_policy(&mh)?;
        tracing::trace!(code = mh.code(), length = mh.length(), "decoded");
        Ok(mh.to_record())
    }

    /// Check an envelope against the format and this codec's policy.
    pub fn validate(&self, envelope: &[u8]) -> Option<MultidigestError> {
        if let Some(e) = multidigest_core::validate(envelope) {
            return Some(e.into());
        }
        // Structure is valid, so the prefix bytes exist.
        self.policy_violation(envelope[0], usize::from(envelope[1]))
    }

    /// Encode when `hashfn` is given, otherwise decode.
    pub fn dispatch(
        &self,
        input: &[u8],
        hashfn: Option<HashFunctionRef>,
        length: Option<usize>,
    ) -> Result<Dispatched> {
        let dispatched = crate::dispatch::multidigest(input, hashfn, length)?;
        let (code, length) = match &dispatched {
            Dispatched::Encoded(mh) => (mh.code(), usize::from(mh.length())),
            Dispatched::Decoded(record) => (record.code, usize::from(record.length)),
        };
        match self.policy_violation(code, length) {
            Some(e) => Err(e),
            None => Ok(dispatched),
        }
    }

    fn check_policy(&self, mh: &Multihash) -> Result<()> {
        match self.policy_violation(mh.code(), usize::from(mh.length())) {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn policy_violation(&self, code: u8, length: usize) -> Option<MultidigestError> {
        if !self.config.allow_application_codes && is_app_code(code) {
            tracing::warn!(code, "application code rejected by configuration");
            return Some(MultidigestError::ApplicationCodeRejected(code));
        }

        let max = self.config.effective_max();
        if length > usize::from(max) {
            tracing::warn!(length, max, "digest exceeds configured maximum");
            return Some(MultidigestError::DigestTooLong { length, max });
        }

        None
    }
}

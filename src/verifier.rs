//! RSASSA-PSS signature verification.
//!
//! Verification distinguishes two outcomes:
//!
//! - `Ok(true)` / `Ok(false)`: the signature was checked and is valid or not.
//!   Every cryptographic mismatch (wrong length, representative out of range,
//!   malformed padding, digest mismatch) collapses to `Ok(false)`.
//! - `Err(_)`: verification could not be attempted, e.g. an empty signature
//!   or a failed backend self test.

use num_bigint::BigUint;

use crate::backend;
use crate::config::PssConfig;
use crate::digest::{hash, Digest};
use crate::error::Error;
use crate::key::{to_be_padded, PublicKey};
use crate::pss;

/// Verify `signature` over `message` with the given salt length.
pub fn verify(
    key: &PublicKey,
    message: &[u8],
    signature: &[u8],
    salt_len: usize,
) -> Result<bool, Error> {
    verify_digest(key, &hash(message), signature, salt_len)
}

/// Verify `signature` over a precomputed SHA-256 digest.
pub fn verify_digest(
    key: &PublicKey,
    digest: &Digest,
    signature: &[u8],
    salt_len: usize,
) -> Result<bool, Error> {
    backend::init()?;

    if signature.is_empty() {
        return Err(Error::MalformedSignature("signature is empty".into()));
    }

    let k = key.size();
    if signature.len() != k {
        log::debug!(
            "rejecting signature: {} bytes for a {}-byte modulus",
            signature.len(),
            k
        );
        return Ok(false);
    }

    let s = BigUint::from_bytes_be(signature);
    if &s >= key.n() {
        log::debug!("rejecting signature: representative out of range");
        return Ok(false);
    }

    let m = key.raw_public(&s);
    let buf = match to_be_padded(&m, k) {
        Some(buf) => buf,
        None => return Ok(false),
    };

    // EM is one byte shorter than k when the modulus bit length is 1 mod 8.
    let em_len = pss::em_len(key.bits());
    let (prefix, em) = buf.split_at(k - em_len);
    let prefix_clear = prefix.iter().fold(0u8, |acc, b| acc | b) == 0;
    let decoded = pss::decode(em, digest, key.bits(), salt_len).is_ok();

    let valid = prefix_clear & decoded;
    if !valid {
        log::debug!("rejecting signature: PSS check failed");
    }
    Ok(valid)
}

/// A public key bound to a fixed [`PssConfig`].
#[derive(Debug, Clone, Copy)]
pub struct Verifier<'a> {
    key: &'a PublicKey,
    config: PssConfig,
}

impl<'a> Verifier<'a> {
    pub fn new(key: &'a PublicKey) -> Self {
        Self::with_config(key, PssConfig::default())
    }

    pub fn with_config(key: &'a PublicKey, config: PssConfig) -> Self {
        Self { key, config }
    }

    pub fn config(&self) -> &PssConfig {
        &self.config
    }

    pub fn verify(&self, message: &[u8], signature: &[u8]) -> Result<bool, Error> {
        verify(self.key, message, signature, self.config.salt_len)
    }

    pub fn verify_digest(&self, digest: &Digest, signature: &[u8]) -> Result<bool, Error> {
        verify_digest(self.key, digest, signature, self.config.salt_len)
    }
}

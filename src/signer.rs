//! RSASSA-PSS signature generation.

use num_bigint::BigUint;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use crate::backend;
use crate::config::PssConfig;
use crate::digest::{hash, Digest};
use crate::error::Error;
use crate::key::{to_be_padded, PrivateKey};
use crate::pss;
use crate::types::signature::Signature;

/// Sign `message` with a fresh random salt of `salt_len` bytes drawn from the
/// operating system's secure random source.
///
/// # Errors
///
/// - [`Error::Parameter`] if the key is too small for `salt_len`; reported
///   before any randomness is drawn.
/// - [`Error::RandomnessUnavailable`] if the random source fails.
/// - [`Error::InvalidKey`] if the private key does not match its public half.
pub fn sign(key: &PrivateKey, message: &[u8], salt_len: usize) -> Result<Signature, Error> {
    sign_with_rng(&mut OsRng, key, message, salt_len)
}

/// [`sign`] with a caller-supplied random source.
pub fn sign_with_rng<R>(
    rng: &mut R,
    key: &PrivateKey,
    message: &[u8],
    salt_len: usize,
) -> Result<Signature, Error>
where
    R: RngCore + CryptoRng + ?Sized,
{
    sign_digest_with_rng(rng, key, &hash(message), salt_len)
}

/// Sign a precomputed SHA-256 digest of the message.
///
/// The digest is used as `mHash` as-is and is not hashed again.
pub fn sign_digest(key: &PrivateKey, digest: &Digest, salt_len: usize) -> Result<Signature, Error> {
    sign_digest_with_rng(&mut OsRng, key, digest, salt_len)
}

/// [`sign_digest`] with a caller-supplied random source.
pub fn sign_digest_with_rng<R>(
    rng: &mut R,
    key: &PrivateKey,
    digest: &Digest,
    salt_len: usize,
) -> Result<Signature, Error>
where
    R: RngCore + CryptoRng + ?Sized,
{
    backend::init()?;

    let modulus_bits = key.bits();
    pss::check_params(modulus_bits, salt_len)?;

    let mut salt = Zeroizing::new(vec![0u8; salt_len]);
    rng.try_fill_bytes(&mut salt[..])
        .map_err(|e| Error::RandomnessUnavailable(e.to_string()))?;

    let em = pss::encode(digest, modulus_bits, salt_len, &salt[..])?;
    let m = BigUint::from_bytes_be(em.as_bytes());
    let s = key.raw_private(rng, &m)?;

    let bytes = to_be_padded(&s, key.size()).ok_or_else(|| {
        Error::InvalidKey("signature representative does not fit the modulus".into())
    })?;

    log::debug!(
        "signed {}-bit PSS block (salt {} bytes)",
        modulus_bits,
        salt_len
    );
    Ok(Signature::new(bytes))
}

/// A private key bound to a fixed [`PssConfig`].
#[derive(Debug, Clone, Copy)]
pub struct Signer<'a> {
    key: &'a PrivateKey,
    config: PssConfig,
}

impl<'a> Signer<'a> {
    pub fn new(key: &'a PrivateKey) -> Self {
        Self::with_config(key, PssConfig::default())
    }

    pub fn with_config(key: &'a PrivateKey, config: PssConfig) -> Self {
        Self { key, config }
    }

    pub fn config(&self) -> &PssConfig {
        &self.config
    }

    pub fn key(&self) -> &'a PrivateKey {
        self.key
    }

    pub fn sign(&self, message: &[u8]) -> Result<Signature, Error> {
        sign(self.key, message, self.config.salt_len)
    }

    pub fn sign_digest(&self, digest: &Digest) -> Result<Signature, Error> {
        sign_digest(self.key, digest, self.config.salt_len)
    }
}

//! EMSA-PSS encoding and verification (RFC 8017 § 9.1) with SHA-256 and MGF1.
//!
//! The encoded message for a modulus of `modBits` bits is `emLen =
//! ceil((modBits - 1) / 8)` bytes long and is laid out as
//! `maskedDB || H || 0xBC`, where
//!
//! - `H = SHA-256(0x00 * 8 || mHash || salt)`
//! - `DB = 0x00 * (emLen - sLen - hLen - 2) || 0x01 || salt`
//! - `maskedDB = DB XOR MGF1(H, emLen - hLen - 1)` with the bits above
//!   `modBits - 1` cleared.

use std::fmt;

use sha2::{Digest as _, Sha256};
use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::digest::{Digest, DIGEST_LEN};
use crate::error::Error;
use crate::mgf::mgf1_xor;

/// Trailer byte closing every encoded message.
pub const TRAILER: u8 = 0xBC;

const PADDING1: [u8; 8] = [0u8; 8];

/// The PSS-padded block the RSA signing primitive operates on.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct EncodedMessage(Vec<u8>);

impl EncodedMessage {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for EncodedMessage {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for EncodedMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncodedMessage")
            .field("len", &self.0.len())
            .finish()
    }
}

/// Uniform outcome of a failed PSS check. Carries no detail about which
/// check failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerificationFailed;

impl fmt::Display for VerificationFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PSS verification failed")
    }
}

impl std::error::Error for VerificationFailed {}

/// Number of bits of the encoded message for a modulus of `modulus_bits` bits.
fn em_bits(modulus_bits: usize) -> usize {
    modulus_bits.saturating_sub(1)
}

/// Length in bytes of the encoded message for a modulus of `modulus_bits` bits.
pub fn em_len(modulus_bits: usize) -> usize {
    (em_bits(modulus_bits) + 7) / 8
}

/// Mask keeping only the bits of the leading EM byte that lie below the
/// modulus bit boundary.
fn leading_byte_mask(em_len: usize, em_bits: usize) -> u8 {
    0xFF >> (8 * em_len - em_bits)
}

/// Reject key sizes that cannot hold `hLen + sLen + 2` bytes of encoding.
///
/// Must be called before any randomness is drawn for the salt.
pub fn check_params(modulus_bits: usize, salt_len: usize) -> Result<(), Error> {
    let required = salt_len
        .checked_add(DIGEST_LEN + 2)
        .ok_or_else(|| Error::Parameter(format!("salt length {} is too large", salt_len)))?;

    let available = em_len(modulus_bits);
    if available < required {
        return Err(Error::Parameter(format!(
            "{}-bit modulus is too small for a {}-byte salt: encoding needs {} bytes, {} available",
            modulus_bits, salt_len, required, available
        )));
    }
    Ok(())
}

/// `H = SHA-256(padding1 || mHash || salt)`.
fn m_prime_hash(digest: &Digest, salt: &[u8]) -> [u8; DIGEST_LEN] {
    let mut hasher = Sha256::new();
    hasher.update(PADDING1);
    hasher.update(digest.as_bytes());
    hasher.update(salt);
    hasher.finalize().into()
}

/// Build the encoded message for `digest` with the given salt.
///
/// `salt` must be exactly `salt_len` bytes.
pub fn encode(
    digest: &Digest,
    modulus_bits: usize,
    salt_len: usize,
    salt: &[u8],
) -> Result<EncodedMessage, Error> {
    check_params(modulus_bits, salt_len)?;
    if salt.len() != salt_len {
        return Err(Error::Parameter(format!(
            "salt is {} bytes, expected {}",
            salt.len(),
            salt_len
        )));
    }

    let em_bits = em_bits(modulus_bits);
    let em_len = em_len(modulus_bits);
    let ps_len = em_len - salt_len - DIGEST_LEN - 2;

    let mut em = vec![0u8; em_len];
    let (db, tail) = em.split_at_mut(em_len - DIGEST_LEN - 1);

    let h = m_prime_hash(digest, salt);
    tail[..DIGEST_LEN].copy_from_slice(&h);
    tail[DIGEST_LEN] = TRAILER;

    db[ps_len] = 0x01;
    db[ps_len + 1..].copy_from_slice(salt);

    mgf1_xor(db, &h);
    db[0] &= leading_byte_mask(em_len, em_bits);

    Ok(EncodedMessage(em))
}

/// Check a recovered encoded message against `digest`.
///
/// `em` must be exactly `em_len(modulus_bits)` bytes. All checks after the
/// public length checks are evaluated without early exit and folded into a
/// single outcome.
pub fn decode(
    em: &[u8],
    digest: &Digest,
    modulus_bits: usize,
    salt_len: usize,
) -> Result<(), VerificationFailed> {
    let em_bits = em_bits(modulus_bits);
    let em_len = em_len(modulus_bits);

    let required = match salt_len.checked_add(DIGEST_LEN + 2) {
        Some(required) => required,
        None => return Err(VerificationFailed),
    };
    if em.len() != em_len || em_len < required {
        return Err(VerificationFailed);
    }

    let mut em = Zeroizing::new(em.to_vec());
    let mut valid: Choice = em[em_len - 1].ct_eq(&TRAILER);

    let (db, tail) = em.split_at_mut(em_len - DIGEST_LEN - 1);
    let h = &tail[..DIGEST_LEN];

    let mask = leading_byte_mask(em_len, em_bits);
    valid &= (db[0] & !mask).ct_eq(&0);

    mgf1_xor(db, h);
    db[0] &= mask;

    let ps_len = em_len - salt_len - DIGEST_LEN - 2;
    for byte in &db[..ps_len] {
        valid &= byte.ct_eq(&0x00);
    }
    valid &= db[ps_len].ct_eq(&0x01);

    let salt = &db[ps_len + 1..];
    let h_prime = m_prime_hash(digest, salt);
    valid &= h_prime[..].ct_eq(h);

    if bool::from(valid) {
        Ok(())
    } else {
        Err(VerificationFailed)
    }
}

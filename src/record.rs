//! Self-describing signature records.
//!
//! A [`SignatureRecord`] pins the key fingerprint and salt length next to the
//! signature so a verifier does not have to guess either.

use chrono::Utc;

use crate::config::PssConfig;
use crate::error::Error;
use crate::key::{PrivateKey, PublicKey};
use crate::keys::calculate_key_id;
use crate::signer::sign;
use crate::types::record::{SignatureRecord, ALGORITHM_RSA_PSS_SHA256};
use crate::types::signature::Signature;
use crate::verifier::verify;

/// Sign `message` and wrap the result in a [`SignatureRecord`].
pub fn create_record(
    key: &PrivateKey,
    message: &[u8],
    config: &PssConfig,
) -> Result<SignatureRecord, Error> {
    let key_id = calculate_key_id(key.public_key())?;
    let signature = sign(key, message, config.salt_len)?;

    Ok(SignatureRecord {
        key_id,
        algorithm: ALGORITHM_RSA_PSS_SHA256.to_string(),
        salt_len: config.salt_len,
        signature: signature.to_base64(),
        signed_at: Utc::now().to_rfc3339(),
    })
}

/// Verify a record against `message` and the expected public key.
///
/// A record naming a different key or algorithm is an invalid signature
/// (`Ok(false)`); an undecodable signature field is an error.
pub fn verify_record(
    key: &PublicKey,
    message: &[u8],
    record: &SignatureRecord,
) -> Result<bool, Error> {
    let signature = Signature::from_base64(&record.signature)?;

    if record.algorithm != ALGORITHM_RSA_PSS_SHA256 {
        log::debug!("rejecting record: unsupported algorithm {}", record.algorithm);
        return Ok(false);
    }

    let key_id = calculate_key_id(key)?;
    if record.key_id != key_id {
        log::debug!("rejecting record: signed by {}, expected {}", record.key_id, key_id);
        return Ok(false);
    }

    verify(key, message, signature.as_bytes(), record.salt_len)
}

//! SHA-256 digest engine.

use sha2::{Digest as _, Sha256};
use std::fmt;

use crate::error::Error;

/// Output length of the digest in bytes.
pub const DIGEST_LEN: usize = 32;

/// A SHA-256 message digest.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    /// Wrap a precomputed digest.
    pub fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    /// Parse a digest from a slice, which must be exactly 32 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, Error> {
        let arr: [u8; DIGEST_LEN] = bytes.try_into().map_err(|_| {
            Error::Parameter(format!(
                "digest must be {} bytes, got {}",
                DIGEST_LEN,
                bytes.len()
            ))
        })?;
        Ok(Self(arr))
    }

    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.to_hex())
    }
}

/// Hash an arbitrary byte sequence.
pub fn hash(message: &[u8]) -> Digest {
    let mut hasher = Sha256::new();
    hasher.update(message);
    Digest(hasher.finalize().into())
}

/// Incremental digest computation.
///
/// Accepts any number of [`update`](Self::update) calls followed by a single
/// [`finalize`](Self::finalize). Once finalized the context is spent: further
/// updates or finalizations fail with [`Error::Misuse`].
#[derive(Clone)]
pub struct DigestContext {
    hasher: Option<Sha256>,
}

impl DigestContext {
    pub fn new() -> Self {
        Self {
            hasher: Some(Sha256::new()),
        }
    }

    /// Absorb more message bytes.
    pub fn update(&mut self, data: &[u8]) -> Result<(), Error> {
        match self.hasher.as_mut() {
            Some(hasher) => {
                hasher.update(data);
                Ok(())
            }
            None => Err(Error::Misuse("digest context updated after finalize")),
        }
    }

    /// Produce the digest and retire the context.
    pub fn finalize(&mut self) -> Result<Digest, Error> {
        self.hasher
            .take()
            .map(|hasher| Digest(hasher.finalize().into()))
            .ok_or(Error::Misuse("digest context finalized twice"))
    }

    pub fn is_finalized(&self) -> bool {
        self.hasher.is_none()
    }
}

impl Default for DigestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DigestContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DigestContext")
            .field("finalized", &self.is_finalized())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use hex_literal::hex;

    #[test]
    fn test_known_answers() {
        assert_eq!(
            hash(b"abc").as_bytes(),
            &hex!("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad")
        );
        assert_eq!(
            hash(b"").as_bytes(),
            &hex!("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855")
        );
    }

    #[test]
    fn test_deterministic_and_distinct() {
        assert_eq!(hash(b"test-vector"), hash(b"test-vector"));
        assert_ne!(hash(b"test-vector"), hash(b"test-vectoR"));
    }

    #[test]
    fn test_streaming_matches_one_shot() {
        let mut ctx = DigestContext::new();
        ctx.update(b"test").unwrap();
        ctx.update(b"-").unwrap();
        ctx.update(b"").unwrap();
        ctx.update(b"vector").unwrap();
        let digest = ctx.finalize().unwrap();
        assert_eq!(digest, hash(b"test-vector"));
        assert_eq!(
            digest.to_hex(),
            "c5e4c7f2fb7050ab1ca3073da8076e91560b2cc9ac4fe29792a2422e20971302"
        );
    }

    #[test]
    fn test_update_after_finalize_is_misuse() {
        let mut ctx = DigestContext::new();
        ctx.update(b"data").unwrap();
        ctx.finalize().unwrap();
        assert!(ctx.is_finalized());

        let err = ctx.update(b"more").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Misuse);
        let err = ctx.finalize().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Misuse);
    }

    #[test]
    fn test_from_slice_length() {
        assert!(Digest::from_slice(&[0u8; 31]).is_err());
        let d = Digest::from_slice(&[7u8; 32]).unwrap();
        assert_eq!(d.as_bytes(), &[7u8; 32]);
    }
}

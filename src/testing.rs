//! Shared fixtures and deterministic randomness for unit tests.

use rand::{CryptoRng, RngCore};

use crate::key::{PrivateKey, PublicKey};
use crate::keys;

pub const PRIVATE_2048_PEM: &str = include_str!("../testdata/rsa2048_private.pem");
pub const PRIVATE_2048_PKCS1_PEM: &str = include_str!("../testdata/rsa2048_private_pkcs1.pem");
pub const PUBLIC_2048_PEM: &str = include_str!("../testdata/rsa2048_public.pem");
pub const PUBLIC_2048_PKCS1_PEM: &str = include_str!("../testdata/rsa2048_public_pkcs1.pem");
pub const PRIVATE_1025_PEM: &str = include_str!("../testdata/rsa1025_private.pem");
pub const PRIVATE_4608_PEM: &str = include_str!("../testdata/rsa4608_private.pem");
pub const PUBLIC_4608_PEM: &str = include_str!("../testdata/rsa4608_public.pem");
pub const PRIVATE_512_PEM: &str = include_str!("../testdata/rsa512_private.pem");

/// OpenSSL `dgst -sha256 -sigopt rsa_padding_mode:pss -sigopt rsa_pss_saltlen:32`
/// over `b"test-vector"` with the 2048-bit key.
pub const OPENSSL_SIG_2048_SALT32: &[u8] = include_bytes!("../testdata/rsa2048_pss_salt32.sig");
/// Same as above with `rsa_pss_saltlen:0`; deterministic.
pub const OPENSSL_SIG_2048_SALT0: &[u8] = include_bytes!("../testdata/rsa2048_pss_salt0.sig");
/// Salt length 0 over the 32-byte file `SHA-256(b"test-vector")`, so the
/// signed digest is `SHA-256(SHA-256(b"test-vector"))`.
pub const OPENSSL_SIG_2048_SALT0_PREHASHED: &[u8] =
    include_bytes!("../testdata/rsa2048_pss_salt0_prehashed.sig");
/// Salt length 32 over `b"test-vector"` with the 4608-bit key.
pub const OPENSSL_SIG_4608_SALT32: &[u8] = include_bytes!("../testdata/rsa4608_pss_salt32.sig");
/// Salt length 0 with the 1025-bit key.
pub const OPENSSL_SIG_1025_SALT0: &[u8] = include_bytes!("../testdata/rsa1025_pss_salt0.sig");
/// Salt of 32 bytes of `0x5a` over `b"test-vector"` with the 2048-bit key,
/// computed by an independent reference implementation.
pub const REFERENCE_SIG_2048_FIXED_SALT: &[u8] =
    include_bytes!("../testdata/rsa2048_pss_fixed_salt.sig");

pub const TEST_MESSAGE: &[u8] = b"test-vector";

pub fn private_2048() -> PrivateKey {
    keys::load_private_key_pem(PRIVATE_2048_PEM).unwrap()
}

pub fn public_2048() -> PublicKey {
    keys::load_public_key_pem(PUBLIC_2048_PEM).unwrap()
}

pub fn private_1025() -> PrivateKey {
    keys::load_private_key_pem(PRIVATE_1025_PEM).unwrap()
}

pub fn private_4608() -> PrivateKey {
    keys::load_private_key_pem(PRIVATE_4608_PEM).unwrap()
}

pub fn public_4608() -> PublicKey {
    keys::load_public_key_pem(PUBLIC_4608_PEM).unwrap()
}

pub fn private_512() -> PrivateKey {
    keys::load_private_key_pem(PRIVATE_512_PEM).unwrap()
}

/// Fills every request with the same non-zero byte.
pub struct FixedRng(u8);

impl FixedRng {
    pub fn new(byte: u8) -> Self {
        assert_ne!(byte, 0, "an all-zero source never yields a blinding factor");
        Self(byte)
    }
}

impl RngCore for FixedRng {
    fn next_u32(&mut self) -> u32 {
        u32::from_ne_bytes([self.0; 4])
    }

    fn next_u64(&mut self) -> u64 {
        u64::from_ne_bytes([self.0; 8])
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(self.0);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl CryptoRng for FixedRng {}

/// Reports success but only ever yields zero bytes.
#[derive(Default)]
pub struct ZeroRng {
    pub calls: usize,
}

impl RngCore for ZeroRng {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        0
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.calls += 1;
        dest.fill(0);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl CryptoRng for ZeroRng {}

/// An entropy source that is permanently offline and counts how often it
/// was asked for bytes.
#[derive(Default)]
pub struct FailingRng {
    pub calls: usize,
}

impl RngCore for FailingRng {
    fn next_u32(&mut self) -> u32 {
        panic!("FailingRng::next_u32")
    }

    fn next_u64(&mut self) -> u64 {
        panic!("FailingRng::next_u64")
    }

    fn fill_bytes(&mut self, _dest: &mut [u8]) {
        panic!("FailingRng::fill_bytes")
    }

    fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand::Error> {
        self.calls += 1;
        Err(rand::Error::new("entropy source offline"))
    }
}

impl CryptoRng for FailingRng {}

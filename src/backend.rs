//! Process-wide, one-time initialization of the signature backend.
//!
//! [`init`] runs known-answer self tests of the digest and mask generation
//! function exactly once per process and caches the outcome. Signing and
//! verification call it on entry, so explicit initialization is optional and
//! there is no ordering requirement between threads or call sites.

use std::sync::OnceLock;

use crate::digest::{hash, DigestContext};
use crate::error::Error;
use crate::mgf::mgf1;

static SELF_TEST: OnceLock<Result<(), String>> = OnceLock::new();

const SHA256_ABC: [u8; 32] = [
    0xba, 0x78, 0x16, 0xbf, 0x8f, 0x01, 0xcf, 0xea, 0x41, 0x41, 0x40, 0xde, 0x5d, 0xae, 0x22,
    0x23, 0xb0, 0x03, 0x61, 0xa3, 0x96, 0x17, 0x7a, 0x9c, 0xb4, 0x10, 0xff, 0x61, 0xf2, 0x00,
    0x15, 0xad,
];

const MGF1_SEED_PREFIX: [u8; 8] = [0x33, 0x6f, 0x28, 0xa0, 0x22, 0x19, 0x39, 0x39];

/// Initialize the backend, running the self tests on first call.
pub fn init() -> Result<(), Error> {
    SELF_TEST
        .get_or_init(|| {
            let outcome = self_test();
            match &outcome {
                Ok(()) => log::debug!("signature backend initialized"),
                Err(e) => log::error!("signature backend self test failed: {}", e),
            }
            outcome
        })
        .clone()
        .map_err(Error::SelfTest)
}

/// Whether [`init`] has already run (successfully or not).
pub fn is_initialized() -> bool {
    SELF_TEST.get().is_some()
}

fn self_test() -> Result<(), String> {
    if hash(b"abc").as_bytes() != &SHA256_ABC {
        return Err("SHA-256 known answer mismatch".into());
    }

    let mut ctx = DigestContext::new();
    for part in [&b"a"[..], b"", b"bc"] {
        ctx.update(part).map_err(|e| e.to_string())?;
    }
    let streamed = ctx.finalize().map_err(|e| e.to_string())?;
    if streamed.as_bytes() != &SHA256_ABC {
        return Err("streaming SHA-256 known answer mismatch".into());
    }

    let mask = mgf1(b"seed", 40);
    if mask.len() != 40 || mask[..8] != MGF1_SEED_PREFIX {
        return Err("MGF1 known answer mismatch".into());
    }

    Ok(())
}

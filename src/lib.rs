//! # pss-sign
//!
//! RSASSA-PSS signature generation and verification over SHA-256 with MGF1.
//!
//! The crate implements the EMSA-PSS encoding, the RSA signing and
//! verification primitives, and a thin layer for loading PEM keys and
//! reading/writing raw signature files. Key generation is out of scope: keys
//! are supplied pre-formed.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pss_sign::keys::{load_private_key_file, load_public_key_file};
//! use pss_sign::{sign, verify, DEFAULT_SALT_LEN};
//! use std::path::Path;
//!
//! let private_key = load_private_key_file(Path::new("private_key.pem")).unwrap();
//! let public_key = load_public_key_file(Path::new("public_key.pem")).unwrap();
//!
//! let signature = sign(&private_key, b"test-vector", DEFAULT_SALT_LEN).unwrap();
//! assert_eq!(signature.len(), private_key.size());
//!
//! let valid = verify(&public_key, b"test-vector", signature.as_bytes(), DEFAULT_SALT_LEN).unwrap();
//! assert!(valid);
//! ```
//!
//! ## Salt length
//!
//! The salt length is an explicit parameter of every operation. Verification
//! only succeeds with the salt length used at signing time; the default of 32
//! bytes matches OpenSSL's `-sigopt rsa_pss_saltlen:32`.
//!
//! ## Error Handling
//!
//! Fallible operations return `Result<T, Error>`. Verification returns
//! `Ok(false)` for any signature that does not check out, and `Err` only when
//! verification could not be attempted. See [`ErrorKind`] for the taxonomy.

pub mod backend;
pub mod config;
pub mod digest;
pub mod error;
pub mod io;
pub mod key;
pub mod keys;
pub mod mgf;
pub mod pss;
pub mod record;
pub mod signer;
pub mod types;
pub mod verifier;

#[cfg(test)]
mod testing;

pub use config::{PssConfig, DEFAULT_SALT_LEN};
pub use digest::{hash, Digest, DigestContext, DIGEST_LEN};
pub use error::{Error, ErrorKind};
pub use key::{PrivateKey, PublicKey};
pub use signer::{sign, sign_digest, Signer};
pub use types::record::SignatureRecord;
pub use types::signature::Signature;
pub use verifier::{verify, verify_digest, Verifier};

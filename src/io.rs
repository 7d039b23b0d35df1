//! Reading messages and reading/writing raw signature files.
//!
//! A signature file holds exactly the `k` signature bytes with no header or
//! encoding, the same layout OpenSSL's `dgst -sign -out` produces.

use std::path::Path;

use crate::error::Error;
use crate::types::signature::Signature;

/// Read a message file in full.
pub fn read_message(path: &Path) -> Result<Vec<u8>, Error> {
    let message = std::fs::read(path)?;
    log::trace!("read {} message bytes from {}", message.len(), path.display());
    Ok(message)
}

/// Read a raw signature file.
///
/// The length is not checked against any key here; verification rejects
/// signatures of the wrong length.
pub fn read_signature(path: &Path) -> Result<Signature, Error> {
    let bytes = std::fs::read(path)?;
    log::trace!("read {}-byte signature from {}", bytes.len(), path.display());
    Ok(Signature::new(bytes))
}

/// Write a raw signature file, replacing any existing file.
pub fn write_signature(path: &Path, signature: &Signature) -> Result<(), Error> {
    std::fs::write(path, signature.as_bytes())?;
    log::debug!(
        "wrote {}-byte signature to {}",
        signature.len(),
        path.display()
    );
    Ok(())
}

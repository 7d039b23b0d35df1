//! MGF1 mask generation over SHA-256.

use sha2::{Digest as _, Sha256};

use crate::digest::DIGEST_LEN;

/// XOR `out` in place with `MGF1(seed, out.len())`.
///
/// Each mask block is `SHA-256(seed || C)` where `C` is a 4-byte big-endian
/// counter starting at zero.
pub fn mgf1_xor(out: &mut [u8], seed: &[u8]) {
    for (counter, chunk) in out.chunks_mut(DIGEST_LEN).enumerate() {
        let mut hasher = Sha256::new();
        hasher.update(seed);
        hasher.update((counter as u32).to_be_bytes());
        let block = hasher.finalize();

        for (o, m) in chunk.iter_mut().zip(block.iter()) {
            *o ^= m;
        }
    }
}

/// Generate a mask of `len` bytes from `seed`.
pub fn mgf1(seed: &[u8], len: usize) -> Vec<u8> {
    let mut mask = vec![0u8; len];
    mgf1_xor(&mut mask, seed);
    mask
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn test_mgf1_known_answer() {
        let mask = mgf1(b"seed", 48);
        assert_eq!(
            mask,
            hex!(
                "336f28a022193939585a1b4edc989f870917f3a5f6ddd16e4fb357084a6bdfc2"
                "73a649427664d03bbb062e4564254884"
            )
        );
    }

    #[test]
    fn test_mgf1_prefix_stable() {
        // Shorter masks are prefixes of longer ones.
        let long = mgf1(b"seed", 100);
        let short = mgf1(b"seed", 33);
        assert_eq!(&long[..33], &short[..]);
        assert!(mgf1(b"seed", 0).is_empty());
    }

    #[test]
    fn test_xor_twice_restores() {
        let original = b"the quick brown fox jumps over the lazy dog".to_vec();
        let mut buf = original.clone();
        mgf1_xor(&mut buf, b"k");
        assert_ne!(buf, original);
        mgf1_xor(&mut buf, b"k");
        assert_eq!(buf, original);
    }
}

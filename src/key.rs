//! RSA key handles and the raw RSA primitives.
//!
//! Keys are validated once at construction and are immutable afterwards, so a
//! single handle can be shared by reference across concurrent sign/verify
//! calls.

use std::fmt;

use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand::{CryptoRng, RngCore};

use crate::error::Error;

/// Public half of an RSA key: modulus `n` and exponent `e`.
#[derive(Clone, PartialEq, Eq)]
pub struct PublicKey {
    n: BigUint,
    e: BigUint,
    size: usize,
}

impl PublicKey {
    /// Build a public key from its modulus and exponent.
    pub fn from_components(n: BigUint, e: BigUint) -> Result<Self, Error> {
        if n.bits() < 2 || !is_odd(&n) {
            return Err(Error::InvalidKey("modulus must be an odd integer > 1".into()));
        }
        if e < BigUint::from(3u8) || !is_odd(&e) {
            return Err(Error::InvalidKey("public exponent must be odd and >= 3".into()));
        }
        if e >= n {
            return Err(Error::InvalidKey(
                "public exponent must be smaller than the modulus".into(),
            ));
        }

        let size = ((n.bits() + 7) / 8) as usize;
        Ok(Self { n, e, size })
    }

    /// Build a public key from big-endian modulus and exponent bytes.
    pub fn from_be_bytes(n: &[u8], e: &[u8]) -> Result<Self, Error> {
        Self::from_components(BigUint::from_bytes_be(n), BigUint::from_bytes_be(e))
    }

    pub fn n(&self) -> &BigUint {
        &self.n
    }

    pub fn e(&self) -> &BigUint {
        &self.e
    }

    /// Modulus length in bytes (`k`); every signature is exactly this long.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Modulus length in bits.
    pub fn bits(&self) -> usize {
        self.n.bits() as usize
    }

    /// RSAVP1: `s^e mod n`. The caller guarantees `s < n`.
    pub(crate) fn raw_public(&self, s: &BigUint) -> BigUint {
        s.modpow(&self.e, &self.n)
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublicKey")
            .field("bits", &self.bits())
            .field("e", &self.e)
            .finish()
    }
}

/// CRT parameters for a two-prime key.
#[derive(Clone)]
struct CrtParams {
    p: BigUint,
    q: BigUint,
    dp: BigUint,
    dq: BigUint,
    qinv: BigUint,
}

impl CrtParams {
    fn new(d: &BigUint, p: BigUint, q: BigUint) -> Self {
        let one = BigUint::one();
        let dp = d % (&p - &one);
        let dq = d % (&q - &one);
        // p is prime, so q^(p-2) is the inverse of q mod p.
        let qinv = (&q % &p).modpow(&(&p - BigUint::from(2u8)), &p);
        Self { p, q, dp, dq, qinv }
    }

    /// Garner recombination of `c^dp mod p` and `c^dq mod q`.
    fn exponentiate(&self, c: &BigUint) -> BigUint {
        let m1 = c.modpow(&self.dp, &self.p);
        let m2 = c.modpow(&self.dq, &self.q);
        let diff = (&m1 + &self.p - (&m2 % &self.p)) % &self.p;
        let h = (&self.qinv * diff) % &self.p;
        m2 + h * &self.q
    }
}

/// Private RSA key handle.
///
/// Holds the public components alongside the private exponent and, when both
/// primes are known, precomputed CRT parameters.
#[derive(Clone)]
pub struct PrivateKey {
    public: PublicKey,
    d: BigUint,
    crt: Option<CrtParams>,
}

impl PrivateKey {
    /// Build a private key from its components.
    ///
    /// `primes` may be empty (no CRT) or hold the two prime factors of `n`.
    /// Keys with more than two primes are accepted and used without CRT.
    pub fn from_components(
        n: BigUint,
        e: BigUint,
        d: BigUint,
        primes: Vec<BigUint>,
    ) -> Result<Self, Error> {
        let public = PublicKey::from_components(n, e)?;

        if d.is_zero() {
            return Err(Error::InvalidKey("key has no private exponent".into()));
        }
        if d >= public.n {
            return Err(Error::InvalidKey(
                "private exponent must be smaller than the modulus".into(),
            ));
        }

        let crt = match <[BigUint; 2]>::try_from(primes) {
            Ok([p, q]) => {
                if p <= BigUint::one() || q <= BigUint::one() || &p * &q != public.n {
                    return Err(Error::InvalidKey(
                        "prime factors do not multiply to the modulus".into(),
                    ));
                }
                Some(CrtParams::new(&d, p, q))
            }
            Err(primes) if primes.is_empty() => None,
            Err(primes) => {
                log::debug!("{}-prime key, signing without CRT", primes.len());
                None
            }
        };

        Ok(Self { public, d, crt })
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    pub fn to_public_key(&self) -> PublicKey {
        self.public.clone()
    }

    pub fn size(&self) -> usize {
        self.public.size()
    }

    pub fn bits(&self) -> usize {
        self.public.bits()
    }

    pub fn has_crt(&self) -> bool {
        self.crt.is_some()
    }

    fn exponentiate(&self, c: &BigUint) -> BigUint {
        match &self.crt {
            Some(crt) => crt.exponentiate(c),
            None => c.modpow(&self.d, &self.public.n),
        }
    }

    /// RSASP1: `m^d mod n`, blinded with a fresh random factor and checked
    /// against the public exponent before the result is released.
    pub(crate) fn raw_private<R>(&self, rng: &mut R, m: &BigUint) -> Result<BigUint, Error>
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        let n = &self.public.n;
        if m >= n {
            return Err(Error::Parameter(
                "message representative out of range".into(),
            ));
        }

        let (r, r_inv) = blinding_factor(rng, n)?;
        let blinded = (m * r.modpow(&self.public.e, n)) % n;
        let s = (self.exponentiate(&blinded) * r_inv) % n;

        if &self.public.raw_public(&s) != m {
            return Err(Error::InvalidKey(
                "private key is inconsistent with its public half".into(),
            ));
        }
        Ok(s)
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("public", &self.public)
            .field("crt", &self.crt.is_some())
            .finish_non_exhaustive()
    }
}

fn is_odd(value: &BigUint) -> bool {
    !(value % 2u32).is_zero()
}

/// Upper bound on blinding-factor draws before the random source is deemed
/// stuck.
const MAX_BLINDING_ATTEMPTS: usize = 16;

/// Draw `r` uniformly-ish from `[2, n)` with `gcd(r, n) = 1`, and its inverse.
fn blinding_factor<R>(rng: &mut R, n: &BigUint) -> Result<(BigUint, BigUint), Error>
where
    R: RngCore + CryptoRng + ?Sized,
{
    let mut buf = zeroize::Zeroizing::new(vec![0u8; (n.bits() as usize + 7) / 8 + 8]);
    for _ in 0..MAX_BLINDING_ATTEMPTS {
        rng.try_fill_bytes(&mut buf[..])
            .map_err(|e| Error::RandomnessUnavailable(e.to_string()))?;
        let r = BigUint::from_bytes_be(&buf[..]) % n;
        if r <= BigUint::one() {
            continue;
        }
        if let Some(r_inv) = r.modinv(n) {
            return Ok((r, r_inv));
        }
    }

    log::warn!(
        "no usable blinding factor after {} draws",
        MAX_BLINDING_ATTEMPTS
    );
    Err(Error::RandomnessUnavailable(
        "random source produced no usable blinding factor".into(),
    ))
}

/// Serialize `value` big-endian, left-padded with zeros to exactly `len` bytes.
pub(crate) fn to_be_padded(value: &BigUint, len: usize) -> Option<Vec<u8>> {
    let bytes = value.to_bytes_be();
    let bytes: &[u8] = if value.is_zero() { &[] } else { &bytes };
    if bytes.len() > len {
        return None;
    }
    let mut out = vec![0u8; len];
    out[len - bytes.len()..].copy_from_slice(bytes);
    Some(out)
}

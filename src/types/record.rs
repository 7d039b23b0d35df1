use serde::{Deserialize, Serialize};

/// Algorithm label carried in every record.
pub const ALGORITHM_RSA_PSS_SHA256: &str = "RSASSA-PSS-SHA256";

/// A detached signature together with what a verifier needs to check it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignatureRecord {
    /// Fingerprint of the signing key (`sha256:<hex>` of its SPKI DER)
    pub key_id: String,
    /// Signature algorithm, always [`ALGORITHM_RSA_PSS_SHA256`]
    pub algorithm: String,
    /// Salt length used at signing time
    pub salt_len: usize,
    /// Base64-encoded raw signature
    pub signature: String,
    /// RFC 3339 timestamp when the signature was created
    pub signed_at: String,
}

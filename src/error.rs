use thiserror::Error;

/// Errors raised by signing, verification and the key/file collaborators.
///
/// A signature that fails to verify is not an error: verification returns
/// `Ok(false)` for that case. An `Err` always means the operation could not
/// be attempted.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Parameter error: {0}")]
    Parameter(String),

    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Secure random source unavailable: {0}")]
    RandomnessUnavailable(String),

    #[error("API misuse: {0}")]
    Misuse(&'static str),

    #[error("Malformed signature: {0}")]
    MalformedSignature(String),

    #[error("Backend self test failed: {0}")]
    SelfTest(String),

    #[error("PEM error: {0}")]
    Pem(String),

    #[error("Base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Hex decode error: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// The error kind, for callers that branch on outcome rather than message.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Parameter(_) => ErrorKind::Parameter,
            Error::InvalidKey(_) | Error::Pem(_) => ErrorKind::InvalidKey,
            Error::RandomnessUnavailable(_) => ErrorKind::RandomnessUnavailable,
            Error::Misuse(_) => ErrorKind::Misuse,
            Error::MalformedSignature(_) => ErrorKind::MalformedSignature,
            Error::SelfTest(_) => ErrorKind::SelfTestFailed,
            Error::Base64(_) | Error::Hex(_) | Error::Json(_) => ErrorKind::Encoding,
            Error::Io(_) => ErrorKind::Io,
        }
    }
}

impl From<rsa::pkcs8::Error> for Error {
    fn from(err: rsa::pkcs8::Error) -> Self {
        Error::Pem(err.to_string())
    }
}

impl From<rsa::pkcs8::spki::Error> for Error {
    fn from(err: rsa::pkcs8::spki::Error) -> Self {
        Error::Pem(err.to_string())
    }
}

impl From<rsa::pkcs1::der::Error> for Error {
    fn from(err: rsa::pkcs1::der::Error) -> Self {
        Error::Pem(err.to_string())
    }
}

impl From<rsa::pkcs1::Error> for Error {
    fn from(err: rsa::pkcs1::Error) -> Self {
        Error::Pem(err.to_string())
    }
}

/// Error kinds for structured reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    #[serde(rename = "PARAMETER_ERROR")]
    Parameter,
    #[serde(rename = "INVALID_KEY")]
    InvalidKey,
    #[serde(rename = "RANDOMNESS_UNAVAILABLE")]
    RandomnessUnavailable,
    #[serde(rename = "MISUSE_ERROR")]
    Misuse,
    #[serde(rename = "MALFORMED_SIGNATURE")]
    MalformedSignature,
    #[serde(rename = "SELF_TEST_FAILED")]
    SelfTestFailed,
    #[serde(rename = "ENCODING_ERROR")]
    Encoding,
    #[serde(rename = "IO_ERROR")]
    Io,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ErrorKind::Parameter => "PARAMETER_ERROR",
            ErrorKind::InvalidKey => "INVALID_KEY",
            ErrorKind::RandomnessUnavailable => "RANDOMNESS_UNAVAILABLE",
            ErrorKind::Misuse => "MISUSE_ERROR",
            ErrorKind::MalformedSignature => "MALFORMED_SIGNATURE",
            ErrorKind::SelfTestFailed => "SELF_TEST_FAILED",
            ErrorKind::Encoding => "ENCODING_ERROR",
            ErrorKind::Io => "IO_ERROR",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        assert_eq!(
            Error::Parameter("too small".into()).kind(),
            ErrorKind::Parameter
        );
        assert_eq!(Error::Misuse("finalized").kind(), ErrorKind::Misuse);
        assert_eq!(Error::Pem("bad".into()).kind(), ErrorKind::InvalidKey);
        assert_eq!(
            Error::RandomnessUnavailable("offline".into()).kind(),
            ErrorKind::RandomnessUnavailable
        );
    }

    #[test]
    fn test_kind_serde() {
        assert_eq!(
            serde_json::to_string(&ErrorKind::MalformedSignature).unwrap(),
            "\"MALFORMED_SIGNATURE\""
        );
        let kind: ErrorKind = serde_json::from_str("\"INVALID_KEY\"").unwrap();
        assert_eq!(kind, ErrorKind::InvalidKey);
        assert_eq!(ErrorKind::Parameter.to_string(), "PARAMETER_ERROR");
    }
}

//! PSS parameter configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Salt length used when none is configured: the SHA-256 output length.
pub const DEFAULT_SALT_LEN: usize = 32;

/// Signature scheme parameters.
///
/// The salt length used to verify must equal the one used to sign, so it is
/// kept as an explicit, serializable setting rather than a hidden constant.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct PssConfig {
    /// Salt length in bytes. Zero makes signatures deterministic.
    pub salt_len: usize,
}

impl Default for PssConfig {
    fn default() -> Self {
        Self {
            salt_len: DEFAULT_SALT_LEN,
        }
    }
}

impl PssConfig {
    pub fn with_salt_len(salt_len: usize) -> Self {
        Self { salt_len }
    }

    /// Deserialize a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a configuration file.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_json(&content)?;
        log::debug!("loaded PSS config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Write the configuration to a file.
    pub fn save(&self, path: &Path) -> Result<(), Error> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_salt_len() {
        assert_eq!(PssConfig::default().salt_len, 32);
    }

    #[test]
    fn test_missing_field_uses_default() {
        let config = PssConfig::from_json("{}").unwrap();
        assert_eq!(config, PssConfig::default());
    }

    #[test]
    fn test_explicit_zero_salt() {
        let config = PssConfig::from_json(r#"{"salt_len": 0}"#).unwrap();
        assert_eq!(config, PssConfig::with_salt_len(0));
    }

    #[test]
    fn test_rejects_bad_json() {
        assert!(PssConfig::from_json(r#"{"salt_len": -1}"#).is_err());
        assert!(PssConfig::from_json("not json").is_err());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pss.json");
        let config = PssConfig::with_salt_len(20);
        config.save(&path).unwrap();
        assert_eq!(PssConfig::load(&path).unwrap(), config);
    }
}

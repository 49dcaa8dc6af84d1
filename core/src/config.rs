//! config.rs
//! Service configuration.
//!
//! Defaults reproduce the wire format exactly. A non-default iteration count
//! produces envelopes only a service with the same setting can open.

use serde::{Deserialize, Serialize};

use crate::constants::PBKDF2_ITERATIONS;
use crate::types::{CipherError, Result};

/// Key-stretching parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KdfParams {
    pub iterations: u32,
}

impl Default for KdfParams {
    fn default() -> Self {
        Self { iterations: PBKDF2_ITERATIONS }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CipherConfig {
    pub kdf: KdfParams,
}

impl CipherConfig {
    /// Parse from JSON; missing fields take their defaults.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let cfg: CipherConfig = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn with_iterations(iterations: u32) -> Self {
        Self { kdf: KdfParams { iterations } }
    }

    pub fn validate(&self) -> Result<()> {
        if self.kdf.iterations == 0 {
            return Err(CipherError::Config("kdf.iterations must be at least 1".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_wire_format() {
        assert_eq!(CipherConfig::default().kdf.iterations, 100_000);
    }

    #[test]
    fn json_partial_uses_defaults() {
        let cfg = CipherConfig::from_json_str("{}").unwrap();
        assert_eq!(cfg, CipherConfig::default());

        let cfg = CipherConfig::from_json_str(r#"{"kdf":{"iterations":10}}"#).unwrap();
        assert_eq!(cfg.kdf.iterations, 10);
    }

    #[test]
    fn zero_iterations_rejected() {
        let err = CipherConfig::from_json_str(r#"{"kdf":{"iterations":0}}"#).unwrap_err();
        assert!(matches!(err, CipherError::Config(_)));
    }

    #[test]
    fn malformed_json_is_config_error() {
        let err = CipherConfig::from_json_str("{kdf").unwrap_err();
        assert!(matches!(err, CipherError::Config(_)));
    }
}

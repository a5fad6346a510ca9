use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable that overrides [`DecodeConfig::mode`].
pub const DECODE_MODE_ENV: &str = "DISCOVERY_DECODE_MODE";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DecodeConfig {
    pub mode: DecodeMode,
    /// Emit a warning for every aggregation whose `type` is not recognized
    pub log_unknown_aggregations: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DecodeMode {
    Lenient, // Unknown aggregation types decode as `Unknown`
    Strict,  // Unknown aggregation types fail the decode
}

impl std::str::FromStr for DecodeMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lenient" => Ok(Self::Lenient),
            "strict" => Ok(Self::Strict),
            other => {
                anyhow::bail!("Unknown decode mode '{}', expected 'lenient' or 'strict'", other)
            }
        }
    }
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self::lenient()
    }
}

impl DecodeConfig {
    pub fn lenient() -> Self {
        Self {
            mode: DecodeMode::Lenient,
            log_unknown_aggregations: true,
        }
    }

    pub fn strict() -> Self {
        Self {
            mode: DecodeMode::Strict,
            log_unknown_aggregations: true,
        }
    }

    pub fn is_strict(&self) -> bool {
        self.mode == DecodeMode::Strict
    }

    /// Load from a JSON file; missing keys fall back to the lenient defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read decode config {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse decode config {}", path.display()))
    }

    /// Apply `DISCOVERY_DECODE_MODE` if it is set
    pub fn with_env_overrides(self) -> Result<Self> {
        match std::env::var(DECODE_MODE_ENV) {
            Ok(value) => self.with_mode_override(&value),
            Err(_) => Ok(self),
        }
    }

    fn with_mode_override(mut self, value: &str) -> Result<Self> {
        self.mode = value
            .parse()
            .with_context(|| format!("Invalid {}", DECODE_MODE_ENV))?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_lenient() {
        let config = DecodeConfig::default();
        assert!(!config.is_strict());
        assert!(config.log_unknown_aggregations);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: DecodeConfig = serde_json::from_str(r#"{"mode": "strict"}"#).unwrap();
        assert_eq!(config, DecodeConfig::strict());
    }

    #[test]
    fn test_mode_override() {
        let config = DecodeConfig::lenient().with_mode_override(" Strict ").unwrap();
        assert!(config.is_strict());
        assert!(DecodeConfig::lenient().with_mode_override("loose").is_err());
    }

    #[test]
    fn test_env_override() {
        // SAFETY: no other test in this crate touches DISCOVERY_DECODE_MODE
        unsafe { std::env::set_var(DECODE_MODE_ENV, "strict") };
        let strict = DecodeConfig::lenient().with_env_overrides();
        unsafe { std::env::set_var(DECODE_MODE_ENV, "loose") };
        let invalid = DecodeConfig::lenient().with_env_overrides();
        unsafe { std::env::remove_var(DECODE_MODE_ENV) };
        let unset = DecodeConfig::strict().with_env_overrides();

        assert!(strict.unwrap().is_strict());
        assert!(format!("{:#}", invalid.unwrap_err()).contains("Invalid DISCOVERY_DECODE_MODE"));
        assert_eq!(unset.unwrap(), DecodeConfig::strict());
    }

    #[test]
    fn test_from_missing_file() {
        let err = DecodeConfig::from_file(Path::new("/nonexistent/decode.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read decode config"));
    }
}

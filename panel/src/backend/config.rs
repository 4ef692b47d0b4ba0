//! # Panel Configuration
//!
//! Loaded from a YAML file; every key is optional.
//!
//! ```yaml
//! access_secret: "adalberto@2024"
//! seed_sample_data: true
//! currency:
//!   symbol: "R$"
//!   decimal_separator: ","
//!   thousands_separator: "."
//! ```
//!
//! `PANEL_ACCESS_SECRET` overrides the secret from the file.

use anyhow::{bail, Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::backend::domain::currency_format::CurrencyFormat;

pub const ACCESS_SECRET_ENV: &str = "PANEL_ACCESS_SECRET";

const DEFAULT_ACCESS_SECRET: &str = "adalberto@2024";

#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Secret the access gate compares against
    pub access_secret: String,
    /// Start the session with the example records
    pub seed_sample_data: bool,
    pub currency: CurrencyFormat,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            access_secret: DEFAULT_ACCESS_SECRET.to_string(),
            seed_sample_data: true,
            currency: CurrencyFormat::default(),
        }
    }
}

impl std::fmt::Debug for PanelConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PanelConfig")
            .field("access_secret", &"<redacted>")
            .field("seed_sample_data", &self.seed_sample_data)
            .field("currency", &self.currency)
            .finish()
    }
}

impl PanelConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: PanelConfig = serde_yaml::from_str(yaml).context("Invalid panel config YAML")?;
        config.validate()?;
        Ok(config)
    }

    /// Read a YAML config file and apply environment overrides
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let yaml_content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let mut config = Self::from_yaml_str(&yaml_content)
            .with_context(|| format!("Failed to load config from {}", path.display()))?;
        config.apply_env_overrides()?;

        info!("Loaded panel config from {}", path.display());
        debug!("Panel config: {:?}", config);
        Ok(config)
    }

    /// Defaults plus environment overrides, for running without a file
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env_overrides()?;
        Ok(config)
    }

    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key/value source shaped like the environment
    pub fn apply_overrides_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(secret) = lookup(ACCESS_SECRET_ENV) {
            info!("Using access secret from {}", ACCESS_SECRET_ENV);
            self.access_secret = secret;
            self.validate()
                .with_context(|| format!("Invalid {}", ACCESS_SECRET_ENV))?;
        }
        Ok(())
    }

    /// Input is trimmed before comparison, so a padded or empty secret could never match
    pub fn validate(&self) -> Result<()> {
        if self.access_secret.is_empty() {
            bail!("access_secret cannot be empty");
        }
        if self.access_secret.trim() != self.access_secret {
            bail!("access_secret cannot start or end with whitespace");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = PanelConfig::default();
        assert_eq!(config.access_secret, "adalberto@2024");
        assert!(config.seed_sample_data);
        assert_eq!(config.currency.symbol, "R$");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_falls_back_to_defaults() {
        let config = PanelConfig::from_yaml_str("seed_sample_data: false\n").unwrap();
        assert_eq!(config.access_secret, "adalberto@2024");
        assert!(!config.seed_sample_data);
        assert_eq!(config.currency, CurrencyFormat::default());
    }

    #[test]
    fn test_full_yaml() {
        let yaml = r#"
access_secret: "canil-2025"
seed_sample_data: false
currency:
  symbol: "$"
  decimal_separator: "."
  thousands_separator: ","
"#;
        let config = PanelConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.access_secret, "canil-2025");
        assert_eq!(config.currency.decimal_separator, '.');
        assert_eq!(config.currency.format_amount(1234.5), "$ 1,234.50");
    }

    #[test]
    fn test_invalid_secrets_are_rejected() {
        assert!(PanelConfig::from_yaml_str("access_secret: \"\"\n").is_err());
        assert!(PanelConfig::from_yaml_str("access_secret: \" padded \"\n").is_err());
    }

    #[test]
    fn test_malformed_yaml() {
        assert!(PanelConfig::from_yaml_str("seed_sample_data: [not, a, bool]\n").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "access_secret: \"from-file\"").unwrap();
        writeln!(file, "seed_sample_data: false").unwrap();

        let config = PanelConfig::load(file.path()).unwrap();

        assert_eq!(config.access_secret, "from-file");
        assert!(!config.seed_sample_data);
    }

    #[test]
    fn test_load_missing_file() {
        let err = PanelConfig::load("/definitely/not/here/panel.yaml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let debug = format!("{:?}", PanelConfig::default());
        assert!(!debug.contains("adalberto@2024"));
        assert!(debug.contains("<redacted>"));
    }

    fn lookup_secret(value: &'static str) -> impl Fn(&str) -> Option<String> {
        move |key| (key == ACCESS_SECRET_ENV).then(|| value.to_string())
    }

    #[test]
    fn test_secret_override_replaces_file_value() {
        let mut config = PanelConfig::from_yaml_str("access_secret: \"from-file\"\n").unwrap();

        config.apply_overrides_from(lookup_secret("from-env")).unwrap();

        assert_eq!(config.access_secret, "from-env");
    }

    #[test]
    fn test_missing_override_keeps_config() {
        let mut config = PanelConfig::default();
        config.apply_overrides_from(|_| None).unwrap();
        assert_eq!(config, PanelConfig::default());
    }

    #[test]
    fn test_invalid_override_is_rejected() {
        for value in ["", " padded ", "trailing\n"] {
            let mut config = PanelConfig::default();
            let err = config.apply_overrides_from(lookup_secret(value)).unwrap_err();
            assert!(err.to_string().contains(ACCESS_SECRET_ENV), "'{}'", value);
        }
    }

    #[test]
    fn test_from_env_without_override() {
        // Only meaningful when the variable is not set for the test run
        if std::env::var(ACCESS_SECRET_ENV).is_err() {
            assert_eq!(PanelConfig::from_env().unwrap(), PanelConfig::default());
        }
    }
}

//! Canonicalization configuration with layered loading.
//!
//! Uses figment to merge, lowest precedence first:
//!
//! 1. Built-in defaults
//! 2. TOML config file (if LINKCANON_CONFIG_FILE set)
//! 3. Environment variables (LINKCANON_*)

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::url::DEFAULT_ALLOWED_SCHEMES;

mod validation;

pub use validation::ConfigError;

/// Options for [`Canonicalizer`](crate::Canonicalizer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonConfig {
    /// Schemes a resolved link may use when `check_scheme` is on.
    ///
    /// Set via LINKCANON_ALLOWED_SCHEMES environment variable, e.g. `[http,https]`.
    #[serde(default = "default_allowed_schemes")]
    pub allowed_schemes: Vec<String>,

    /// Percent-encode path `;`/`=` and re-encode queries.
    ///
    /// Set via LINKCANON_QUOTE environment variable.
    #[serde(default = "default_true")]
    pub quote: bool,

    /// Reject links whose scheme is not in `allowed_schemes`.
    ///
    /// Set via LINKCANON_CHECK_SCHEME environment variable.
    #[serde(default = "default_true")]
    pub check_scheme: bool,

    /// Keep `#fragment` in canonical output.
    ///
    /// Set via LINKCANON_KEEP_FRAGMENT environment variable.
    #[serde(default = "default_true")]
    pub keep_fragment: bool,
}

fn default_allowed_schemes() -> Vec<String> {
    DEFAULT_ALLOWED_SCHEMES.iter().map(|s| s.to_string()).collect()
}

fn default_true() -> bool {
    true
}

impl Default for CanonConfig {
    fn default() -> Self {
        Self { allowed_schemes: default_allowed_schemes(), quote: true, check_scheme: true, keep_fragment: true }
    }
}

impl CanonConfig {
    /// Load configuration from all sources with layered precedence.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Configuration file cannot be read
    /// - Environment variables cannot be parsed
    /// - Validation fails after loading
    pub fn load() -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Ok(config_path) = std::env::var("LINKCANON_CONFIG_FILE") {
            figment = figment.merge(Toml::file(&config_path));
        }

        figment = figment.merge(Env::prefixed("LINKCANON_").ignore(&["config_file"]));

        let config: Self = figment.extract().map_err(|e| ConfigError::LoadFailed(e.to_string()))?;

        config.validate()?;

        tracing::debug!(
            allowed_schemes = ?config.allowed_schemes,
            quote = config.quote,
            check_scheme = config.check_scheme,
            keep_fragment = config.keep_fragment,
            "loaded canonicalization config"
        );

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    fn load_in_jail() -> figment::error::Result<CanonConfig> {
        CanonConfig::load().map_err(|e| figment::Error::from(e.to_string()))
    }

    #[test]
    fn test_default_config() {
        let config = CanonConfig::default();
        assert_eq!(config.allowed_schemes, vec!["http", "https"]);
        assert!(config.quote);
        assert!(config.check_scheme);
        assert!(config.keep_fragment);
    }

    #[test]
    fn test_load_defaults() {
        Jail::expect_with(|_jail| {
            assert_eq!(load_in_jail()?, CanonConfig::default());
            Ok(())
        });
    }

    #[test]
    fn test_load_env_overrides() {
        Jail::expect_with(|jail| {
            jail.set_env("LINKCANON_QUOTE", "false");
            jail.set_env("LINKCANON_ALLOWED_SCHEMES", "[http,https,ftp]");

            let config = load_in_jail()?;
            assert!(!config.quote);
            assert_eq!(config.allowed_schemes, vec!["http", "https", "ftp"]);
            Ok(())
        });
    }

    #[test]
    fn test_load_toml_file_below_env() {
        Jail::expect_with(|jail| {
            jail.create_file("linkcanon.toml", "keep_fragment = false\ncheck_scheme = false\n")?;
            jail.set_env("LINKCANON_CONFIG_FILE", "linkcanon.toml");
            jail.set_env("LINKCANON_CHECK_SCHEME", "true");

            let config = load_in_jail()?;
            assert!(!config.keep_fragment);
            assert!(config.check_scheme);
            Ok(())
        });
    }

    #[test]
    fn test_load_rejects_invalid() {
        Jail::expect_with(|jail| {
            jail.set_env("LINKCANON_ALLOWED_SCHEMES", "[]");
            assert!(matches!(CanonConfig::load(), Err(ConfigError::Invalid { .. })));
            Ok(())
        });
    }
}

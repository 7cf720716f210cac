//! Configuration validation rules.
//!
//! This module provides validation logic for `CanonConfig` values
//! after they have been loaded from environment, files, or defaults.

use crate::config::CanonConfig;
use crate::url::is_scheme;
use thiserror::Error;

/// Configuration validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    LoadFailed(String),

    #[error("invalid configuration: {field} - {reason}")]
    Invalid { field: String, reason: String },
}

impl CanonConfig {
    /// Validate configuration values after loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if:
    /// - `allowed_schemes` is empty while `check_scheme` is on
    /// - an entry of `allowed_schemes` is not a valid scheme token
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.check_scheme && self.allowed_schemes.is_empty() {
            return Err(ConfigError::Invalid {
                field: "allowed_schemes".into(),
                reason: "must not be empty when check_scheme is enabled".into(),
            });
        }

        if let Some(bad) = self.allowed_schemes.iter().find(|s| !is_scheme(s)) {
            return Err(ConfigError::Invalid {
                field: "allowed_schemes".into(),
                reason: format!("'{bad}' is not a valid scheme"),
            });
        }

        if !self.check_scheme && self.allowed_schemes != CanonConfig::default().allowed_schemes {
            tracing::warn!(
                allowed_schemes = ?self.allowed_schemes,
                "allowed_schemes is set but check_scheme is disabled; the list is ignored"
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_default_config() {
        let config = CanonConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_schemes() {
        let config = CanonConfig { allowed_schemes: Vec::new(), ..Default::default() };
        let result = config.validate();
        assert!(matches!(result, Err(ConfigError::Invalid { field, .. }) if field == "allowed_schemes"));
    }

    #[test]
    fn test_validate_empty_schemes_without_check() {
        let config = CanonConfig { allowed_schemes: Vec::new(), check_scheme: false, ..Default::default() };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_bad_scheme_token() {
        let config = CanonConfig { allowed_schemes: vec!["http".into(), "1tp".into()], ..Default::default() };
        let result = config.validate();
        assert!(matches!(result, Err(ConfigError::Invalid { reason, .. }) if reason.contains("1tp")));
    }
}

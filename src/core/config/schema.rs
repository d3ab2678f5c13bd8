//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Location
//!
//! Searched in order:
//! 1. `$GITPROMPT_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/gitprompt/config.toml`
//! 3. `~/.gitprompt/config.toml`
//!
//! # Validation
//!
//! Values are validated after parsing so a broken file is reported once,
//! at load time, rather than producing a confusing prompt.

use serde::Deserialize;

use super::ConfigError;

/// User configuration.
///
/// # Example
///
/// ```toml
/// format = "[#g%h][#r +%m]"
/// zsh = true
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct PromptConfig {
    /// Format string used when neither `--format` nor `$GITPROMPT_FORMAT` is set
    pub format: Option<String>,

    /// Emit zsh width control characters by default
    pub zsh: Option<bool>,
}

impl PromptConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(format) = &self.format {
            if format.is_empty() {
                return Err(ConfigError::InvalidValue(
                    "format cannot be empty (remove the key to use the default)".into(),
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_config() {
        let config: PromptConfig = toml::from_str(
            r#"
            format = "[%h]"
            zsh = true
            "#,
        )
        .unwrap();

        assert_eq!(config.format.as_deref(), Some("[%h]"));
        assert_eq!(config.zsh, Some(true));
    }

    #[test]
    fn parse_empty_config() {
        let config: PromptConfig = toml::from_str("").unwrap();
        assert_eq!(config, PromptConfig::default());
    }

    #[test]
    fn unknown_fields_rejected() {
        let result: Result<PromptConfig, _> = toml::from_str("colour = \"red\"");
        assert!(result.is_err());
    }

    #[test]
    fn empty_format_invalid() {
        let config = PromptConfig {
            format: Some(String::new()),
            zsh: None,
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue(_))
        ));
    }

    #[test]
    fn default_is_valid() {
        assert!(PromptConfig::default().validate().is_ok());
    }
}

//! Framework configuration loaded from TOML.

use std::path::Path;

use serde::Deserialize;

use crate::error::{DotcmdError, Result};

/// Message sent when a registration does not set its own denial text.
pub const DEFAULT_PERMISSION_MESSAGE: &str = "You do not have permission to perform that action";

/// Settings for a dispatcher instance.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FrameworkConfig {
    /// Identity of the plugin owning the registered commands.
    pub plugin_name: String,
    /// Denial message used when a command spec leaves it unset.
    pub permission_message: String,
    /// Report unmatched input as handled, suppressing the host's own
    /// unknown-command fallback.
    pub claim_unmatched: bool,
}

impl Default for FrameworkConfig {
    fn default() -> Self {
        Self {
            plugin_name: "dotcmd".to_string(),
            permission_message: DEFAULT_PERMISSION_MESSAGE.to_string(),
            claim_unmatched: true,
        }
    }
}

impl FrameworkConfig {
    /// Parse a config from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values serde cannot. Callers embedding this struct in a
    /// larger config must call it themselves.
    pub fn validate(&self) -> Result<()> {
        if self.plugin_name.trim().is_empty() {
            return Err(DotcmdError::Config("plugin_name must not be empty".to_string()));
        }
        Ok(())
    }

    /// Load a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        log::debug!("Loaded framework config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults() {
        let c = FrameworkConfig::default();
        assert_eq!(c.plugin_name, "dotcmd");
        assert_eq!(c.permission_message, DEFAULT_PERMISSION_MESSAGE);
        assert!(c.claim_unmatched);
    }

    #[test]
    fn empty_toml_gives_defaults() {
        assert_eq!(
            FrameworkConfig::from_toml_str("").unwrap(),
            FrameworkConfig::default()
        );
    }

    #[test]
    fn partial_toml_overrides() {
        let c = FrameworkConfig::from_toml_str(
            "plugin_name = \"builder\"\nclaim_unmatched = false\n",
        )
        .unwrap();
        assert_eq!(c.plugin_name, "builder");
        assert!(!c.claim_unmatched);
        assert_eq!(c.permission_message, DEFAULT_PERMISSION_MESSAGE);
    }

    #[test]
    fn blank_plugin_name_rejected() {
        let err = FrameworkConfig::from_toml_str("plugin_name = \"  \"").unwrap_err();
        assert!(matches!(err, DotcmdError::Config(_)));
    }

    #[test]
    fn validate_checks_plugin_name() {
        assert!(FrameworkConfig::default().validate().is_ok());
        let blank = FrameworkConfig {
            plugin_name: "\t".to_string(),
            ..FrameworkConfig::default()
        };
        assert!(matches!(blank.validate(), Err(DotcmdError::Config(_))));
    }

    #[test]
    fn invalid_toml_rejected() {
        let err = FrameworkConfig::from_toml_str("plugin_name = ").unwrap_err();
        assert!(matches!(err, DotcmdError::TomlParse(_)));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "permission_message = \"nope\"").unwrap();
        let c = FrameworkConfig::load(file.path()).unwrap();
        assert_eq!(c.permission_message, "nope");
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = FrameworkConfig::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, DotcmdError::Io(_)));
    }
}

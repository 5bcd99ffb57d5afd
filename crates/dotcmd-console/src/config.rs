//! Console settings loaded from a TOML file.

use std::path::Path;

use serde::Deserialize;

use dotcmd_types::{FrameworkConfig, Result};

/// Top-level console config (`console.toml`).
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Name the console sender goes by.
    pub sender: String,
    /// Permissions granted to the console sender. `"*"` grants everything.
    pub permissions: Vec<String>,
    pub prompt: String,
    pub framework: FrameworkConfig,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            sender: "console".to_string(),
            permissions: vec!["*".to_string()],
            prompt: "> ".to_string(),
            framework: FrameworkConfig::default(),
        }
    }
}

impl ConsoleConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.framework.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}

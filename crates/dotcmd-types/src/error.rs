//! Error types for dotcmd.

use std::error::Error as StdError;
use std::io;

/// Boxed error raised by a command handler or completer.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Errors produced by the dotcmd framework.
#[derive(Debug, thiserror::Error)]
pub enum DotcmdError {
    #[error("registration error: {0}")]
    Registration(String),

    #[error("unhandled error executing command '{label}' in plugin {plugin}")]
    Execution {
        label: String,
        plugin: String,
        #[source]
        source: BoxError,
    },

    #[error("unhandled error during tab completion for command \"/{line}\" in plugin {plugin}")]
    Completion {
        line: String,
        plugin: String,
        #[source]
        source: BoxError,
    },

    #[error("config error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, DotcmdError>;

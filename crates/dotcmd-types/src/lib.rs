//! Foundation types and traits for dotcmd.
//!
//! This crate contains the types shared by every dotcmd crate: the error
//! enum, the canonical dotted command path, the sender capability trait,
//! and the framework configuration.

pub mod config;
pub mod error;
pub mod path;
pub mod sender;

pub use config::FrameworkConfig;
pub use error::{DotcmdError, Result};
pub use path::DottedPath;
pub use sender::Sender;

//! Canonical dotted command paths (`build.wall.undo`).

use std::fmt;
use std::str::FromStr;

use crate::error::{DotcmdError, Result};

/// Separator between path segments.
pub const SEPARATOR: char = '.';

/// A non-empty sequence of lower-cased, whitespace-free segments joined by `.`.
///
/// The string form is the registry key: two paths are equal exactly when
/// their canonical strings are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DottedPath(String);

impl DottedPath {
    /// Parse a dotted path, lower-casing every segment.
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.is_empty() {
            return Err(DotcmdError::Registration("empty command path".to_string()));
        }
        let canonical = raw.to_lowercase();
        for segment in canonical.split(SEPARATOR) {
            check_segment(segment, raw)?;
        }
        Ok(Self(canonical))
    }

    /// Build a path from individual tokens (`["Fly", "on"]` -> `fly.on`).
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<Self> {
        if tokens.is_empty() {
            return Err(DotcmdError::Registration("empty command path".to_string()));
        }
        let mut canonical = String::new();
        for token in tokens {
            let token = token.as_ref();
            if token.contains(SEPARATOR) {
                return Err(DotcmdError::Registration(format!(
                    "segment \"{token}\" contains '{SEPARATOR}'"
                )));
            }
            let lower = token.to_lowercase();
            check_segment(&lower, token)?;
            if !canonical.is_empty() {
                canonical.push(SEPARATOR);
            }
            canonical.push_str(&lower);
        }
        Ok(Self(canonical))
    }

    /// The canonical string form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterate over the segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split(SEPARATOR)
    }

    /// Number of segments (tokens this path consumes when matched).
    pub fn depth(&self) -> usize {
        self.segments().count()
    }

    /// The top-level command name.
    pub fn root(&self) -> &str {
        self.0.split(SEPARATOR).next().unwrap_or(&self.0)
    }

    /// Whether this path is a bare top-level command.
    pub fn is_root(&self) -> bool {
        !self.0.contains(SEPARATOR)
    }
}

fn check_segment(segment: &str, raw: &str) -> Result<()> {
    if segment.is_empty() {
        return Err(DotcmdError::Registration(format!(
            "command path \"{raw}\" has an empty segment"
        )));
    }
    if segment.chars().any(char::is_whitespace) {
        return Err(DotcmdError::Registration(format!(
            "command path \"{raw}\" contains whitespace"
        )));
    }
    Ok(())
}

impl fmt::Display for DottedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for DottedPath {
    type Err = DotcmdError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl AsRef<str> for DottedPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

//! Path-keyed registries for command handlers and completers.

use std::collections::BTreeMap;
use std::rc::Rc;

use dotcmd_types::DottedPath;
use dotcmd_types::path::SEPARATOR;

use crate::handler::{CommandHandler, Completer};

/// A registered command path.
pub struct CommandEntry {
    pub path: DottedPath,
    pub handler: Rc<dyn CommandHandler>,
    /// Required permission; empty means unrestricted.
    pub permission: String,
    /// Sent to senders lacking `permission`.
    pub permission_message: String,
    pub usage: String,
    pub description: String,
}

impl std::fmt::Debug for CommandEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandEntry")
            .field("path", &self.path)
            .field("permission", &self.permission)
            .field("usage", &self.usage)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// A registered completion provider.
pub struct CompleterEntry {
    pub path: DottedPath,
    pub completer: Rc<dyn Completer>,
}

impl std::fmt::Debug for CompleterEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompleterEntry")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

/// Map from canonical dotted path to an entry.
///
/// Paths are independent keys: registering `fly.on` does not imply `fly`.
/// Re-registering a path replaces the previous entry.
#[derive(Debug)]
pub struct Registry<T> {
    entries: BTreeMap<String, T>,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<T> Registry<T> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `entry` at `path`, returning whatever it replaced.
    pub fn register(&mut self, path: &DottedPath, entry: T) -> Option<T> {
        let previous = self.entries.insert(path.as_str().to_string(), entry);
        if previous.is_some() {
            log::debug!("Path '{path}' re-registered; previous entry replaced");
        }
        previous
    }

    /// Exact lookup by canonical path string.
    pub fn lookup(&self, path: &str) -> Option<&T> {
        self.entries.get(path)
    }

    /// Exact lookup returning the stored key alongside the entry.
    pub fn lookup_key_value(&self, path: &str) -> Option<(&str, &T)> {
        self.entries.get_key_value(path).map(|(k, v)| (k.as_str(), v))
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All `(path, entry)` pairs, sorted by path.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Distinct segments that directly follow `prefix` in any registered
    /// path, sorted.
    pub fn children(&self, prefix: &str) -> Vec<&str> {
        let mut start = prefix.to_string();
        start.push(SEPARATOR);
        let mut out: Vec<&str> = self
            .entries
            .range(start.clone()..)
            .take_while(|(k, _)| k.starts_with(&start))
            .filter_map(|(k, _)| k[start.len()..].split(SEPARATOR).next())
            .collect();
        out.sort_unstable();
        out.dedup();
        out
    }
}

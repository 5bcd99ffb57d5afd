//! The console user as a command sender.

#[cfg(test)]
use std::cell::RefCell;
use std::collections::HashSet;

use dotcmd_types::Sender;

/// Grants every permission when present in the permission set.
pub const WILDCARD: &str = "*";

enum Output {
    Stdout,
    #[cfg(test)]
    Buffer(RefCell<Vec<String>>),
}

/// Sender backed by the terminal (or an in-memory buffer in tests).
pub struct ConsoleSender {
    name: String,
    permissions: HashSet<String>,
    output: Output,
}

impl ConsoleSender {
    /// A sender that prints messages to stdout.
    pub fn new(name: &str, permissions: impl IntoIterator<Item = String>) -> Self {
        Self {
            name: name.to_string(),
            permissions: permissions.into_iter().collect(),
            output: Output::Stdout,
        }
    }

    /// A sender that keeps messages in memory.
    #[cfg(test)]
    pub fn buffered(name: &str, permissions: impl IntoIterator<Item = String>) -> Self {
        Self {
            output: Output::Buffer(RefCell::new(Vec::new())),
            ..Self::new(name, permissions)
        }
    }

    /// Take buffered messages. Always empty for a stdout sender.
    #[cfg(test)]
    pub fn drain(&self) -> Vec<String> {
        match &self.output {
            Output::Stdout => Vec::new(),
            Output::Buffer(buf) => std::mem::take(&mut *buf.borrow_mut()),
        }
    }
}

impl Sender for ConsoleSender {
    fn name(&self) -> &str {
        &self.name
    }

    fn has_permission(&self, permission: &str) -> bool {
        self.permissions.contains(WILDCARD) || self.permissions.contains(permission)
    }

    fn send_message(&self, message: &str) {
        match &self.output {
            Output::Stdout => println!("{message}"),
            #[cfg(test)]
            Output::Buffer(buf) => buf.borrow_mut().push(message.to_string()),
        }
    }
}

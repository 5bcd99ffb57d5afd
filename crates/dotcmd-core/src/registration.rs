//! Declarative descriptions of commands and completers.
//!
//! A plugin builds a list of [`Registration`]s at startup and hands it to
//! [`Dispatcher::register_all`](crate::Dispatcher::register_all).

use std::rc::Rc;

use dotcmd_types::{DottedPath, Result};

use crate::handler::{CommandHandler, Completer};

/// Metadata for a command path and its aliases.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandSpec {
    pub name: String,
    pub aliases: Vec<String>,
    /// Empty means unrestricted.
    pub permission: String,
    /// `None` uses the dispatcher's configured default.
    pub permission_message: Option<String>,
    pub description: String,
    /// Usage template; `<command>` is replaced by the typed label.
    pub usage: String,
}

impl CommandSpec {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    pub fn alias(mut self, alias: &str) -> Self {
        self.aliases.push(alias.to_string());
        self
    }

    pub fn aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases.extend(aliases.into_iter().map(Into::into));
        self
    }

    pub fn permission(mut self, permission: &str) -> Self {
        self.permission = permission.to_string();
        self
    }

    pub fn permission_message(mut self, message: &str) -> Self {
        self.permission_message = Some(message.to_string());
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn usage(mut self, usage: &str) -> Self {
        self.usage = usage.to_string();
        self
    }

    /// Parse the name and every alias. Fails on the first malformed one.
    pub fn paths(&self) -> Result<Vec<DottedPath>> {
        labels_to_paths(&self.name, &self.aliases)
    }
}

/// Metadata for a completer path and its aliases.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompleterSpec {
    pub name: String,
    pub aliases: Vec<String>,
}

impl CompleterSpec {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            aliases: Vec::new(),
        }
    }

    pub fn alias(mut self, alias: &str) -> Self {
        self.aliases.push(alias.to_string());
        self
    }

    pub fn paths(&self) -> Result<Vec<DottedPath>> {
        labels_to_paths(&self.name, &self.aliases)
    }
}

fn labels_to_paths(name: &str, aliases: &[String]) -> Result<Vec<DottedPath>> {
    std::iter::once(name)
        .chain(aliases.iter().map(String::as_str))
        .map(DottedPath::parse)
        .collect()
}

/// One entry of a plugin's startup registration list.
pub enum Registration {
    Command {
        spec: CommandSpec,
        handler: Rc<dyn CommandHandler>,
    },
    Completer {
        spec: CompleterSpec,
        completer: Rc<dyn Completer>,
    },
}

impl Registration {
    pub fn command(spec: CommandSpec, handler: impl CommandHandler + 'static) -> Self {
        Self::Command {
            spec,
            handler: Rc::new(handler),
        }
    }

    pub fn completer(spec: CompleterSpec, completer: impl Completer + 'static) -> Self {
        Self::Completer {
            spec,
            completer: Rc::new(completer),
        }
    }

    /// Declared name, for diagnostics.
    pub fn name(&self) -> &str {
        match self {
            Self::Command { spec, .. } => &spec.name,
            Self::Completer { spec, .. } => &spec.name,
        }
    }

    /// Human-readable kind, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Command { .. } => "command",
            Self::Completer { .. } => "tab completer",
        }
    }
}

impl std::fmt::Debug for Registration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Command { spec, .. } => f.debug_struct("Command").field("spec", spec).finish(),
            Self::Completer { spec, .. } => {
                f.debug_struct("Completer").field("spec", spec).finish()
            },
        }
    }
}

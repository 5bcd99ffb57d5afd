//! Command registration and dispatch.

use std::rc::Rc;

use dotcmd_types::{DotcmdError, DottedPath, FrameworkConfig, Result, Sender};

use crate::context::CommandArgs;
use crate::diagnostics::{DiagnosticSink, SilentSink};
use crate::handler::{CommandHandler, Completer, HandlerError};
use crate::host::{HostCommandTable, render_usage};
use crate::registration::{CommandSpec, CompleterSpec, Registration};
use crate::registry::{CommandEntry, CompleterEntry, Registry};
use crate::resolver::resolve;

/// Owns the command and completion registries and routes input to them.
///
/// Registration takes `&mut self` and dispatch takes `&self`, so a host
/// that wants to register commands while others are being dispatched has
/// to put the dispatcher behind its own lock.
pub struct Dispatcher {
    config: FrameworkConfig,
    pub(crate) commands: Registry<CommandEntry>,
    pub(crate) completers: Registry<CompleterEntry>,
    pub(crate) host: HostCommandTable,
    diagnostics: Box<dyn DiagnosticSink>,
    enabled: bool,
}

impl Dispatcher {
    /// Create an empty dispatcher.
    pub fn new(config: FrameworkConfig) -> Self {
        Self {
            config,
            commands: Registry::new(),
            completers: Registry::new(),
            host: HostCommandTable::new(),
            diagnostics: Box::new(SilentSink),
            enabled: true,
        }
    }

    /// Route registration warnings to `sink` instead of dropping them.
    pub fn with_diagnostics(mut self, sink: impl DiagnosticSink + 'static) -> Self {
        self.diagnostics = Box::new(sink);
        self
    }

    pub fn config(&self) -> &FrameworkConfig {
        &self.config
    }

    /// A disabled dispatcher leaves every label to the host.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Top-level commands this dispatcher has claimed from the host.
    pub fn host_commands(&self) -> &HostCommandTable {
        &self.host
    }

    /// Whether the host should route `label` here.
    pub fn owns(&self, label: &str) -> bool {
        self.host.contains(label)
    }

    /// Registered command entries, sorted by path.
    pub fn commands(&self) -> impl Iterator<Item = &CommandEntry> {
        self.commands.iter().map(|(_, entry)| entry)
    }

    /// Whether a completer is registered at exactly `path`.
    pub fn has_completer(&self, path: &str) -> bool {
        self.completers.contains(&path.to_lowercase())
    }

    // -- Registration --

    /// Register a handler under its name and every alias.
    ///
    /// An existing entry at any of those paths is replaced.
    pub fn register_command(
        &mut self,
        spec: CommandSpec,
        handler: impl CommandHandler + 'static,
    ) -> Result<()> {
        self.insert_command(spec, Rc::new(handler))
    }

    /// Register a completer under its name and every alias.
    pub fn register_completer(
        &mut self,
        spec: CompleterSpec,
        completer: impl Completer + 'static,
    ) -> Result<()> {
        self.insert_completer(spec, Rc::new(completer))
    }

    /// Register one declarative entry.
    pub fn register(&mut self, registration: Registration) -> Result<()> {
        match registration {
            Registration::Command { spec, handler } => self.insert_command(spec, handler),
            Registration::Completer { spec, completer } => self.insert_completer(spec, completer),
        }
    }

    /// Register a whole list. Malformed entries are reported through the
    /// diagnostic sink and skipped. Returns how many were registered.
    pub fn register_all(&mut self, registrations: impl IntoIterator<Item = Registration>) -> usize {
        let mut registered = 0;
        for registration in registrations {
            let kind = registration.kind();
            let name = registration.name().to_string();
            match self.register(registration) {
                Ok(()) => registered += 1,
                Err(e) => {
                    let reason = match e {
                        DotcmdError::Registration(reason) => reason,
                        other => other.to_string(),
                    };
                    self.diagnostics
                        .print_message(&format!("Unable to register {kind} \"{name}\". {reason}"));
                },
            }
        }
        log::debug!("Registered {registered} entries for plugin {}", self.config.plugin_name);
        registered
    }

    fn insert_command(&mut self, spec: CommandSpec, handler: Rc<dyn CommandHandler>) -> Result<()> {
        let paths = spec.paths()?;
        let permission_message = spec
            .permission_message
            .clone()
            .unwrap_or_else(|| self.config.permission_message.clone());

        for path in paths {
            self.claim_root(&path, &spec);
            self.commands.register(
                &path,
                CommandEntry {
                    path: path.clone(),
                    handler: Rc::clone(&handler),
                    permission: spec.permission.clone(),
                    permission_message: permission_message.clone(),
                    usage: spec.usage.clone(),
                    description: spec.description.clone(),
                },
            );
        }
        Ok(())
    }

    fn insert_completer(&mut self, spec: CompleterSpec, completer: Rc<dyn Completer>) -> Result<()> {
        let paths = spec.paths()?;
        for path in paths {
            self.host.ensure(path.root(), &self.config.plugin_name);
            self.completers.register(
                &path,
                CompleterEntry {
                    path: path.clone(),
                    completer: Rc::clone(&completer),
                },
            );
        }
        Ok(())
    }

    /// Make sure the host knows the top-level command. Only a bare
    /// top-level registration sets its description and usage.
    fn claim_root(&mut self, path: &DottedPath, spec: &CommandSpec) {
        let host = self.host.ensure(path.root(), &self.config.plugin_name);
        if path.is_root() {
            if !spec.description.is_empty() {
                host.set_description(&spec.description);
            }
            if !spec.usage.is_empty() {
                host.set_usage(&spec.usage);
            }
        }
    }

    // -- Dispatch --

    /// Run the command the sender typed.
    ///
    /// `label` is the top-level alias and `args` the rest of the line. The
    /// label takes part in prefix matching, so `fly on x` runs `fly.on`
    /// with `["x"]`.
    ///
    /// Returns `Ok(true)` when a path matched, including when the sender
    /// was denied or shown usage. An unmatched line returns
    /// `config.claim_unmatched`, which defaults to `true`.
    pub fn handle<S: AsRef<str>>(
        &self,
        sender: &dyn Sender,
        label: &str,
        args: &[S],
    ) -> Result<bool> {
        if !self.enabled {
            return Ok(false);
        }

        // Every registered path has a host command for its root segment.
        let Some(host) = self.host.get(label) else {
            log::debug!("No host command named '{label}'");
            return Ok(self.config.claim_unmatched);
        };

        let tokens: Vec<&str> = std::iter::once(label)
            .chain(args.iter().map(AsRef::as_ref))
            .collect();

        let Some(found) = resolve(&self.commands, &tokens) else {
            log::debug!("No command path matches '{}'", tokens.join(" "));
            return Ok(self.config.claim_unmatched);
        };
        let entry = found.entry;

        if !entry.permission.is_empty() && !sender.has_permission(&entry.permission) {
            log::debug!(
                "{} lacks permission '{}' for '{}'",
                sender.name(),
                entry.permission,
                found.path
            );
            sender.send_message(&entry.permission_message);
            return Ok(true);
        }

        let remaining: Vec<String> = found
            .remaining(&tokens)
            .iter()
            .map(|s| s.to_string())
            .collect();
        let ctx = CommandArgs::new(sender, host, label, &remaining);
        log::debug!("{} ran '{}' with {:?}", sender.name(), found.path, remaining);

        match entry.handler.invoke(&ctx) {
            Ok(()) => Ok(true),
            Err(HandlerError::Usage) => {
                let template = if entry.usage.is_empty() {
                    host.usage()
                } else {
                    entry.usage.as_str()
                };
                for line in render_usage(template, label) {
                    sender.send_message(&line);
                }
                Ok(true)
            },
            Err(HandlerError::Failed(source)) => {
                log::error!(
                    "Command '{}' in plugin {} failed: {source}",
                    found.path,
                    host.plugin()
                );
                Err(DotcmdError::Execution {
                    label: label.to_string(),
                    plugin: host.plugin().to_string(),
                    source,
                })
            },
        }
    }
}

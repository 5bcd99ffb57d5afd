//! Per-invocation context handed to handlers and completers.

use dotcmd_types::Sender;

use crate::host::HostCommand;

/// Everything a handler gets to see about one invocation.
///
/// Built fresh for every dispatch or completion call and dropped when the
/// call returns.
pub struct CommandArgs<'a> {
    sender: &'a dyn Sender,
    command: &'a HostCommand,
    label: &'a str,
    args: &'a [String],
    partial: Option<&'a str>,
}

impl<'a> CommandArgs<'a> {
    pub(crate) fn new(
        sender: &'a dyn Sender,
        command: &'a HostCommand,
        label: &'a str,
        args: &'a [String],
    ) -> Self {
        Self {
            sender,
            command,
            label,
            args,
            partial: None,
        }
    }

    pub(crate) fn with_partial(mut self, partial: Option<&'a str>) -> Self {
        self.partial = partial;
        self
    }

    /// Who ran the command.
    pub fn sender(&self) -> &'a dyn Sender {
        self.sender
    }

    /// The host-side top-level command this invocation went through.
    pub fn command(&self) -> &'a HostCommand {
        self.command
    }

    /// The alias the sender typed (first token of the line).
    pub fn label(&self) -> &'a str {
        self.label
    }

    /// Arguments left after the matched command path was stripped.
    pub fn args(&self) -> &'a [String] {
        self.args
    }

    /// Argument at `index`, if present.
    pub fn arg(&self, index: usize) -> Option<&'a str> {
        self.args.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// The token being typed during tab completion. Always `None` when
    /// running a command.
    pub fn partial(&self) -> Option<&'a str> {
        self.partial
    }
}

impl std::fmt::Debug for CommandArgs<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandArgs")
            .field("sender", &self.sender.name())
            .field("command", &self.command.name())
            .field("label", &self.label)
            .field("args", &self.args)
            .field("partial", &self.partial)
            .finish()
    }
}

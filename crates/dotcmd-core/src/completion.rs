//! Tab completion.
//!
//! Mirrors dispatch, but the last argument is the token being typed and
//! never takes part in path matching. A dedicated completer registered for
//! the matched path is asked first, then the matched command handler's own
//! completion. If neither answers, the host's default completion applies.

use dotcmd_types::error::BoxError;
use dotcmd_types::path::SEPARATOR;
use dotcmd_types::{DotcmdError, Result, Sender};

use crate::context::CommandArgs;
use crate::dispatcher::Dispatcher;
use crate::host::HostCommand;
use crate::resolver::resolve;

/// Outcome of a completion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// Suggestions to show, possibly intentionally empty.
    Suggestions(Vec<String>),
    /// Nothing answered; the host should use its default completion.
    UseDefault,
}

impl Completion {
    pub fn is_default(&self) -> bool {
        matches!(self, Self::UseDefault)
    }

    /// The suggestions, or whatever `default` produces.
    pub fn unwrap_or_else(self, default: impl FnOnce() -> Vec<String>) -> Vec<String> {
        match self {
            Self::Suggestions(list) => list,
            Self::UseDefault => default(),
        }
    }
}

impl Dispatcher {
    /// Suggest completions for the line `label args...`.
    ///
    /// The last element of `args` is the partial token. Completer and
    /// handler failures come back as [`DotcmdError::Completion`].
    pub fn complete<S: AsRef<str>>(
        &self,
        sender: &dyn Sender,
        label: &str,
        args: &[S],
    ) -> Result<Completion> {
        if !self.is_enabled() {
            return Ok(Completion::UseDefault);
        }
        let Some(host) = self.host.get(label) else {
            return Ok(Completion::UseDefault);
        };

        let (typed, partial) = match args.split_last() {
            Some((last, rest)) => (rest, Some(last.as_ref())),
            None => (args, None),
        };
        let tokens: Vec<&str> = std::iter::once(label)
            .chain(typed.iter().map(AsRef::as_ref))
            .collect();

        self.complete_tokens(sender, host, label, &tokens, partial)
            .map_err(|source| {
                let line = std::iter::once(label)
                    .chain(args.iter().map(AsRef::as_ref))
                    .collect::<Vec<_>>()
                    .join(" ");
                log::error!(
                    "Tab completion for '/{line}' in plugin {} failed: {source}",
                    host.plugin()
                );
                DotcmdError::Completion {
                    line,
                    plugin: host.plugin().to_string(),
                    source,
                }
            })
    }

    fn complete_tokens(
        &self,
        sender: &dyn Sender,
        host: &HostCommand,
        label: &str,
        tokens: &[&str],
        partial: Option<&str>,
    ) -> std::result::Result<Completion, BoxError> {
        if let Some(found) = resolve(&self.completers, tokens) {
            let remaining = owned(found.remaining(tokens));
            let ctx = CommandArgs::new(sender, host, label, &remaining).with_partial(partial);
            log::trace!("Completer '{}' asked with {:?}", found.path, remaining);
            match found.entry.completer.complete(&ctx) {
                Ok(Some(list)) => return Ok(Completion::Suggestions(list)),
                Ok(None) => {},
                Err(e) => return Err(e.into_boxed()),
            }
        }

        if let Some(found) = resolve(&self.commands, tokens) {
            let remaining = owned(found.remaining(tokens));
            let ctx = CommandArgs::new(sender, host, label, &remaining).with_partial(partial);
            if let Some(result) = found.entry.handler.tab_complete(&ctx) {
                log::trace!("Handler '{}' completed natively", found.path);
                return result.map(Completion::Suggestions).map_err(|e| e.into_boxed());
            }
        }

        Ok(Completion::UseDefault)
    }

    /// A default completion the host can fall back on: the registered
    /// sub-commands directly below the path spelled by the complete
    /// tokens, filtered by the partial token and by the sender's
    /// permissions.
    pub fn subcommand_suggestions<S: AsRef<str>>(
        &self,
        sender: &dyn Sender,
        label: &str,
        args: &[S],
    ) -> Vec<String> {
        let (typed, partial) = match args.split_last() {
            Some((last, rest)) => (rest, last.as_ref()),
            None => (args, ""),
        };
        let mut prefix = label.to_lowercase();
        for token in typed {
            let token = token.as_ref();
            if token.is_empty() || token.contains(SEPARATOR) {
                return Vec::new();
            }
            prefix.push(SEPARATOR);
            prefix.push_str(&token.to_lowercase());
        }
        let partial = partial.to_lowercase();

        self.commands
            .children(&prefix)
            .into_iter()
            .filter(|child| child.starts_with(&partial))
            .filter(|child| {
                let full = format!("{prefix}{SEPARATOR}{child}");
                self.commands.lookup(&full).is_none_or(|entry| {
                    entry.permission.is_empty() || sender.has_permission(&entry.permission)
                })
            })
            .map(str::to_string)
            .collect()
    }
}

fn owned(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|s| s.to_string()).collect()
}

//! Dotted-path command dispatch.
//!
//! Handlers are registered under dotted paths (`fly`, `fly.on`,
//! `build.wall.undo`). An input line is resolved to the longest registered
//! path formed by its leading tokens; the matched tokens are stripped and
//! the rest is handed to the handler together with the sender. Tab
//! completion resolves the same way against a separate completer registry.

pub mod completion;
mod context;
pub mod diagnostics;
mod dispatcher;
mod handler;
pub mod host;
pub mod input;
pub mod registration;
pub mod registry;
pub mod resolver;

#[cfg(test)]
mod test_utils;

/// Outcome of a completion request.
pub use completion::Completion;
/// Per-invocation context handed to handlers.
pub use context::CommandArgs;
/// Registration-time warning output.
pub use diagnostics::{DiagnosticSink, LogSink, SilentSink};
/// Owner of the registries; entry point for dispatch and completion.
pub use dispatcher::Dispatcher;
/// Handler and completer seams.
pub use handler::{CommandHandler, Completer, HandlerError, HandlerResult};
/// Top-level command as the host sees it.
pub use host::HostCommand;
/// Declarative registration list.
pub use registration::{CommandSpec, CompleterSpec, Registration};

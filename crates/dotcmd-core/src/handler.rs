//! Handler and completer traits.

use std::error::Error as StdError;
use std::fmt;

use dotcmd_types::error::BoxError;

use crate::context::CommandArgs;

/// Why a handler did not complete normally.
#[derive(Debug)]
pub enum HandlerError {
    /// The arguments were wrong; show the command's usage text.
    Usage,
    /// The handler failed.
    Failed(BoxError),
}

impl HandlerError {
    /// Build a failure from a plain message.
    pub fn msg(message: impl Into<String>) -> Self {
        Self::Failed(message.into().into())
    }

    /// Collapse into a boxed error for reporting.
    pub fn into_boxed(self) -> BoxError {
        match self {
            Self::Usage => "invalid usage".into(),
            Self::Failed(e) => e,
        }
    }
}

impl<E> From<E> for HandlerError
where
    E: StdError + Send + Sync + 'static,
{
    fn from(err: E) -> Self {
        Self::Failed(Box::new(err))
    }
}

impl fmt::Display for HandlerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Usage => f.write_str("invalid usage"),
            Self::Failed(e) => write!(f, "{e}"),
        }
    }
}

/// Result returned by handlers and completers.
pub type HandlerResult<T = ()> = std::result::Result<T, HandlerError>;

/// Something that runs when its command path is dispatched.
pub trait CommandHandler {
    /// Run the command.
    fn invoke(&self, args: &CommandArgs<'_>) -> HandlerResult;

    /// Native tab completion, consulted when no dedicated completer
    /// matched. `None` means the handler has no opinion.
    fn tab_complete(&self, _args: &CommandArgs<'_>) -> Option<HandlerResult<Vec<String>>> {
        None
    }
}

impl<F> CommandHandler for F
where
    F: Fn(&CommandArgs<'_>) -> HandlerResult,
{
    fn invoke(&self, args: &CommandArgs<'_>) -> HandlerResult {
        self(args)
    }
}

/// Supplies tab-completion suggestions for a command path.
pub trait Completer {
    /// `Ok(None)` means "no answer"; `Ok(Some(vec![]))` means "no
    /// suggestions" and is returned to the host as-is.
    fn complete(&self, args: &CommandArgs<'_>) -> HandlerResult<Option<Vec<String>>>;
}

impl<F> Completer for F
where
    F: Fn(&CommandArgs<'_>) -> HandlerResult<Option<Vec<String>>>,
{
    fn complete(&self, args: &CommandArgs<'_>) -> HandlerResult<Option<Vec<String>>> {
        self(args)
    }
}

//! The caller identity a command runs on behalf of.

/// Identity/session of whoever typed the command (a player, the console,
/// a remote shell).
///
/// The framework only needs to check permissions and deliver messages.
pub trait Sender {
    /// Display name, used in log lines.
    fn name(&self) -> &str;

    /// Whether the sender holds `permission`.
    ///
    /// Never called with the empty permission; the dispatcher treats that
    /// as unrestricted.
    fn has_permission(&self, permission: &str) -> bool;

    /// Deliver one line of text to the sender.
    fn send_message(&self, message: &str);
}

impl<T: Sender + ?Sized> Sender for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn has_permission(&self, permission: &str) -> bool {
        (**self).has_permission(permission)
    }

    fn send_message(&self, message: &str) {
        (**self).send_message(message);
    }
}

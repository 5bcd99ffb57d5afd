//! Output hook for registration-time warnings.

/// Receives messages about registrations that were skipped.
pub trait DiagnosticSink {
    fn print_message(&self, message: &str);
}

/// Discards everything. The dispatcher default.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentSink;

impl DiagnosticSink for SilentSink {
    fn print_message(&self, _message: &str) {}
}

/// Forwards messages to the `log` facade at warn level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn print_message(&self, message: &str) {
        log::warn!("{message}");
    }
}

impl<F: Fn(&str)> DiagnosticSink for F {
    fn print_message(&self, message: &str) {
        self(message);
    }
}

//! Shared test utilities for dispatcher and completion tests.
//!
//! Provides a [`RecordingSender`] that keeps every message it receives
//! and a process-wide logger that captures `log` records.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::{Mutex, Once};

use dotcmd_types::Sender;

use crate::context::CommandArgs;
use crate::handler::HandlerResult;

/// A sender with a fixed permission set that records delivered messages.
pub struct RecordingSender {
    pub permissions: Vec<String>,
    pub messages: RefCell<Vec<String>>,
}

impl RecordingSender {
    pub fn new() -> Self {
        Self {
            permissions: Vec::new(),
            messages: RefCell::new(Vec::new()),
        }
    }

    pub fn with_permission(mut self, permission: &str) -> Self {
        self.permissions.push(permission.to_string());
        self
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl Sender for RecordingSender {
    fn name(&self) -> &str {
        "tester"
    }

    fn has_permission(&self, permission: &str) -> bool {
        self.permissions.iter().any(|p| p == permission)
    }

    fn send_message(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

/// Captures the arguments of every call to the handler it builds.
#[derive(Clone, Default)]
pub struct CallLog {
    calls: Rc<RefCell<Vec<Vec<String>>>>,
    count: Rc<Cell<usize>>,
}

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A handler that records its remaining arguments and succeeds.
    pub fn handler(&self) -> impl Fn(&CommandArgs<'_>) -> HandlerResult + 'static {
        let log = self.clone();
        move |args: &CommandArgs<'_>| -> HandlerResult {
            log.calls.borrow_mut().push(args.args().to_vec());
            log.count.set(log.count.get() + 1);
            Ok(())
        }
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.borrow().clone()
    }

    pub fn count(&self) -> usize {
        self.count.get()
    }
}

struct CaptureLogger;

static CAPTURED: Mutex<Vec<String>> = Mutex::new(Vec::new());
static LOGGER: CaptureLogger = CaptureLogger;
static INIT: Once = Once::new();

impl log::Log for CaptureLogger {
    fn enabled(&self, _metadata: &log::Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        if let Ok(mut lines) = CAPTURED.lock() {
            lines.push(format!("{} {}", record.level(), record.args()));
        }
    }

    fn flush(&self) {}
}

/// Install the capturing logger. Safe to call from every test.
pub fn capture_logs() {
    INIT.call_once(|| {
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(log::LevelFilter::Trace);
    });
}

/// Captured lines (`"LEVEL message"`) containing `needle`.
///
/// Tests run in parallel and share the logger, so match on text unique
/// to the test.
pub fn logged(needle: &str) -> Vec<String> {
    CAPTURED
        .lock()
        .map(|lines| lines.iter().filter(|l| l.contains(needle)).cloned().collect())
        .unwrap_or_default()
}

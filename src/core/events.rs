//! Notification events fired around console rendering
//!
//! **Per-Subscriber Panic Isolation**: every callback is wrapped in
//! `catch_unwind` so a panicking subscriber cannot take down the drain
//! worker. Remaining subscribers still run.

use parking_lot::RwLock;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

/// Callback invoked with the literal text of every rendered entry.
pub type PrintedCallback = Arc<dyn Fn(&str) + Send + Sync>;

/// Callback invoked when the console window is being closed.
pub type ClosingCallback = Arc<dyn Fn() + Send + Sync>;

/// Subscriber registry for the facade's notification events.
#[derive(Default)]
pub(crate) struct EventHub {
    printed: RwLock<Vec<PrintedCallback>>,
    closing: RwLock<Vec<ClosingCallback>>,
}

impl EventHub {
    pub(crate) fn subscribe_printed(&self, callback: PrintedCallback) {
        self.printed.write().push(callback);
    }

    pub(crate) fn subscribe_closing(&self, callback: ClosingCallback) {
        self.closing.write().push(callback);
    }

    pub(crate) fn emit_printed(&self, text: &str) {
        let subscribers = self.printed.read();
        for (idx, callback) in subscribers.iter().enumerate() {
            if catch_unwind(AssertUnwindSafe(|| callback(text))).is_err() {
                eprintln!(
                    "[CONSOLE CRITICAL] message-printed subscriber #{} panicked. \
                     Other subscribers continue to function.",
                    idx
                );
            }
        }
    }

    pub(crate) fn emit_closing(&self) {
        let subscribers = self.closing.read();
        for (idx, callback) in subscribers.iter().enumerate() {
            if catch_unwind(AssertUnwindSafe(|| callback())).is_err() {
                eprintln!(
                    "[CONSOLE CRITICAL] console-closing subscriber #{} panicked. \
                     Other subscribers continue to function.",
                    idx
                );
            }
        }
    }
}

//! Console logger facade
//!
//! The public surface producers call. Every write is routed through a single
//! unbounded queue consumed by one drain worker, so the underlying console
//! only ever sees one writer. The synchronous variants emulate direct
//! rendering by blocking on a per-entry completion signal; the `_async`
//! variants are fire-and-forget and deliver in FIFO order.
//!
//! Lifecycle: the console is attached lazily on the worker. Until it is
//! ready, every write is buffered. `shutdown` stops accepting new messages,
//! drains whatever is queued, and joins the worker. If attachment never
//! succeeds the logger stays non-ready forever and buffered messages are
//! stranded; that degraded mode is silent and intentional.

use super::cancel::CancellationToken;
use super::color::{Color, ColorPalette};
use super::events::{ClosingCallback, EventHub, PrintedCallback};
use super::log_entry::{EntryKind, LogEntry};
use super::metrics::ConsoleMetrics;
use super::worker;
use crate::backend::ConsoleBackend;
use crossbeam_channel::{bounded, unbounded, Receiver, Sender};
use parking_lot::{Condvar, Mutex, RwLock};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Timeout used when the console is dropped without an explicit shutdown.
pub const DEFAULT_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

/// Upper bound on how long [`Console::wait_for_init`] takes to observe an
/// external cancellation. Readiness itself wakes waiters immediately.
const CANCEL_LATENCY: Duration = Duration::from_millis(10);

/// Lifecycle state shared between the facade and its drain worker.
///
/// `ready` and `shutting_down` are monotonic: each flips false to true at
/// most once and never reverts.
pub(crate) struct Shared {
    pub(crate) enabled: bool,
    pub(crate) palette: ColorPalette,
    pub(crate) ready: AtomicBool,
    pub(crate) shutting_down: AtomicBool,
    /// Readiness flag mirrored under a lock for condvar waits.
    init_done: Mutex<bool>,
    init_signal: Condvar,
    pub(crate) events: EventHub,
    pub(crate) metrics: ConsoleMetrics,
}

impl Shared {
    fn new(enabled: bool, palette: ColorPalette) -> Self {
        Self {
            enabled,
            palette,
            ready: AtomicBool::new(false),
            shutting_down: AtomicBool::new(false),
            init_done: Mutex::new(false),
            init_signal: Condvar::new(),
            events: EventHub::default(),
            metrics: ConsoleMetrics::new(),
        }
    }

    /// Flip `ready` and wake every thread blocked in `wait_for_init`.
    pub(crate) fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
        let mut done = self.init_done.lock();
        *done = true;
        self.init_signal.notify_all();
    }
}

pub struct Console {
    shared: Arc<Shared>,
    sender: RwLock<Option<Sender<LogEntry>>>,
    /// Keeps the queue alive even when the worker never starts draining, so
    /// buffered messages stay queued rather than vanish; also reports depth.
    receiver: Receiver<LogEntry>,
    worker: Mutex<Option<thread::JoinHandle<()>>>,
}

impl Console {
    /// Create a console over the system backend with the default palette,
    /// asynchronously attaching the console.
    #[cfg(feature = "system")]
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self::builder().enabled(enabled).build()
    }

    #[must_use]
    pub fn builder() -> ConsoleBuilder {
        ConsoleBuilder::new()
    }

    fn with_backend(
        enabled: bool,
        palette: ColorPalette,
        banner: Option<Vec<String>>,
        backend: Box<dyn ConsoleBackend>,
    ) -> Self {
        let (sender, receiver) = unbounded();
        let shared = Arc::new(Shared::new(enabled, palette));

        let worker = if enabled {
            Some(worker::spawn(
                Arc::clone(&shared),
                receiver.clone(),
                backend,
                banner,
            ))
        } else {
            None
        };

        Self {
            shared,
            sender: RwLock::new(enabled.then_some(sender)),
            receiver,
            worker: Mutex::new(worker),
        }
    }

    /// True if this console accepts messages at all.
    pub fn is_enabled(&self) -> bool {
        self.shared.enabled
    }

    /// True once the console is attached and the drain worker is consuming
    /// the queue.
    pub fn is_ready(&self) -> bool {
        self.shared.ready.load(Ordering::Acquire)
    }

    /// The palette this console renders with.
    pub fn palette(&self) -> &ColorPalette {
        &self.shared.palette
    }

    pub fn metrics(&self) -> &ConsoleMetrics {
        &self.shared.metrics
    }

    /// Number of messages currently buffered and not yet rendered.
    pub fn pending_count(&self) -> usize {
        self.receiver.len()
    }

    /// Subscribe to the notification fired once per rendered entry with the
    /// literal text. Fires for both synchronous and buffered writes.
    pub fn on_message_printed(&self, callback: PrintedCallback) {
        self.shared.events.subscribe_printed(callback);
    }

    /// Subscribe to the notification fired when the console window is being
    /// closed by the user.
    pub fn on_console_closing(&self, callback: ClosingCallback) {
        self.shared.events.subscribe_closing(callback);
    }

    /// Write a line in the default text color. If the console is ready the
    /// call returns only after the line has been rendered; otherwise the
    /// line is buffered and the call returns immediately.
    pub fn write_line(&self, message: &str) {
        self.write_line_with(message, self.shared.palette.text);
    }

    /// Write a line in the given color; same readiness contract as
    /// [`write_line`](Self::write_line).
    pub fn write_line_with(&self, message: &str, color: Color) {
        self.submit(EntryKind::WriteLine, message, color, self.is_ready());
    }

    /// Write a fragment without a line terminator, in the default text
    /// color; same readiness contract as [`write_line`](Self::write_line).
    pub fn write(&self, message: &str) {
        self.write_with(message, self.shared.palette.text);
    }

    /// Write a fragment in the given color.
    pub fn write_with(&self, message: &str, color: Color) {
        self.submit(EntryKind::Write, message, color, self.is_ready());
    }

    /// Buffer a line in the default text color, regardless of readiness.
    /// Never renders on the calling thread, even when the console is ready;
    /// callers accept delayed, queue-ordered delivery. A no-op once shutdown
    /// has begun.
    pub fn write_line_async(&self, message: &str) {
        self.write_line_async_with(message, self.shared.palette.text);
    }

    /// Buffer a line in the given color; same contract as
    /// [`write_line_async`](Self::write_line_async).
    pub fn write_line_async_with(&self, message: &str, color: Color) {
        self.submit(EntryKind::WriteLine, message, color, false);
    }

    /// Buffer a fragment in the default text color; same contract as
    /// [`write_line_async`](Self::write_line_async).
    pub fn write_async(&self, message: &str) {
        self.write_async_with(message, self.shared.palette.text);
    }

    /// Buffer a fragment in the given color.
    pub fn write_async_with(&self, message: &str, color: Color) {
        self.submit(EntryKind::Write, message, color, false);
    }

    fn submit(&self, kind: EntryKind, text: &str, color: Color, wait_for_render: bool) {
        if !self.shared.enabled {
            return;
        }
        if self.shared.shutting_down.load(Ordering::Acquire) {
            self.shared.metrics.record_dropped();
            return;
        }

        let mut completion = None;
        let entry = if wait_for_render {
            let (done_tx, done_rx) = bounded(1);
            completion = Some(done_rx);
            LogEntry::with_completion(kind, text, color, done_tx)
        } else {
            LogEntry::new(kind, text, color)
        };

        let sent = {
            let guard = self.sender.read();
            match guard.as_ref() {
                Some(sender) => sender.send(entry).is_ok(),
                None => false,
            }
        };
        if !sent {
            self.shared.metrics.record_dropped();
            return;
        }

        if let Some(done) = completion {
            // The worker signals after rendering; an error here means the
            // worker went away first, in which case there is nothing left
            // to wait for.
            let _ = done.recv();
        }
    }

    /// Block until the console is ready or the token is cancelled, returning
    /// the readiness flag. Returns immediately for a disabled console.
    ///
    /// Readiness wakes waiters at once; cancellation is observed within a
    /// small bounded latency rather than instantaneously.
    pub fn wait_for_init(&self, cancel: Option<&CancellationToken>) -> bool {
        if !self.shared.enabled {
            return false;
        }

        let mut done = self.shared.init_done.lock();
        while !*done {
            if cancel.is_some_and(CancellationToken::is_cancelled) {
                return false;
            }
            self.shared.init_signal.wait_for(&mut done, CANCEL_LATENCY);
        }
        true
    }

    /// Stop accepting messages and drain the queue.
    ///
    /// Once shutdown begins, every write variant becomes a silent no-op. If
    /// the console is ready, this blocks until all buffered messages have
    /// been rendered and the drain worker has exited. If the console never
    /// became ready, this returns immediately and any buffered messages
    /// stay stranded in the queue.
    pub fn shutdown(&self) {
        if !self.shared.enabled {
            return;
        }

        self.shared.shutting_down.store(true, Ordering::Release);
        // Dropping the sender disconnects the queue once it is empty, which
        // is the worker's signal to stop.
        *self.sender.write() = None;

        if !self.is_ready() {
            return;
        }

        let handle = self.worker.lock().take();
        if let Some(handle) = handle {
            if let Err(panic) = handle.join() {
                eprintln!(
                    "[CONSOLE ERROR] drain worker panicked during shutdown: {:?}",
                    panic
                );
            }
        }
    }
}

impl Drop for Console {
    fn drop(&mut self) {
        self.shared.shutting_down.store(true, Ordering::Release);
        *self.sender.write() = None;

        if !self.is_ready() {
            // Attachment never finished; there is no drain to wait for.
            return;
        }

        if let Some(handle) = self.worker.get_mut().take() {
            let start = Instant::now();
            while !handle.is_finished() {
                if start.elapsed() >= DEFAULT_SHUTDOWN_TIMEOUT {
                    eprintln!(
                        "[CONSOLE WARNING] drain worker did not finish within {:?}. \
                         Some messages may be lost.",
                        DEFAULT_SHUTDOWN_TIMEOUT
                    );
                    return;
                }
                thread::sleep(Duration::from_millis(10));
            }
            if let Err(panic) = handle.join() {
                eprintln!(
                    "[CONSOLE ERROR] drain worker panicked during shutdown: {:?}",
                    panic
                );
            }
        }
    }
}

/// Builder for constructing a [`Console`] with a fluent API
///
/// # Example
/// ```
/// use async_console_logger::prelude::*;
///
/// let console = Console::builder()
///     .enabled(false)
///     .palette(ColorPalette::default())
///     .build();
/// assert!(!console.is_enabled());
/// ```
pub struct ConsoleBuilder {
    enabled: bool,
    palette: ColorPalette,
    banner: Option<Vec<String>>,
}

impl ConsoleBuilder {
    /// Create a new builder with default values
    #[must_use]
    pub fn new() -> Self {
        Self {
            enabled: true,
            palette: ColorPalette::default(),
            banner: None,
        }
    }

    /// Enable or disable the console. A disabled console spawns no worker
    /// and turns every operation into a no-op.
    #[must_use = "builder methods return a new value"]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Set the color palette used for the session.
    #[must_use = "builder methods return a new value"]
    pub fn palette(mut self, palette: ColorPalette) -> Self {
        self.palette = palette;
        self
    }

    /// Replace the default startup banner with custom lines, rendered once
    /// after the console attaches.
    #[must_use = "builder methods return a new value"]
    pub fn banner_lines(mut self, lines: Vec<String>) -> Self {
        self.banner = Some(lines);
        self
    }

    /// Build a console over the system backend.
    #[cfg(feature = "system")]
    #[must_use]
    pub fn build(self) -> Console {
        self.build_with(crate::backend::SystemConsole::new())
    }

    /// Build a console over the given backend.
    pub fn build_with<B: ConsoleBackend + 'static>(self, backend: B) -> Console {
        Console::with_backend(self.enabled, self.palette, self.banner, Box::new(backend))
    }
}

impl Default for ConsoleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryConsole;

    #[test]
    fn test_disabled_console_spawns_no_worker() {
        let (backend, handle) = MemoryConsole::new();
        let console = Console::builder().enabled(false).build_with(backend);

        assert!(!console.is_enabled());
        assert!(!console.is_ready());
        assert!(console.worker.lock().is_none());
        assert!(!handle.is_attached());
    }

    #[test]
    fn test_disabled_console_operations_are_no_ops() {
        let (backend, handle) = MemoryConsole::new();
        let console = Console::builder().enabled(false).build_with(backend);

        console.write_line("a");
        console.write("b");
        console.write_line_async("c");
        console.write_async("d");
        assert!(!console.wait_for_init(None));
        console.shutdown();

        assert_eq!(console.pending_count(), 0);
        assert_eq!(console.metrics().printed_count(), 0);
        assert!(handle.lines().is_empty());
    }

    #[test]
    fn test_builder_defaults() {
        let builder = ConsoleBuilder::default();
        assert!(builder.enabled);
        assert_eq!(builder.palette, ColorPalette::default());
        assert!(builder.banner.is_none());
    }

    #[test]
    fn test_palette_is_fixed_at_construction() {
        let palette = ColorPalette {
            text: Color::new(9, 9, 9),
            ..ColorPalette::default()
        };
        let (backend, _handle) = MemoryConsole::new();
        let console = Console::builder()
            .enabled(false)
            .palette(palette)
            .build_with(backend);

        assert_eq!(console.palette().text, Color::new(9, 9, 9));
    }
}

//! Drain worker: attaches the console, then renders queued entries
//!
//! One worker thread per enabled console. It attempts attachment first; on
//! failure it exits without ever setting the readiness flag, leaving the
//! queue buffering forever. On success it applies the palette theme,
//! registers the close-signal handler, renders the startup banner, flips
//! readiness, and drains the queue until every sender is gone.

use super::color::ColorPalette;
use super::console::Shared;
use super::log_entry::{EntryKind, LogEntry};
use crate::backend::{ConsoleBackend, SignalKind};
use crossbeam_channel::Receiver;
use std::sync::Arc;
use std::thread;

pub(crate) fn spawn(
    shared: Arc<Shared>,
    queue: Receiver<LogEntry>,
    backend: Box<dyn ConsoleBackend>,
    banner: Option<Vec<String>>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || run(shared, queue, backend, banner))
}

fn run(
    shared: Arc<Shared>,
    queue: Receiver<LogEntry>,
    mut backend: Box<dyn ConsoleBackend>,
    banner: Option<Vec<String>>,
) {
    if !backend.attach() {
        // Degraded mode: the logger stays non-ready and messages keep
        // accumulating in the queue, unrendered.
        return;
    }

    let palette = shared.palette;
    backend.apply_theme(palette.background, palette.text);

    let close_events = Arc::clone(&shared);
    backend.register_close_handler(Box::new(move |kind| {
        if kind == SignalKind::WindowClose {
            close_events.events.emit_closing();
        }
        // Never suppress default handling; the process may be terminated
        // shortly after this returns.
        false
    }));

    print_banner(backend.as_mut(), &palette, banner.as_deref());
    shared.mark_ready();

    // recv fails only once every sender is gone and the queue is empty,
    // which is exactly the drain-then-stop shutdown protocol.
    while let Ok(entry) = queue.recv() {
        render(backend.as_mut(), &shared, entry);
    }
}

fn render(backend: &mut dyn ConsoleBackend, shared: &Shared, entry: LogEntry) {
    let result = match entry.kind {
        EntryKind::Write => backend.write(&entry.text, entry.color),
        EntryKind::WriteLine => backend.write_line(&entry.text, entry.color),
    };

    match result {
        Ok(()) => {
            shared.metrics.record_printed();
            shared.events.emit_printed(&entry.text);
        }
        Err(e) => {
            eprintln!("[CONSOLE ERROR] {} render failed: {}", backend.name(), e);
            shared.metrics.record_dropped();
        }
    }

    // Release the synchronous caller only after the notification has fired.
    if let Some(rendered) = entry.rendered {
        let _ = rendered.send(());
    }
}

fn print_banner(backend: &mut dyn ConsoleBackend, palette: &ColorPalette, banner: Option<&[String]>) {
    let default_lines;
    let lines: &[String] = match banner {
        Some(lines) => lines,
        None => {
            default_lines = [
                String::new(),
                format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
                String::new(),
            ];
            &default_lines
        }
    };

    for line in lines {
        if let Err(e) = backend.write_line(line, palette.red) {
            eprintln!("[CONSOLE ERROR] banner render failed: {}", e);
        }
    }
}

//! Integration tests for the console logging facility
//!
//! These tests verify:
//! - Disabled and degraded (never-attached) lifecycles
//! - Pre-readiness buffering and FIFO drain order
//! - Synchronous and buffered write contracts
//! - Shutdown drain semantics
//! - Close-signal filtering
//! - Readiness waits and cancellation

use async_console_logger::prelude::*;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Poll a condition until it holds or the deadline passes.
fn wait_until(deadline: Duration, mut condition: impl FnMut() -> bool) -> bool {
    let start = Instant::now();
    while start.elapsed() < deadline {
        if condition() {
            return true;
        }
        thread::sleep(Duration::from_millis(5));
    }
    condition()
}

/// Subscribe a counter to the message-printed notification.
fn printed_counter(console: &Console) -> Arc<AtomicUsize> {
    let counter = Arc::new(AtomicUsize::new(0));
    let observer = Arc::clone(&counter);
    console.on_message_printed(Arc::new(move |_| {
        observer.fetch_add(1, Ordering::SeqCst);
    }));
    counter
}

/// Subscribe a recorder that keeps printed texts in arrival order.
fn printed_recorder(console: &Console) -> Arc<Mutex<Vec<String>>> {
    let order = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&order);
    console.on_message_printed(Arc::new(move |text| {
        sink.lock().push(text.to_string());
    }));
    order
}

#[test]
fn test_disabled_console_is_a_no_op() {
    let (backend, handle) = MemoryConsole::new();
    let console = Console::builder().enabled(false).build_with(backend);
    let printed = printed_counter(&console);

    console.write_line("direct");
    console.write("fragment");
    console.write_line_async("buffered");
    console.write_async("buffered fragment");

    assert!(!console.is_enabled());
    assert!(!console.is_ready());
    assert!(!console.wait_for_init(None));

    let start = Instant::now();
    console.shutdown();
    assert!(start.elapsed() < Duration::from_millis(250));

    assert_eq!(printed.load(Ordering::SeqCst), 0);
    assert_eq!(console.pending_count(), 0);
    assert!(!handle.is_attached());
    assert!(handle.lines().is_empty());
}

#[test]
fn test_failed_attachment_strands_buffered_messages() {
    let (backend, handle) = MemoryConsole::new();
    let console = Console::builder().build_with(backend.with_attach_result(false));
    let printed = printed_counter(&console);

    console.write_line_async("a");
    console.write_line_async("b");

    thread::sleep(Duration::from_millis(50));
    assert!(!console.is_ready());
    assert_eq!(console.pending_count(), 2);
    assert_eq!(printed.load(Ordering::SeqCst), 0);

    let start = Instant::now();
    console.shutdown();
    assert!(start.elapsed() < Duration::from_millis(250));

    // Still stranded, still unrendered.
    assert!(!console.is_ready());
    assert_eq!(console.pending_count(), 2);
    assert!(handle.lines().is_empty());
}

#[test]
fn test_delayed_attachment_drains_in_enqueue_order() {
    let (backend, handle) = MemoryConsole::new();
    let console = Console::builder().build_with(backend.with_attach_delay(Duration::from_millis(80)));
    let order = printed_recorder(&console);

    console.write_line_async("1");
    console.write_line_async("2");
    console.write_line_async("3");

    assert!(console.wait_for_init(None));
    assert!(wait_until(Duration::from_secs(2), || order.lock().len() == 3));
    assert_eq!(*order.lock(), vec!["1", "2", "3"]);

    // The banner precedes the drained messages.
    let lines = handle.lines();
    assert!(lines.ends_with(&["1".to_string(), "2".to_string(), "3".to_string()]));
    assert!(lines.len() > 3);
}

#[test]
fn test_sync_write_falls_back_to_buffering_before_ready() {
    let (backend, _handle) = MemoryConsole::new();
    let console = Console::builder().build_with(backend.with_attach_delay(Duration::from_millis(100)));
    let order = printed_recorder(&console);

    let start = Instant::now();
    console.write_line("early");
    assert!(start.elapsed() < Duration::from_millis(60));

    assert!(console.wait_for_init(None));
    assert!(wait_until(Duration::from_secs(2), || !order.lock().is_empty()));
    assert_eq!(*order.lock(), vec!["early"]);
}

#[test]
fn test_ready_sync_write_blocks_until_rendered() {
    let (backend, handle) = MemoryConsole::new();
    let console = Console::builder()
        .banner_lines(Vec::new())
        .build_with(backend.with_render_delay(Duration::from_millis(30)));
    let printed = printed_counter(&console);
    assert!(console.wait_for_init(None));

    let start = Instant::now();
    console.write_line("direct");
    assert!(start.elapsed() >= Duration::from_millis(30));
    assert_eq!(printed.load(Ordering::SeqCst), 1);
    assert!(handle.lines().contains(&"direct".to_string()));

    console.write_line("second");
    assert_eq!(printed.load(Ordering::SeqCst), 2);
}

#[test]
fn test_buffered_write_returns_before_rendering() {
    let (backend, handle) = MemoryConsole::new();
    let console = Console::builder()
        .banner_lines(Vec::new())
        .build_with(backend.with_render_delay(Duration::from_millis(60)));
    let printed = printed_counter(&console);
    assert!(console.wait_for_init(None));

    let start = Instant::now();
    console.write_line_async("x");
    assert!(start.elapsed() < Duration::from_millis(40));

    assert!(wait_until(Duration::from_secs(2), || {
        printed.load(Ordering::SeqCst) == 1
    }));
    assert!(handle.lines().contains(&"x".to_string()));
}

#[test]
fn test_shutdown_drains_queue_then_drops_new_writes() {
    let (backend, handle) = MemoryConsole::new();
    let console = Console::builder()
        .banner_lines(Vec::new())
        .build_with(backend.with_render_delay(Duration::from_millis(10)));
    let printed = printed_counter(&console);
    assert!(console.wait_for_init(None));

    for i in 1..=5 {
        console.write_line_async(&format!("msg {}", i));
    }
    console.shutdown();

    assert_eq!(printed.load(Ordering::SeqCst), 5);
    assert_eq!(console.pending_count(), 0);

    console.write_line_async("late");
    thread::sleep(Duration::from_millis(50));
    assert_eq!(printed.load(Ordering::SeqCst), 5);
    assert!(console.metrics().dropped_count() >= 1);
    assert!(!handle.lines().contains(&"late".to_string()));
}

#[test]
fn test_close_signal_fires_only_for_window_close() {
    let (backend, handle) = MemoryConsole::new();
    let console = Console::builder().build_with(backend);
    let closing = Arc::new(AtomicUsize::new(0));
    let observer = Arc::clone(&closing);
    console.on_console_closing(Arc::new(move || {
        observer.fetch_add(1, Ordering::SeqCst);
    }));
    assert!(console.wait_for_init(None));

    assert!(!handle.raise(SignalKind::CtrlC));
    assert!(!handle.raise(SignalKind::Break));
    assert!(!handle.raise(SignalKind::Logoff));
    assert!(!handle.raise(SignalKind::Shutdown));
    assert_eq!(closing.load(Ordering::SeqCst), 0);

    assert!(!handle.raise(SignalKind::WindowClose));
    assert_eq!(closing.load(Ordering::SeqCst), 1);

    // One notification per delivered signal.
    assert!(!handle.raise(SignalKind::WindowClose));
    assert_eq!(closing.load(Ordering::SeqCst), 2);
}

#[test]
fn test_wait_for_init_returns_promptly_when_ready() {
    let (backend, _handle) = MemoryConsole::new();
    let console = Console::builder().build_with(backend.with_attach_delay(Duration::from_millis(50)));

    let start = Instant::now();
    assert!(console.wait_for_init(None));
    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_millis(40));
    assert!(elapsed < Duration::from_secs(1));
    assert!(console.is_ready());
}

#[test]
fn test_wait_for_init_honors_cancellation() {
    let (backend, _handle) = MemoryConsole::new();
    let console = Console::builder().build_with(backend.with_attach_result(false));

    let token = CancellationToken::new();
    let canceller = token.clone();
    thread::spawn(move || {
        thread::sleep(Duration::from_millis(40));
        canceller.cancel();
    });

    let start = Instant::now();
    assert!(!console.wait_for_init(Some(&token)));
    assert!(start.elapsed() < Duration::from_millis(500));
    assert!(!console.is_ready());
}

#[test]
fn test_theme_and_banner_applied_on_attachment() {
    let palette = ColorPalette::default();
    let (backend, handle) = MemoryConsole::new();
    let console = Console::builder()
        .banner_lines(vec!["hello".to_string()])
        .build_with(backend);
    assert!(console.wait_for_init(None));

    assert_eq!(handle.theme(), Some((palette.background, palette.text)));
    let lines = handle.colored_lines();
    assert_eq!(lines.first(), Some(&("hello".to_string(), palette.red)));
}

#[test]
fn test_dropping_console_drains_pending_messages() {
    let (backend, handle) = MemoryConsole::new();
    {
        let console = Console::builder().build_with(backend);
        assert!(console.wait_for_init(None));
        for i in 0..10 {
            console.write_line_async(&format!("drop {}", i));
        }
        // Console drops here and drains before returning.
    }

    let lines = handle.lines();
    for i in 0..10 {
        assert!(lines.contains(&format!("drop {}", i)));
    }
}

#[test]
fn test_subscriber_panic_does_not_halt_drain() {
    let (backend, handle) = MemoryConsole::new();
    let console = Console::builder().build_with(backend);
    console.on_message_printed(Arc::new(|_| panic!("bad subscriber")));
    let printed = printed_counter(&console);
    assert!(console.wait_for_init(None));

    console.write_line_async("one");
    console.write_line_async("two");
    console.shutdown();

    assert_eq!(printed.load(Ordering::SeqCst), 2);
    assert!(handle.lines().contains(&"two".to_string()));
}

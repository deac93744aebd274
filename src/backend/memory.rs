//! In-memory console backend
//!
//! Captures rendered output instead of touching a real console, and exposes
//! a handle for inspecting what was rendered, scripting attachment
//! behavior, and injecting close signals the way the operating system
//! would. Useful for tests and for embedders that surface console output in
//! their own UI.

use super::{CloseHandler, ConsoleBackend, SignalKind};
use crate::core::{Color, Result};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[derive(Default)]
struct MemoryState {
    attached: AtomicBool,
    theme: Mutex<Option<(Color, Color)>>,
    /// Text written without a line terminator yet.
    fragment: Mutex<String>,
    lines: Mutex<Vec<(String, Color)>>,
    handler: Mutex<Option<CloseHandler>>,
}

pub struct MemoryConsole {
    attach_result: bool,
    attach_delay: Duration,
    render_delay: Duration,
    capture: bool,
    state: Arc<MemoryState>,
}

impl MemoryConsole {
    /// Create a backend whose attachment succeeds immediately, together
    /// with a handle for observing it.
    pub fn new() -> (Self, MemoryHandle) {
        let state = Arc::new(MemoryState::default());
        (
            Self {
                attach_result: true,
                attach_delay: Duration::ZERO,
                render_delay: Duration::ZERO,
                capture: true,
                state: Arc::clone(&state),
            },
            MemoryHandle { state },
        )
    }

    /// Script the attachment outcome. A failing attachment leaves the
    /// logger permanently non-ready.
    #[must_use]
    pub fn with_attach_result(mut self, succeeds: bool) -> Self {
        self.attach_result = succeeds;
        self
    }

    /// Delay attachment to widen the pre-readiness buffering window.
    #[must_use]
    pub fn with_attach_delay(mut self, delay: Duration) -> Self {
        self.attach_delay = delay;
        self
    }

    /// Slow down rendering to make queueing observable.
    #[must_use]
    pub fn with_render_delay(mut self, delay: Duration) -> Self {
        self.render_delay = delay;
        self
    }

    /// Disable output capture for high-volume runs where only the render
    /// calls matter, not their content.
    #[must_use]
    pub fn with_capture(mut self, capture: bool) -> Self {
        self.capture = capture;
        self
    }
}

impl ConsoleBackend for MemoryConsole {
    fn attach(&mut self) -> bool {
        if !self.attach_delay.is_zero() {
            thread::sleep(self.attach_delay);
        }
        if self.attach_result {
            self.state.attached.store(true, Ordering::Release);
        }
        self.attach_result
    }

    fn apply_theme(&mut self, background: Color, text: Color) {
        *self.state.theme.lock() = Some((background, text));
    }

    fn write(&mut self, text: &str, _color: Color) -> Result<()> {
        if !self.render_delay.is_zero() {
            thread::sleep(self.render_delay);
        }
        if self.capture {
            self.state.fragment.lock().push_str(text);
        }
        Ok(())
    }

    fn write_line(&mut self, text: &str, color: Color) -> Result<()> {
        if !self.render_delay.is_zero() {
            thread::sleep(self.render_delay);
        }
        if self.capture {
            let mut line = std::mem::take(&mut *self.state.fragment.lock());
            line.push_str(text);
            self.state.lines.lock().push((line, color));
        }
        Ok(())
    }

    fn register_close_handler(&mut self, handler: CloseHandler) {
        *self.state.handler.lock() = Some(handler);
    }

    fn name(&self) -> &str {
        "memory"
    }
}

/// Observer side of a [`MemoryConsole`].
pub struct MemoryHandle {
    state: Arc<MemoryState>,
}

impl MemoryHandle {
    pub fn is_attached(&self) -> bool {
        self.state.attached.load(Ordering::Acquire)
    }

    pub fn theme(&self) -> Option<(Color, Color)> {
        *self.state.theme.lock()
    }

    /// Completed lines rendered so far.
    pub fn lines(&self) -> Vec<String> {
        self.state
            .lines
            .lock()
            .iter()
            .map(|(text, _)| text.clone())
            .collect()
    }

    /// Completed lines with the color each was rendered in.
    pub fn colored_lines(&self) -> Vec<(String, Color)> {
        self.state.lines.lock().clone()
    }

    /// Text written without a line terminator yet.
    pub fn pending_fragment(&self) -> String {
        self.state.fragment.lock().clone()
    }

    /// Deliver a console control signal to the registered handler, as the
    /// operating system would. Returns the handler's suppress answer, or
    /// false when no handler is registered.
    pub fn raise(&self, kind: SignalKind) -> bool {
        match self.state.handler.lock().as_ref() {
            Some(handler) => handler(kind),
            None => false,
        }
    }
}

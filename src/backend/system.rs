//! System console backend
//!
//! Renders ANSI truecolor output to stdout via the `colored` crate. Close
//! handlers live in a process-global chain, matching the process-global
//! nature of OS console control handlers; host integrations forward OS
//! notifications through [`raise_close_signal`].

use super::{CloseHandler, ConsoleBackend, SignalKind};
use crate::core::{Color, Result};
use colored::Colorize;
use parking_lot::Mutex;
use std::io::Write;

static CLOSE_HANDLERS: Mutex<Vec<CloseHandler>> = Mutex::new(Vec::new());

/// Deliver a console control signal to every registered close handler.
///
/// Returns true if any handler asked to suppress default handling.
pub fn raise_close_signal(kind: SignalKind) -> bool {
    let handlers = CLOSE_HANDLERS.lock();
    let mut suppress = false;
    for handler in handlers.iter() {
        suppress |= handler(kind);
    }
    suppress
}

pub struct SystemConsole {
    attached: bool,
    theme: Option<(Color, Color)>,
}

impl SystemConsole {
    #[must_use]
    pub fn new() -> Self {
        Self {
            attached: false,
            theme: None,
        }
    }

    /// The theme applied at attachment, if any.
    pub fn theme(&self) -> Option<(Color, Color)> {
        self.theme
    }
}

impl Default for SystemConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleBackend for SystemConsole {
    fn attach(&mut self) -> bool {
        // Processes launched from a shell already own a console; stdout is
        // the attachment target on every supported platform.
        self.attached = true;
        true
    }

    fn apply_theme(&mut self, background: Color, text: Color) {
        self.theme = Some((background, text));
        if colored::control::SHOULD_COLORIZE.should_colorize() {
            // Paint the window background and clear so the theme covers the
            // whole screen before the first line is rendered.
            print!(
                "\x1b[48;2;{};{};{}m\x1b[2J\x1b[H",
                background.r, background.g, background.b
            );
            let _ = std::io::stdout().flush();
        }
    }

    fn write(&mut self, text: &str, color: Color) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        write!(stdout, "{}", text.truecolor(color.r, color.g, color.b))?;
        stdout.flush()?;
        Ok(())
    }

    fn write_line(&mut self, text: &str, color: Color) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", text.truecolor(color.r, color.g, color.b))?;
        Ok(())
    }

    fn register_close_handler(&mut self, handler: CloseHandler) {
        CLOSE_HANDLERS.lock().push(handler);
    }

    fn name(&self) -> &str {
        "system"
    }
}

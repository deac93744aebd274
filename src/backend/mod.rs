//! Console backends
//!
//! A backend is the seam between the drain worker and an actual console:
//! attachment, rendering, theming, and close-signal delivery. The worker
//! owns exactly one backend and is the only caller of its render
//! primitives, so implementations need no cross-thread safety of their own.

pub mod memory;
#[cfg(feature = "system")]
pub mod system;

pub use memory::{MemoryConsole, MemoryHandle};
#[cfg(feature = "system")]
pub use system::{raise_close_signal, SystemConsole};

use crate::core::{Color, Result};

/// Handler invoked when the process receives a console control signal.
///
/// Returns whether default handling should be suppressed. Handlers must not
/// block: the operating system may terminate the process shortly after the
/// signal is delivered.
pub type CloseHandler = Box<dyn Fn(SignalKind) -> bool + Send + Sync>;

/// Console control signal kinds delivered to registered close handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignalKind {
    /// Interactive interrupt (Ctrl+C).
    CtrlC,
    /// Interactive break (Ctrl+Break).
    Break,
    /// The console window is being closed by the user.
    WindowClose,
    /// The user is logging off.
    Logoff,
    /// The system is shutting down.
    Shutdown,
}

/// Contract an OS console primitive must satisfy.
pub trait ConsoleBackend: Send {
    /// Attach a console to the process. Idempotent per process; returns
    /// whether the console is usable afterwards, with no partial states.
    fn attach(&mut self) -> bool;

    /// Apply the session-wide background and default text colors.
    fn apply_theme(&mut self, background: Color, text: Color);

    /// Render a text fragment without a trailing line terminator.
    fn write(&mut self, text: &str, color: Color) -> Result<()>;

    /// Render a full line.
    fn write_line(&mut self, text: &str, color: Color) -> Result<()>;

    /// Register the handler invoked on console control signals.
    fn register_close_handler(&mut self, handler: CloseHandler);

    fn name(&self) -> &str;
}

//! Core console logging types

pub mod cancel;
pub mod color;
pub mod console;
pub mod error;
pub mod events;
pub mod log_entry;
pub mod metrics;
pub(crate) mod worker;

pub use cancel::CancellationToken;
pub use color::{Color, ColorPalette};
pub use console::{Console, ConsoleBuilder, DEFAULT_SHUTDOWN_TIMEOUT};
pub use error::{ConsoleError, Result};
pub use events::{ClosingCallback, PrintedCallback};
pub use log_entry::{EntryKind, LogEntry};
pub use metrics::ConsoleMetrics;

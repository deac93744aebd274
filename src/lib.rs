//! # Async Console Logger
//!
//! An asynchronous console logging facility for processes whose console may
//! not exist yet: the console is attached lazily on a background drain
//! worker, messages written before attachment are buffered, and shutdown
//! drains every buffered message before returning.
//!
//! ## Features
//!
//! - **Lazy Attachment**: the console is attached asynchronously; callers
//!   never wait for it unless they ask to
//! - **Buffered Delivery**: writes made before the console is ready are
//!   queued and drained in FIFO order once it is
//! - **Single Writer**: all rendering happens on one drain worker, so the
//!   console is never written from two threads at once
//! - **Cooperative Shutdown**: shutdown stops accepting new messages, drains
//!   the queue, then joins the worker

pub mod backend;
pub mod core;
pub mod macros;

pub mod prelude {
    #[cfg(feature = "system")]
    pub use crate::backend::SystemConsole;
    pub use crate::backend::{CloseHandler, ConsoleBackend, MemoryConsole, MemoryHandle, SignalKind};
    pub use crate::core::{
        CancellationToken, ClosingCallback, Color, ColorPalette, Console, ConsoleBuilder,
        ConsoleError, ConsoleMetrics, EntryKind, LogEntry, PrintedCallback, Result,
        DEFAULT_SHUTDOWN_TIMEOUT,
    };
}

#[cfg(feature = "system")]
pub use crate::backend::SystemConsole;
pub use crate::backend::{CloseHandler, ConsoleBackend, MemoryConsole, MemoryHandle, SignalKind};
pub use crate::core::{
    CancellationToken, ClosingCallback, Color, ColorPalette, Console, ConsoleBuilder, ConsoleError,
    ConsoleMetrics, EntryKind, LogEntry, PrintedCallback, Result, DEFAULT_SHUTDOWN_TIMEOUT,
};

//! Formatting macros for console write operations.
//!
//! These macros provide a convenient interface for writing with automatic
//! string formatting, similar to `println!` and `format!`. Each one maps to
//! a facade method; pass a color before `=>` to override the default text
//! color.
//!
//! # Examples
//!
//! ```
//! use async_console_logger::prelude::*;
//! use async_console_logger::{cwrite_async, cwriteln};
//!
//! let console = Console::builder().enabled(false).build();
//!
//! // Basic line
//! cwriteln!(console, "loader started");
//!
//! // With format arguments
//! let count = 3;
//! cwriteln!(console, "loaded {} plugins", count);
//!
//! // Colored, buffered fragment
//! let accent = console.palette().green;
//! cwrite_async!(console, accent => "ok");
//! ```

/// Write a full line through the conditional path: rendered before the call
/// returns when the console is ready, buffered otherwise.
///
/// # Examples
///
/// ```
/// # use async_console_logger::prelude::*;
/// # let console = Console::builder().enabled(false).build();
/// use async_console_logger::cwriteln;
/// cwriteln!(console, "Simple message");
/// cwriteln!(console, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! cwriteln {
    ($console:expr, $color:expr => $($arg:tt)+) => {
        $console.write_line_with(&format!($($arg)+), $color)
    };
    ($console:expr, $($arg:tt)+) => {
        $console.write_line(&format!($($arg)+))
    };
}

/// Write a fragment (no line terminator) through the conditional path.
///
/// # Examples
///
/// ```
/// # use async_console_logger::prelude::*;
/// # let console = Console::builder().enabled(false).build();
/// use async_console_logger::cwrite;
/// cwrite!(console, "progress: ");
/// cwrite!(console, "{}%", 42);
/// ```
#[macro_export]
macro_rules! cwrite {
    ($console:expr, $color:expr => $($arg:tt)+) => {
        $console.write_with(&format!($($arg)+), $color)
    };
    ($console:expr, $($arg:tt)+) => {
        $console.write(&format!($($arg)+))
    };
}

/// Buffer a full line unconditionally, delivered in FIFO order by the drain
/// worker. Never renders on the calling thread.
///
/// # Examples
///
/// ```
/// # use async_console_logger::prelude::*;
/// # let console = Console::builder().enabled(false).build();
/// use async_console_logger::cwriteln_async;
/// cwriteln_async!(console, "mod {} initialized", "physics");
/// ```
#[macro_export]
macro_rules! cwriteln_async {
    ($console:expr, $color:expr => $($arg:tt)+) => {
        $console.write_line_async_with(&format!($($arg)+), $color)
    };
    ($console:expr, $($arg:tt)+) => {
        $console.write_line_async(&format!($($arg)+))
    };
}

/// Buffer a fragment unconditionally.
///
/// # Examples
///
/// ```
/// # use async_console_logger::prelude::*;
/// # let console = Console::builder().enabled(false).build();
/// use async_console_logger::cwrite_async;
/// cwrite_async!(console, "{} of {} ", 1, 3);
/// ```
#[macro_export]
macro_rules! cwrite_async {
    ($console:expr, $color:expr => $($arg:tt)+) => {
        $console.write_async_with(&format!($($arg)+), $color)
    };
    ($console:expr, $($arg:tt)+) => {
        $console.write_async(&format!($($arg)+))
    };
}

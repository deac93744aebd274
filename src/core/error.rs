//! Error types for the console logging facility
//!
//! Facade operations never return errors for ordinary inputs; failures
//! surface through state flags and metrics instead. `ConsoleError` exists
//! for the backend render primitives, whose failures the drain worker
//! reports and then moves past.

pub type Result<T> = std::result::Result<T, ConsoleError>;

#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    /// IO error from a console render primitive
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Backend-specific render failure
    #[error("render failed on '{target}': {message}")]
    Render { target: String, message: String },

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl ConsoleError {
    /// Create a render error for a named backend
    pub fn render(target: impl Into<String>, message: impl Into<String>) -> Self {
        ConsoleError::Render {
            target: target.into(),
            message: message.into(),
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        ConsoleError::Other(msg.into())
    }
}

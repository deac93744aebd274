//! Pending console message structure

use super::color::Color;
use crossbeam_channel::Sender;

/// Whether an entry renders as a fragment or a full line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Write,
    WriteLine,
}

/// A message waiting in the queue.
///
/// Immutable once created; owned by the queue until the drain worker
/// consumes it.
#[derive(Debug)]
pub struct LogEntry {
    pub kind: EntryKind,
    pub text: String,
    pub color: Color,
    /// Present on synchronous-path submissions; signalled once the entry has
    /// been rendered and its notification fired.
    pub(crate) rendered: Option<Sender<()>>,
}

impl LogEntry {
    pub fn new(kind: EntryKind, text: impl Into<String>, color: Color) -> Self {
        Self {
            kind,
            text: text.into(),
            color,
            rendered: None,
        }
    }

    pub(crate) fn with_completion(
        kind: EntryKind,
        text: impl Into<String>,
        color: Color,
        rendered: Sender<()>,
    ) -> Self {
        Self {
            kind,
            text: text.into(),
            color,
            rendered: Some(rendered),
        }
    }
}

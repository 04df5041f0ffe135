//! Client-side message log.
//!
//! The server ships its own recent log lines inside every snapshot; this ring
//! holds the client's additions — connection changes, session notices — that
//! the widgets merge underneath the server lines.
use std::collections::VecDeque;

/// Severity of a client-side notice.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MessageLevel {
    Info,
    Warning,
    Error,
}

/// One logged notice.
#[derive(Clone, Debug)]
pub struct MessageEntry {
    pub text: String,
    /// Turn counter of the snapshot current when the notice was logged.
    pub turn: Option<u64>,
    pub level: MessageLevel,
}

impl MessageEntry {
    pub fn new(text: impl Into<String>, turn: Option<u64>, level: MessageLevel) -> Self {
        Self {
            text: text.into(),
            turn,
            level,
        }
    }
}

/// Bounded ring of notices; the oldest entry falls out when full.
#[derive(Clone, Debug)]
pub struct MessageLog {
    entries: VecDeque<MessageEntry>,
    capacity: usize,
}

impl MessageLog {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, entry: MessageEntry) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn info(&mut self, text: impl Into<String>, turn: Option<u64>) {
        self.push(MessageEntry::new(text, turn, MessageLevel::Info));
    }

    pub fn warning(&mut self, text: impl Into<String>, turn: Option<u64>) {
        self.push(MessageEntry::new(text, turn, MessageLevel::Warning));
    }

    /// Newest first.
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter().rev().take(limit)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

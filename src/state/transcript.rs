//! Ordered message log for the chat widget.
//!
//! DESIGN
//! ======
//! The store is a plain data holder: it never renders or persists. Callers
//! decide when to project it onto the view and when to save `recent(limit)`.

#[cfg(test)]
#[path = "transcript_test.rs"]
mod transcript_test;

use serde::{Deserialize, Serialize};

use crate::util::clock::local_time_label;

/// Author of a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// A single transcript entry. Also the persisted record shape.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    pub sender: Sender,
    /// Local wall-clock label captured at append time, e.g. `"03:07 PM"`.
    pub time: String,
}

/// Append-only transcript with an injectable clock.
#[derive(Clone, Debug)]
pub struct TranscriptStore {
    messages: Vec<Message>,
    clock: fn() -> String,
}

impl Default for TranscriptStore {
    fn default() -> Self {
        Self::with_clock(local_time_label)
    }
}

impl TranscriptStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store whose messages are stamped by `clock`.
    pub fn with_clock(clock: fn() -> String) -> Self {
        Self { messages: Vec::new(), clock }
    }

    /// Stamp and append a message, returning a copy of it.
    pub fn append(&mut self, text: impl Into<String>, sender: Sender) -> Message {
        let message = Message { text: text.into(), sender, time: (self.clock)() };
        self.messages.push(message.clone());
        message
    }

    /// Replace the log with previously persisted messages, keeping their times.
    pub fn restore(&mut self, messages: Vec<Message>) {
        self.messages = messages;
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// The last `limit` messages in original order.
    pub fn recent(&self, limit: usize) -> &[Message] {
        let start = self.messages.len().saturating_sub(limit);
        &self.messages[start..]
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

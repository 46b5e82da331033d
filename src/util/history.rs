//! Transcript persistence across page reloads.
//!
//! ERROR HANDLING
//! ==============
//! Persistence is best-effort. Every storage or codec failure is logged and
//! swallowed here so the chat keeps working with storage disabled or full.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use crate::error::StorageError;
use crate::state::transcript::{Message, TranscriptStore};
use crate::util::storage::SlotStorage;

/// Saves the most recent transcript window into one named slot.
#[derive(Clone, Debug)]
pub struct HistoryStore<S> {
    storage: S,
    key: String,
    limit: usize,
}

impl<S: SlotStorage> HistoryStore<S> {
    pub fn new(storage: S, key: impl Into<String>, limit: usize) -> Self {
        Self { storage, key: key.into(), limit }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Overwrite the slot with `transcript.recent(limit)`.
    pub fn save(&self, transcript: &TranscriptStore) {
        if let Err(e) = self.try_save(transcript.recent(self.limit)) {
            log::warn!("failed to save chat history: {e}");
        }
    }

    /// Load the persisted window; absent or unreadable slots yield an empty history.
    pub fn load(&self) -> Vec<Message> {
        match self.try_load() {
            Ok(messages) => messages,
            Err(e) => {
                log::warn!("failed to load chat history: {e}");
                Vec::new()
            }
        }
    }

    /// Delete the slot.
    pub fn erase(&self) {
        if let Err(e) = self.storage.remove(&self.key) {
            log::warn!("failed to erase chat history: {e}");
        }
    }

    fn try_save(&self, recent: &[Message]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(recent)?;
        self.storage.write(&self.key, &raw)
    }

    fn try_load(&self) -> Result<Vec<Message>, StorageError> {
        let Some(raw) = self.storage.read(&self.key)? else {
            return Ok(Vec::new());
        };
        let messages: Vec<Message> = serde_json::from_str(&raw)?;
        log::debug!("restored {} chat messages", messages.len());
        Ok(messages)
    }
}

//! Widget configuration with built-in defaults.
//!
//! SYSTEM CONTEXT
//! ==============
//! The widget ships with the gym site's defaults. A hosting page may embed a
//! JSON object in `<script id="chatbot-config" type="application/json">` to
//! override any subset of fields; missing fields keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_ENDPOINT: &str = "/api/chatbot/";
pub const DEFAULT_STORAGE_KEY: &str = "gym_chatbot_history";
pub const DEFAULT_HISTORY_LIMIT: usize = 50;
pub const DEFAULT_TITLE: &str = "Gym Assistant";
pub const DEFAULT_CLEAR_PROMPT: &str = "Are you sure you want to clear the chat history?";

/// Element id the hosting page uses for JSON overrides.
pub const CONFIG_ELEMENT_ID: &str = "chatbot-config";

pub const DEFAULT_WELCOME_MESSAGE: &str = "👋 Hello! I'm your Gym Assistant. I can help you with:\n\n\
    • Membership plans and pricing\n\
    • Walk-in passes\n\
    • Payment methods\n\
    • Your membership status\n\
    • And more!\n\n\
    How can I assist you today?";

/// A preset message sent by a single click.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickReply {
    /// Button caption.
    pub label: String,
    /// Text sent as if the user had typed it.
    pub message: String,
}

impl QuickReply {
    fn new(label: &str, message: &str) -> Self {
        Self { label: label.to_owned(), message: message.to_owned() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Responder endpoint receiving `POST { "message": ... }`.
    pub endpoint: String,
    /// Storage slot holding the serialized transcript.
    pub storage_key: String,
    /// Number of most recent messages kept in the storage slot.
    pub history_limit: usize,
    /// Header title.
    pub title: String,
    /// Bot message seeded into an empty transcript.
    pub welcome_message: String,
    /// Question asked before clearing the history.
    pub clear_prompt: String,
    pub quick_replies: Vec<QuickReply>,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            history_limit: DEFAULT_HISTORY_LIMIT,
            title: DEFAULT_TITLE.to_owned(),
            welcome_message: DEFAULT_WELCOME_MESSAGE.to_owned(),
            clear_prompt: DEFAULT_CLEAR_PROMPT.to_owned(),
            quick_replies: vec![
                QuickReply::new("💪 Plans", "Show membership plans"),
                QuickReply::new("💳 Payment", "What payment methods do you accept?"),
                QuickReply::new("📊 Status", "My membership status"),
                QuickReply::new("❓ Help", "help"),
            ],
        }
    }
}

impl WidgetConfig {
    /// Parse a JSON override object on top of the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Invalid`] when a field would make the widget unusable.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.endpoint.trim().is_empty() {
            return Err(ConfigError::Invalid("endpoint must not be empty"));
        }
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::Invalid("storage_key must not be empty"));
        }
        if self.welcome_message.trim().is_empty() {
            return Err(ConfigError::Invalid("welcome_message must not be empty"));
        }
        if self.history_limit == 0 {
            return Err(ConfigError::Invalid("history_limit must be at least 1"));
        }
        if self.quick_replies.iter().any(|q| q.message.trim().is_empty()) {
            return Err(ConfigError::Invalid("quick reply message must not be empty"));
        }
        Ok(())
    }

    /// Read overrides embedded in the hosting page, falling back to defaults.
    pub fn from_page() -> Self {
        #[cfg(feature = "csr")]
        {
            let raw = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
                .and_then(|el| el.text_content());
            let Some(raw) = raw else {
                return Self::default();
            };
            match Self::from_json(&raw) {
                Ok(config) => config,
                Err(e) => {
                    log::warn!("ignoring chatbot config overrides: {e}");
                    Self::default()
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            Self::default()
        }
    }
}

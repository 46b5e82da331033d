//! Widget controller: visibility, input handling and the send cycle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every user action lands here. Appends always go store → view → storage,
//! in that order, so the persisted slot reflects the full in-memory log at
//! each save.
//!
//! CONCURRENCY
//! ===========
//! Single-threaded. The responder exchange is the only await point and no
//! borrow of the transcript is held across it. Sends are not serialized:
//! overlapping exchanges append their replies in resolution order.

#[cfg(test)]
#[path = "widget_test.rs"]
mod widget_test;

use std::cell::{Cell, RefCell};

use crate::config::WidgetConfig;
use crate::net::responder::{ChatTransport, Reply, ResponderClient};
use crate::state::render::WidgetView;
use crate::state::transcript::{Message, Sender, TranscriptStore};
use crate::util::confirm::Confirm;
use crate::util::history::HistoryStore;
use crate::util::storage::SlotStorage;

/// Whether the chat window is shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Closed,
    Open,
}

impl Visibility {
    pub fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }
}

/// Trimmed text worth sending, or `None` for empty/whitespace-only input.
fn accept_input(input: &str) -> Option<String> {
    let text = input.trim();
    (!text.is_empty()).then(|| text.to_owned())
}

/// One chat widget. Built once by the hosting page and shared by reference.
pub struct WidgetController<T, S, V, C> {
    config: WidgetConfig,
    transcript: RefCell<TranscriptStore>,
    visibility: Cell<Visibility>,
    /// Exchanges awaiting the responder; the typing indicator stays up while non-zero.
    pending: Cell<usize>,
    history: HistoryStore<S>,
    responder: ResponderClient<T>,
    view: V,
    confirm: C,
}

impl<T, S, V, C> WidgetController<T, S, V, C>
where
    T: ChatTransport,
    S: SlotStorage,
    V: WidgetView,
    C: Confirm,
{
    pub fn new(config: WidgetConfig, transport: T, storage: S, view: V, confirm: C) -> Self {
        let history = HistoryStore::new(storage, config.storage_key.clone(), config.history_limit);
        let responder = ResponderClient::new(transport, config.endpoint.clone());
        Self {
            config,
            transcript: RefCell::new(TranscriptStore::new()),
            visibility: Cell::new(Visibility::Closed),
            pending: Cell::new(0),
            history,
            responder,
            view,
            confirm,
        }
    }

    /// Stamp messages with `clock` instead of the local wall clock.
    #[must_use]
    pub fn with_clock(mut self, clock: fn() -> String) -> Self {
        self.transcript = RefCell::new(TranscriptStore::with_clock(clock));
        self
    }

    /// Restore persisted history into the view, or greet a first-time visitor.
    pub fn initialize(&self) {
        let saved = self.history.load();
        let restored = !saved.is_empty();
        self.transcript.borrow_mut().restore(saved);
        self.view.render_all(self.transcript.borrow().messages());
        self.view.scroll_to_bottom();
        if !restored {
            self.seed_welcome();
        }
        log::debug!("chat widget ready with {} messages", self.transcript.borrow().len());
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility.get()
    }

    pub fn is_open(&self) -> bool {
        self.visibility.get() == Visibility::Open
    }

    /// Snapshot of the in-memory transcript.
    pub fn messages(&self) -> Vec<Message> {
        self.transcript.borrow().messages().to_vec()
    }

    pub fn toggle(&self) {
        let next = self.visibility.get().toggled();
        self.visibility.set(next);
        let open = next == Visibility::Open;
        self.view.set_open(open);
        if open {
            self.view.scroll_to_bottom();
        }
    }

    pub fn open(&self) {
        if !self.is_open() {
            self.toggle();
        }
    }

    pub fn close(&self) {
        if self.is_open() {
            self.toggle();
        }
    }

    /// Header minimize button; same as [`Self::close`].
    pub fn minimize(&self) {
        self.close();
    }

    /// Send typed input. Clears the input field once the message is accepted.
    ///
    /// Returns `None` without side effects for empty or whitespace-only input.
    pub async fn send_message(&self, input: &str) -> Option<Reply> {
        let text = accept_input(input)?;
        self.record(text.clone(), Sender::User);
        self.view.clear_input();
        Some(self.exchange(&text).await)
    }

    /// Send a preset message as if typed, leaving the input field alone.
    pub async fn send_quick_reply(&self, preset: &str) -> Option<Reply> {
        let text = accept_input(preset)?;
        self.record(text.clone(), Sender::User);
        Some(self.exchange(&text).await)
    }

    /// Wipe the conversation after the user confirms.
    ///
    /// Returns `false` (and changes nothing) when the user declines.
    pub async fn clear_history(&self) -> bool {
        if !self.confirm.confirm(&self.config.clear_prompt).await {
            return false;
        }
        self.transcript.borrow_mut().clear();
        self.view.clear_list();
        self.history.erase();
        self.seed_welcome();
        log::info!("chat history cleared");
        true
    }

    async fn exchange(&self, text: &str) -> Reply {
        self.pending.set(self.pending.get() + 1);
        self.view.set_typing(true);
        self.view.scroll_to_bottom();

        let reply = self.responder.send(text).await;

        let remaining = self.pending.get().saturating_sub(1);
        self.pending.set(remaining);
        if remaining == 0 {
            self.view.set_typing(false);
        }
        self.record(reply.text(), Sender::Bot);
        reply
    }

    fn seed_welcome(&self) {
        self.record(self.config.welcome_message.clone(), Sender::Bot);
    }

    fn record(&self, text: impl Into<String>, sender: Sender) -> Message {
        let message = self.transcript.borrow_mut().append(text, sender);
        self.view.render_one(&message);
        self.view.scroll_to_bottom();
        self.history.save(&self.transcript.borrow());
        message
    }
}

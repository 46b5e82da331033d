//! Projection of the transcript onto the visible widget.
//!
//! DESIGN
//! ======
//! The controller talks to the view only through [`WidgetView`]. The browser
//! implementation, [`SignalView`], writes reactive signals that the
//! `ChatWidget` component renders, so the controller never touches the DOM.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use leptos::prelude::{GetUntracked, RwSignal, Set, Update};

use crate::state::transcript::{Message, Sender};

/// Presentation surface driven by the widget controller.
pub trait WidgetView {
    /// Replace the visible list with one node per message.
    fn render_all(&self, messages: &[Message]);

    /// Append one node, leaving existing nodes untouched.
    fn render_one(&self, message: &Message);

    /// Remove every node from the visible list.
    fn clear_list(&self);

    /// Scroll the message list to its end once the current render pass is done.
    fn scroll_to_bottom(&self);

    fn set_typing(&self, visible: bool);

    fn clear_input(&self);

    /// Present the window as open or closed. Opening clears the unread badge.
    fn set_open(&self, open: bool);
}

/// One rendered transcript node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedMessage {
    /// Unique per rendered node, including across `render_all` and `clear_list`.
    pub key: u64,
    pub sender: Sender,
    /// Text split on `\n`; each boundary becomes a visible line break.
    pub lines: Vec<String>,
    pub time: String,
}

impl RenderedMessage {
    pub fn project(key: u64, message: &Message) -> Self {
        Self {
            key,
            sender: message.sender,
            lines: text_lines(&message.text),
            time: message.time.clone(),
        }
    }
}

/// Split message text into the lines rendered between `<br>` breaks.
pub fn text_lines(text: &str) -> Vec<String> {
    text.split('\n').map(str::to_owned).collect()
}

/// Reactive view state read by the `ChatWidget` component.
#[derive(Clone, Copy, Debug)]
pub struct SignalView {
    pub messages: RwSignal<Vec<RenderedMessage>>,
    pub typing: RwSignal<bool>,
    pub input: RwSignal<String>,
    pub open: RwSignal<bool>,
    /// Unread badge on the toggle button; shown until the first open.
    pub unread: RwSignal<bool>,
    /// Bumped on every scroll request; the component scrolls on change.
    pub scroll_requests: RwSignal<u64>,
    next_key: RwSignal<u64>,
}

impl Default for SignalView {
    fn default() -> Self {
        Self::new()
    }
}

impl SignalView {
    pub fn new() -> Self {
        Self {
            messages: RwSignal::new(Vec::new()),
            typing: RwSignal::new(false),
            input: RwSignal::new(String::new()),
            open: RwSignal::new(false),
            unread: RwSignal::new(true),
            scroll_requests: RwSignal::new(0),
            next_key: RwSignal::new(0),
        }
    }

    fn take_key(&self) -> u64 {
        let key = self.next_key.get_untracked();
        self.next_key.set(key + 1);
        key
    }
}

impl WidgetView for SignalView {
    fn render_all(&self, messages: &[Message]) {
        let nodes = messages
            .iter()
            .map(|m| RenderedMessage::project(self.take_key(), m))
            .collect::<Vec<_>>();
        self.messages.set(nodes);
    }

    fn render_one(&self, message: &Message) {
        let node = RenderedMessage::project(self.take_key(), message);
        self.messages.update(|nodes| nodes.push(node));
    }

    fn clear_list(&self) {
        self.messages.set(Vec::new());
    }

    fn scroll_to_bottom(&self) {
        self.scroll_requests.update(|n| *n += 1);
    }

    fn set_typing(&self, visible: bool) {
        self.typing.set(visible);
    }

    fn clear_input(&self) {
        self.input.set(String::new());
    }

    fn set_open(&self, open: bool) {
        self.open.set(open);
        if open {
            self.unread.set(false);
        }
    }
}

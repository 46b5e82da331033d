//! # gym-chatbot
//!
//! Leptos + WASM floating chat widget for the gym management site.
//!
//! The widget keeps a timestamped transcript, forwards user messages to the
//! `/api/chatbot/` responder, and persists the most recent history in
//! `localStorage` so the conversation survives reloads. The state machine in
//! [`state::widget`] is environment-independent; browser adapters live behind
//! the `csr` feature.

pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod state;
pub mod util;

/// WASM entry point: mount one widget into the hosting page's `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use leptos::prelude::*;

    use crate::components::chat_widget::ChatWidget;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let config = config::WidgetConfig::from_page();
    leptos::mount::mount_to_body(move || view! { <ChatWidget config=config.clone()/> });
}

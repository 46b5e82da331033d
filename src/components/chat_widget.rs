//! Floating chat widget: toggle button plus the chat window.
//!
//! SYSTEM CONTEXT
//! ==============
//! The component owns no chat logic. It builds the browser-backed
//! controller, forwards DOM events to it, and renders the `SignalView`
//! signals the controller writes.

use std::rc::Rc;

use leptos::prelude::*;

use crate::config::WidgetConfig;
use crate::net::responder::GlooTransport;
use crate::state::render::{RenderedMessage, SignalView};
use crate::state::transcript::Sender;
use crate::state::widget::WidgetController;
use crate::util::confirm::BrowserConfirm;
use crate::util::storage::BrowserStorage;

/// Controller wired to `fetch`, `localStorage` and `window.confirm`.
pub type BrowserWidget = WidgetController<GlooTransport, BrowserStorage, SignalView, BrowserConfirm>;

/// The whole widget. Mount exactly once per page.
#[component]
pub fn ChatWidget(config: WidgetConfig) -> impl IntoView {
    let ui = SignalView::new();
    let title = config.title.clone();
    let quick_replies = config.quick_replies.clone();

    let controller = Rc::new(BrowserWidget::new(config, GlooTransport, BrowserStorage, ui, BrowserConfirm));
    controller.initialize();
    let controller = StoredValue::new_local(controller);

    let messages_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let _ = ui.scroll_requests.get();

        #[cfg(feature = "csr")]
        {
            leptos::leptos_dom::helpers::request_animation_frame(move || {
                if let Some(el) = messages_ref.get_untracked() {
                    let scroll_height = el.scroll_height();
                    el.set_scroll_top(scroll_height);
                }
            });
        }
    });

    let send_typed = move || {
        let text = ui.input.get_untracked();
        let widget = controller.get_value();
        leptos::task::spawn_local(async move {
            widget.send_message(&text).await;
        });
    };

    let send_preset = move |preset: String| {
        let widget = controller.get_value();
        leptos::task::spawn_local(async move {
            widget.send_quick_reply(&preset).await;
        });
    };

    let clear = move |_: leptos::ev::MouseEvent| {
        let widget = controller.get_value();
        leptos::task::spawn_local(async move {
            widget.clear_history().await;
        });
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            send_typed();
        }
    };

    let quick_reply_buttons = quick_replies
        .into_iter()
        .map(move |reply| {
            let message = reply.message;
            view! {
                <button class="quick-reply-btn" on:click=move |_| send_preset(message.clone())>
                    {reply.label}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="chatbot">
            <button
                class="chatbot-toggle"
                class:active=move || ui.open.get()
                on:click=move |_| controller.with_value(|w| w.toggle())
            >
                <i class="fas fa-comments"></i>
                <Show when=move || ui.unread.get()>
                    <span class="chatbot-badge">"1"</span>
                </Show>
            </button>

            <div class="chatbot-window" class:open=move || ui.open.get()>
                <div class="chatbot-header">
                    <div class="chatbot-header-content">
                        <i class="fas fa-robot"></i>
                        <div>
                            <h4>{title}</h4>
                            <span class="chatbot-status">"Online"</span>
                        </div>
                    </div>
                    <div class="chatbot-actions">
                        <button
                            class="chatbot-btn-icon"
                            title="Minimize"
                            on:click=move |_| controller.with_value(|w| w.minimize())
                        >
                            <i class="fas fa-minus"></i>
                        </button>
                        <button class="chatbot-btn-icon" title="Clear Chat" on:click=clear>
                            <i class="fas fa-trash"></i>
                        </button>
                        <button
                            class="chatbot-btn-icon"
                            title="Close"
                            on:click=move |_| controller.with_value(|w| w.close())
                        >
                            <i class="fas fa-times"></i>
                        </button>
                    </div>
                </div>

                <div class="chatbot-messages" node_ref=messages_ref>
                    <For
                        each=move || ui.messages.get()
                        key=|node| node.key
                        children=move |node: RenderedMessage| view! { <MessageBubble node=node/> }
                    />
                </div>

                <div class="chatbot-input-container">
                    <div class="chatbot-quick-replies">{quick_reply_buttons}</div>
                    <div class="chatbot-input-wrapper">
                        <input
                            type="text"
                            class="chatbot-input"
                            placeholder="Type your message..."
                            autocomplete="off"
                            prop:value=move || ui.input.get()
                            on:input=move |ev| ui.input.set(event_target_value(&ev))
                            on:keydown=on_keydown
                        />
                        <button class="chatbot-send-btn" on:click=move |_| send_typed()>
                            <i class="fas fa-paper-plane"></i>
                        </button>
                    </div>
                    <Show when=move || ui.typing.get()>
                        <div class="chatbot-typing">
                            <span></span>
                            <span></span>
                            <span></span>
                        </div>
                    </Show>
                </div>
            </div>
        </div>
    }
}

/// One transcript entry; newlines become `<br>` breaks.
#[component]
fn MessageBubble(node: RenderedMessage) -> impl IntoView {
    let is_bot = node.sender == Sender::Bot;
    let is_user = !is_bot;
    let last = node.lines.len().saturating_sub(1);
    let text = node
        .lines
        .into_iter()
        .enumerate()
        .map(|(i, line)| view! { {line} {(i < last).then(|| view! { <br/> })} })
        .collect_view();

    view! {
        <div class="chatbot-message" class:bot-message=is_bot class:user-message=is_user>
            <div class="message-content">
                {is_bot.then(|| view! { <i class="fas fa-robot message-icon"></i> })}
                <div class="message-text">{text}</div>
            </div>
            <div class="message-time">{node.time}</div>
        </div>
    }
}

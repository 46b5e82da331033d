//! User confirmation for destructive actions.
//!
//! The widget asks before wiping history. The controller receives the prompt
//! as a [`Confirm`] capability rather than calling `window.confirm` itself.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "confirm_test.rs"]
mod confirm_test;

use async_trait::async_trait;

/// Ask the user a yes/no question.
#[async_trait(?Send)]
pub trait Confirm {
    async fn confirm(&self, prompt: &str) -> bool;
}

/// Blocking `window.confirm` prompt. Answers no outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserConfirm;

#[async_trait(?Send)]
impl Confirm for BrowserConfirm {
    async fn confirm(&self, prompt: &str) -> bool {
        #[cfg(feature = "csr")]
        {
            web_sys::window()
                .and_then(|w| w.confirm_with_message(prompt).ok())
                .unwrap_or(false)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = prompt;
            false
        }
    }
}

/// Always gives the same answer.
#[derive(Clone, Copy, Debug)]
pub struct FixedConfirm(pub bool);

#[async_trait(?Send)]
impl Confirm for FixedConfirm {
    async fn confirm(&self, _prompt: &str) -> bool {
        self.0
    }
}

//! Responder client: one `POST` per user message, never failing.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: the transport reports a transport failure, since the
//! endpoint is only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transports return typed [`ResponderError`]s; [`ResponderClient::send`]
//! collapses them into a [`Reply`] so the widget has a single non-failing
//! path for "something to show". No retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "responder_test.rs"]
mod responder_test;

use std::rc::Rc;

use async_trait::async_trait;

use super::types::{ChatRequest, ChatResponse};
use crate::error::ResponderError;

pub const ENDPOINT_FAILURE_TEXT: &str = "Sorry, I encountered an error. Please try again.";
pub const TRANSPORT_FAILURE_TEXT: &str = "Sorry, I'm having trouble connecting. Please try again later.";

/// A single request/response exchange with the responder endpoint.
#[async_trait(?Send)]
pub trait ChatTransport {
    /// # Errors
    ///
    /// Returns [`ResponderError::Status`] for non-2xx responses and
    /// [`ResponderError::Transport`]/[`ResponderError::Decode`] when no usable
    /// response was obtained.
    async fn post(&self, endpoint: &str, request: &ChatRequest) -> Result<ChatResponse, ResponderError>;
}

#[async_trait(?Send)]
impl<T: ChatTransport + ?Sized> ChatTransport for Rc<T> {
    async fn post(&self, endpoint: &str, request: &ChatRequest) -> Result<ChatResponse, ResponderError> {
        (**self).post(endpoint, request).await
    }
}

/// Browser `fetch` transport.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl ChatTransport for GlooTransport {
    async fn post(&self, endpoint: &str, request: &ChatRequest) -> Result<ChatResponse, ResponderError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(endpoint)
                .json(request)
                .map_err(|e| ResponderError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| ResponderError::Transport(e.to_string()))?;
            if !resp.ok() {
                return Err(ResponderError::Status { status: resp.status() });
            }
            resp.json::<ChatResponse>()
                .await
                .map_err(|e| ResponderError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (endpoint, request);
            Err(ResponderError::Transport("not available outside the browser".to_owned()))
        }
    }
}

/// Outcome of one send.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    /// The responder's own reply text.
    Answer(String),
    /// The endpoint answered with a failure status.
    EndpointFailure,
    /// No usable response was obtained.
    TransportFailure,
}

impl Reply {
    /// Text shown to the user as the bot message.
    pub fn text(&self) -> &str {
        match self {
            Self::Answer(text) => text,
            Self::EndpointFailure => ENDPOINT_FAILURE_TEXT,
            Self::TransportFailure => TRANSPORT_FAILURE_TEXT,
        }
    }

    /// Classify an exchange result, logging transport causes.
    pub fn from_exchange(result: Result<ChatResponse, ResponderError>) -> Self {
        match result {
            Ok(body) => Self::Answer(body.response),
            Err(ResponderError::Status { status }) => {
                log::warn!("chatbot endpoint returned status {status}");
                Self::EndpointFailure
            }
            Err(e) => {
                log::error!("chatbot error: {e}");
                Self::TransportFailure
            }
        }
    }
}

/// Sends user messages to a fixed endpoint.
#[derive(Clone, Debug)]
pub struct ResponderClient<T> {
    transport: T,
    endpoint: String,
}

impl<T: ChatTransport> ResponderClient<T> {
    pub fn new(transport: T, endpoint: impl Into<String>) -> Self {
        Self { transport, endpoint: endpoint.into() }
    }

    /// Exactly one exchange; always resolves to a [`Reply`].
    pub async fn send(&self, message: &str) -> Reply {
        let request = ChatRequest { message: message.to_owned() };
        Reply::from_exchange(self.transport.post(&self.endpoint, &request).await)
    }
}

//! Networking for the chatbot responder.
//!
//! SYSTEM CONTEXT
//! ==============
//! `responder` performs the request/response exchange and its fallbacks;
//! `types` defines the JSON bodies.

pub mod responder;
pub mod types;

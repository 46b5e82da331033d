//! Widget state modules.
//!
//! DESIGN
//! ======
//! `transcript` holds the data, `render` projects it onto the view, and
//! `widget` is the controller tying both to persistence and the responder.

pub mod render;
pub mod transcript;
pub mod widget;

//! Utility helpers shared across the widget.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (clock, storage,
//! confirmation prompts) from the controller so it stays testable natively.

pub mod clock;
pub mod confirm;
pub mod history;
pub mod storage;

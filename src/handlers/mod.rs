//! Event Handlers
//!
//! Handlers turn terminal events into App actions:
//! - keyboard: key presses, dialog input and keyword editing

pub mod keyboard;

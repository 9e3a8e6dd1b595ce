//! Messenger abstraction so the moderation logic stays framework-agnostic.

pub mod port;
pub mod types;

//! Core domain + application logic for the wordguard moderation bot.
//!
//! This crate is framework-agnostic. The Telegram transport lives behind the
//! messaging port implemented in the adapter crate.

pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod filter;
pub mod formatting;
pub mod logging;
pub mod messaging;
pub mod moderation;
pub mod welcome;
pub mod wordlist;

#[cfg(test)]
mod test_support;

pub use errors::{Error, Result};
